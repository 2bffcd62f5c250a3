/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Squares and their textual representation.
mod square;

pub use square::*;

use crate::ConfigError;

/// Checkerboard coloring of a [`Square`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Returns `true` if this is [`Shade::Light`].
    #[inline(always)]
    pub const fn is_light(&self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// A square board of `size x size` squares.
///
/// A [`Board`] holds no per-square state. Whether a square has been visited is
/// tracked by [`crate::TourState`], and the coloring of a square is computed
/// from its parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
}

impl Board {
    /// Smallest supported side length.
    pub const MIN_SIZE: u8 = 3;

    /// Largest supported side length.
    pub const MAX_SIZE: u8 = 50;

    /// Creates a new [`Board`] with `size` squares per side.
    ///
    /// `size` is expected to already be validated by the caller.
    ///
    /// # Panics
    /// If `size` is outside `[3, 50]` and debug assertions are enabled.
    #[inline(always)]
    pub fn new(size: u8) -> Self {
        debug_assert!(
            (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size),
            "Board size must be within [{}, {}]. Got {size}",
            Self::MIN_SIZE,
            Self::MAX_SIZE
        );
        Self { size }
    }

    /// Creates a new [`Board`], returning an error if `size` is outside `[3, 50]`.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::Board;
    /// assert!(Board::try_new(8).is_ok());
    /// assert!(Board::try_new(2).is_err());
    /// assert!(Board::try_new(51).is_err());
    /// ```
    pub fn try_new(size: u8) -> Result<Self, ConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize { size });
        }
        Ok(Self { size })
    }

    /// Number of squares along each side of the board.
    #[inline(always)]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Total number of squares on the board.
    #[inline(always)]
    pub const fn area(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Returns `true` if both axes of `square` lie within `[0, size)`.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Board, Square};
    /// let board = Board::new(5);
    /// assert!(board.contains(Square::new(4, 0)));
    /// assert!(!board.contains(Square::new(5, 0)));
    /// ```
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        square.col < self.size && square.row < self.size
    }

    /// Checkerboard coloring of `square`.
    ///
    /// The origin is light, and squares alternate along both axes.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Board, Shade, Square};
    /// let board = Board::new(3);
    /// assert_eq!(board.shade(Square::new(0, 0)), Shade::Light);
    /// assert_eq!(board.shade(Square::new(1, 0)), Shade::Dark);
    /// assert_eq!(board.shade(Square::new(1, 1)), Shade::Light);
    /// ```
    #[inline(always)]
    pub const fn shade(&self, square: Square) -> Shade {
        if (square.row % 2 == 0) == (square.col % 2 == 0) {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    /// Returns `true` if `square` is a light square.
    #[inline(always)]
    pub const fn is_light(&self, square: Square) -> bool {
        self.shade(square).is_light()
    }

    /// Iterates over every square on the board, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Square::new(col, row)))
    }

    /// Validates that `square` lies on this board.
    pub fn check(&self, square: Square) -> Result<Square, ConfigError> {
        if self.contains(square) {
            Ok(square)
        } else {
            Err(ConfigError::StartOutOfBounds {
                square,
                size: self.size,
            })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_range() {
        for size in Board::MIN_SIZE..=Board::MAX_SIZE {
            assert_eq!(Board::try_new(size).unwrap().size(), size);
        }

        assert_eq!(
            Board::try_new(0).unwrap_err(),
            ConfigError::BoardSize { size: 0 }
        );
        assert!(Board::try_new(2).is_err());
        assert!(Board::try_new(51).is_err());
        assert!(Board::try_new(u8::MAX).is_err());
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(3);
        assert!(board.contains(Square::new(0, 0)));
        assert!(board.contains(Square::new(2, 2)));
        assert!(!board.contains(Square::new(3, 2)));
        assert!(!board.contains(Square::new(2, 3)));

        assert!(board.check(Square::new(1, 2)).is_ok());
        assert_eq!(
            board.check(Square::new(0, 3)).unwrap_err(),
            ConfigError::StartOutOfBounds {
                square: Square::new(0, 3),
                size: 3
            }
        );
    }

    #[test]
    fn test_shades_alternate() {
        let board = Board::new(8);
        for sq in board.squares() {
            let expected = (sq.col() + sq.row()) % 2 == 0;
            assert_eq!(board.is_light(sq), expected, "wrong shade at {sq}");
        }
    }

    #[test]
    fn test_squares_row_major() {
        let board = Board::new(3);
        let squares = board.squares().collect::<Vec<_>>();
        assert_eq!(squares.len(), board.area());
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(1, 0));
        assert_eq!(squares[3], Square::new(0, 1));
        assert_eq!(squares[8], Square::new(2, 2));
    }
}
