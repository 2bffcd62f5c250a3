/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{borrow::Cow, fmt, ops::Deref, str::FromStr};

use anyhow::{bail, Result};

use crate::Square;

/// A relative step of `(columns, rows)` that a piece can make in a single move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub(crate) dc: i8,
    pub(crate) dr: i8,
}

impl Offset {
    /// Creates a new [`Offset`] of `dc` columns and `dr` rows.
    #[inline(always)]
    pub const fn new(dc: i8, dr: i8) -> Self {
        Self { dc, dr }
    }

    /// Column delta.
    #[inline(always)]
    pub const fn dc(&self) -> i8 {
        self.dc
    }

    /// Row delta.
    #[inline(always)]
    pub const fn dr(&self) -> i8 {
        self.dr
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dc, self.dr)
    }
}

/// Knight offsets.
///
/// Order is significant: earlier offsets win ties in [`crate::TourEngine::step`].
#[rustfmt::skip]
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-2, -1), Offset::new(-1, -2), Offset::new(1, -2), Offset::new(2, -1),
    Offset::new(2, 1),   Offset::new(1, 2),   Offset::new(-1, 2), Offset::new(-2, 1),
];

/// Single-step orthogonal offsets.
///
/// Order is significant: earlier offsets win ties in [`crate::TourEngine::step`].
pub const ROOK_OFFSETS: [Offset; 4] = [
    Offset::new(-1, 0),
    Offset::new(0, -1),
    Offset::new(1, 0),
    Offset::new(0, 1),
];

/// The ordered set of offsets a piece may move by.
///
/// A [`MovementPattern`] is immutable once built. The two canonical patterns are
/// available through [`Piece::pattern`], and any other finite pattern can be built
/// with [`MovementPattern::new`].
///
/// # Example
/// ```
/// # use warnsdorff::{MovementPattern, Offset, Piece};
/// let knight = Piece::Knight.pattern();
/// assert_eq!(knight.len(), 8);
/// assert_eq!(knight[0], Offset::new(-2, -1));
///
/// let camel = MovementPattern::new(vec![Offset::new(3, 1), Offset::new(1, 3)]);
/// assert_eq!(camel.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MovementPattern(Cow<'static, [Offset]>);

impl MovementPattern {
    /// Creates a new [`MovementPattern`] from an ordered sequence of offsets.
    #[inline(always)]
    pub fn new(offsets: impl Into<Cow<'static, [Offset]>>) -> Self {
        Self(offsets.into())
    }

    /// The knight's eight L-shaped offsets.
    #[inline(always)]
    pub const fn knight() -> Self {
        Self(Cow::Borrowed(&KNIGHT_OFFSETS))
    }

    /// One step up, down, left or right.
    #[inline(always)]
    pub const fn rook() -> Self {
        Self(Cow::Borrowed(&ROOK_OFFSETS))
    }

    /// The offsets of this pattern, in order.
    #[inline(always)]
    pub fn offsets(&self) -> &[Offset] {
        &self.0
    }

    /// Iterates over every square reachable from `from` in one move, in pattern order.
    ///
    /// Only squares with non-negative coordinates are produced; the caller is responsible
    /// for checking them against a board.
    #[inline(always)]
    pub fn targets(&self, from: Square) -> impl Iterator<Item = Square> + '_ {
        self.0.iter().filter_map(move |&delta| from.offset(delta))
    }

    /// Returns `true` if a single move of this pattern leads from `from` to `to`.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Piece, Square};
    /// let knight = Piece::Knight.pattern();
    /// assert!(knight.is_move(Square::new(0, 0), Square::new(1, 2)));
    /// assert!(!knight.is_move(Square::new(0, 0), Square::new(1, 1)));
    /// ```
    pub fn is_move(&self, from: Square, to: Square) -> bool {
        from.delta_to(to)
            .is_some_and(|delta| self.0.contains(&delta))
    }
}

impl Deref for MovementPattern {
    type Target = [Offset];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Piece> for MovementPattern {
    #[inline(always)]
    fn from(value: Piece) -> Self {
        value.pattern()
    }
}

/// The kinds of piece that can be sent on a tour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    /// Moves in an L-shape: two squares along one axis and one along the other.
    #[default]
    Knight,

    /// Moves a single square orthogonally.
    ///
    /// Unlike a chess rook, it does not slide.
    Rook,
}

impl Piece {
    /// Number of piece variants.
    pub const COUNT: usize = 2;

    /// An array of every piece, in menu order.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Knight, Self::Rook]
    }

    /// The [`MovementPattern`] of this piece.
    #[inline(always)]
    pub const fn pattern(&self) -> MovementPattern {
        match self {
            Self::Knight => MovementPattern::knight(),
            Self::Rook => MovementPattern::rook(),
        }
    }

    /// Human-readable name of this piece.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Knight => "knight",
            Self::Rook => "rook",
        }
    }

    /// Parses a [`Piece`] from its name, an alias, or its menu number.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::Piece;
    /// assert_eq!(Piece::from_name("1").unwrap(), Piece::Knight);
    /// assert_eq!(Piece::from_name("Horse").unwrap(), Piece::Knight);
    /// assert_eq!(Piece::from_name("2").unwrap(), Piece::Rook);
    /// assert!(Piece::from_name("queen").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "1" | "n" | "knight" | "horse" => Ok(Self::Knight),
            "2" | "r" | "rook" => Ok(Self::Rook),
            _ => bail!("Invalid piece {name:?}: expected knight (1) or rook (2)"),
        }
    }
}

impl FromStr for Piece {
    type Err = anyhow::Error;
    /// Wrapper for [`Piece::from_name`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}
