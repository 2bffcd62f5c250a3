/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

use crate::Offset;

/// Represents a single square on a board of arbitrary size.
///
/// Squares are 0-based `(column, row)` pairs. A [`Square`] on its own carries no
/// notion of which board it belongs to, so it can only guarantee that neither axis
/// is negative. Use [`crate::Board::contains`] to check the upper bound.
///
/// Textual form is `COL,ROW`:
/// ```
/// # use warnsdorff::Square;
/// let sq: Square = "3,4".parse().unwrap();
/// assert_eq!(sq, Square::new(3, 4));
/// assert_eq!(sq.to_string(), "3,4");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Square {
    pub(crate) col: u8,
    pub(crate) row: u8,
}

impl Square {
    /// The top-left corner of every board.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new [`Square`] from a column and a row.
    #[inline(always)]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Column (x-axis) of this [`Square`].
    #[inline(always)]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Row (y-axis) of this [`Square`].
    #[inline(always)]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Attempt to offset this [`Square`] by `delta`.
    ///
    /// If either axis of `self + delta` would be negative (or overflow), `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Offset, Square};
    /// assert_eq!(Square::new(2, 2).offset(Offset::new(1, -2)), Some(Square::new(3, 0)));
    /// assert_eq!(Square::ORIGIN.offset(Offset::new(-1, 0)), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, delta: Offset) -> Option<Self> {
        let Some(col) = self.col.checked_add_signed(delta.dc) else {
            return None;
        };

        let Some(row) = self.row.checked_add_signed(delta.dr) else {
            return None;
        };

        Some(Self::new(col, row))
    }

    /// Returns the [`Offset`] that moves `self` onto `to`.
    ///
    /// Returns `None` if the difference does not fit in an [`Offset`].
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Offset, Square};
    /// assert_eq!(Square::new(0, 0).delta_to(Square::new(2, 1)), Some(Offset::new(2, 1)));
    /// ```
    pub fn delta_to(&self, to: Self) -> Option<Offset> {
        let dc = i8::try_from(to.col as i16 - self.col as i16).ok()?;
        let dr = i8::try_from(to.row as i16 - self.row as i16).ok()?;
        Some(Offset::new(dc, dr))
    }

    /// Parses a [`Square`] from `COL,ROW`, `COL ROW` or `(COL, ROW)`.
    pub fn from_coords(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');

        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|p| !p.is_empty());

        let (Some(col), Some(row), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Invalid square {s:?}: expected two coordinates in the form COL,ROW");
        };

        let col = col
            .parse()
            .with_context(|| format!("Invalid column {col:?} in square {s:?}"))?;
        let row = row
            .parse()
            .with_context(|| format!("Invalid row {row:?} in square {s:?}"))?;

        Ok(Self::new(col, row))
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Wrapper for [`Square::from_coords`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_coords(s)
    }
}

impl From<(u8, u8)> for Square {
    #[inline(always)]
    fn from((col, row): (u8, u8)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing() {
        assert_eq!(Square::from_coords("0,0").unwrap(), Square::ORIGIN);
        assert_eq!(Square::from_coords("4 2").unwrap(), Square::new(4, 2));
        assert_eq!(Square::from_coords(" (1, 3) ").unwrap(), Square::new(1, 3));
        assert_eq!(Square::from_coords("49,49").unwrap(), Square::new(49, 49));

        assert!(Square::from_coords("").is_err());
        assert!(Square::from_coords("1").is_err());
        assert!(Square::from_coords("1,2,3").is_err());
        assert!(Square::from_coords("-1,0").is_err());
        assert!(Square::from_coords("a,b").is_err());
        assert!(Square::from_coords("300,0").is_err());
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(1, 1);
        assert_eq!(sq.offset(Offset::new(-1, -1)), Some(Square::ORIGIN));
        assert_eq!(sq.offset(Offset::new(-2, 1)), None);
        assert_eq!(sq.offset(Offset::new(1, -2)), None);
        assert_eq!(Square::new(255, 0).offset(Offset::new(1, 0)), None);
    }

    #[test]
    fn test_delta_to() {
        let from = Square::new(3, 3);
        assert_eq!(from.delta_to(Square::new(1, 4)), Some(Offset::new(-2, 1)));
        assert_eq!(from.delta_to(from), Some(Offset::new(0, 0)));
        assert_eq!(Square::ORIGIN.delta_to(Square::new(200, 0)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(7, 12).to_string(), "7,12");
        assert_eq!(format!("{:?}", Square::new(7, 12)), "(7, 12)");
    }
}
