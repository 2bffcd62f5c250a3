/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::HashSet, fmt};

use crate::Square;

/// The history of a single piece's tour.
///
/// Holds the ordered path of every square visited so far, along with a set of
/// those same squares for constant-time membership tests.
///
/// The path is append-only and never empty: it is seeded with the starting square,
/// and only [`crate::TourEngine::step`] extends it. No square ever appears twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourState {
    /// Every visited square, in the order they were visited.
    path: Vec<Square>,

    /// Set of every square in `path`.
    visited: HashSet<Square>,
}

impl TourState {
    /// Starts a new tour at `start`.
    ///
    /// The caller is responsible for checking that `start` is on the board.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Square, TourState};
    /// let state = TourState::seed(Square::new(2, 3));
    /// assert_eq!(state.path(), &[Square::new(2, 3)]);
    /// assert_eq!(state.current(), Square::new(2, 3));
    /// ```
    pub fn seed(start: Square) -> Self {
        Self {
            path: vec![start],
            visited: HashSet::from([start]),
        }
    }

    /// Every visited square, starting with the seed.
    #[inline(always)]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// The square the piece currently stands on.
    #[inline(always)]
    pub fn current(&self) -> Square {
        // Safe index: `path` is created non-empty and is never shrunk
        self.path[self.path.len() - 1]
    }

    /// The square the piece stood on before its last move, if it has moved.
    #[inline(always)]
    pub fn previous(&self) -> Option<Square> {
        self.path.iter().rev().nth(1).copied()
    }

    /// The square the tour started on.
    #[inline(always)]
    pub fn start(&self) -> Square {
        self.path[0]
    }

    /// Returns `true` if `square` has been visited.
    #[inline(always)]
    pub fn contains(&self, square: Square) -> bool {
        self.visited.contains(&square)
    }

    /// Number of squares visited, including the seed.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Number of moves made since the seed.
    #[inline(always)]
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    /// A [`TourState`] is never empty, so this is always `false`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// 1-based position of `square` within the path, if visited.
    pub fn move_number(&self, square: Square) -> Option<usize> {
        if !self.contains(square) {
            return None;
        }
        self.path.iter().position(|&sq| sq == square).map(|i| i + 1)
    }

    /// Appends `square` to the path.
    ///
    /// # Panics
    /// If `square` has already been visited.
    pub(crate) fn push(&mut self, square: Square) {
        let inserted = self.visited.insert(square);
        assert!(inserted, "Tour attempted to revisit {square}");
        self.path.push(square);
    }
}

impl fmt::Display for TourState {
    /// Displays the path as a space-separated list of `COL,ROW` squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .iter()
            .map(|sq| sq.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{path}")
    }
}
