/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use log::trace;

use crate::{Board, MovementPattern, Square, TourState};

/// Result of asking the [`TourEngine`] for the next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The piece moved to this square, which is now the end of the path.
    Advanced(Square),

    /// No legal, unvisited square is reachable from the current square.
    ///
    /// The tour has ended and the path was left untouched.
    Exhausted,
}

impl Outcome {
    /// Returns `true` if this is [`Outcome::Exhausted`].
    #[inline(always)]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// The square moved to, if any.
    #[inline(always)]
    pub const fn square(&self) -> Option<Square> {
        match self {
            Self::Advanced(square) => Some(*square),
            Self::Exhausted => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advanced(square) => write!(f, "move: {} {}", square.col(), square.row()),
            Self::Exhausted => write!(f, "no move available"),
        }
    }
}

/// A legal destination from the current square, and how many onward moves it leaves open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub square: Square,
    pub accessibility: usize,
}

/// Greedy tour builder using Warnsdorff's rule.
///
/// From the current square, the engine moves to the reachable, unvisited square
/// with the fewest onward moves of its own. The look-ahead is a single ply: a
/// candidate's onward moves are counted against the squares visited *before*
/// the move is made.
///
/// Ties go to the candidate whose offset comes first in the [`MovementPattern`],
/// so a tour is fully determined by its board, pattern and start square.
///
/// Moves are never taken back. A tour may therefore end before covering the board.
///
/// # Example
/// ```
/// # use warnsdorff::{Board, Outcome, Piece, Square, TourEngine, TourState};
/// let board = Board::new(5);
/// let knight = Piece::Knight.pattern();
/// let mut state = TourState::seed(Square::new(0, 0));
///
/// let engine = TourEngine::new();
/// assert_eq!(engine.step(&board, &knight, &mut state), Outcome::Advanced(Square::new(2, 1)));
/// assert_eq!(state.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TourEngine;

impl TourEngine {
    /// Constructs a new [`TourEngine`].
    #[inline(always)]
    pub const fn new() -> Self {
        Self
    }

    /// Number of squares reachable from `square` in one move that are on the board
    /// and not yet visited.
    pub fn accessibility(
        &self,
        board: &Board,
        pattern: &MovementPattern,
        state: &TourState,
        square: Square,
    ) -> usize {
        pattern
            .targets(square)
            .filter(|&sq| board.contains(sq) && !state.contains(sq))
            .count()
    }

    /// Every legal destination from the current square, in pattern order, along
    /// with its accessibility.
    ///
    /// # Panics
    /// If the current square is not on `board`.
    pub fn candidates(
        &self,
        board: &Board,
        pattern: &MovementPattern,
        state: &TourState,
    ) -> Vec<Candidate> {
        let current = state.current();
        assert!(
            board.contains(current),
            "Tour is standing on {current}, which is not on a {board} board"
        );

        pattern
            .targets(current)
            .filter(|&sq| board.contains(sq) && !state.contains(sq))
            .map(|square| Candidate {
                square,
                accessibility: self.accessibility(board, pattern, state, square),
            })
            .collect()
    }

    /// Selects the best move from the current square, without making it.
    ///
    /// Returns `None` if there are no legal moves.
    ///
    /// # Panics
    /// If the current square is not on `board`.
    pub fn best_move(
        &self,
        board: &Board,
        pattern: &MovementPattern,
        state: &TourState,
    ) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for candidate in self.candidates(board, pattern, state) {
            trace!(
                "{} -> {} leaves {} onward moves",
                state.current(),
                candidate.square,
                candidate.accessibility
            );

            // Strictly less-than, so that the earliest offset wins a tie
            if best.map_or(true, |b| candidate.accessibility < b.accessibility) {
                best = Some(candidate);
            }
        }

        best
    }

    /// Moves the piece one square further along its tour.
    ///
    /// Once this returns [`Outcome::Exhausted`], calling it again on the same state
    /// will always return [`Outcome::Exhausted`].
    ///
    /// # Panics
    /// If the current square is not on `board`. This can only happen if the tour was
    /// seeded off the board, which the caller must prevent.
    pub fn step(&self, board: &Board, pattern: &MovementPattern, state: &mut TourState) -> Outcome {
        let Some(best) = self.best_move(board, pattern, state) else {
            return Outcome::Exhausted;
        };

        state.push(best.square);
        Outcome::Advanced(best.square)
    }

    /// Steps until the tour is exhausted, returning the number of moves made.
    ///
    /// Since no square is visited twice, this makes at most `board.area() - 1` moves.
    pub fn run(&self, board: &Board, pattern: &MovementPattern, state: &mut TourState) -> usize {
        self.steps(board, pattern, state).count()
    }

    /// Returns an iterator that advances `state` one move per call to `next`, and
    /// ends when the tour is exhausted.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Board, Piece, Square, TourEngine, TourState};
    /// let board = Board::new(3);
    /// let rook = Piece::Rook.pattern();
    /// let mut state = TourState::seed(Square::new(1, 1));
    ///
    /// let first_three = TourEngine::new()
    ///     .steps(&board, &rook, &mut state)
    ///     .take(3)
    ///     .collect::<Vec<_>>();
    /// assert_eq!(first_three, [Square::new(0, 1), Square::new(0, 0), Square::new(1, 0)]);
    /// assert_eq!(state.len(), 4);
    /// ```
    pub fn steps<'a>(
        &self,
        board: &'a Board,
        pattern: &'a MovementPattern,
        state: &'a mut TourState,
    ) -> Steps<'a> {
        Steps {
            engine: *self,
            board,
            pattern,
            state,
        }
    }
}

/// Iterator over the moves of a tour. See [`TourEngine::steps`].
pub struct Steps<'a> {
    engine: TourEngine,
    board: &'a Board,
    pattern: &'a MovementPattern,
    state: &'a mut TourState,
}

impl Iterator for Steps<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.engine
            .step(self.board, self.pattern, self.state)
            .square()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.area().saturating_sub(self.state.len())))
    }
}
