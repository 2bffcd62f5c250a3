/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{Board, Square, TourState};

/// Side length, in pixels, of the square window a board is drawn into.
pub const WINDOW_SIZE: u16 = 300;

/// How a square should be drawn, given the state of a tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareKind {
    /// The square the piece currently stands on.
    Current,
    /// A light square the piece has already left.
    VisitedLight,
    /// A dark square the piece has already left.
    VisitedDark,
    /// A light square the piece has not reached.
    UntouchedLight,
    /// A dark square the piece has not reached.
    UntouchedDark,
}

impl SquareKind {
    /// Fill color of this kind of square.
    pub const fn color(&self) -> Rgb {
        match self {
            Self::Current => Rgb(245, 75, 66),
            Self::VisitedLight => Rgb(209, 209, 209),
            Self::VisitedDark => Rgb(153, 153, 153),
            Self::UntouchedLight => Rgb(235, 236, 208),
            Self::UntouchedDark => Rgb(119, 149, 86),
        }
    }
}

/// Classifies `square` for drawing.
///
/// # Example
/// ```
/// # use warnsdorff::{classify, Board, Square, SquareKind, TourState};
/// let board = Board::new(3);
/// let state = TourState::seed(Square::new(1, 1));
/// assert_eq!(classify(&board, &state, Square::new(1, 1)), SquareKind::Current);
/// assert_eq!(classify(&board, &state, Square::new(0, 1)), SquareKind::UntouchedDark);
/// ```
pub fn classify(board: &Board, state: &TourState, square: Square) -> SquareKind {
    let light = board.is_light(square);

    if square == state.current() {
        SquareKind::Current
    } else if state.contains(square) {
        if light {
            SquareKind::VisitedLight
        } else {
            SquareKind::VisitedDark
        }
    } else if light {
        SquareKind::UntouchedLight
    } else {
        SquareKind::UntouchedDark
    }
}

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Scales each channel to the 16-bit range used by most window systems.
    pub const fn to_u16(&self) -> (u16, u16, u16) {
        const fn scale(c: u8) -> u16 {
            ((c as u32 * u16::MAX as u32) / 255) as u16
        }
        (scale(self.0), scale(self.1), scale(self.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A pixel rectangle within the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Maps board squares to pixel rectangles, centering the board in a [`WINDOW_SIZE`] window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    cell_size: u16,
    padding: u16,
}

impl Layout {
    /// Computes the layout of `board` within a [`WINDOW_SIZE`] window.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{Board, Layout};
    /// let layout = Layout::new(&Board::new(7));
    /// assert_eq!(layout.cell_size(), 42);
    /// assert_eq!(layout.padding(), 3);
    /// ```
    pub const fn new(board: &Board) -> Self {
        let size = board.size() as u16;
        let cell_size = WINDOW_SIZE / size;
        let padding = (WINDOW_SIZE - cell_size * size) / 2;
        Self { cell_size, padding }
    }

    /// Side length of one square, in pixels.
    #[inline(always)]
    pub const fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Gap between the window edge and the board, in pixels.
    #[inline(always)]
    pub const fn padding(&self) -> u16 {
        self.padding
    }

    /// Pixel rectangle covered by `square`.
    pub const fn rect(&self, square: Square) -> Rect {
        Rect {
            x: self.padding + square.col() as u16 * self.cell_size,
            y: self.padding + square.row() as u16 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }
}

/// A text rendering of a tour, with one line per row of the board.
///
/// Visited squares show the move number on which they were reached, the
/// current square is marked with `*`, and untouched squares are drawn as `.`.
/// With colors enabled, each square also gets a 24-bit ANSI background from
/// [`SquareKind::color`].
#[derive(Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    state: &'a TourState,
    colored: bool,
}

impl<'a> BoardView<'a> {
    /// Constructs a new, uncolored [`BoardView`].
    pub fn new(board: &'a Board, state: &'a TourState) -> Self {
        Self {
            board,
            state,
            colored: false,
        }
    }

    /// Enables or disables ANSI colors.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wide enough for the largest move number, plus the current-square marker
        let width = self.board.area().to_string().len() + 1;

        for row in 0..self.board.size() {
            for col in 0..self.board.size() {
                let square = Square::new(col, row);
                let kind = classify(self.board, self.state, square);

                let label = match self.state.move_number(square) {
                    Some(n) if kind == SquareKind::Current => format!("{n}*"),
                    Some(n) => n.to_string(),
                    None => String::from("."),
                };

                if self.colored {
                    let Rgb(r, g, b) = kind.color();
                    write!(f, "\x1b[30;48;2;{r};{g};{b}m {label:>width$} \x1b[0m")?;
                } else {
                    write!(f, " {label:>width$}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, TourEngine};

    #[test]
    fn test_classify_all_kinds() {
        let board = Board::new(3);
        let mut state = TourState::seed(Square::new(0, 0));
        state.push(Square::new(1, 0));
        state.push(Square::new(1, 1));

        assert_eq!(classify(&board, &state, Square::new(1, 1)), SquareKind::Current);
        assert_eq!(
            classify(&board, &state, Square::new(0, 0)),
            SquareKind::VisitedLight
        );
        assert_eq!(
            classify(&board, &state, Square::new(1, 0)),
            SquareKind::VisitedDark
        );
        assert_eq!(
            classify(&board, &state, Square::new(2, 2)),
            SquareKind::UntouchedLight
        );
        assert_eq!(
            classify(&board, &state, Square::new(2, 1)),
            SquareKind::UntouchedDark
        );
    }

    #[test]
    fn test_layout() {
        // 300 divides evenly by 5, so there is no padding
        let layout = Layout::new(&Board::new(5));
        assert_eq!(layout.cell_size(), 60);
        assert_eq!(layout.padding(), 0);
        assert_eq!(
            layout.rect(Square::new(2, 4)),
            Rect {
                x: 120,
                y: 240,
                width: 60,
                height: 60
            }
        );

        let layout = Layout::new(&Board::new(Board::MAX_SIZE));
        assert_eq!(layout.cell_size(), 6);
        assert_eq!(layout.rect(Square::new(49, 0)).x, 294);

        let layout = Layout::new(&Board::new(8));
        assert_eq!(layout.cell_size(), 37);
        assert_eq!(layout.padding(), 2);
        assert_eq!(layout.rect(Square::new(1, 1)).y, 39);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Rgb(255, 0, 128).to_u16(), (u16::MAX, 0, 32896));
        assert_eq!(SquareKind::Current.color().to_string(), "#f54b42");
    }

    #[test]
    fn test_plain_view() {
        let board = Board::new(3);
        let mut state = TourState::seed(Square::new(1, 1));
        TourEngine::new().step(&board, &Piece::Rook.pattern(), &mut state);

        let view = BoardView::new(&board, &state).to_string();
        let expected = "  .  .  .\n 2*  1  .\n  .  .  .\n";
        assert_eq!(view, expected);
    }

    #[test]
    fn test_colored_view_has_every_square() {
        let board = Board::new(4);
        let state = TourState::seed(Square::ORIGIN);
        let view = BoardView::new(&board, &state).colored(true).to_string();

        assert_eq!(view.matches("\x1b[0m").count(), board.area());
        assert!(view.starts_with("\x1b[30;48;2;245;75;66m"));
    }
}
