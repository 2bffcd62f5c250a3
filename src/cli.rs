/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use clap::{builder::PossibleValue, ArgAction, Parser, ValueEnum};

use crate::{Piece, Square};

/// Build a tour of a chess piece across a square board using Warnsdorff's rule.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Step through the tour one move at a time, reading commands from stdin.
    #[arg(short, long, default_value = "false")]
    pub interactive: bool,

    /// The piece making the tour.
    #[arg(short, long)]
    pub piece: Option<Piece>,

    /// Number of squares along each side of the board [3-50].
    #[arg(short, long)]
    pub size: Option<u8>,

    /// Square to start on, as COL,ROW (0-based).
    #[arg(long)]
    pub start: Option<Square>,

    /// Use defaults for any of piece, size and start that were not supplied, instead of prompting.
    #[arg(short = 'y', long, default_value = "false")]
    pub no_prompt: bool,

    /// Print the board once a non-interactive tour is finished.
    #[arg(short, long, default_value = "false")]
    pub display: bool,

    /// Draw boards with ANSI colors.
    #[arg(short, long, default_value = "false")]
    pub color: bool,

    /// Stop after this many moves, even if the tour could continue.
    #[arg(short, long)]
    pub max_steps: Option<usize>,

    /// Increase logging verbosity. May be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A command sent to the driver while touring interactively.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<COMMAND>")
)]
pub enum TourCommand {
    /// Make the next move(s) of the tour. An empty line also makes one move.
    #[command(aliases = ["s", "next", "n"])]
    Step {
        /// Number of moves to make.
        count: Option<usize>,
    },

    /// Make moves until the tour is exhausted.
    Run,

    /// Print a visual representation of the board and tour.
    #[command(alias = "d")]
    Display,

    /// Print every square visited so far, in order.
    Path,

    /// Show every legal move from the current square and how many onward moves each leaves.
    Moves,

    /// Throw away the tour and start again from the starting square.
    Reset,

    /// Quit.
    #[command(aliases = ["quit", "q"])]
    Exit,
}

impl FromStr for TourCommand {
    type Err = clap::Error;
    /// Attempt to parse a [`TourCommand`] from a line of input.
    ///
    /// A blank line is treated as a single [`TourCommand::Step`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::Step { count: None });
        }

        Self::try_parse_from(s.split_ascii_whitespace())
    }
}

impl ValueEnum for Piece {
    fn value_variants<'a>() -> &'a [Self] {
        &[Piece::Knight, Piece::Rook]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.name());

        // Accept the menu numbers, and "horse" for the knight
        let value = match self {
            Piece::Knight => value.aliases(["horse", "n", "1"]),
            Piece::Rook => value.aliases(["r", "2"]),
        };

        Some(value)
    }
}
