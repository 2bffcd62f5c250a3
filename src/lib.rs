/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Squares, boards, and checkerboard coloring.
mod board;

/// Command-line arguments and interactive commands.
mod cli;

/// Resolving and validating the settings of a run.
mod config;

/// Drives a tour from the command line, either all at once or step by step.
mod engine;

/// Errors for invalid user input.
mod error;

/// Movement patterns of the touring pieces.
mod pattern;

/// Presentation of a tour: square classification, colors, and pixel layout.
mod render;

/// The greedy look-ahead that chooses each move.
mod search;

/// Path history of a tour.
mod tour;

pub use board::*;
pub use cli::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use pattern::*;
pub use render::*;
pub use search::*;
pub use tour::*;
