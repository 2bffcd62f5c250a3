/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::Square;

/// Invalid input given to the driver before a tour could be set up.
///
/// Produced by [`crate::Board::try_new`] and [`crate::Board::check`].
///
/// A tour that runs out of moves is *not* an error; see [`crate::Outcome::Exhausted`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be between 3 and 50. Got {size}")]
    BoardSize { size: u8 },

    #[error("Start square {square} is not on a {size}x{size} board")]
    StartOutOfBounds { square: Square, size: u8 },
}
