/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::debug;

use crate::{Board, Cli, ConfigError, Piece, Square};

/// Board size used when none is supplied and prompting is disabled.
pub const DEFAULT_SIZE: u8 = 5;

/// Everything the driver needs to know to run a tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    /// If set, the tour advances one move per command read from `stdin`.
    pub interactive: bool,

    /// The piece making the tour.
    pub piece: Piece,

    /// Number of squares along each side of the board.
    pub size: u8,

    /// Square the tour starts on.
    pub start: Square,

    /// Draw boards with ANSI colors.
    pub color: bool,

    /// Print the board after a non-interactive tour finishes.
    pub display: bool,

    /// Maximum number of moves the driver will make, if any.
    pub max_steps: Option<usize>,
}

impl TourConfig {
    /// Builds a [`TourConfig`] from command-line arguments, asking `prompter` for
    /// any of the piece, board size or start square that were not supplied.
    ///
    /// If `cli.no_prompt` is set, missing values fall back to a knight on a
    /// [`DEFAULT_SIZE`] board starting at the origin.
    pub fn resolve<R: BufRead, W: Write>(cli: &Cli, prompter: &mut Prompter<R, W>) -> Result<Self> {
        let piece = match cli.piece {
            Some(piece) => piece,
            None if cli.no_prompt => Piece::default(),
            None => prompter.ask("pick piece 1 - knight; 2 - rook: ", Piece::from_name)?,
        };

        let size = match cli.size {
            Some(size) => size,
            None if cli.no_prompt => DEFAULT_SIZE,
            None => prompter.ask("board size: ", |s| {
                s.parse::<u8>()
                    .with_context(|| format!("Invalid board size {s:?}"))
            })?,
        };

        let start = match cli.start {
            Some(start) => start,
            None if cli.no_prompt => Square::ORIGIN,
            None => prompter.ask("start position col,row: ", Square::from_coords)?,
        };

        let config = Self {
            interactive: cli.interactive,
            piece,
            size,
            start,
            color: cli.color,
            display: cli.display,
            max_steps: cli.max_steps,
        };
        debug!("Resolved configuration: {config:?}");

        Ok(config)
    }

    /// Checks the board size and start square, returning the [`Board`] to tour.
    ///
    /// # Example
    /// ```
    /// # use warnsdorff::{ConfigError, Piece, Square, TourConfig};
    /// let mut config = TourConfig {
    ///     interactive: false,
    ///     piece: Piece::Knight,
    ///     size: 5,
    ///     start: Square::new(4, 4),
    ///     color: false,
    ///     display: false,
    ///     max_steps: None,
    /// };
    /// assert!(config.validate().is_ok());
    ///
    /// config.start = Square::new(5, 0);
    /// assert!(matches!(config.validate(), Err(ConfigError::StartOutOfBounds { .. })));
    /// ```
    pub fn validate(&self) -> Result<Board, ConfigError> {
        let board = Board::try_new(self.size)?;
        board.check(self.start)?;
        Ok(board)
    }
}

/// Asks questions on an output stream and reads single-line answers from an input stream.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Constructs a new [`Prompter`] over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `question`, reads one line, and parses the trimmed answer with `parse`.
    pub fn ask<T>(&mut self, question: &str, parse: impl FnOnce(&str) -> Result<T>) -> Result<T> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut buffer = String::new();
        let bytes = self
            .input
            .read_line(&mut buffer)
            .context("Failed to read answer from input")?;

        if bytes == 0 {
            bail!("Input ended while waiting for an answer to {:?}", question.trim());
        }

        parse(buffer.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve(args: &[&str], answers: &str) -> Result<(TourConfig, String)> {
        let cli = Cli::try_parse_from(std::iter::once("warnsdorff").chain(args.iter().copied()))?;
        let mut output = Vec::new();
        let config = TourConfig::resolve(&cli, &mut Prompter::new(answers.as_bytes(), &mut output))?;
        Ok((config, String::from_utf8(output)?))
    }

    #[test]
    fn test_all_arguments_given() {
        let (config, output) = resolve(&["-p", "rook", "-s", "7", "--start", "3,2"], "").unwrap();
        assert_eq!(config.piece, Piece::Rook);
        assert_eq!(config.size, 7);
        assert_eq!(config.start, Square::new(3, 2));
        assert!(!config.interactive);
        assert!(output.is_empty(), "nothing should be prompted");
    }

    #[test]
    fn test_prompts_for_missing() {
        let (config, output) = resolve(&["-i"], "2\n10\n4 5\n").unwrap();
        assert!(config.interactive);
        assert_eq!(config.piece, Piece::Rook);
        assert_eq!(config.size, 10);
        assert_eq!(config.start, Square::new(4, 5));
        assert!(output.contains("pick piece"));
        assert!(output.contains("board size"));
        assert!(output.contains("start position"));
    }

    #[test]
    fn test_no_prompt_defaults() {
        let (config, _) = resolve(&["--no-prompt"], "").unwrap();
        assert_eq!(config.piece, Piece::Knight);
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.start, Square::ORIGIN);
    }

    #[test]
    fn test_bad_answers() {
        assert!(resolve(&[], "queen\n").is_err());
        assert!(resolve(&["-p", "knight"], "big\n").is_err());
        assert!(resolve(&["-p", "knight", "-s", "5"], "").is_err());
    }

    #[test]
    fn test_validate() {
        let (config, _) = resolve(&["--no-prompt", "-s", "2"], "").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::BoardSize { size: 2 }));

        let (config, _) = resolve(&["--no-prompt", "-s", "51"], "").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::BoardSize { size: 51 }));

        let (config, _) = resolve(&["--no-prompt", "-s", "3", "--start", "1,3"], "").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { size: 3, .. })
        ));

        let (config, _) = resolve(&["--no-prompt", "-s", "50", "--start", "49,49"], "").unwrap();
        assert_eq!(config.validate().unwrap().size(), 50);
    }
}
