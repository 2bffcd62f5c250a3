/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io::{self, Write},
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use crate::{
    Board, BoardView, MovementPattern, Outcome, TourCommand, TourConfig, TourEngine, TourState,
};

/// Drives a single tour, either straight through to the end or one command at a time.
#[derive(Debug)]
pub struct Engine {
    /// Validated settings for this run.
    config: TourConfig,

    /// The board being toured.
    board: Board,

    /// Offsets of the touring piece.
    pattern: MovementPattern,

    /// Every square visited so far.
    state: TourState,

    /// Chooses each move.
    search: TourEngine,

    /// One half of a channel, responsible for sending commands to the engine to execute.
    sender: Sender<TourCommand>,

    /// One half of a channel, responsible for receiving commands for the engine to execute.
    receiver: Receiver<TourCommand>,
}

impl Engine {
    /// Validates `config` and sets up a tour on its starting square.
    pub fn new(config: TourConfig) -> Result<Self> {
        let board = config
            .validate()
            .context("Cannot start a tour with the given settings")?;

        info!(
            "Touring a {board} board with a {} from {}",
            config.piece, config.start
        );

        let (sender, receiver) = channel();

        Ok(Self {
            pattern: config.piece.pattern(),
            state: TourState::seed(config.start),
            search: TourEngine::new(),
            board,
            config,
            sender,
            receiver,
        })
    }

    /// The board being toured.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The tour so far.
    pub fn state(&self) -> &TourState {
        &self.state
    }

    /// Sends a [`TourCommand`] to the engine to be executed.
    pub fn send_command(&self, command: TourCommand) {
        // Safe unwrap: the receiver lives as long as the engine does, and so does `self`
        self.sender.send(command).unwrap();
    }

    /// Runs the tour in the mode chosen by the configuration, writing to `stdout`.
    pub fn run(&mut self) -> Result<()> {
        if self.config.interactive {
            self.run_interactive()
        } else {
            self.run_batch(&mut io::stdout().lock())
        }
    }

    /// Makes moves until the tour is exhausted or the step limit is reached,
    /// printing each move and a summary.
    pub fn run_batch<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.run_to_end(out)?;
        self.summary(out)?;

        if self.config.display {
            self.display(out)?;
        }

        Ok(())
    }

    /// Spawns a thread to read commands from `stdin` and executes them until told to exit.
    pub fn run_interactive(&mut self) -> Result<()> {
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                debug!("Input handler thread stopping: {err}");
            }
        });

        let mut stdout = io::stdout().lock();
        self.display(&mut stdout)?;

        while let Ok(cmd) = self.receiver.recv() {
            if !self.execute(cmd, &mut stdout)? {
                break;
            }
        }

        Ok(())
    }

    /// Executes a single command, writing any output to `out`.
    ///
    /// Returns `false` if the engine should stop.
    pub fn execute<W: Write>(&mut self, cmd: TourCommand, out: &mut W) -> Result<bool> {
        match cmd {
            TourCommand::Step { count } => {
                for _ in 0..count.unwrap_or(1) {
                    if self.step(out)?.is_none() {
                        break;
                    }
                }
                self.display(out)?;
            }

            TourCommand::Run => {
                self.run_to_end(out)?;
                self.summary(out)?;
                self.display(out)?;
            }

            TourCommand::Display => self.display(out)?,

            TourCommand::Path => writeln!(out, "{}", self.state)?,

            TourCommand::Moves => {
                let candidates = self.search.candidates(&self.board, &self.pattern, &self.state);

                if candidates.is_empty() {
                    writeln!(out, "(none)")?;
                }
                for candidate in candidates {
                    writeln!(
                        out,
                        "{} ({} onward)",
                        candidate.square, candidate.accessibility
                    )?;
                }
            }

            TourCommand::Reset => {
                info!("Restarting tour from {}", self.config.start);
                self.state = TourState::seed(self.config.start);
                self.display(out)?;
            }

            TourCommand::Exit => return Ok(false),
        }

        Ok(true)
    }

    /// Makes one move, printing it.
    ///
    /// Returns `None` if no move was made, either because the tour is exhausted
    /// or because the step limit was reached.
    fn step<W: Write>(&mut self, out: &mut W) -> Result<Option<Outcome>> {
        if let Some(limit) = self.config.max_steps {
            if self.state.moves() >= limit {
                warn!("Step limit of {limit} reached");
                writeln!(out, "step limit of {limit} reached")?;
                return Ok(None);
            }
        }

        let outcome = self.search.step(&self.board, &self.pattern, &mut self.state);
        writeln!(out, "{outcome}")?;

        match outcome {
            Outcome::Advanced(square) => {
                debug!("Move {} to {square}", self.state.moves());
                Ok(Some(outcome))
            }
            Outcome::Exhausted => {
                info!(
                    "Tour exhausted at {} after {} moves",
                    self.state.current(),
                    self.state.moves()
                );
                Ok(None)
            }
        }
    }

    /// Makes moves until [`Engine::step`] stops.
    fn run_to_end<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while self.step(out)?.is_some() {}
        Ok(())
    }

    /// Prints how much of the board has been covered.
    fn summary<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "visited {} of {} squares",
            self.state.len(),
            self.board.area()
        )?;
        Ok(())
    }

    /// Prints the board.
    fn display<W: Write>(&self, out: &mut W) -> Result<()> {
        let view = BoardView::new(&self.board, &self.state).colored(self.config.color);
        write!(out, "{view}")?;
        out.flush()?;
        Ok(())
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<TourCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(64);

    loop {
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing commands")?;

        // For ctrl + d
        if 0 == bytes {
            sender
                .send(TourCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            bail!("Received input of 0 bytes and is quitting");
        }

        match buffer.parse::<TourCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to engine")?,

            // Invalid commands are reported and otherwise ignored
            Err(err) => eprintln!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, Square};

    fn engine(piece: Piece, size: u8, start: (u8, u8)) -> Engine {
        Engine::new(TourConfig {
            interactive: false,
            piece,
            size,
            start: start.into(),
            color: false,
            display: false,
            max_steps: None,
        })
        .unwrap()
    }

    fn execute(engine: &mut Engine, cmd: &str) -> String {
        let mut out = Vec::new();
        let keep_going = engine.execute(cmd.parse().unwrap(), &mut out).unwrap();
        assert!(keep_going);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TourConfig {
            interactive: false,
            piece: Piece::Knight,
            size: 60,
            start: Square::ORIGIN,
            color: false,
            display: false,
            max_steps: None,
        };
        let err = Engine::new(config).unwrap_err();
        assert!(format!("{err:#}").contains("between 3 and 50"));
    }

    #[test]
    fn test_batch_output() {
        let mut engine = engine(Piece::Knight, 3, (1, 1));
        let mut out = Vec::new();
        engine.run_batch(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "no move available\nvisited 1 of 9 squares\n");
    }

    #[test]
    fn test_batch_rook() {
        let mut engine = engine(Piece::Rook, 3, (1, 1));
        let mut out = Vec::new();
        engine.run_batch(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "move: 0 1");
        assert_eq!(lines[7], "move: 0 2");
        assert_eq!(lines[8], "no move available");
        assert_eq!(lines[9], "visited 9 of 9 squares");
    }

    #[test]
    fn test_step_limit() {
        let mut engine = Engine::new(TourConfig {
            interactive: false,
            piece: Piece::Knight,
            size: 8,
            start: Square::ORIGIN,
            color: false,
            display: false,
            max_steps: Some(10),
        })
        .unwrap();

        let mut out = Vec::new();
        engine.run_batch(&mut out).unwrap();
        assert_eq!(engine.state().moves(), 10);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("step limit of 10 reached"));
        assert!(out.ends_with("visited 11 of 64 squares\n"));
    }

    #[test]
    fn test_interactive_commands() {
        let mut engine = engine(Piece::Knight, 5, (0, 0));

        let out = execute(&mut engine, "");
        assert!(out.starts_with("move: 2 1\n"));
        assert_eq!(engine.state().len(), 2);

        let out = execute(&mut engine, "moves");
        assert!(out.starts_with("4,0 (1 onward)\n"));

        execute(&mut engine, "step 3");
        assert_eq!(engine.state().len(), 5);

        let out = execute(&mut engine, "path");
        assert_eq!(out, "0,0 2,1 4,0 3,2 4,4\n");

        execute(&mut engine, "reset");
        assert_eq!(engine.state().path(), &[Square::ORIGIN]);

        let out = execute(&mut engine, "run");
        assert!(out.contains("visited 25 of 25 squares"));

        // Exhaustion is reported again on every further step
        let out = execute(&mut engine, "step");
        assert!(out.starts_with("no move available\n"));
        assert_eq!(engine.state().len(), 25);
        assert_eq!(execute(&mut engine, "moves"), "(none)\n");

        let mut out = Vec::new();
        assert!(!engine.execute(TourCommand::Exit, &mut out).unwrap());
    }

    #[test]
    fn test_send_command() {
        let engine = engine(Piece::Rook, 4, (0, 0));
        engine.send_command(TourCommand::Display);
        assert_eq!(engine.receiver.try_recv().unwrap(), TourCommand::Display);
        assert_eq!(*engine.board(), Board::new(4));
    }
}
