mod options;

use std::io::{BufRead, Write};

use itertools::Itertools;
use rand::rngs::StdRng;
pub use options::PTPServerOptions;

use crate::prelude::*;

/// A line protocol driving a single game session over stdin and stdout.
///
/// Every command answers with its output followed by `ok`; a failed command answers `err`, the message, then
/// `ok`.
pub struct PTPServer {
    game: Game<'static, StdRng>,
}

impl PTPServer {
    /// Produces a new PTP server playing on the given shared catalog.
    pub fn new(options: PTPServerOptions, catalog: &'static Catalog) -> Result<PTPServer> {
        let game = Game::new(options.game_config(), catalog, options.rng()).context("invalid game options")?;
        Ok(PTPServer { game })
    }

    /// Serves stdin until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serves commands line by line from `input` until `quit` or end of input.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let args = line.split_whitespace().collect::<Vec<_>>();
            let cmd = *args.first().unwrap_or(&"");
            if cmd == "quit" {
                break;
            }
            self.apply(cmd, args.get(1..).unwrap_or(&[]), &mut output)?;
            output.flush()?;
        }
        Ok(())
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str], out: &mut impl Write) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "board" => self.board(args, out),
            | "down" | "tick" => self.report(|g| g.tick(), out),
            | "drop" => self.report(|g| g.drop_piece(), out),
            | "info" => self.info(out),
            | "left" => self.report(|g| g.try_move_left(), out),
            | "newgame" => self.new_game(args, out),
            | "right" => self.report(|g| g.try_move_right(), out),
            | "rotate" => self.report(|g| g.try_rotate(), out),
            | "score" => self.score(out),
            | "set" => self.set(args, out),
            | "sizes" => self.sizes(out),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok(out)
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err, out)
            },
        }
    }

    /// Starts a new game, optionally staging a setup string over the fresh board.
    fn new_game(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        self.game.start_new_game();

        if !args.is_empty() {
            let SetupString { repr: _, rows } = args.join(" ").parse::<SetupString>()?;
            let board = self.game.board();
            if rows.len() != board.height() || rows[0].len() != board.width() {
                return Err(anyhow!(
                    "setup is {}x{}, the board is {}x{}",
                    rows[0].len(),
                    rows.len(),
                    board.width(),
                    board.height()
                ));
            }
            for (y, row) in rows.into_iter().enumerate() {
                for (x, tag) in row.into_iter().enumerate() {
                    if tag.is_occupied() {
                        self.game.stage(&Coord::new(x as isize, y as isize), tag)?;
                    }
                }
            }
        }

        writeln!(out, "{}", self.game.board().notate())?;
        Ok(())
    }

    /// Runs a game action and prints what came of it.
    fn report(
        &mut self,
        action: impl FnOnce(&mut Game<'static, StdRng>) -> MoveOutcome,
        out: &mut impl Write,
    ) -> Result<()> {
        match action(&mut self.game) {
            MoveOutcome::Moved     => writeln!(out, "moved")?,
            MoveOutcome::Rejected  => writeln!(out, "rejected")?,
            MoveOutcome::Reset     => writeln!(out, "reset")?,
            MoveOutcome::Locked(LockReport { rows_cleared, score_delta, cells_exploded }) => {
                writeln!(out, "locked {rows_cleared} {score_delta} {cells_exploded}")?
            },
        };
        Ok(())
    }

    /// Prints the board: compact glyphs by default, full notation with `board notation`.
    fn board(&self, args: &[&str], out: &mut impl Write) -> Result<()> {
        match args.first() {
            None              => writeln!(out, "{}", self.game.board().pretty())?,
            Some(&"notation") => writeln!(out, "{}", self.game.board().notate())?,
            Some(other)       => return Err(anyhow!("unrecognized board format {other}")),
        };
        Ok(())
    }

    fn score(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.game.score())?;
        Ok(())
    }

    fn sizes(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.game.figure_sizes().iter().join(","))?;
        Ok(())
    }

    /// Stages a tag: `set <x> <y> <tag>`.
    fn set(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let [x, y, tag] = args else {
            return Err(anyhow!("expected set <x> <y> <tag>"));
        };
        let coord = format!("{x},{y}").parse::<Coord>()?;
        let tag = tag.parse::<CellTag>()?;
        self.game.stage(&coord, tag)?;
        writeln!(out, "{}", self.game.board().get(&coord)?)?;
        Ok(())
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&self, out: &mut impl Write) -> Result<()>
    {
        writeln!(
            out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints an error to the PTP stream.
    fn err(&self, err: &Error, out: &mut impl Write) -> Result<()>
    {
        writeln!(out, "err\n{}", err)?;
        self.ok(out)
    }

    /// Prints the ok footer to the PTP stream.
    fn ok(&self, out: &mut impl Write) -> Result<()>
    {
        writeln!(out, "ok")?;
        Ok(())
    }
}
