//! Thin wrapper around the terminal: cursor-addressed cell drawing and the
//! few fixed pieces of chrome (borders, headers, final banner).
//!
//! The game logic only ever talks to the [`Surface`] trait, so tests can run
//! it against a recording fake instead of a live terminal.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::constants::{BLANK, NUM_BALLS, WALL_COL_GLYPH, WALL_ROW_GLYPH};
use crate::game::Court;

/// Length of the rendered time header, e.g. `TOTAL TIME: 02:09`.
const TIME_LEN: i32 = 17;

/// Length of the final banner, e.g. `You lasted 02:09`.
const EXIT_MSG_LEN: i32 = 16;

/// Display directives the simulation core emits. Calls queue output;
/// [`Surface::present`] parks the cursor and flushes the whole batch, so one
/// simulation step costs one terminal write.
pub trait Surface {
    fn draw_cell(&mut self, row: i32, col: i32, glyph: char) -> io::Result<()>;

    fn erase_cell(&mut self, row: i32, col: i32) -> io::Result<()>;

    /// Refresh the lives header above the top-left of the court.
    fn show_balls_left(&mut self, balls: i32) -> io::Result<()>;

    /// Refresh the elapsed-time header above the top-right of the court.
    fn show_time(&mut self, mins: i32, secs: i32) -> io::Result<()>;

    /// Announce the final play time, centered and in reverse video.
    fn show_final_message(&mut self, mins: i32, secs: i32) -> io::Result<()>;

    /// Park the cursor in the bottom-right corner and flush queued output.
    fn present(&mut self) -> io::Result<()>;
}

/// The live terminal. Construction switches the terminal into a raw-mode
/// alternate screen with the cursor hidden; dropping it restores the terminal
/// whatever path the program exits through.
pub struct Screen {
    out: Stdout,
    court: Court,
    cols: u16,
    rows: u16,
}

impl Screen {
    pub fn new(court: Court, cols: u16, rows: u16) -> io::Result<Screen> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Screen {
            out,
            court,
            cols,
            rows,
        })
    }

    /// Draw the court borders and both headers. The right side is left open;
    /// the paddle guards it.
    pub fn draw_court(&mut self) -> io::Result<()> {
        for col in self.court.left()..=self.court.right() {
            queue!(
                self.out,
                MoveTo(col as u16, self.court.top() as u16),
                Print(WALL_ROW_GLYPH)
            )?;
            queue!(
                self.out,
                MoveTo(col as u16, self.court.bot() as u16),
                Print(WALL_ROW_GLYPH)
            )?;
        }
        for row in self.court.top() + 1..self.court.bot() {
            queue!(
                self.out,
                MoveTo(self.court.left() as u16, row as u16),
                Print(WALL_COL_GLYPH)
            )?;
        }
        self.show_balls_left(NUM_BALLS)?;
        self.show_time(0, 0)?;
        self.present()
    }
}

impl Surface for Screen {
    fn draw_cell(&mut self, row: i32, col: i32, glyph: char) -> io::Result<()> {
        queue!(self.out, MoveTo(col as u16, row as u16), Print(glyph))
    }

    fn erase_cell(&mut self, row: i32, col: i32) -> io::Result<()> {
        self.draw_cell(row, col, BLANK)
    }

    fn show_balls_left(&mut self, balls: i32) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(self.court.left() as u16, (self.court.top() - 1) as u16),
            Print(format!("BALLS LEFT: {balls:2}"))
        )
    }

    fn show_time(&mut self, mins: i32, secs: i32) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(
                (self.court.right() - TIME_LEN) as u16,
                (self.court.top() - 1) as u16
            ),
            Print(format!("TOTAL TIME: {mins:02}:{secs:02}"))
        )
    }

    fn show_final_message(&mut self, mins: i32, secs: i32) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(
                (self.cols as i32 / 2 - EXIT_MSG_LEN / 2) as u16,
                self.rows / 2
            ),
            SetAttribute(Attribute::Reverse),
            Print(format!("You lasted {mins:02}:{secs:02}")),
            SetAttribute(Attribute::Reset)
        )
    }

    fn present(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(self.cols - 1, self.rows - 1))?;
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Errors here cannot be reported anywhere useful, and must not mask
        // whatever caused an early exit.
        let _: Result<_, _> = disable_raw_mode();
        let _: Result<_, _> = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A display directive captured by [`RecordingSurface`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Op {
        Draw { row: i32, col: i32, glyph: char },
        Erase { row: i32, col: i32 },
        BallsLeft(i32),
        Time(i32, i32),
        FinalMessage(i32, i32),
        Present,
    }

    /// In-memory [`Surface`] keeping the directives in emission order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub(crate) fn new() -> RecordingSurface {
            RecordingSurface::default()
        }
    }

    impl Surface for RecordingSurface {
        fn draw_cell(&mut self, row: i32, col: i32, glyph: char) -> io::Result<()> {
            self.ops.push(Op::Draw { row, col, glyph });
            Ok(())
        }

        fn erase_cell(&mut self, row: i32, col: i32) -> io::Result<()> {
            self.ops.push(Op::Erase { row, col });
            Ok(())
        }

        fn show_balls_left(&mut self, balls: i32) -> io::Result<()> {
            self.ops.push(Op::BallsLeft(balls));
            Ok(())
        }

        fn show_time(&mut self, mins: i32, secs: i32) -> io::Result<()> {
            self.ops.push(Op::Time(mins, secs));
            Ok(())
        }

        fn show_final_message(&mut self, mins: i32, secs: i32) -> io::Result<()> {
            self.ops.push(Op::FinalMessage(mins, secs));
            Ok(())
        }

        fn present(&mut self) -> io::Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }
}
