//! The player's paddle and the commands to move it.

use std::io;

use crate::constants::PADDLE_GLYPH;
use crate::game::court::Court;
use crate::screen::Surface;

/// Vertical paddle sitting on the right edge of the court.
///
/// The movement bounds are the rows of the horizontal borders; a move that
/// would bring the paddle to a bound is silently ignored, so the paddle
/// always keeps one clear cell between itself and the border glyph.
#[derive(Debug)]
pub struct Paddle {
    top: i32,
    bot: i32,
    col: i32,
    min_top: i32,
    max_bot: i32,
}

impl Paddle {
    /// Create a paddle one-third the height of the court interior, vertically
    /// centered, and draw it. The court interior is at least 3 rows tall
    /// (enforced at startup), so the height is at least 1.
    pub fn new<S: Surface>(court: &Court, surface: &mut S) -> io::Result<Paddle> {
        let height = court.interior_height() / 3;
        let top = (court.top() + court.bot()) / 2 - height / 2;
        let paddle = Paddle {
            top,
            bot: top + height - 1,
            col: court.right(),
            min_top: court.top(),
            max_bot: court.bot(),
        };
        paddle.draw(surface)?;
        Ok(paddle)
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> io::Result<()> {
        for row in self.top..=self.bot {
            surface.draw_cell(row, self.col, PADDLE_GLYPH)?;
        }
        surface.present()
    }

    /// Move the paddle up one row if that leaves it clear of the top border,
    /// erasing the vacated bottom cell and drawing the new top cell.
    /// At the boundary this is a no-op.
    pub fn up<S: Surface>(&mut self, surface: &mut S) -> io::Result<()> {
        // if moved by 1, would it be at 'min_top'?
        if self.top - 1 > self.min_top {
            surface.erase_cell(self.bot, self.col)?;
            self.top -= 1;
            self.bot -= 1;
            surface.draw_cell(self.top, self.col, PADDLE_GLYPH)?;
            surface.present()?;
        }
        Ok(())
    }

    /// Move the paddle down one row if that leaves it clear of the bottom
    /// border. At the boundary this is a no-op.
    pub fn down<S: Surface>(&mut self, surface: &mut S) -> io::Result<()> {
        if self.bot + 1 < self.max_bot {
            surface.erase_cell(self.top, self.col)?;
            self.top += 1;
            self.bot += 1;
            surface.draw_cell(self.bot, self.col, PADDLE_GLYPH)?;
            surface.present()?;
        }
        Ok(())
    }

    /// Whether a ball at row `y` would hit the paddle. Pure.
    pub fn contact(&self, y: i32) -> bool {
        self.top <= y && y <= self.bot
    }
}
