//! The ball: per-tick motion, wall/paddle collisions and life consumption.

use std::io;

use rand::Rng;

use crate::constants::{BALL_GLYPH, NUM_BALLS};
use crate::game::court::Court;
use crate::game::engine::{Contact, ServeGenerator};
use crate::game::paddle::Paddle;
use crate::screen::Surface;

/// The ball and the lives bound to it.
///
/// A fresh ball carries [`NUM_BALLS`] lives and no position; [`Ball::serve`]
/// must run before the first [`Ball::step`]. Each axis moves independently,
/// one cell every `*_delay` ticks, so the delay ratio alone governs the
/// apparent direction of travel.
#[derive(Debug)]
pub struct Ball {
    remain: i32,
    x: i32,
    y: i32,
    x_dir: i32,
    y_dir: i32,
    x_delay: i32,
    y_delay: i32,
    x_count: i32,
    y_count: i32,
}

impl Ball {
    /// Create a ball with the full set of lives. Position, direction and
    /// speed are meaningless until the first serve.
    pub fn new() -> Ball {
        Ball {
            remain: NUM_BALLS,
            x: 0,
            y: 0,
            x_dir: 0,
            y_dir: 0,
            x_delay: 0,
            y_delay: 0,
            x_count: 0,
            y_count: 0,
        }
    }

    /// Number of lives left. Reaches -1 when the serve that would follow the
    /// last loss is never made.
    pub fn balls_left(&self) -> i32 {
        self.remain
    }

    /// Put a ball in play: random position inside the court interior, random
    /// direction and speed on each axis. Costs one life every time, the very
    /// first serve included. Draws the ball and refreshes the lives display.
    pub fn serve<R, S>(
        &mut self,
        generator: &ServeGenerator,
        rng: &mut R,
        surface: &mut S,
    ) -> io::Result<()>
    where
        R: Rng + ?Sized,
        S: Surface,
    {
        self.y = generator.serve_y(rng);
        self.x = generator.serve_x(rng);
        self.y_dir = generator.direction(rng);
        self.x_dir = generator.direction(rng);
        self.y_delay = generator.y_delay(rng);
        self.y_count = self.y_delay;
        self.x_delay = generator.x_delay(rng);
        self.x_count = self.x_delay;
        self.remain -= 1;

        log::info!("Serving at ({}, {}), {} ball(s) left.", self.x, self.y, self.remain);
        surface.draw_cell(self.y, self.x, BALL_GLYPH)?;
        surface.show_balls_left(self.remain)?;
        surface.present()
    }

    /// Advance the ball by one tick. Each axis counts down on its own; a
    /// counter reaching zero moves that axis one cell and rewinds the counter
    /// to the axis delay. If anything moved, the old cell is erased and the
    /// ball is drawn at its new position.
    pub fn step<S: Surface>(&mut self, surface: &mut S) -> io::Result<()> {
        let (x_cur, y_cur) = (self.x, self.y);
        let mut moved = false;

        if self.y_delay > 0 {
            self.y_count -= 1;
            if self.y_count == 0 {
                self.y += self.y_dir;
                self.y_count = self.y_delay;
                moved = true;
            }
        }

        if self.x_delay > 0 {
            self.x_count -= 1;
            if self.x_count == 0 {
                self.x += self.x_dir;
                self.x_count = self.x_delay;
                moved = true;
            }
        }

        if moved {
            surface.erase_cell(y_cur, x_cur)?;
            surface.draw_cell(self.y, self.x, BALL_GLYPH)?;
            surface.present()?;
        }
        Ok(())
    }

    /// Detect whether the ball is bouncing off a wall or the paddle, or has
    /// gone past the paddle. Checks run one cell inside the borders so the
    /// ball never overwrites a border glyph.
    ///
    /// The vertical walls are checked first, then the horizontal ones; a ball
    /// reaching the paddle column without contact reports [`Contact::Lose`]
    /// even if it bounced off the top or bottom wall in the same tick. A
    /// paddle hit re-randomizes both delays, giving the returned ball a fresh
    /// speed.
    pub fn bounce_or_lose<R, S>(
        &mut self,
        paddle: &Paddle,
        court: &Court,
        generator: &ServeGenerator,
        rng: &mut R,
        surface: &mut S,
    ) -> io::Result<Contact>
    where
        R: Rng + ?Sized,
        S: Surface,
    {
        let mut contact = Contact::NoContact;

        if self.y == court.top() + 1 {
            self.y_dir = 1;
            contact = Contact::Bounce;
        } else if self.y == court.bot() - 1 {
            self.y_dir = -1;
            contact = Contact::Bounce;
        }

        if self.x == court.left() + 1 {
            self.x_dir = 1;
            contact = Contact::Bounce;
        } else if self.x == court.right() - 1 {
            if paddle.contact(self.y) {
                self.x_delay = generator.x_delay(rng);
                self.y_delay = generator.y_delay(rng);
                self.x_dir = -1;
                contact = Contact::Bounce;
            } else {
                surface.erase_cell(self.y, self.x)?;
                contact = Contact::Lose;
            }
        }

        Ok(contact)
    }
}

#[cfg(test)]
impl Ball {
    /// Build a ball in a known mid-play state, counters wound to the delays.
    pub(crate) fn with_state(
        x: i32,
        y: i32,
        x_dir: i32,
        y_dir: i32,
        x_delay: i32,
        y_delay: i32,
        remain: i32,
    ) -> Ball {
        Ball {
            remain,
            x,
            y,
            x_dir,
            y_dir,
            x_delay,
            y_delay,
            x_count: x_delay,
            y_count: y_delay,
        }
    }
}
