//! Implementation of the randomness needed to serve and deflect balls.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::constants::MAX_DELAY;
use crate::game::court::Court;

/// Outcome of a collision check after a ball or paddle movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The ball touched neither a wall nor the paddle.
    NoContact,
    /// The ball reversed direction off a wall or the paddle.
    Bounce,
    /// The ball passed the paddle's edge; one life is consumed.
    Lose,
}

/// Preemptively optimized structure containing the distributions needed to
/// generate random serve positions, directions and speeds.
///
/// The horizontal delay is drawn from half the range of the vertical one: a
/// terminal is usually wider than tall, so the faster horizontal movement
/// keeps the apparent speed of both axes comparable.
#[derive(Clone)]
pub struct ServeGenerator {
    y_position: Uniform<i32>,
    x_position: Uniform<i32>,
    y_delay: Uniform<i32>,
    x_delay: Uniform<i32>,
}

impl ServeGenerator {
    /// Create a new [`ServeGenerator`] whose position distributions cover the
    /// open interior of the given court, excluding the one-cell border.
    pub fn new(court: &Court) -> ServeGenerator {
        ServeGenerator {
            y_position: Uniform::new_inclusive(court.top() + 1, court.bot() - 1),
            x_position: Uniform::new_inclusive(court.left() + 1, court.right() - 1),
            y_delay: Uniform::new_inclusive(1, MAX_DELAY),
            x_delay: Uniform::new_inclusive(1, MAX_DELAY / 2),
        }
    }

    pub fn serve_y<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.y_position.sample(rng)
    }

    pub fn serve_x<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.x_position.sample(rng)
    }

    /// Pick a starting direction for one axis: -1 or +1, equally likely.
    pub fn direction<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        match rng.gen() {
            true => 1,
            false => -1,
        }
    }

    /// Ticks between vertical moves, uniform over `1..=MAX_DELAY`.
    pub fn y_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.y_delay.sample(rng)
    }

    /// Ticks between horizontal moves, uniform over `1..=MAX_DELAY / 2`.
    pub fn x_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.x_delay.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_positions_stay_inside_the_court() {
        let court = Court::from_terminal(40, 11).unwrap();
        let generator = ServeGenerator::new(&court);
        let mut thread_rng = rand::thread_rng();

        for _ in 0..200 {
            let y = generator.serve_y(&mut thread_rng);
            let x = generator.serve_x(&mut thread_rng);
            assert!(court.top() < y && y < court.bot());
            assert!(court.left() < x && x < court.right());
        }
    }

    #[test]
    fn delays_are_positive_and_horizontally_biased() {
        let court = Court::from_terminal(80, 24).unwrap();
        let generator = ServeGenerator::new(&court);
        let mut thread_rng = rand::thread_rng();

        for _ in 0..200 {
            let y_delay = generator.y_delay(&mut thread_rng);
            let x_delay = generator.x_delay(&mut thread_rng);
            assert!((1..=MAX_DELAY).contains(&y_delay));
            assert!((1..=MAX_DELAY / 2).contains(&x_delay));
        }
    }

    #[test]
    fn directions_are_unit_steps() {
        let court = Court::from_terminal(80, 24).unwrap();
        let generator = ServeGenerator::new(&court);
        let mut thread_rng = rand::thread_rng();

        for _ in 0..50 {
            let dir = generator.direction(&mut thread_rng);
            assert!(dir == 1 || dir == -1);
        }
    }
}
