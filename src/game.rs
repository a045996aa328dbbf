//! Implementation of the logic of the Pong game.
//!
//! This mod defines and exposes the entrypoint function [`play`], which runs
//! a whole session on a [`Surface`]. The two triggers of the simulation - a
//! fixed-rate tick and the player's keystrokes - are multiplexed onto one
//! single-threaded event loop, so every tick-step and every input-step runs
//! to completion before the other can observe the shared state.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use rand::Rng;
use tokio::signal::unix::{signal, SignalKind};

pub use court::{Court, CourtError};

use crate::constants::TICKS_PER_SECOND;
use crate::game::ball::Ball;
use crate::game::clock::Clock;
use crate::game::engine::{Contact, ServeGenerator};
use crate::game::paddle::Paddle;
use crate::screen::Surface;

mod ball;
mod clock;
mod court;
mod engine;
mod paddle;

/// How a session ended. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player pressed the quit key.
    PlayerQuit,
    /// The last ball went past the paddle.
    OutOfLives,
    /// The process received a terminate signal.
    Terminated,
}

/// Errors encountered while playing the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// The terminal was resized mid-session. The court geometry is fixed at
    /// startup, so this is fatal by design, not recovered.
    #[error("the terminal was resized during the game; resizing is not supported")]
    ResizedMidGame,

    /// The terminal event stream ended, leaving no way to read further input.
    #[error("the terminal input event stream ended unexpectedly")]
    InputClosed,

    /// An operation on the terminal failed at the io layer.
    #[error("a terminal i/o operation failed : {0}")]
    Io(#[from] io::Error),
}

/// Play out a session of Pong on the given surface: serve the first ball,
/// then loop over simulation ticks and player input until the player quits or
/// runs out of balls. The final banner is shown and held for two seconds
/// before returning, except when terminated by a signal.
pub async fn play<S: Surface>(surface: &mut S, court: Court) -> Result<Outcome, GameError> {
    let mut rng = rand::thread_rng();
    let generator = ServeGenerator::new(&court);
    let mut clock = Clock::new();
    let mut paddle = Paddle::new(&court, surface)?;
    let mut ball = Ball::new();
    ball.serve(&generator, &mut rng, surface)?;

    let mut events = EventStream::new();
    let mut sigint_handler = signal(SignalKind::interrupt()).map_err(GameError::Io)?;
    let mut sigterm_handler = signal(SignalKind::terminate()).map_err(GameError::Io)?;
    let mut tick_interval =
        tokio::time::interval(Duration::from_millis(1000 / TICKS_PER_SECOND));

    let outcome = loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                if clock.tick() {
                    surface.show_time(clock.mins(), clock.secs())?;
                    surface.present()?;
                }
                ball.step(surface)?;
                let status =
                    next_round(&mut ball, &paddle, &court, &generator, &mut rng, surface)?;
                if status == RoundStatus::GameOver {
                    break Outcome::OutOfLives;
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Resize(..))) => {
                    log::error!("The terminal was resized mid-game, aborting.");
                    return Err(GameError::ResizedMidGame);
                }
                Some(Ok(Event::Key(key))) => match key_action(&key) {
                    Some(Action::PaddleUp) => {
                        paddle.up(surface)?;
                        let status = next_round(
                            &mut ball, &paddle, &court, &generator, &mut rng, surface
                        )?;
                        if status == RoundStatus::GameOver {
                            break Outcome::OutOfLives;
                        }
                    }
                    Some(Action::PaddleDown) => {
                        paddle.down(surface)?;
                        let status = next_round(
                            &mut ball, &paddle, &court, &generator, &mut rng, surface
                        )?;
                        if status == RoundStatus::GameOver {
                            break Outcome::OutOfLives;
                        }
                    }
                    Some(Action::Quit) => break Outcome::PlayerQuit,
                    None => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Err(GameError::InputClosed),
            },
            _ = sigint_handler.recv() => {
                // Interrupts are ignored once the game is on.
                log::debug!("Ignoring an interrupt signal.");
            }
            _ = sigterm_handler.recv() => {
                log::info!("Received a terminate signal.");
                break Outcome::Terminated;
            }
        }
    };

    if outcome != Outcome::Terminated {
        finish(&clock, surface)?;
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    Ok(outcome)
}

/// Whether the session goes on after a collision check.
#[derive(Debug, PartialEq, Eq)]
enum RoundStatus {
    Continue,
    GameOver,
}

/// Run the collision check shared by the tick path and the input path, and
/// the round transition behind it: a lost ball is re-served while lives
/// remain, and ends the game otherwise. The serve itself consumes the life,
/// so the re-serve test is strictly greater than zero.
fn next_round<R, S>(
    ball: &mut Ball,
    paddle: &Paddle,
    court: &Court,
    generator: &ServeGenerator,
    rng: &mut R,
    surface: &mut S,
) -> Result<RoundStatus, GameError>
where
    R: Rng + ?Sized,
    S: Surface,
{
    if ball.bounce_or_lose(paddle, court, generator, rng, surface)? == Contact::Lose {
        if ball.balls_left() > 0 {
            ball.serve(generator, rng, surface)?;
        } else {
            log::info!("Out of balls, the game is over.");
            return Ok(RoundStatus::GameOver);
        }
    }
    Ok(RoundStatus::Continue)
}

/// Show the final play time banner.
fn finish<S: Surface>(clock: &Clock, surface: &mut S) -> io::Result<()> {
    log::info!(
        "Session lasted {:02}:{:02}.",
        clock.mins(),
        clock.secs()
    );
    surface.show_final_message(clock.mins(), clock.secs())?;
    surface.present()
}

/// Commands the player can issue from the keyboard.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    PaddleUp,
    PaddleDown,
    Quit,
}

/// Map a key event to a player command. Unrecognized keys are ignored, as are
/// release/repeat events on the terminals that report them.
fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('k') => Some(Action::PaddleUp),
        KeyCode::Char('m') => Some(Action::PaddleDown),
        KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}
