use std::process::ExitCode;
use std::{fs, io};

use fern::FormatCallback;
use time::format_description::well_known::Iso8601;

use crate::game::{Court, CourtError, GameError, Outcome};
use crate::screen::Screen;

mod constants;
mod game;
mod screen;

/// Failures that abort the program, each mapped to its own exit code.
#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Court(#[from] CourtError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("a terminal i/o operation failed : {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    fn exit_code(&self) -> ExitCode {
        match self {
            RunError::Court(CourtError::TerminalTooSmall { .. }) => ExitCode::from(1),
            RunError::Game(GameError::ResizedMidGame) => ExitCode::from(3),
            _ => ExitCode::from(2),
        }
    }
}

/// Run a session of Pong in the current terminal. A single-threaded runtime
/// is all the event loop needs. All errors are logged; the diagnostics on
/// stderr are printed only after the terminal has been restored.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = setup_logger() {
        eprintln!("pong-tui: error while configuring logging : {e}");
        return ExitCode::from(2);
    }
    match run().await {
        Ok(outcome) => {
            log::info!("Exiting cleanly ({outcome:?}).");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal : {e}.");
            eprintln!("pong-tui: {e}");
            e.exit_code()
        }
    }
}

/// Check the terminal, raise the screen and play. The [`Screen`] guard is
/// dropped before this returns, so `main` reports on a restored terminal.
async fn run() -> Result<Outcome, RunError> {
    let (cols, rows) = crossterm::terminal::size()?;
    let court = Court::from_terminal(cols, rows)?;
    log::info!("Starting a game on a {cols}x{rows} terminal.");

    let mut screen = Screen::new(court, cols, rows)?;
    screen.draw_court()?;
    let outcome = game::play(&mut screen, court).await?;
    Ok(outcome)
}

/// Set up the global logger to write to a file named as the current
/// timestamp. The console channels are off limits : the game owns the screen.
fn setup_logger() -> io::Result<()> {
    fs::create_dir_all("./log")?;
    let log_file_path = format!("./log/{}.log", utc_now_wrapper());
    // Can unwrap because we know we only set the logger once.
    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .format(format_log)
        .chain(fern::log_file(log_file_path)?)
        .apply()
        .unwrap();
    Ok(())
}

/// The function given to the logging crate [`fern`] to format messages.
fn format_log(out: FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        utc_now_wrapper(),
        record.level(),
        &record
            .target()
            .chars()
            .take_while(|&c| c != ':')
            .collect::<String>(),
        message
    ))
}

/// Create a [`String`] of the current time in the UTC timezone, with a
/// default in case of error.
fn utc_now_wrapper() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME)
        .unwrap_or(String::from("invalid date"))
}
