//! Definition of the [`Court`] geometry.

use crate::constants::{BORDER, MIN_COLS, MIN_ROWS};

/// The rectangular playing field, stored as the four grid coordinates its
/// borders are drawn at. Computed once from the terminal dimensions at
/// startup and never mutated afterwards; a mid-session resize is a fatal
/// condition handled by the session loop, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    top: i32,
    right: i32,
    bot: i32,
    left: i32,
}

/// Errors encountered while deriving a [`Court`] from the terminal.
#[derive(thiserror::Error, Debug)]
pub enum CourtError {
    /// The terminal is too small to fit a playable court.
    #[error(
        "terminal must be a minimum of {MIN_COLS}x{MIN_ROWS}, but is {cols}x{rows}; \
         please resize and try again"
    )]
    TerminalTooSmall { cols: u16, rows: u16 },
}

impl Court {
    /// Derive the court from the terminal dimensions, leaving a margin of
    /// [`BORDER`] rows/columns on every side.
    ///
    /// # Error
    ///
    /// Fails if the terminal is smaller than [`MIN_COLS`]x[`MIN_ROWS`]. The
    /// minimum height guarantees an interior of at least 3 rows, and thereby
    /// a paddle height of at least 1.
    pub fn from_terminal(cols: u16, rows: u16) -> Result<Court, CourtError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(CourtError::TerminalTooSmall { cols, rows });
        }
        Ok(Court {
            top: BORDER,
            right: cols as i32 - BORDER - 1,
            bot: rows as i32 - BORDER - 1,
            left: BORDER,
        })
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bot(&self) -> i32 {
        self.bot
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    /// Number of rows strictly between the top and bottom borders.
    pub fn interior_height(&self) -> i32 {
        self.bot - self.top - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_leave_border_margin() {
        let court = Court::from_terminal(80, 24).unwrap();
        assert_eq!(court.top(), 3);
        assert_eq!(court.left(), 3);
        assert_eq!(court.right(), 76);
        assert_eq!(court.bot(), 20);
        assert_eq!(court.interior_height(), 16);
    }

    #[test]
    fn minimum_terminal_is_accepted() {
        let court = Court::from_terminal(MIN_COLS, MIN_ROWS).unwrap();
        assert_eq!(court.interior_height(), 3);
    }

    #[test]
    fn undersized_terminal_is_rejected() {
        assert!(matches!(
            Court::from_terminal(MIN_COLS - 1, MIN_ROWS),
            Err(CourtError::TerminalTooSmall { .. })
        ));
        assert!(matches!(
            Court::from_terminal(MIN_COLS, MIN_ROWS - 1),
            Err(CourtError::TerminalTooSmall { .. })
        ));
    }
}
