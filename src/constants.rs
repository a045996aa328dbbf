//! Constants defining the shape and pace of the game.

/// Ticks of the simulation interval per second. Affects the overall speed.
pub const TICKS_PER_SECOND: u64 = 50;

/// Number of balls (lives) the player gets before the game ends.
pub const NUM_BALLS: i32 = 3;

/// Upper bound on the per-axis movement delay, in ticks. A freshly served or
/// paddle-deflected ball waits between 1 and this many ticks between moves on
/// the vertical axis, and between 1 and half this many on the horizontal axis.
/// Terminals are usually wider than tall, so the horizontal bias keeps the
/// apparent speed of both axes comparable.
pub const MAX_DELAY: i32 = 10;

/// Rows/columns of margin between the screen edges and the court borders.
pub const BORDER: i32 = 3;

/// Minimum terminal dimensions. A height of 11 leaves a court interior of at
/// least 3 rows, which in turn guarantees a paddle height of at least 1.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 11;

pub const BALL_GLYPH: char = 'O';
pub const PADDLE_GLYPH: char = '#';
pub const WALL_ROW_GLYPH: char = '-';
pub const WALL_COL_GLYPH: char = '|';
pub const BLANK: char = ' ';
