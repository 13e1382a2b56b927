//! Flappy on a fixed 80x24 text grid.
//!
//! The simulation (`physics`, `pipe`, `collision`, `score`, `session`) is pure and
//! runs headless; `game` drives it against any [`surface::Surface`].

pub mod collision;
pub mod game;
pub mod physics;
pub mod pipe;
pub mod render;
pub mod score;
pub mod session;
pub mod sound;
pub mod surface;

// ── Grid & tuning ───────────────────────────────────────────────────────────

pub const NUM_ROWS: i32 = 24;
pub const NUM_COLS: i32 = 80;

/// Downward acceleration, rows per tick².
pub const GRAVITY: f64 = 0.05;
/// Velocity right after a flap, rows per tick (negative is up).
pub const V0: f64 = -0.5;

pub const PIPE_RADIUS: i32 = 3;
pub const GAP_WIDTH: i32 = 7;
pub const FLAPPY_COL: i32 = 10;

pub const TARGET_FPS: f64 = 24.0;

pub const CEILING_ROW: i32 = 0;
pub const FLOOR_ROW: i32 = NUM_ROWS - 1;
