use crate::{GAP_WIDTH, GRAVITY, NUM_ROWS, V0, pipe::Pipe};

// ── Trajectory ──────────────────────────────────────────────────────────────

/// Row coordinate `t` ticks after the body was at `reference_height` with velocity `V0`.
///
/// Full precision; callers that need a grid row truncate (see [`FallingBody::row`]).
pub fn position(reference_height: f64, elapsed_ticks: u32) -> f64 {
    let t = elapsed_ticks as f64;
    reference_height + V0 * t + 0.5 * GRAVITY * t * t
}

/// True while the vertical velocity `V0 + GRAVITY·t` is not yet pointing down.
pub fn is_ascending(elapsed_ticks: u32) -> bool {
    !(GRAVITY * elapsed_ticks as f64 + V0 > 0.0)
}

/// The player's body: a parabola anchored at the last flap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallingBody {
    pub reference_height: f64,
    pub elapsed_ticks: u32,
}

impl FallingBody {
    pub fn new() -> Self {
        Self {
            reference_height: (NUM_ROWS / 2) as f64,
            elapsed_ticks: 0,
        }
    }

    pub fn position(&self) -> f64 {
        position(self.reference_height, self.elapsed_ticks)
    }

    /// Grid row the body occupies, truncated toward zero.
    pub fn row(&self) -> i32 {
        self.position() as i32
    }

    pub fn is_ascending(&self) -> bool {
        is_ascending(self.elapsed_ticks)
    }

    /// Re-anchor the parabola at the current position.
    pub fn flap(&mut self) {
        self.reference_height = self.position();
        self.elapsed_ticks = 0;
    }

    pub fn fall(&mut self) {
        self.elapsed_ticks += 1;
    }
}

impl Default for FallingBody {
    fn default() -> Self {
        Self::new()
    }
}

// ── Gap geometry ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GapEnd {
    Top,
    Bottom,
}

/// Row of the top or bottom edge of a pipe's opening.
pub fn gap_row_bound(pipe: &Pipe, end: GapEnd) -> i32 {
    let center = pipe.gap_fraction * (NUM_ROWS - 1) as f64;
    let half = GAP_WIDTH as f64 / 2.0;
    let edge = match end {
        GapEnd::Top => center - half,
        GapEnd::Bottom => center + half,
    };
    edge as i32
}
