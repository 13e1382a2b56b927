/// Column the score readout would start at with single-digit numbers.
pub const SCORE_START_COL: i32 = 62;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub score: u32,
    pub best: u32,
}

impl Score {
    pub fn on_pipe_recycled(&mut self) {
        self.score += 1;
    }

    pub fn on_restart(&mut self) {
        self.best = self.best.max(self.score);
        self.score = 0;
    }

    /// Where ` Score: n  Best: m` begins; shifts left as the numbers grow.
    pub fn readout_column(&self) -> i32 {
        SCORE_START_COL - digit_width(self.score) as i32 - digit_width(self.best) as i32
    }

    pub fn readout(&self) -> String {
        format!(" Score: {}  Best: {}", self.score, self.best)
    }
}

/// Decimal digits needed to print `n`.
pub fn digit_width(n: u32) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}
