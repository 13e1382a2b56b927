use rand::Rng;

use crate::{NUM_COLS, PIPE_RADIUS};

/// Horizontal start of each pipe, as a multiple of the last column.
const START_OFFSETS: [f64; 2] = [1.2, 1.75];

/// One vertical obstacle scrolling right to left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pipe {
    /// Vertical center of the opening as a fraction of grid height, in `[0.25, 0.75)`.
    pub gap_fraction: f64,
    pub center_column: i32,
}

impl Pipe {
    pub fn new(center_column: i32, rng: &mut impl Rng) -> Self {
        Self {
            gap_fraction: random_gap(rng),
            center_column,
        }
    }

    /// Both pipes in their start-of-game places, staggered off the right edge.
    pub fn start_pair(rng: &mut impl Rng) -> [Pipe; 2] {
        START_OFFSETS.map(|k| Pipe::new((k * (NUM_COLS - 1) as f64) as i32, rng))
    }

    pub fn is_offscreen(&self) -> bool {
        self.center_column + PIPE_RADIUS < 0
    }

    pub fn advance(&mut self) {
        self.center_column -= 1;
    }

    /// Wrap a fully hidden pipe back to the right edge with a new opening.
    /// Returns whether it wrapped.
    pub fn recycle_if_offscreen(&mut self, rng: &mut impl Rng) -> bool {
        if !self.is_offscreen() {
            return false;
        }
        self.center_column = NUM_COLS + PIPE_RADIUS;
        let old = self.gap_fraction;
        while self.gap_fraction == old {
            self.gap_fraction = random_gap(rng);
        }
        true
    }

    /// One frame of scrolling. Returns whether the pipe was passed (recycled) this frame.
    pub fn step(&mut self, rng: &mut impl Rng) -> bool {
        let recycled = self.recycle_if_offscreen(rng);
        self.advance();
        recycled
    }
}

fn random_gap(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.25..0.75)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn start_pair_is_staggered_offscreen() {
        let mut rng = StdRng::seed_from_u64(7);
        let [near, far] = Pipe::start_pair(&mut rng);
        assert_eq!(near.center_column, 94);
        assert_eq!(far.center_column, 138);
        assert!(near.center_column - PIPE_RADIUS >= NUM_COLS);
        for p in [near, far] {
            assert!((0.25..0.75).contains(&p.gap_fraction));
        }
    }

    #[test]
    fn scrolls_one_column_per_frame() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pipe = Pipe::new(40, &mut rng);
        for expected in (20..40).rev() {
            assert!(!pipe.step(&mut rng));
            assert_eq!(pipe.center_column, expected);
        }
    }

    #[test]
    fn recycles_only_when_fully_hidden() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pipe = Pipe::new(-PIPE_RADIUS, &mut rng);
        assert!(!pipe.recycle_if_offscreen(&mut rng));

        pipe.advance();
        let old_gap = pipe.gap_fraction;
        assert!(pipe.recycle_if_offscreen(&mut rng));
        assert_eq!(pipe.center_column, NUM_COLS + PIPE_RADIUS);
        assert_ne!(pipe.gap_fraction, old_gap);
        assert!((0.25..0.75).contains(&pipe.gap_fraction));
    }

    #[test]
    fn recycles_once_per_traversal() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pipe = Pipe::new(10, &mut rng);
        let frames: Vec<usize> = (0..400).filter(|_| pipe.step(&mut rng)).collect();

        // Visible from NUM_COLS + R down to -(R + 1), then the wrap frame itself.
        let period = (NUM_COLS + 2 * PIPE_RADIUS + 1) as usize;
        assert!(frames.len() >= 3);
        for pair in frames.windows(2) {
            assert_eq!(pair[1] - pair[0], period);
        }
    }

    #[test]
    fn same_seed_same_gaps() {
        let a = Pipe::start_pair(&mut StdRng::seed_from_u64(99));
        let b = Pipe::start_pair(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
