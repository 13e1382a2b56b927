use rand::rngs::StdRng;

use crate::{FLAPPY_COL, collision, physics::FallingBody, pipe::Pipe, score::Score};

/// What the player did this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Flap,
    Idle,
}

/// What happened during one tick of play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    pub flapped: bool,
    /// Pipes passed (recycled) this tick.
    pub passed: u32,
    pub crashed: bool,
}

/// All mutable game state for one process run.
pub struct GameSession {
    pub body: FallingBody,
    pub pipes: [Pipe; 2],
    pub score: Score,
    /// Never reset; only drives animation phase.
    pub frame: u64,
    rng: StdRng,
}

impl GameSession {
    pub fn new(mut rng: StdRng) -> Self {
        let pipes = Pipe::start_pair(&mut rng);
        Self {
            body: FallingBody::new(),
            pipes,
            score: Score::default(),
            frame: 0,
            rng,
        }
    }

    /// Fresh body and pipes for a new life. Best score carries over.
    pub fn restart(&mut self) {
        self.score.on_restart();
        self.body = FallingBody::new();
        self.pipes = Pipe::start_pair(&mut self.rng);
    }

    /// Advance the simulation one frame: input, pipes, then collision.
    pub fn tick(&mut self, input: Input) -> Tick {
        let mut tick = Tick::default();
        match input {
            Input::Flap => {
                self.body.flap();
                tick.flapped = true;
            }
            Input::Idle => self.body.fall(),
        }

        for pipe in &mut self.pipes {
            if pipe.step(&mut self.rng) {
                self.score.on_pipe_recycled();
                tick.passed += 1;
            }
        }

        tick.crashed = self.crashed();
        tick
    }

    pub fn crashed(&self) -> bool {
        collision::collides(FLAPPY_COL, &self.body, &self.pipes)
    }

    /// Called once a frame has been drawn.
    pub fn end_frame(&mut self) {
        self.frame += 1;
    }
}
