use rand::rngs::StdRng;
use std::io;
use std::time::Duration;

use crate::{
    TARGET_FPS, render,
    session::{GameSession, Input},
    sound::{Cue, Sfx},
    surface::{Key, Surface},
};

const SPLASH_SECS: f64 = 3.0;
const SPLASH_HOLD: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Splash,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn is_flap(key: Key) -> bool {
    matches!(key, Key::Up | Key::Char(' '))
}

fn is_quit(key: Key) -> bool {
    matches!(key, Key::Char('q') | Key::Esc)
}

/// The splash → play → game-over machine, driving a session against a surface.
pub struct Game<S, A> {
    surface: S,
    sfx: A,
    session: GameSession,
    state: State,
}

impl<S: Surface, A: Sfx> Game<S, A> {
    pub fn new(surface: S, sfx: A, rng: StdRng) -> Self {
        Self {
            surface,
            sfx,
            session: GameSession::new(rng),
            state: State::Splash,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Configure the surface and play until the player quits. Returns the best score.
    pub fn run(&mut self) -> io::Result<u32> {
        self.surface.configure()?;
        while self.step()? == Flow::Continue {}
        Ok(self.session.score.best.max(self.session.score.score))
    }

    /// One pass of the current state: the whole splash, one frame of play, or one
    /// game-over prompt.
    pub fn step(&mut self) -> io::Result<Flow> {
        match self.state {
            State::Splash => {
                self.splash()?;
                self.state = State::Playing;
                Ok(Flow::Continue)
            }
            State::Playing => self.play_frame(),
            State::GameOver => self.game_over(),
        }
    }

    fn splash(&mut self) -> io::Result<()> {
        render::draw_splash(&mut self.surface)?;
        let tick = Duration::from_secs_f64(SPLASH_SECS / render::PROG_BAR_LEN as f64);
        for i in 0..render::PROG_BAR_LEN {
            self.surface.sleep(tick);
            render::draw_progress(&mut self.surface, i)?;
        }
        self.surface.sleep(SPLASH_HOLD);
        Ok(())
    }

    fn play_frame(&mut self) -> io::Result<Flow> {
        self.surface.sleep(Duration::from_secs_f64(1.0 / TARGET_FPS));

        let input = match self.surface.poll_key()? {
            Some(key) if is_quit(key) => return Ok(Flow::Quit),
            Some(key) if is_flap(key) => Input::Flap,
            _ => Input::Idle,
        };

        let tick = self.session.tick(input);
        if tick.flapped {
            self.sfx.play(Cue::Flap);
        }
        if tick.passed > 0 {
            self.sfx.play(Cue::Score);
        }
        if tick.crashed {
            self.sfx.play(Cue::Death);
            self.state = State::GameOver;
            return Ok(Flow::Continue);
        }

        render::draw_play_frame(&mut self.surface, &self.session)?;
        self.session.end_frame();
        Ok(Flow::Continue)
    }

    fn game_over(&mut self) -> io::Result<Flow> {
        // Flaps still queued from the last life must not answer the prompt.
        while self.surface.poll_key()?.is_some() {}

        render::draw_death(&mut self.surface)?;
        if is_quit(self.surface.wait_key()?) {
            return Ok(Flow::Quit);
        }
        self.session.restart();
        self.state = State::Playing;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NUM_COLS, PIPE_RADIUS, score::Score, surface::script::ScriptSurface};
    use rand::SeedableRng;

    impl Sfx for Vec<Cue> {
        fn play(&mut self, cue: Cue) {
            self.push(cue);
        }
    }

    fn game() -> Game<ScriptSurface, Vec<Cue>> {
        Game::new(ScriptSurface::new(), Vec::new(), StdRng::seed_from_u64(42))
    }

    fn playing() -> Game<ScriptSurface, Vec<Cue>> {
        let mut g = game();
        g.state = State::Playing;
        g
    }

    fn play_until_crash(g: &mut Game<ScriptSurface, Vec<Cue>>) -> usize {
        let mut frames = 0;
        while g.state() == State::Playing {
            assert_eq!(g.step().unwrap(), Flow::Continue);
            frames += 1;
            assert!(frames < 200);
        }
        frames
    }

    #[test]
    fn splash_runs_progress_bar_then_plays() {
        let mut g = game();
        assert_eq!(g.state(), State::Splash);
        assert_eq!(g.step().unwrap(), Flow::Continue);
        assert_eq!(g.state(), State::Playing);

        let s = &g.surface;
        assert_eq!(s.frames.len(), 1 + render::PROG_BAR_LEN as usize);
        assert_eq!(s.slept.len(), render::PROG_BAR_LEN as usize + 1);
        assert_eq!(s.slept.last(), Some(&SPLASH_HOLD));
        let total: Duration = s.slept.iter().sum();
        assert!((total.as_secs_f64() - 3.5).abs() < 0.01);
        assert!(s.last_frame()[22].contains(&"=".repeat(76)));
    }

    #[test]
    fn frames_are_paced_and_counted() {
        let mut g = playing();
        for _ in 0..5 {
            g.step().unwrap();
        }
        assert_eq!(g.session().frame, 5);
        assert_eq!(g.surface.frames.len(), 5);
        let dt = Duration::from_secs_f64(1.0 / TARGET_FPS);
        assert!(g.surface.slept.iter().all(|d| *d == dt));
    }

    #[test]
    fn idle_player_hits_the_floor() {
        let mut g = playing();
        let frames = play_until_crash(&mut g);
        assert_eq!(g.state(), State::GameOver);
        assert_eq!(g.sfx, vec![Cue::Death]);
        // The crashing tick is not drawn.
        assert_eq!(g.surface.frames.len(), frames - 1);
        assert_eq!(g.session().frame, frames as u64 - 1);
    }

    #[test]
    fn flap_key_climbs() {
        let mut g = playing();
        for _ in 0..15 {
            g.step().unwrap();
        }
        let before = g.session().body.position();
        g.surface.polls.push_back(Some(Key::Up));
        g.step().unwrap();
        assert_eq!(g.session().body.elapsed_ticks, 0);
        assert_eq!(g.session().body.position(), before);
        assert!(g.session().body.is_ascending());
        assert_eq!(g.sfx, vec![Cue::Flap]);

        g.surface.polls.push_back(Some(Key::Char('x')));
        g.step().unwrap();
        assert_eq!(g.session().body.elapsed_ticks, 1);
    }

    #[test]
    fn quit_during_play() {
        let mut g = playing();
        g.surface.polls.push_back(Some(Key::Char('q')));
        assert_eq!(g.step().unwrap(), Flow::Quit);
        assert!(g.surface.frames.is_empty());
    }

    #[test]
    fn passing_a_pipe_scores() {
        let mut g = playing();
        g.session.pipes[0].center_column = -PIPE_RADIUS - 1;
        g.session.pipes[1].center_column = 200;
        g.step().unwrap();
        assert_eq!(g.session().score.score, 1);
        assert_eq!(g.sfx, vec![Cue::Score]);
        assert_eq!(g.session().pipes[0].center_column, NUM_COLS + PIPE_RADIUS - 1);
    }

    #[test]
    fn restart_after_death_keeps_best() {
        let mut g = playing();
        play_until_crash(&mut g);
        g.session.score.score = 4;

        g.surface.polls.push_back(Some(Key::Up));
        g.surface.waits.push_back(Key::Enter);
        assert_eq!(g.step().unwrap(), Flow::Continue);

        assert!(g.surface.polls.is_empty());
        assert!(g.surface.last_frame()[11].contains("Flappy died"));
        assert_eq!(g.state(), State::Playing);
        assert_eq!(g.session().score, Score { score: 0, best: 4 });
        assert_eq!(g.session().body.elapsed_ticks, 0);
        assert_eq!(g.session().pipes[0].center_column, 94);
        assert_eq!(g.session().pipes[1].center_column, 138);
    }

    #[test]
    fn quit_from_game_over() {
        let mut g = playing();
        play_until_crash(&mut g);
        g.surface.waits.push_back(Key::Char('q'));
        assert_eq!(g.step().unwrap(), Flow::Quit);
        assert_eq!(g.state(), State::GameOver);
    }

    #[test]
    fn run_until_quit() {
        let mut g = game();
        g.surface.waits.extend([Key::Char(' '), Key::Esc]);
        let best = g.run().unwrap();
        assert!(g.surface.configured);
        assert_eq!(best, 0);
        assert_eq!(g.sfx, vec![Cue::Death, Cue::Death]);
        assert!(g.surface.waits.is_empty());
    }

    #[test]
    fn frame_counter_survives_restart() {
        let mut g = playing();
        let frames = play_until_crash(&mut g) as u64 - 1;
        g.surface.waits.push_back(Key::Enter);
        g.step().unwrap();
        g.step().unwrap();
        assert_eq!(g.session().frame, frames + 1);
    }
}
