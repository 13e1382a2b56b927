use fundsp::hacker32::*;
use rodio::{OutputStream, OutputStreamHandle, Sink, buffer::SamplesBuffer};

const SAMPLE_RATE: u32 = 44_100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Flap,
    Score,
    Death,
}

/// Anything that can react to game sound cues.
pub trait Sfx {
    fn play(&mut self, cue: Cue);
}

/// `None` is a muted player.
impl<T: Sfx> Sfx for Option<T> {
    fn play(&mut self, cue: Cue) {
        if let Some(sfx) = self {
            sfx.play(cue);
        }
    }
}

// ── Speaker ─────────────────────────────────────────────────────────────────

/// Default audio output. The stream must outlive every sink played on it.
pub struct Speaker {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Speaker {
    pub fn open() -> anyhow::Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl Sfx for Speaker {
    fn play(&mut self, cue: Cue) {
        // A dropped device mid-game just means silence.
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples(cue)));
        sink.detach(); // Play in background
    }
}

// ── Synthesis ───────────────────────────────────────────────────────────────

fn render(mut node: impl AudioUnit, secs: f32) -> Vec<f32> {
    node.set_sample_rate(SAMPLE_RATE as f64);
    let n = (SAMPLE_RATE as f32 * secs) as usize;
    (0..n).map(|_| node.get_mono()).collect()
}

/// Linear ramp from `a` to `b` over `dur` seconds, then hold.
fn ramp(a: f32, b: f32, t: f32, dur: f32) -> f32 {
    a + (b - a) * (t / dur).min(1.0)
}

pub fn samples(cue: Cue) -> Vec<f32> {
    match cue {
        Cue::Flap => {
            let freq = lfo(|t: f32| ramp(500.0, 900.0, t, 0.08));
            let gain = lfo(|t: f32| ramp(0.10, 0.0, t, 0.1));
            render((freq >> sine()) * gain, 0.1)
        }
        Cue::Score => {
            let freq = lfo(|t: f32| if t < 0.06 { 988.0_f32 } else { 1319.0 });
            let gain = lfo(|t: f32| ramp(0.08, 0.0, t, 0.18));
            render((freq >> square()) * gain, 0.18)
        }
        Cue::Death => {
            // 400 Hz down to 80 Hz over 0.4 s, fading out over 0.5 s.
            let freq = lfo(|t: f32| ramp(400.0, 80.0, t, 0.4));
            let gain = lfo(|t: f32| ramp(0.15, 0.0, t, 0.5));
            render((freq >> saw()) * gain, 0.5)
        }
    }
}
