use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::terminal;
use rand::{SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

use flappy_ascii::{
    NUM_COLS, NUM_ROWS,
    game::Game,
    sound::Speaker,
    surface::TermSurface,
};

#[derive(Parser, Debug)]
#[command(name = "flappy-ascii")]
#[command(about = "Flappy Bird on an 80x24 terminal grid", long_about = None)]
struct Args {
    /// Seed for the pipe gaps (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Don't open an audio device
    #[arg(long, default_value_t = false)]
    mute: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (cols, rows) = terminal::size().context("reading terminal size")?;
    if (cols as i32) < NUM_COLS || (rows as i32) < NUM_ROWS {
        bail!("terminal is {cols}x{rows}, need at least {NUM_COLS}x{NUM_ROWS}");
    }

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0),
    };
    let speaker = if args.mute { None } else { Speaker::open().ok() };

    let mut game = Game::new(TermSurface::new(), speaker, StdRng::seed_from_u64(seed));
    let res = game.run();

    // Always cleanup
    let restored = game.surface_mut().restore();
    let best = res.context("terminal I/O failed during play")?;
    restored.context("restoring the terminal")?;

    println!("Best score: {best}");
    Ok(())
}
