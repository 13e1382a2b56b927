//! Drawing. Nothing here mutates game state; everything goes through a [`Surface`].

use std::io;

use crate::{
    CEILING_ROW, FLAPPY_COL, FLOOR_ROW, NUM_COLS, NUM_ROWS, PIPE_RADIUS,
    physics::{FallingBody, GapEnd, gap_row_bound},
    pipe::Pipe,
    score::Score,
    session::GameSession,
    surface::Surface,
};

pub const PROG_BAR_LEN: i32 = 76;
pub const PROG_BAR_ROW: i32 = 22;

const GROUND: char = '/';
const GROUND_SPACING: usize = 2;
const WALL: char = '|';
const CAP: char = '=';

#[rustfmt::skip]
const TITLE: [&str; 5] = [
    r" ___ _                       ___ _        _ ",
    r"| __| |__ _ _ __ _ __ _  _  | _ |_)_ _ __| |",
    r"| _|| / _` | '_ \ '_ \ || | | _ \ | '_/ _` |",
    r"|_| |_\__,_| .__/ .__/\_, | |___/_|_| \__,_|",
    r"           |_|  |_|   |__/                  ",
];

const INSTRUCTIONS: &str = "Press <up> to flap!";
const DEATH: &str = "Flappy died :-(. <up> to flap again, 'q' to quit.";

// ── Play frame ──────────────────────────────────────────────────────────────

pub fn draw_play_frame(s: &mut impl Surface, session: &GameSession) -> io::Result<()> {
    s.clear_frame()?;
    draw_floor_and_ceiling(s, session.frame, session.score.readout_column())?;
    for pipe in &session.pipes {
        draw_pipe(s, pipe)?;
    }
    draw_flappy(s, &session.body, session.frame)?;
    draw_score(s, &session.score)?;
    s.present_frame()
}

/// Scrolling `/` pattern; the ceiling stops short of the score readout.
pub fn draw_floor_and_ceiling(
    s: &mut impl Surface,
    frame: u64,
    ceiling_stop: i32,
) -> io::Result<()> {
    let start = (frame % GROUND_SPACING as u64) as i32;
    for col in (start..NUM_COLS - 1).step_by(GROUND_SPACING) {
        if col < ceiling_stop {
            s.write_glyph(CEILING_ROW, col, GROUND)?;
        }
        s.write_glyph(FLOOR_ROW, col, GROUND)?;
    }
    Ok(())
}

fn in_play_columns(col: i32) -> bool {
    (0..NUM_COLS - 1).contains(&col)
}

fn draw_walls(s: &mut impl Surface, pipe: &Pipe, row: i32) -> io::Result<()> {
    for col in [pipe.center_column - PIPE_RADIUS, pipe.center_column + PIPE_RADIUS] {
        if in_play_columns(col) {
            s.write_glyph(row, col, WALL)?;
        }
    }
    Ok(())
}

fn draw_cap(s: &mut impl Surface, pipe: &Pipe, row: i32) -> io::Result<()> {
    for dx in -PIPE_RADIUS..=PIPE_RADIUS {
        let col = pipe.center_column + dx;
        if in_play_columns(col) {
            s.write_glyph(row, col, CAP)?;
        }
    }
    Ok(())
}

pub fn draw_pipe(s: &mut impl Surface, pipe: &Pipe) -> io::Result<()> {
    let top = gap_row_bound(pipe, GapEnd::Top);
    let bottom = gap_row_bound(pipe, GapEnd::Bottom);

    for row in CEILING_ROW + 1..top {
        draw_walls(s, pipe, row)?;
    }
    draw_cap(s, pipe, top.max(CEILING_ROW + 1))?;

    for row in bottom + 1..FLOOR_ROW {
        draw_walls(s, pipe, row)?;
    }
    draw_cap(s, pipe, bottom.min(FLOOR_ROW - 1))
}

// ── Flappy ──────────────────────────────────────────────────────────────────

/// Wings are drawn at `col ± 1` on the body row and `col ± 2` one row off.
fn draw_wings(
    s: &mut impl Surface,
    h: i32,
    left: char,
    right: char,
    tip_row: i32,
) -> io::Result<()> {
    s.write_glyph(h, FLAPPY_COL - 1, left)?;
    s.write_glyph(tip_row, FLAPPY_COL - 2, left)?;
    s.write_glyph(h, FLAPPY_COL + 1, right)?;
    s.write_glyph(tip_row, FLAPPY_COL + 2, right)
}

pub fn draw_flappy(s: &mut impl Surface, body: &FallingBody, frame: u64) -> io::Result<()> {
    let h = body.row();
    let wings_down = body.is_ascending() && frame % 6 < 3;
    if wings_down {
        draw_wings(s, h, '/', '\\', h + 1)?;
    } else {
        draw_wings(s, h, '\\', '/', h - 1)?;
    }
    s.write_glyph(h, FLAPPY_COL, '0')
}

pub fn draw_score(s: &mut impl Surface, score: &Score) -> io::Result<()> {
    s.write_text(CEILING_ROW, score.readout_column(), &score.readout())
}

// ── Splash & game over ──────────────────────────────────────────────────────

pub fn draw_splash(s: &mut impl Surface) -> io::Result<()> {
    s.clear_frame()?;
    let top = NUM_ROWS / 2 - 6;
    let left = NUM_COLS / 2 - 22;
    for (i, line) in TITLE.iter().enumerate() {
        s.write_text(top + i as i32, left, line)?;
    }
    s.write_text(NUM_ROWS / 2 + 1, NUM_COLS / 2 - 10, INSTRUCTIONS)?;
    s.write_glyph(PROG_BAR_ROW, NUM_COLS / 2 - PROG_BAR_LEN / 2 - 1, '[')?;
    s.write_glyph(PROG_BAR_ROW, NUM_COLS / 2 + PROG_BAR_LEN / 2, ']')?;
    s.present_frame()
}

/// Fill cell `i` of the splash progress bar.
pub fn draw_progress(s: &mut impl Surface, i: i32) -> io::Result<()> {
    s.write_glyph(PROG_BAR_ROW, NUM_COLS / 2 - PROG_BAR_LEN / 2 + i, '=')?;
    s.present_frame()
}

pub fn draw_death(s: &mut impl Surface) -> io::Result<()> {
    s.clear_frame()?;
    s.write_text(NUM_ROWS / 2 - 1, NUM_COLS / 2 - 22, DEATH)?;
    s.present_frame()
}
