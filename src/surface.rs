use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Color as CColor},
    terminal,
};
use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crate::{NUM_COLS, NUM_ROWS};

// ── Keys ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Enter,
    Esc,
    Char(char),
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

// ── Display / input surface ─────────────────────────────────────────────────

/// Fixed-size glyph grid plus keyboard, as seen by the game loop.
pub trait Surface {
    /// One-time terminal setup: no line buffering, no echo, hidden cursor.
    fn configure(&mut self) -> io::Result<()>;

    fn clear_frame(&mut self) -> io::Result<()>;

    /// Out-of-bounds writes are ignored.
    fn write_glyph(&mut self, row: i32, col: i32, ch: char) -> io::Result<()>;

    fn present_frame(&mut self) -> io::Result<()>;

    /// Non-blocking; `None` when nothing is pending.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;

    /// Blocks until a key is pressed.
    fn wait_key(&mut self) -> io::Result<Key>;

    fn sleep(&mut self, dur: Duration) {
        std::thread::sleep(dur);
    }

    fn write_text(&mut self, row: i32, col: i32, text: &str) -> io::Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.write_glyph(row, col + i as i32, ch)?;
        }
        Ok(())
    }
}

// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

const PIPE: Rgb = Rgb(100, 170, 40);
const PIPE_CAP: Rgb = Rgb(145, 215, 62);
const BIRD: Rgb = Rgb(245, 200, 66);
const WING: Rgb = Rgb(215, 165, 35);
const DIRT: Rgb = Rgb(210, 185, 110);
const TEXT: Rgb = Rgb(255, 255, 255);

fn tint(ch: char) -> Rgb {
    match ch {
        '|' => PIPE,
        '=' => PIPE_CAP,
        '0' => BIRD,
        '\\' => WING,
        _ => TEXT,
    }
}

// ── Terminal surface ────────────────────────────────────────────────────────

/// Crossterm-backed surface. Glyphs go to a back buffer that is flushed whole.
pub struct TermSurface {
    out: Stdout,
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl TermSurface {
    pub fn new() -> Self {
        let rows = NUM_ROWS as usize;
        let cols = NUM_COLS as usize;
        Self {
            out: stdout(),
            rows,
            cols,
            cells: vec![' '; rows * cols],
        }
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }

    /// Leave the alternate screen and give the terminal back.
    pub fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TermSurface {
    fn configure(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )
    }

    fn clear_frame(&mut self) -> io::Result<()> {
        self.cells.fill(' ');
        Ok(())
    }

    fn write_glyph(&mut self, row: i32, col: i32, ch: char) -> io::Result<()> {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = ch;
        }
        Ok(())
    }

    fn present_frame(&mut self) -> io::Result<()> {
        let mut prev = None;
        for row in 0..self.rows {
            // '/' on the edge rows is floor and ceiling, elsewhere it is a wing.
            let edge = row == 0 || row == self.rows - 1;
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let ch = self.cells[row * self.cols + col];
                let c = match ch {
                    '/' if edge => DIRT,
                    '/' => WING,
                    _ => tint(ch),
                };
                if prev != Some(c) {
                    queue!(
                        self.out,
                        style::SetForegroundColor(CColor::Rgb {
                            r: c.0,
                            g: c.1,
                            b: c.2
                        })
                    )?;
                    prev = Some(c);
                }
                queue!(self.out, style::Print(ch))?;
            }
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key.code.into()));
                }
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key.code.into());
                }
            }
        }
    }
}

// ── Scripted surface for tests ──────────────────────────────────────────────
