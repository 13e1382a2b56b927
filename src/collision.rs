use crate::{
    CEILING_ROW, FLOOR_ROW, PIPE_RADIUS,
    physics::{FallingBody, GapEnd, gap_row_bound},
    pipe::Pipe,
};

/// Body reached the ceiling or the floor row.
pub fn hit_boundary(row: i32) -> bool {
    row <= CEILING_ROW || row >= FLOOR_ROW
}

/// Body at (`row`, `body_column`) touches the pipe's walls.
///
/// The horizontal band is one column wider than the pipe on each side; the safe
/// band is one row narrower than the opening on each side.
pub fn hit_pipe(body_column: i32, row: i32, pipe: &Pipe) -> bool {
    let left = pipe.center_column - PIPE_RADIUS - 1;
    let right = pipe.center_column + PIPE_RADIUS + 1;
    if body_column < left || body_column > right {
        return false;
    }
    let safe_top = gap_row_bound(pipe, GapEnd::Top) + 1;
    let safe_bottom = gap_row_bound(pipe, GapEnd::Bottom) - 1;
    !(safe_top..=safe_bottom).contains(&row)
}

pub fn collides(body_column: i32, body: &FallingBody, pipes: &[Pipe]) -> bool {
    let row = body.row();
    hit_boundary(row) || pipes.iter().any(|p| hit_pipe(body_column, row, p))
}
