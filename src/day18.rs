use anyhow::{Context, Result};

use crate::grid::{self, Pos};

const SIZE: usize = 71;
const FALLEN: usize = 1024;

fn parse(input: &str) -> Result<Vec<Pos>> {
    input.trim().lines().map(|line| {
        let (x, y) = line.split_once(',').with_context(|| format!("cannot parse byte {:?}", line))?;
        Ok((y.trim().parse()?, x.trim().parse()?))
    }).collect()
}

/// Steps from the top left to the bottom right corner once `corrupted` have fallen.
fn shortest_path(size: usize, corrupted: &[Pos]) -> Option<usize> {
    let mut memory = vec![vec![b'.'; size]; size];
    for &(ri, ci) in corrupted {
        if let Some(cell) = memory.get_mut(ri).and_then(|row| row.get_mut(ci)) {*cell = b'#'};
    }
    if memory[0][0] == b'#' {return None};
    grid::bfs(&memory, (0, 0), |cell| cell == b'.')[size - 1][size - 1]
}

/// The first byte after which the exit can no longer be reached.
fn first_blocker(size: usize, bytes: &[Pos]) -> Option<Pos> {
    let fallen = (0 ..= bytes.len()).collect::<Vec<_>>()
        .partition_point(|&n| shortest_path(size, &bytes[.. n]).is_some());
    fallen.checked_sub(1).and_then(|at| bytes.get(at)).copied()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let bytes = parse(input)?;
    if part == 1 {
        let steps = shortest_path(SIZE, &bytes[.. FALLEN.min(bytes.len())]).context("the exit is cut off")?;
        Ok(steps.to_string())
    } else {
        let (ri, ci) = first_blocker(SIZE, &bytes).context("the exit is never cut off")?;
        Ok(format!("{},{}", ci, ri))
    }
}
