use anyhow::{Context, Result};
use bitvec::prelude::*;

use crate::grid::{self, Pos, DIRS};

/// Walks the guard from `start` facing up until it leaves the map. Returns the
/// visited cells, or `None` if the guard gets stuck in a loop.
fn patrol(map: &[&[u8]], start: Pos, obstacle: Option<Pos>) -> Option<BitVec> {
    let cols = map[0].len();
    let mut visited = bitvec![0; map.len() * cols];
    let mut states = bitvec![0; map.len() * cols * 4];
    let (mut pos, mut dir) = (start, 0);
    loop {
        let state = (pos.0 * cols + pos.1) * 4 + dir;
        if states[state] {return None};
        states.set(state, true);
        visited.set(pos.0 * cols + pos.1, true);

        let next = grid::step(pos, DIRS[dir]);
        match grid::get(map, next) {
            None => return Some(visited),
            Some(b'#') => dir = (dir + 1) % 4,
            Some(_) if Some(next) == obstacle => dir = (dir + 1) % 4,
            Some(_) => pos = next,
        }
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = grid::parse(input);
    let start = grid::find(&map, b'^').context("no guard on the map")?;
    let cols = map[0].len();
    let visited = patrol(&map, start, None).context("the guard loops without any help")?;

    Ok(if part == 1 {
        visited.count_ones()
    } else {
        visited.iter_ones()
            .map(|at| (at / cols, at % cols))
            .filter(|&obstacle| obstacle != start && patrol(&map, start, Some(obstacle)).is_none())
            .count()
    }.to_string())
}
