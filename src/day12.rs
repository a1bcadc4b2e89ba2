use anyhow::Result;
use bitvec::prelude::*;

use crate::grid::{self, Pos, DIRS};

struct Region {
    area: usize,
    perimeter: usize,
    corners: usize,
}

/// Flood-fills the plot containing `start`, marking it in `seen`.
fn visit_region(map: &[&[u8]], start: Pos, seen: &mut BitVec) -> Region {
    let cols = map[0].len();
    let plant = map[start.0][start.1];
    let same = |pos: Pos| grid::get(map, pos) == Some(plant);
    let mut region = Region {area: 0, perimeter: 0, corners: 0};
    let mut todo = vec![start];
    seen.set(start.0 * cols + start.1, true);
    while let Some(pos) = todo.pop() {
        region.area += 1;
        for (di, dir) in DIRS.into_iter().enumerate() {
            let next = grid::step(pos, dir);
            if !same(next) {
                region.perimeter += 1;
            } else if !seen[next.0 * cols + next.1] {
                seen.set(next.0 * cols + next.1, true);
                todo.push(next);
            }

            // one corner per side-pair turning at this cell, convex or concave
            let side = grid::step(pos, DIRS[(di + 1) % 4]);
            let diagonal = grid::step(next, DIRS[(di + 1) % 4]);
            match (same(next), same(side)) {
                (false, false) => region.corners += 1,
                (true, true) if !same(diagonal) => region.corners += 1,
                _ => (),
            }
        }
    }
    region
}

fn regions(map: &[&[u8]]) -> Vec<Region> {
    let cols = map.first().map_or(0, |row| row.len());
    let mut seen = bitvec![0; map.len() * cols];
    let mut regions = vec![];
    for ri in 0 .. map.len() {
        for ci in 0 .. cols {
            if !seen[ri * cols + ci] {regions.push(visit_region(map, (ri, ci), &mut seen))};
        }
    }
    regions
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = grid::parse(input);
    Ok(regions(&map).iter().map(|region|
        region.area * if part == 1 {region.perimeter} else {region.corners}
    ).sum::<usize>().to_string())
}
