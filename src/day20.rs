use anyhow::{Context, Result};

use crate::grid::{self, Pos};

const MIN_SAVING: usize = 100;

/// Cheats of at most `max_cheat` picoseconds that save at least `min_saving`.
fn count_cheats(track: &[(Pos, usize)], max_cheat: usize, min_saving: usize) -> usize {
    track.iter().map(|&((ri, ci), from)| {
        track.iter().filter(|&&((rj, cj), to)| {
            let cheat = ri.abs_diff(rj) + ci.abs_diff(cj);
            cheat <= max_cheat && to >= from + cheat + min_saving
        }).count()
    }).sum()
}

/// Every track cell with its distance from the start.
fn race_track(input: &str) -> Result<Vec<(Pos, usize)>> {
    let map = grid::parse(input);
    let start = grid::find(&map, b'S').context("no start")?;
    grid::find(&map, b'E').context("no end")?;
    let dist = grid::bfs(&map, start, |cell| cell != b'#');
    Ok(dist.iter().enumerate().flat_map(|(ri, row)|
        row.iter().enumerate().filter_map(move |(ci, d)| d.map(|d| ((ri, ci), d)))
    ).collect())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let track = race_track(input)?;
    Ok(count_cheats(&track, if part == 1 {2} else {20}, MIN_SAVING).to_string())
}
