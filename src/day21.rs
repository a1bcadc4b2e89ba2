use std::iter::repeat;

use anyhow::{bail, Context, Result};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::grid::Pos;

//     +---+---+---+
//     | 7 | 8 | 9 |
//     +---+---+---+
//     | 4 | 5 | 6 |
//     +---+---+---+
//     | 1 | 2 | 3 |
//     +---+---+---+
//         | 0 | A |
//         +---+---+
const NUMERIC_GAP: Pos = (3, 0);

//         +---+---+
//         | ^ | A |
//     +---+---+---+
//     | < | v | > |
//     +---+---+---+
const DIRECTIONAL_GAP: Pos = (0, 0);

type Presses = ArrayVec<u8, 6>;

fn numeric_pos(key: u8) -> Option<Pos> {
    Some(match key {
        b'7' => (0, 0), b'8' => (0, 1), b'9' => (0, 2),
        b'4' => (1, 0), b'5' => (1, 1), b'6' => (1, 2),
        b'1' => (2, 0), b'2' => (2, 1), b'3' => (2, 2),
                        b'0' => (3, 1), b'A' => (3, 2),
        _ => return None,
    })
}

fn directional_pos(key: u8) -> Pos {
    match key {
                        b'^' => (0, 1), b'A' => (0, 2),
        b'<' => (1, 0), b'v' => (1, 1), b'>' => (1, 2),
        _ => unreachable!("{:?} is not a directional key", key as char),
    }
}

/// The straight-line ways to get from one key to another and press it: all
/// horizontal moves then all vertical, or the other way round, never over the gap.
/// Zig-zagging is never cheaper for the robot one keypad up.
fn paths(from: Pos, to: Pos, gap: Pos) -> ArrayVec<Presses, 2> {
    let horizontal = repeat(if to.1 > from.1 {b'>'} else {b'<'}).take(from.1.abs_diff(to.1));
    let vertical = repeat(if to.0 > from.0 {b'v'} else {b'^'}).take(from.0.abs_diff(to.0));
    let mut out = ArrayVec::new();
    if (from.0, to.1) != gap {
        out.push(horizontal.clone().chain(vertical.clone()).chain([b'A']).collect());
    }
    if (to.0, from.1) != gap {
        let presses: Presses = vertical.chain(horizontal).chain([b'A']).collect();
        if !out.contains(&presses) {out.push(presses)};
    }
    out
}

#[derive(Default)]
struct Robots {
    memo: FxHashMap<(Pos, Pos, usize), u64>,
}

impl Robots {
    /// Human presses needed to type `presses` on a directional keypad with
    /// `depth` robot-operated directional keypads in between.
    fn typing_cost(&mut self, presses: &[u8], depth: usize) -> u64 {
        if depth == 0 {return presses.len() as u64};
        let mut at = directional_pos(b'A');
        let mut total = 0;
        for &key in presses {
            let to = directional_pos(key);
            total += self.move_cost(at, to, depth);
            at = to;
        }
        total
    }

    fn move_cost(&mut self, from: Pos, to: Pos, depth: usize) -> u64 {
        if let Some(&cost) = self.memo.get(&(from, to, depth)) {return cost};
        let mut cost = u64::MAX;
        for presses in paths(from, to, DIRECTIONAL_GAP) {
            cost = cost.min(self.typing_cost(&presses, depth - 1));
        }
        self.memo.insert((from, to, depth), cost);
        cost
    }

    /// Human presses needed to type `code` on the numeric keypad.
    fn sequence_cost(&mut self, code: &[Pos], depth: usize) -> u64 {
        let mut at = (3, 2);
        let mut total = 0;
        for &to in code {
            let mut cost = u64::MAX;
            for presses in paths(at, to, NUMERIC_GAP) {
                cost = cost.min(self.typing_cost(&presses, depth));
            }
            total += cost;
            at = to;
        }
        total
    }
}

fn complexity(robots: &mut Robots, code: &str, depth: usize) -> Result<u64> {
    let keys = code.bytes().map(|key| numeric_pos(key).with_context(|| format!("bad key in code {:?}", code)))
        .collect::<Result<Vec<_>>>()?;
    let Ok(number) = code.trim_end_matches('A').parse::<u64>() else {bail!("code {:?} has no numeric part", code)};
    Ok(robots.sequence_cost(&keys, depth) * number)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut robots = Robots::default();
    let depth = if part == 1 {2} else {25};
    Ok(input.split_whitespace()
        .map(|code| complexity(&mut robots, code, depth))
        .sum::<Result<u64>>()?.to_string())
}
