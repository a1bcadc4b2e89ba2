use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::grid::{self, Pos, DIRS};

const STEP: usize = 1;
const TURN: usize = 1000;

struct Maze<'a> {
    map: Vec<&'a [u8]>,
    cols: usize,
}

impl Maze<'_> {
    fn state(&self, (ri, ci): Pos, dir: usize) -> usize {(ri * self.cols + ci) * 4 + dir}

    fn open(&self, pos: Pos) -> bool {grid::get(&self.map, pos).is_some_and(|c| c != b'#')}

    /// Lowest score of every (cell, heading) state, starting east at `start`.
    fn scores(&self, start: Pos) -> Vec<usize> {
        let mut best = vec![usize::MAX; self.map.len() * self.cols * 4];
        let mut heap = BinaryHeap::from([Reverse((0, start, 1))]);
        while let Some(Reverse((score, pos, dir))) = heap.pop() {
            if score >= best[self.state(pos, dir)] {continue};
            best[self.state(pos, dir)] = score;
            let ahead = grid::step(pos, DIRS[dir]);
            if self.open(ahead) {heap.push(Reverse((score + STEP, ahead, dir)))};
            heap.push(Reverse((score + TURN, pos, (dir + 1) % 4)));
            heap.push(Reverse((score + TURN, pos, (dir + 3) % 4)));
        }
        best
    }

    /// Score of the cheapest way into `end`, if there is one.
    fn lowest(&self, best: &[usize], end: Pos) -> Option<usize> {
        (0 .. 4).map(|dir| best[self.state(end, dir)]).min().filter(|&s| s != usize::MAX)
    }

    /// Cells on any path into `end` scoring `lowest`, walking the score table back.
    fn best_seats(&self, best: &[usize], end: Pos, lowest: usize) -> usize {
        let mut todo = (0 .. 4).filter(|&dir| best[self.state(end, dir)] == lowest)
            .map(|dir| (end, dir)).collect::<Vec<_>>();
        let mut seen = vec![false; best.len()];
        while let Some((pos, dir)) = todo.pop() {
            if std::mem::replace(&mut seen[self.state(pos, dir)], true) {continue};
            let score = best[self.state(pos, dir)];
            let behind = grid::step(pos, DIRS[(dir + 2) % 4]);
            let prev = [(behind, dir, STEP), (pos, (dir + 1) % 4, TURN), (pos, (dir + 3) % 4, TURN)];
            for (ppos, pdir, cost) in prev {
                if self.open(ppos) && best[self.state(ppos, pdir)].checked_add(cost) == Some(score) {
                    todo.push((ppos, pdir));
                }
            }
        }
        seen.iter().positions(|&s| s).map(|state| state / 4).dedup().count()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = grid::parse(input);
    let start = grid::find(&map, b'S').context("no start tile")?;
    let end = grid::find(&map, b'E').context("no end tile")?;
    let maze = Maze {cols: map[0].len(), map};
    let best = maze.scores(start);
    let lowest = maze.lowest(&best, end).context("the end is unreachable")?;
    Ok(if part == 1 {lowest} else {maze.best_seats(&best, end, lowest)}.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const FIRST: &str = indoc! {"
        ###############
        #.......#....E#
        #.#.###.#.###.#
        #.....#.#...#.#
        #.###.#####.#.#
        #.#.#.......#.#
        #.#.#####.###.#
        #...........#.#
        ###.#.#####.#.#
        #...#.....#.#.#
        #.#.#.###.#.#.#
        #.....#...#.#.#
        #.###.#.#.#.#.#
        #S..#.....#...#
        ###############
    "};

    const SECOND: &str = indoc! {"
        #################
        #...#...#...#..E#
        #.#.#.#.#.#.#.#.#
        #.#.#.#...#...#.#
        #.#.#.#.###.#.#.#
        #...#.#.#.....#.#
        #.#.#.#.#.#####.#
        #.#...#.#.#.....#
        #.#.#####.#.###.#
        #.#.#.......#...#
        #.#.###.#####.###
        #.#.#...#.....#.#
        #.#.#.#####.###.#
        #.#.#.........#.#
        #.#.#.#########.#
        #S#.............#
        #################
    "};

    #[test]
    fn examples() -> Result<()> {
        assert_eq!(solve(1, FIRST)?, "7036");
        assert_eq!(solve(2, FIRST)?, "45");
        assert_eq!(solve(1, SECOND)?, "11048");
        assert_eq!(solve(2, SECOND)?, "64");
        Ok(())
    }

    #[test]
    fn straight_corridor() -> Result<()> {
        assert_eq!(solve(1, "#####\n#S.E#\n#####\n")?, "2");
        assert_eq!(solve(2, "#####\n#S.E#\n#####\n")?, "3");
        Ok(())
    }

    #[test]
    fn walled_off_end() {
        let maze = "#####\n#S#E#\n#####\n";
        assert!(solve(1, maze).is_err());
        assert!(solve(2, maze).is_err());
    }
}
