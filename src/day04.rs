use anyhow::Result;

use crate::grid::{self, step};

fn count_xmas(grid: &[&[u8]]) -> usize {
    (0 .. grid.len()).flat_map(|ri| (0 .. grid[ri].len()).map(move |ci| (ri, ci)))
        .filter(|&pos| grid::get(grid, pos) == Some(b'X'))
        .map(|pos| {
            (-1 ..= 1).flat_map(|rd| (-1 ..= 1).map(move |cd| (rd, cd)))
                .filter(|&dir| {
                    let mut at = pos;
                    b"MAS".iter().all(|&letter| {
                        at = step(at, dir);
                        grid::get(grid, at) == Some(letter)
                    })
                })
                .count()
        }).sum()
}

fn count_x_mas(grid: &[&[u8]]) -> usize {
    (1 .. grid.len().saturating_sub(1)).flat_map(|ri| {
        (1 .. grid[ri].len() - 1).filter(move |&ci| {
            let diagonal = |a: u8, b: u8| a == b'M' && b == b'S' || a == b'S' && b == b'M';
            grid[ri][ci] == b'A' &&
            diagonal(grid[ri - 1][ci - 1], grid[ri + 1][ci + 1]) &&
            diagonal(grid[ri - 1][ci + 1], grid[ri + 1][ci - 1])
        })
    }).count()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = grid::parse(input);
    Ok(if part == 1 {count_xmas(&grid)} else {count_x_mas(&grid)}.to_string())
}
