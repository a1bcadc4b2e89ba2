use anyhow::{bail, Result};
use itertools::Itertools;

use crate::grid::{self, Pos, DIRS};

/// Every summit reached by a trail from `pos`, once per distinct trail.
fn summits(map: &[&[u8]], pos: Pos, out: &mut Vec<Pos>) {
    let height = map[pos.0][pos.1];
    if height == b'9' {
        out.push(pos);
        return;
    }
    for dir in DIRS {
        let next = grid::step(pos, dir);
        if grid::get(map, next) == Some(height + 1) {summits(map, next, out)};
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = grid::parse(input);
    if let Some(&bad) = map.iter().flat_map(|row| row.iter()).find(|c| !c.is_ascii_digit()) {
        bail!("unexpected height {:?}", bad as char);
    }

    let mut out = vec![];
    let mut total = 0;
    for (ri, row) in map.iter().enumerate() {
        for ci in row.iter().positions(|&h| h == b'0') {
            out.clear();
            summits(&map, (ri, ci), &mut out);
            total += if part == 1 {out.iter().unique().count()} else {out.len()};
        }
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = indoc! {"
        89010123
        78121874
        87430965
        96549874
        45678903
        32019012
        01329801
        10456732
    "};

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE)?, "36");
        assert_eq!(solve(2, EXAMPLE)?, "81");
        Ok(())
    }

    #[test]
    fn single_trail() -> Result<()> {
        assert_eq!(solve(1, "0123\n1234\n8765\n9876\n")?, "1");
        assert_eq!(solve(2, "0123\n1234\n8765\n9876\n")?, "16");
        Ok(())
    }
}
