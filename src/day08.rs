use anyhow::{bail, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut freqs: FxHashMap<u8, Vec<(isize, isize)>> = FxHashMap::default();
    for (ri, line) in input.trim().lines().enumerate() {
        for (ci, &cell) in line.as_bytes().iter().enumerate() {
            match cell {
                b'0' ..= b'9' | b'A' ..= b'Z' | b'a' ..= b'z' =>
                    freqs.entry(cell).or_default().push((ri as isize, ci as isize)),
                b'.' => (),
                _ => bail!("unexpected character {:?} at ({}, {})", cell as char, ri, ci),
            }
        }
    }
    let rows = input.trim().lines().count() as isize;
    let cols = input.trim().lines().next().map_or(0, str::len) as isize;
    let in_bounds = move |(r, c): (isize, isize)| (0 .. rows).contains(&r) && (0 .. cols).contains(&c);

    Ok(freqs.values().flat_map(move |antennas|
        antennas.iter().tuple_combinations().flat_map(move |(&(ri, ci), &(rj, cj))| {
            let (dr, dc) = (ri - rj, ci - cj);
            let multiples = if part == 1 {1 ..= 1} else {0 ..= isize::MAX};
            let outward = multiples.clone()
                .map(move |n| (ri + n * dr, ci + n * dc))
                .take_while(move |&at| in_bounds(at));
            let inward = multiples
                .map(move |n| (rj - n * dr, cj - n * dc))
                .take_while(move |&at| in_bounds(at));
            outward.chain(inward)
        })
    ).unique().count().to_string())
}
