use std::iter::zip;

use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in input.trim().lines() {
        let strs: Vec<&str> = line.split_whitespace().collect();
        let [left, right] = &strs[..] else {bail!("cannot parse {:?} as two numbers", line)};
        lefts.push(left.parse()?);
        rights.push(right.parse()?);
    }
    Ok((lefts, rights))
}

fn total_distance(mut lefts: Vec<i64>, mut rights: Vec<i64>) -> i64 {
    lefts.sort_unstable();
    rights.sort_unstable();
    zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum()
}

fn similarity(lefts: &[i64], rights: &[i64]) -> i64 {
    let mut counts = FxHashMap::default();
    for &right in rights {*counts.entry(right).or_insert(0) += 1};
    lefts.iter().map(|left| left * counts.get(left).copied().unwrap_or(0)).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (lefts, rights) = parse(input)?;
    Ok(if part == 1 {
        total_distance(lefts, rights)
    } else {
        similarity(&lefts, &rights)
    }.to_string())
}
