use anyhow::{bail, Context, Result};
use bitvec::prelude::*;

/// `rules[100 * x + y]` is set when page `x` must be printed before page `y`.
type Rules = BitVec;

fn parse(input: &str) -> Result<(Rules, Vec<Vec<usize>>)> {
    let mut lines = input.trim().lines();
    let mut rules = bitvec![0; 10000];
    for line in lines.by_ref().take_while(|line| !line.trim().is_empty()) {
        let Some((x, y)) = line.split_once('|') else {bail!("cannot parse rule {:?}", line)};
        let (x, y) = (page(x)?, page(y)?);
        rules.set(100 * x + y, true);
    }
    let updates = lines.map(|line|
        line.split(',').map(page).collect::<Result<Vec<_>>>()
    ).collect::<Result<Vec<_>>>()?;
    Ok((rules, updates))
}

fn page(s: &str) -> Result<usize> {
    let n = s.trim().parse::<usize>().with_context(|| format!("bad page number {:?}", s))?;
    if n >= 100 {bail!("page number {} out of range", n)};
    Ok(n)
}

fn is_ordered(rules: &Rules, update: &[usize]) -> bool {
    (0 .. update.len()).all(|x|
        (x + 1 .. update.len()).all(|y| !rules[100 * update[y] + update[x]])
    )
}

/// Repeatedly picks a page no remaining page has to precede.
fn repair(rules: &Rules, update: &[usize]) -> Vec<usize> {
    let mut unsorted = update.to_vec();
    let mut sorted = Vec::with_capacity(unsorted.len());
    while !unsorted.is_empty() {
        let x_at = unsorted.iter().position(|&x|
            unsorted.iter().all(|&y| !rules[100 * y + x])
        ).unwrap_or(0);
        sorted.push(unsorted.remove(x_at));
    }
    sorted
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (rules, updates) = parse(input)?;
    Ok(updates.iter().filter_map(|update| {
        match (part, is_ordered(&rules, update)) {
            (1, true) => Some(update[update.len() / 2]),
            (2, false) => {
                let sorted = repair(&rules, update);
                Some(sorted[sorted.len() / 2])
            },
            _ => None,
        }
    }).sum::<usize>().to_string())
}
