use anyhow::{Context, Result};
use itertools::Itertools;

fn is_safe(levels: impl Iterator<Item = i64>) -> bool {
    let mut trend = 0;
    levels.tuple_windows().all(|(x, y)| {
        let diff = y - x;
        if trend == 0 {trend = diff.signum()};
        diff.signum() == trend && (1 ..= 3).contains(&diff.abs())
    })
}

fn is_safe_dampened(report: &[i64]) -> bool {
    is_safe(report.iter().copied()) || (0 .. report.len()).any(|skip|
        is_safe(report.iter().enumerate().filter(|&(i, _)| i != skip).map(|(_, &x)| x))
    )
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let reports = input.trim().lines().map(|line|
        line.split_ascii_whitespace()
            .map(|n| n.parse::<i64>().with_context(|| format!("bad level in {:?}", line)))
            .collect::<Result<Vec<_>>>()
    ).collect::<Result<Vec<_>>>()?;

    Ok(reports.iter().filter(|report|
        if part == 1 {is_safe(report.iter().copied())} else {is_safe_dampened(report)}
    ).count().to_string())
}
