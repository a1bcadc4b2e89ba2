use anyhow::Result;
use regex::Regex;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut enabled = true;
    let mut total = 0u64;
    for m in Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)")?.captures_iter(input) {
        match &m[0] {
            "do()" => enabled = true,
            "don't()" => if part == 2 {enabled = false},
            _ => if enabled {total += m[1].parse::<u64>()? * m[2].parse::<u64>()?},
        }
    }
    Ok(total.to_string())
}
