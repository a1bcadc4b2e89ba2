use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

type Stones = FxHashMap<u64, u64>;

fn blink_once(stones: &Stones) -> Stones {
    let mut next = Stones::default();
    for (&stone, &count) in stones {
        let digits = stone.checked_ilog10().map_or(1, |d| d + 1);
        if stone == 0 {
            *next.entry(1).or_default() += count;
        } else if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            *next.entry(stone / half).or_default() += count;
            *next.entry(stone % half).or_default() += count;
        } else {
            *next.entry(stone * 2024).or_default() += count;
        }
    }
    next
}

fn blink(mut stones: Stones, times: usize) -> u64 {
    for _ in 0 .. times {stones = blink_once(&stones)};
    stones.values().sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut stones = Stones::default();
    for n in input.split_whitespace() {
        *stones.entry(n.parse().with_context(|| format!("bad stone {:?}", n))?).or_default() += 1;
    }
    Ok(blink(stones, if part == 1 {25} else {75}).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, "125 17\n")?, "55312");
        assert_eq!(solve(2, "125 17\n")?, "65601038650482");
        Ok(())
    }

    #[test]
    fn short_blinks() {
        let stones = Stones::from_iter([(125, 1), (17, 1)]);
        assert_eq!(blink(stones.clone(), 1), 3);
        assert_eq!(blink(stones, 6), 22);
        // 1000 splits into 10 and 0
        assert_eq!(blink_once(&Stones::from_iter([(1000, 1)])), Stones::from_iter([(10, 1), (0, 1)]));
    }
}
