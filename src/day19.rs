use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

struct Towels<'a> {
    patterns: FxHashSet<&'a [u8]>,
    longest: usize,
}

impl Towels<'_> {
    /// Number of ways to lay out `design`, counted over its suffixes from the right.
    fn arrangements(&self, design: &[u8]) -> u64 {
        let mut ways = vec![0; design.len() + 1];
        ways[design.len()] = 1;
        for start in (0 .. design.len()).rev() {
            ways[start] = (start + 1 ..= (start + self.longest).min(design.len()))
                .filter(|&end| self.patterns.contains(&design[start .. end]))
                .map(|end| ways[end])
                .sum();
        }
        ways[0]
    }
}

fn parse(input: &str) -> Result<(Towels<'_>, Vec<&str>)> {
    let mut lines = input.trim().lines();
    let patterns = lines.next().context("no towel patterns")?
        .split(',').map(str::trim).filter(|p| !p.is_empty()).map(str::as_bytes).collect::<FxHashSet<_>>();
    let longest = patterns.iter().map(|p| p.len()).max().unwrap_or(0);
    let designs = lines.map(str::trim).filter(|line| !line.is_empty()).collect();
    Ok((Towels {patterns, longest}, designs))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (towels, designs) = parse(input)?;
    let ways = designs.iter().map(|design| towels.arrangements(design.as_bytes()));
    Ok(if part == 1 {ways.filter(|&n| n > 0).count() as u64} else {ways.sum()}.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = indoc! {"
        r, wr, b, g, bwu, rb, gb, br

        brwrr
        bggr
        gbbr
        rrbgbr
        ubwu
        bwurrg
        brgr
        bbrwb
    "};

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE)?, "6");
        assert_eq!(solve(2, EXAMPLE)?, "16");
        Ok(())
    }

    #[test]
    fn arrangements_per_design() -> Result<()> {
        let (towels, _) = parse(EXAMPLE)?;
        assert_eq!(towels.arrangements(b"gbbr"), 4);
        assert_eq!(towels.arrangements(b"rrbgbr"), 6);
        assert_eq!(towels.arrangements(b"ubwu"), 0);
        Ok(())
    }

    #[test]
    fn multibyte_stripes() -> Result<()> {
        let input = "a, é\n\naé\néa\néb\n";
        assert_eq!(solve(1, input)?, "2");
        assert_eq!(solve(2, input)?, "2");
        Ok(())
    }
}
