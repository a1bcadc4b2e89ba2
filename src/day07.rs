use anyhow::{Context, Result};

struct Equation {
    goal: u64,
    nums: Vec<u64>,
}

fn parse(input: &str) -> Result<Vec<Equation>> {
    input.trim().lines().map(|line| {
        let (goal, nums) = line.split_once(": ").with_context(|| format!("no total in {:?}", line))?;
        Ok(Equation {
            goal: goal.parse()?,
            nums: nums.split_whitespace().map(str::parse).collect::<Result<_, _>>()?,
        })
    }).collect()
}

/// Breadth-first over partial results, dropping anything that already overshot
/// the goal. No operator can bring a positive number back down.
fn solvable(equation: &Equation, concat: bool, bfs: &mut Vec<u64>, new_bfs: &mut Vec<u64>) -> bool {
    let Some((&first, rest)) = equation.nums.split_first() else {return false};
    let goal = equation.goal;
    bfs.clear();
    bfs.push(first);
    for &num in rest {
        let decade = 10u64.checked_pow(num.checked_ilog10().unwrap_or(0) + 1);
        new_bfs.clear();
        for &r in bfs.iter() {
            let joined = decade.filter(|_| concat).and_then(|d| r.checked_mul(d)?.checked_add(num));
            for next in [r.checked_add(num), r.checked_mul(num), joined].into_iter().flatten() {
                if next <= goal {new_bfs.push(next)};
            }
        }
        std::mem::swap(new_bfs, bfs);
    }
    bfs.contains(&goal)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut bfs = Vec::new();
    let mut new_bfs = Vec::new();
    Ok(parse(input)?.iter()
        .filter(|equation| solvable(equation, part > 1, &mut bfs, &mut new_bfs))
        .map(|equation| equation.goal)
        .sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = indoc! {"
        190: 10 19
        3267: 81 40 27
        83: 17 5
        156: 15 6
        7290: 6 8 6 15
        161011: 16 10 13
        192: 17 8 14
        21037: 9 7 18 13
        292: 11 6 16 20
    "};

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE)?, "3749");
        assert_eq!(solve(2, EXAMPLE)?, "11387");
        Ok(())
    }

    #[test]
    fn concatenation_handles_zero_and_powers_of_ten() -> Result<()> {
        assert_eq!(solve(2, "100: 10 0\n1010: 10 10\n")?, "1110");
        Ok(())
    }

    #[test]
    fn huge_operands_do_not_overflow() -> Result<()> {
        let input = "18446744073709551615: 18446744073709551615 2 3\n";
        assert_eq!(solve(1, input)?, "0");
        assert_eq!(solve(2, input)?, "0");
        let input = "18446744073709551615: 1 18446744073709551615\n";
        assert_eq!(solve(1, input)?, "18446744073709551615");
        assert_eq!(solve(2, input)?, "18446744073709551615");
        Ok(())
    }
}
