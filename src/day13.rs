use anyhow::{ensure, Result};
use regex::Regex;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

fn parse(input: &str) -> Result<Vec<Machine>> {
    let re = Regex::new(concat!(
        r"Button A: X\+(\d+), Y\+(\d+)\s+",
        r"Button B: X\+(\d+), Y\+(\d+)\s+",
        r"Prize: X=(\d+), Y=(\d+)",
    ))?;
    let machines = re.captures_iter(input).map(|m| {
        let n = |i: usize| m[i].parse::<i64>();
        Ok(Machine {a: (n(1)?, n(2)?), b: (n(3)?, n(4)?), prize: (n(5)?, n(6)?)})
    }).collect::<Result<Vec<_>>>()?;
    ensure!(input.matches("Prize").count() == machines.len(), "cannot parse every machine");
    Ok(machines)
}

/// The only way to hit the prize, by Cramer's rule, if it takes whole presses.
fn solve_presses(Machine {a: (ax, ay), b: (bx, by), prize: (x, y)}: Machine) -> Option<(i64, i64)> {
    let det = ax * by - ay * bx;
    if det == 0 {return None};
    let a_num = x * by - y * bx;
    let b_num = ax * y - ay * x;
    if a_num % det != 0 || b_num % det != 0 {return None};
    let (a, b) = (a_num / det, b_num / det);
    (a >= 0 && b >= 0).then_some((a, b))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let offset = if part == 1 {0} else {PRIZE_OFFSET};
    Ok(parse(input)?.into_iter()
        .filter_map(|machine| solve_presses(Machine {
            prize: (machine.prize.0 + offset, machine.prize.1 + offset),
            ..machine
        }))
        .map(|(a, b)| 3 * a + b)
        .sum::<i64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = indoc! {"
        Button A: X+94, Y+34
        Button B: X+22, Y+67
        Prize: X=8400, Y=5400

        Button A: X+26, Y+66
        Button B: X+67, Y+21
        Prize: X=12748, Y=12176

        Button A: X+17, Y+86
        Button B: X+84, Y+37
        Prize: X=7870, Y=6450

        Button A: X+69, Y+23
        Button B: X+27, Y+71
        Prize: X=18641, Y=10279
    "};

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE)?, "480");
        assert_eq!(solve(2, EXAMPLE)?, "875318608908");
        Ok(())
    }

    #[test]
    fn presses() -> Result<()> {
        let machines = parse(EXAMPLE)?;
        assert_eq!(solve_presses(machines[0]), Some((80, 40)));
        assert_eq!(solve_presses(machines[1]), None);
        Ok(())
    }
}
