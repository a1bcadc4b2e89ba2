use anyhow::{bail, ensure, Result};
use log::debug;
use regex::Regex;

const WIDTH: i64 = 101;
const HEIGHT: i64 = 103;

#[derive(Clone, Copy, Debug)]
struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

fn parse(input: &str) -> Result<Vec<Robot>> {
    let re = Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)")?;
    input.trim().lines().map(|line| {
        let Some(m) = re.captures(line) else {bail!("cannot parse robot {:?}", line)};
        let n = |i: usize| m[i].parse::<i64>();
        Ok(Robot {pos: (n(1)?, n(2)?), vel: (n(3)?, n(4)?)})
    }).collect()
}

fn position_after(robot: &Robot, seconds: i64, (width, height): (i64, i64)) -> (i64, i64) {
    (
        (robot.pos.0 + robot.vel.0 * seconds).rem_euclid(width),
        (robot.pos.1 + robot.vel.1 * seconds).rem_euclid(height),
    )
}

/// Product of the robot counts per quadrant; robots on a middle line count for none.
fn safety_factor(positions: &[(i64, i64)], (width, height): (i64, i64)) -> usize {
    let mut quadrants = [0; 4];
    for &(x, y) in positions {
        if x == width / 2 || y == height / 2 {continue};
        quadrants[(x > width / 2) as usize + 2 * (y > height / 2) as usize] += 1;
    }
    quadrants.iter().product()
}

fn render(positions: &[(i64, i64)], (width, height): (i64, i64)) -> String {
    let mut picture = vec![vec![b'.'; width as usize]; height as usize];
    for &(x, y) in positions {picture[y as usize][x as usize] = b'#'};
    picture.into_iter().map(|row| String::from_utf8_lossy(&row).into_owned()).collect::<Vec<_>>().join("\n")
}

/// The earliest second in a full cycle where the robots huddle together the most,
/// which is when they draw the picture.
fn most_clustered(robots: &[Robot], size: (i64, i64)) -> i64 {
    let mut best = (usize::MAX, 0);
    for seconds in 0 .. size.0 * size.1 {
        let positions = robots.iter().map(|robot| position_after(robot, seconds, size)).collect::<Vec<_>>();
        best = best.min((safety_factor(&positions, size), seconds));
    }
    let positions = robots.iter().map(|robot| position_after(robot, best.1, size)).collect::<Vec<_>>();
    debug!("after {} seconds:\n{}", best.1, render(&positions, size));
    best.1
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = parse(input)?;
    ensure!(!robots.is_empty(), "no robots");
    let size = (WIDTH, HEIGHT);
    Ok(if part == 1 {
        let positions = robots.iter().map(|robot| position_after(robot, 100, size)).collect::<Vec<_>>();
        safety_factor(&positions, size) as i64
    } else {
        most_clustered(&robots, size)
    }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = indoc! {"
        p=0,4 v=3,-3
        p=6,3 v=-1,-3
        p=10,3 v=-1,2
        p=2,0 v=2,-1
        p=0,0 v=1,3
        p=3,0 v=-2,-2
        p=7,6 v=-1,-3
        p=3,0 v=-1,-2
        p=9,3 v=2,3
        p=7,3 v=-1,2
        p=2,4 v=2,-3
        p=9,5 v=-3,-3
    "};

    #[test]
    fn example_safety_factor() -> Result<()> {
        let robots = parse(EXAMPLE)?;
        let positions = robots.iter().map(|robot| position_after(robot, 100, (11, 7))).collect::<Vec<_>>();
        assert_eq!(safety_factor(&positions, (11, 7)), 12);
        Ok(())
    }

    #[test]
    fn teleports_around_edges() {
        let robot = Robot {pos: (2, 4), vel: (2, -3)};
        assert_eq!(position_after(&robot, 5, (11, 7)), (1, 3));
    }

    #[test]
    fn finds_first_empty_quadrant() -> Result<()> {
        let robots = parse("p=1,1 v=0,0\np=9,1 v=0,0\np=1,5 v=0,0\np=9,5 v=1,0\n")?;
        assert_eq!(most_clustered(&robots, (11, 7)), 2);
        Ok(())
    }
}
