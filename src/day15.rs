use anyhow::{bail, Context, Result};

use crate::grid::{self, Dir, Pos};

fn parse(input: &str, wide: bool) -> Result<(Vec<Vec<u8>>, Pos, Vec<Dir>)> {
    let mut lines = input.trim().lines();
    let mut map = lines.by_ref().take_while(|line| !line.trim().is_empty()).map(|line| {
        line.bytes().flat_map(|cell| match (wide, cell) {
            (false, _) => [cell, 0],
            (true, b'#') => *b"##",
            (true, b'O') => *b"[]",
            (true, b'@') => *b"@.",
            (true, _) => *b"..",
        }).filter(|&cell| cell != 0).collect::<Vec<_>>()
    }).collect::<Vec<_>>();

    let robot = grid::find(&map, b'@').context("no robot in the warehouse")?;
    map[robot.0][robot.1] = b'.';

    let moves = lines.flat_map(str::bytes).map(|m| Ok(match m {
        b'^' => (-1, 0), b'>' => (0, 1), b'v' => (1, 0), b'<' => (0, -1),
        _ => bail!("unexpected move {:?}", m as char),
    })).collect::<Result<Vec<_>>>()?;
    Ok((map, robot, moves))
}

/// Moves the robot and everything it pushes one step, unless something hits a wall.
fn push(map: &mut [Vec<u8>], robot: Pos, dir: Dir) -> Pos {
    let mut moving = vec![robot];
    let mut i = 0;
    while i < moving.len() {
        let next = grid::step(moving[i], dir);
        i += 1;
        let mut also = |pos: Pos| if !moving.contains(&pos) {moving.push(pos)};
        match grid::get(map, next) {
            None | Some(b'#') => return robot,
            Some(b'O') => also(next),
            Some(b'[') => {also(next); also(grid::step(next, (0, 1)))},
            Some(b']') => {also(next); also(grid::step(next, (0, -1)))},
            Some(_) => (),
        }
    }
    for &pos in moving.iter().rev() {
        let to = grid::step(pos, dir);
        map[to.0][to.1] = map[pos.0][pos.1];
        map[pos.0][pos.1] = b'.';
    }
    grid::step(robot, dir)
}

fn gps_sum(map: &[Vec<u8>]) -> usize {
    map.iter().enumerate().flat_map(|(ri, row)|
        row.iter().enumerate().filter(|&(_, &cell)| cell == b'O' || cell == b'[').map(move |(ci, _)| 100 * ri + ci)
    ).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (mut map, mut robot, moves) = parse(input, part == 2)?;
    for dir in moves {robot = push(&mut map, robot, dir)};
    Ok(gps_sum(&map).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_example() -> Result<()> {
        let example = indoc! {"
            ########
            #..O.O.#
            ##@.O..#
            #...O..#
            #.#.O..#
            #...O..#
            #......#
            ########

            <^^>>>vv<v>>v<<
        "};
        assert_eq!(solve(1, example)?, "2028");
        Ok(())
    }

    #[test]
    fn larger_example() -> Result<()> {
        let example = indoc! {"
            ##########
            #..O..O.O#
            #......O.#
            #.OO..O.O#
            #..O@..O.#
            #O#..O...#
            #O..O..O.#
            #.OO.O.OO#
            #....O...#
            ##########

            <vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
            vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
            ><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
            <<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
            ^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
            ^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
            >^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
            <><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
            ^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
            v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
        "};
        assert_eq!(solve(1, example)?, "10092");
        assert_eq!(solve(2, example)?, "9021");
        Ok(())
    }

    #[test]
    fn wide_boxes_push_together() -> Result<()> {
        let example = indoc! {"
            #######
            #...#.#
            #.....#
            #..OO@#
            #..O..#
            #.....#
            #######

            <vv<<^^<<^^
        "};
        let (mut map, mut robot, moves) = parse(example, true)?;
        for dir in moves {robot = push(&mut map, robot, dir)};
        map[robot.0][robot.1] = b'@';
        let expected = indoc! {"
            ##############
            ##...[].##..##
            ##...@.[]...##
            ##....[]....##
            ##..........##
            ##..........##
            ##############
        "};
        assert_eq!(map.iter().map(|row| String::from_utf8_lossy(row) + "\n").collect::<String>(), expected);
        assert_eq!(solve(2, example)?, "618");
        Ok(())
    }
}
