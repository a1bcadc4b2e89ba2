//! Byte-grid helpers shared by the map puzzles.
//!
//! Positions are `(row, column)` pairs. Stepping off the top or left edge wraps
//! around to a huge index, so every out-of-range position is caught by the same
//! bounds check in [`get`].

pub type Pos = (usize, usize);
pub type Dir = (isize, isize);

/// Up, right, down, left - turning right is `+ 1`, turning left is `+ 3`.
pub const DIRS: [Dir; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

pub fn parse(input: &str) -> Vec<&[u8]> {
    input.trim().lines().map(str::as_bytes).collect()
}

pub fn find<R: AsRef<[u8]>>(grid: &[R], cell: u8) -> Option<Pos> {
    grid.iter().enumerate().find_map(|(ri, row)|
        row.as_ref().iter().position(|&x| x == cell).map(|ci| (ri, ci))
    )
}

pub fn get<R: AsRef<[u8]>>(grid: &[R], (ri, ci): Pos) -> Option<u8> {
    grid.get(ri).and_then(|row| row.as_ref().get(ci)).copied()
}

pub fn step((ri, ci): Pos, (rd, cd): Dir) -> Pos {
    (ri.wrapping_add_signed(rd), ci.wrapping_add_signed(cd))
}

/// Distance of every cell reachable from `start` through cells satisfying `passable`.
pub fn bfs<R: AsRef<[u8]>>(
    grid: &[R], start: Pos, passable: impl Fn(u8) -> bool
) -> Vec<Vec<Option<usize>>> {
    let mut dist = grid.iter().map(|row| vec![None; row.as_ref().len()]).collect::<Vec<_>>();
    let mut curr = vec![start];
    let mut next = vec![];
    dist[start.0][start.1] = Some(0);
    for d in 1 .. {
        for &pos in &curr {
            for dir in DIRS {
                let npos @ (nri, nci) = step(pos, dir);
                if get(grid, npos).is_some_and(&passable) && dist[nri][nci].is_none() {
                    dist[nri][nci] = Some(d);
                    next.push(npos);
                }
            }
        }
        if next.is_empty() {break};
        curr.clear();
        std::mem::swap(&mut curr, &mut next);
    }
    dist
}
