use anyhow::{bail, Result};

#[derive(Clone, Copy, Debug)]
struct Span {
    pos: usize,
    len: usize,
}

fn parse(input: &str) -> Result<Vec<usize>> {
    input.trim().bytes().map(|n| match n {
        b'0' ..= b'9' => Ok((n - b'0') as usize),
        _ => bail!("unexpected character {:?} in the disk map", n as char),
    }).collect()
}

/// Moves single blocks from the end into the leftmost gap.
fn compact_blocks(dense: &[usize]) -> usize {
    let mut blocks = Vec::with_capacity(9 * dense.len());
    for (i, &n) in dense.iter().enumerate() {
        let id = if i % 2 == 0 {(i / 2) as i32} else {-1};
        blocks.extend(std::iter::repeat(id).take(n));
    }

    let mut block_iter = blocks.iter_mut();
    loop {
        let Some(left) = block_iter.find(|n| **n == -1) else {break};
        let Some(right) = block_iter.rfind(|n| **n != -1) else {break};
        *left = *right;
        *right = -1;
    }

    blocks.iter().enumerate().filter(|&(_, &id)| id != -1)
          .map(|(pos, &id)| pos * id as usize).sum()
}

/// Moves whole files, highest id first, into the leftmost gap that fits.
fn compact_files(dense: &[usize]) -> usize {
    let mut files = vec![];
    let mut gaps = vec![];
    let mut pos = 0;
    for (i, &len) in dense.iter().enumerate() {
        if i % 2 == 0 {files.push(Span {pos, len})} else if len > 0 {gaps.push(Span {pos, len})};
        pos += len;
    }

    // gaps only ever shrink, so a gap too small for a given size stays too small
    let mut first_fit = [0; 10];
    for file in files.iter_mut().rev().filter(|file| file.len > 0) {
        let gi = &mut first_fit[file.len];
        while *gi < gaps.len() && gaps[*gi].len < file.len {*gi += 1};
        if let Some(gap) = gaps.get_mut(*gi).filter(|gap| gap.pos < file.pos) {
            file.pos = gap.pos;
            gap.pos += file.len;
            gap.len -= file.len;
        }
    }

    files.iter().enumerate().map(|(id, file)|
        (file.pos .. file.pos + file.len).sum::<usize>() * id
    ).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let dense = parse(input)?;
    Ok(if part == 1 {compact_blocks(&dense)} else {compact_files(&dense)}.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, "2333133121414131402\n")?, "1928");
        assert_eq!(solve(2, "2333133121414131402\n")?, "2858");
        Ok(())
    }

    #[test]
    fn small_map() -> Result<()> {
        assert_eq!(solve(1, "12345")?, "60");
        // no gap is ever wide enough for a whole file
        assert_eq!(solve(2, "12345")?, "132");
        Ok(())
    }
}
