use anyhow::{bail, Context, Result};
use regex::Regex;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Computer {
    a: u64,
    b: u64,
    c: u64,
    program: Vec<u8>,
}

fn parse(input: &str) -> Result<Computer> {
    let re = Regex::new(concat!(
        r"Register A: (\d+)\s+Register B: (\d+)\s+Register C: (\d+)\s+",
        r"Program: ([0-7](?:,[0-7])*)",
    ))?;
    let m = re.captures(input).context("cannot parse the computer")?;
    Ok(Computer {
        a: m[1].parse()?,
        b: m[2].parse()?,
        c: m[3].parse()?,
        program: m[4].split(',').map(str::parse).collect::<Result<_, _>>()?,
    })
}

impl Computer {
    fn combo(&self, operand: u8) -> Result<u64> {
        Ok(match operand {
            0 ..= 3 => operand as u64,
            4 => self.a,
            5 => self.b,
            6 => self.c,
            _ => bail!("invalid combo operand {}", operand),
        })
    }

    /// `a / 2^combo`, which runs out of bits past a shift of 63.
    fn divide(&self, operand: u8) -> Result<u64> {
        let shift = self.combo(operand)?;
        Ok(if shift < 64 {self.a >> shift} else {0})
    }

    /// Runs until the instruction pointer leaves the program.
    fn run(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![];
        let mut ip = 0;
        while let [opcode, operand, ..] = self.program[ip.min(self.program.len()) ..] {
            ip += 2;
            match opcode {
                0 => self.a = self.divide(operand)?,
                1 => self.b ^= operand as u64,
                2 => self.b = self.combo(operand)? % 8,
                3 => if self.a != 0 {ip = operand as usize},
                4 => self.b ^= self.c,
                5 => out.push((self.combo(operand)? % 8) as u8),
                6 => self.b = self.divide(operand)?,
                7 => self.c = self.divide(operand)?,
                _ => bail!("invalid opcode {}", opcode),
            }
        }
        Ok(out)
    }

    fn output_with(&self, a: u64) -> Result<Vec<u8>> {
        Computer {a, ..self.clone()}.run()
    }
}

/// Lowest `a` making the program print itself. The program is expected to
/// consume `a` three bits per output, so the answer is built from the last
/// output backwards, three bits at a time.
fn quine(computer: &Computer) -> Result<u64> {
    let program = &computer.program;
    let mut candidates = vec![0];
    for i in (0 .. program.len()).rev() {
        let mut next = vec![];
        for a in candidates {
            for bits in 0 .. 8 {
                let a = a << 3 | bits;
                if computer.output_with(a)? == program[i ..] {next.push(a)};
            }
        }
        candidates = next;
    }
    candidates.into_iter().filter(|&a| a > 0).min().context("no initial value reproduces the program")
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut computer = parse(input)?;
    if part == 1 {
        Ok(computer.run()?.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(","))
    } else {
        Ok(quine(&computer)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn computer(a: u64, b: u64, c: u64, program: &[u8]) -> Computer {
        Computer {a, b, c, program: program.to_vec()}
    }

    #[test]
    fn example() -> Result<()> {
        let example = indoc! {"
            Register A: 729
            Register B: 0
            Register C: 0

            Program: 0,1,5,4,3,0
        "};
        assert_eq!(solve(1, example)?, "4,6,3,5,6,3,5,2,1,0");
        Ok(())
    }

    #[test]
    fn quine_example() -> Result<()> {
        let example = indoc! {"
            Register A: 2024
            Register B: 0
            Register C: 0

            Program: 0,3,5,4,3,0
        "};
        assert_eq!(solve(2, example)?, "117440");
        Ok(())
    }

    #[test]
    fn instructions() -> Result<()> {
        let mut cpu = computer(0, 0, 9, &[2, 6]);
        cpu.run()?;
        assert_eq!(cpu.b, 1);

        assert_eq!(computer(10, 0, 0, &[5, 0, 5, 1, 5, 4]).run()?, vec![0, 1, 2]);

        let mut cpu = computer(2024, 0, 0, &[0, 1, 5, 4, 3, 0]);
        assert_eq!(cpu.run()?, vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
        assert_eq!(cpu.a, 0);

        let mut cpu = computer(0, 29, 0, &[1, 7]);
        cpu.run()?;
        assert_eq!(cpu.b, 26);

        let mut cpu = computer(0, 2024, 43690, &[4, 0]);
        cpu.run()?;
        assert_eq!(cpu.b, 44354);
        Ok(())
    }

    #[test]
    fn reserved_combo_operand_fails() {
        assert!(computer(1, 0, 0, &[5, 7]).run().is_err());
    }
}
