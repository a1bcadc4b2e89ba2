use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

mod grid;

mod day01; mod day02; mod day03; mod day04; mod day05; mod day06;
mod day07; mod day08; mod day09; mod day10; mod day11; mod day12;
mod day13; mod day14; mod day15; mod day16; mod day17; mod day18;
mod day19; mod day20; mod day21; mod day22; mod day23; mod day24;

/// Solutions to the 2024 puzzles, one day at a time
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Day number
    #[arg(value_parser = clap::value_parser!(u8).range(1..=24))]
    day: u8,

    /// Part to run, both if omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Run on the n-th example input (`day{DAY}test{N}.in`) instead of `day{DAY}.in`
    #[arg(short, long)]
    test: Option<u32>,

    /// Directory holding the input files
    #[arg(short, long, env = "AOC_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let days: [fn(u8, &str) -> Result<String>; 24] = [
        day01::solve, day02::solve, day03::solve, day04::solve, day05::solve, day06::solve,
        day07::solve, day08::solve, day09::solve, day10::solve, day11::solve, day12::solve,
        day13::solve, day14::solve, day15::solve, day16::solve, day17::solve, day18::solve,
        day19::solve, day20::solve, day21::solve, day22::solve, day23::solve, day24::solve,
    ];

    let args = Args::parse();
    let fname = match args.test {
        None => format!("day{}.in", args.day),
        Some(test) => format!("day{}test{}.in", args.day, test),
    };
    let path = args.input_dir.join(fname);
    debug!("reading input from {}", path.display());
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let parts = match args.part {Some(part) => part ..= part, None => 1 ..= 2};
    for part in parts {
        let time = std::time::Instant::now();
        let answer = days[args.day as usize - 1](part, &input)
            .with_context(|| format!("day {} part {} failed", args.day, part))?;
        println!("{}", answer);
        println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    }
    Ok(())
}
