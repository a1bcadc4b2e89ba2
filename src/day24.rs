use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use log::debug;
use regex::Regex;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {And, Or, Xor}

#[derive(Clone, Copy, Debug)]
struct Gate<'a> {
    lhs: &'a str,
    op: Op,
    rhs: &'a str,
    out: &'a str,
}

/// Wire values while evaluating; `None` marks a wire still being evaluated.
type Values<'a> = FxHashMap<&'a str, Option<bool>>;

struct Circuit<'a> {
    initial: Vec<(&'a str, bool)>,
    gates: Vec<Gate<'a>>,
    driver: FxHashMap<&'a str, usize>,
}

fn parse(input: &str) -> Result<Circuit<'_>> {
    let mut lines = input.trim().lines();
    let initial = lines.by_ref().take_while(|line| !line.trim().is_empty()).map(|line| {
        let Some((wire, value)) = line.split_once(": ") else {bail!("cannot parse wire {:?}", line)};
        Ok((wire, match value.trim() {"0" => false, "1" => true, _ => bail!("bad value in {:?}", line)}))
    }).collect::<Result<Vec<_>>>()?;

    let re = Regex::new(r"^(\w+) (AND|OR|XOR) (\w+) -> (\w+)$")?;
    let gates = lines.map(|line| {
        let (_, [lhs, op, rhs, out]) = re.captures(line.trim())
            .with_context(|| format!("cannot parse gate {:?}", line))?.extract();
        let op = match op {"AND" => Op::And, "OR" => Op::Or, _ => Op::Xor};
        Ok(Gate {lhs, op, rhs, out})
    }).collect::<Result<Vec<_>>>()?;

    let driver = gates.iter().enumerate().map(|(i, gate)| (gate.out, i)).collect();
    Ok(Circuit {initial, gates, driver})
}

fn is_input(wire: &str) -> bool {wire.starts_with('x') || wire.starts_with('y')}

fn is_first_bit(gate: &Gate) -> bool {
    [gate.lhs, gate.rhs].iter().all(|wire| wire.ends_with("00") && is_input(wire))
}

impl<'a> Circuit<'a> {
    fn eval(&self, wire: &'a str, values: &mut Values<'a>) -> Option<bool> {
        if let Some(&value) = values.get(wire) {return value};
        let gate = self.gates[*self.driver.get(wire)?];
        values.insert(wire, None);
        let (lhs, rhs) = (self.eval(gate.lhs, values)?, self.eval(gate.rhs, values)?);
        let value = match gate.op {Op::And => lhs & rhs, Op::Or => lhs | rhs, Op::Xor => lhs ^ rhs};
        values.insert(wire, Some(value));
        Some(value)
    }

    /// The number on the `z` wires, or `None` if some of them never settle.
    fn run(&self, inputs: impl IntoIterator<Item = (&'a str, bool)>) -> Option<u64> {
        let mut values = inputs.into_iter().map(|(wire, value)| (wire, Some(value))).collect::<Values>();
        let mut z = 0;
        for gate in &self.gates {
            let Some(bit) = gate.out.strip_prefix('z').and_then(|bit| bit.parse::<u32>().ok()) else {continue};
            if self.eval(gate.out, &mut values)? {z |= 1 << bit};
        }
        Some(z)
    }

    fn add(&self, x: u64, y: u64) -> Option<u64> {
        self.run(self.initial.iter().map(|&(wire, _)| {
            let bit = wire.get(1 ..).and_then(|bit| bit.parse::<u32>().ok()).unwrap_or(u32::MAX);
            let n = if wire.starts_with('x') {x} else {y};
            (wire, n.checked_shr(bit).is_some_and(|n| n & 1 == 1))
        }))
    }

    /// Checks every bit on its own and with a carry running into it.
    fn adds_correctly(&self) -> bool {
        let width = self.initial.iter().filter(|(wire, _)| wire.starts_with('x')).count() as u32;
        let full = (1u64 << width) - 1;
        (0 .. width).all(|i| {
            let bit = 1 << i;
            [(bit, 0), (0, bit), (bit, bit), (full, bit), (full ^ bit, full)].into_iter()
                .all(|(x, y)| self.add(x, y) == Some(x + y))
        })
    }

    /// Gate outputs that break the wiring of a ripple-carry adder.
    fn suspicious_wires(&self) -> Vec<&'a str> {
        let top = self.gates.iter().map(|gate| gate.out).filter(|out| out.starts_with('z')).max();
        let feeds = |out: &str, op: Op| self.gates.iter().any(|gate|
            gate.op == op && (gate.lhs == out || gate.rhs == out)
        );
        self.gates.iter().filter(|gate| {
            let from_inputs = is_input(gate.lhs) && is_input(gate.rhs);
            match gate.op {
                _ if Some(gate.out) == top => gate.op != Op::Or,
                _ if gate.out.starts_with('z') && gate.op != Op::Xor => true,
                Op::Xor if !from_inputs => !gate.out.starts_with('z'),
                Op::Xor => !is_first_bit(gate) && !feeds(gate.out, Op::Xor),
                Op::And => !is_first_bit(gate) && !feeds(gate.out, Op::Or),
                Op::Or => false,
            }
        }).map(|gate| gate.out).sorted().dedup().collect()
    }

    fn swap(&mut self, a: &'a str, b: &'a str) {
        let (Some(&ia), Some(&ib)) = (self.driver.get(a), self.driver.get(b)) else {return};
        self.gates[ia].out = b;
        self.gates[ib].out = a;
        self.driver.insert(a, ib);
        self.driver.insert(b, ia);
    }

    /// Tries every way of pairing up `rest`; on success the swaps stay applied.
    fn pair_up(&mut self, rest: &mut Vec<&'a str>, swaps: &mut Vec<(&'a str, &'a str)>) -> bool {
        let Some(first) = rest.pop() else {return self.adds_correctly()};
        for i in 0 .. rest.len() {
            let other = rest.remove(i);
            self.swap(first, other);
            swaps.push((first, other));
            if self.pair_up(rest, swaps) {return true};
            swaps.pop();
            self.swap(first, other);
            rest.insert(i, other);
        }
        rest.push(first);
        false
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut circuit = parse(input)?;
    if part == 1 {
        let z = circuit.run(circuit.initial.clone()).context("the z wires never settle")?;
        return Ok(z.to_string());
    }

    let suspects = circuit.suspicious_wires();
    debug!("suspicious wires: {:?}", suspects);
    let mut swaps = vec![];
    ensure!(
        circuit.pair_up(&mut suspects.clone(), &mut swaps),
        "no pairing of {:?} makes the circuit add", suspects
    );
    Ok(swaps.iter().flat_map(|&(a, b)| [a, b]).sorted().join(","))
}
