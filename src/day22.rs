use anyhow::{Context, Result};
use bitvec::prelude::*;

const PRUNE: u64 = 16777216;
const ROUNDS: usize = 2000;
/// Four price changes in `-9 ..= 9`, packed base 19.
const SEQUENCES: usize = 19 * 19 * 19 * 19;

fn next_secret(mut secret: u64) -> u64 {
    secret = (secret ^ secret * 64) % PRUNE;
    secret = (secret ^ secret / 32) % PRUNE;
    (secret ^ secret * 2048) % PRUNE
}

fn nth_secret(secret: u64, n: usize) -> u64 {
    (0 .. n).fold(secret, |secret, _| next_secret(secret))
}

/// Adds what each buyer pays for every change sequence, at its first occurrence only.
fn most_bananas(secrets: &[u64]) -> u64 {
    let mut bananas = vec![0; SEQUENCES];
    let mut seen = bitvec![0; SEQUENCES];
    for &secret in secrets {
        seen.fill(false);
        let mut secret = secret;
        let mut key = 0;
        for round in 0 .. ROUNDS {
            let next = next_secret(secret);
            let price = next % 10;
            key = (key * 19 + (price + 9 - secret % 10) as usize) % SEQUENCES;
            secret = next;
            if round >= 3 && !seen.replace(key, true) {bananas[key] += price};
        }
    }
    bananas.into_iter().max().unwrap_or(0)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let secrets = input.split_whitespace()
        .map(|n| n.parse::<u64>().with_context(|| format!("bad secret {:?}", n)))
        .collect::<Result<Vec<_>>>()?;
    Ok(if part == 1 {
        secrets.iter().map(|&secret| nth_secret(secret, ROUNDS)).sum()
    } else {
        most_bananas(&secrets)
    }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn example() -> Result<()> {
        assert_eq!(solve(1, "1\n10\n100\n2024\n")?, "37327623");
        assert_eq!(solve(2, "1\n2\n3\n2024\n")?, "23");
        Ok(())
    }

    #[test]
    fn secret_sequence() {
        let secrets = std::iter::successors(Some(123), |&s| Some(next_secret(s))).skip(1).take(3).collect::<Vec<_>>();
        assert_eq!(secrets, vec![15887950, 16495136, 527345]);
        assert_eq!(nth_secret(1, 2000), 8685429);
    }
}
