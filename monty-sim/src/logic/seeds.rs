use anyhow::{Result, bail};
use monty_game::DEFAULT_SEED;
use std::collections::HashSet;

/// Resolve CLI seed tokens into a deduplicated list of numeric seeds.
///
/// Accepts unsigned integers, signed integers (by magnitude) and `0x`-prefixed
/// hex. Falls back to [`DEFAULT_SEED`] when nothing usable is given.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let Some(seed) = parse_seed_token(token) else {
            bail!("Unrecognized seed token: {token}");
        };
        if seen.insert(seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

fn parse_seed_token(token: &str) -> Option<u64> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u64::from_str_radix(&hex.replace('_', ""), 16).ok();
    }
    if let Ok(value) = token.parse::<u64>() {
        return Some(value);
    }
    token.parse::<i64>().ok().map(i64::unsigned_abs)
}
