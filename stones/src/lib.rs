pub mod counter;
pub mod error;
pub mod frequency;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod sequence;
pub mod stone;

use counter::Counter;
use itertools::Itertools;
use miette::Context;

/// Blink counts reported by the `blink` binary, in output order.
pub const BLINK_TARGETS: [usize; 2] = [25, 75];

#[tracing::instrument]
pub fn process(input: &str, blinks: usize) -> miette::Result<String> {
    let stones = parser::parse(input)?;
    Ok(Counter::new().total(&stones, blinks).to_string())
}

/// One output line per entry of [`BLINK_TARGETS`], all counted with a single memo.
#[tracing::instrument]
pub fn run(input: &str) -> miette::Result<String> {
    let stones = parser::parse(input).context("parse stones")?;
    tracing::info!(stones = stones.len(), "read stones");

    let mut counter = Counter::new();
    let totals = BLINK_TARGETS
        .iter()
        .map(|&blinks| counter.total(&stones, blinks))
        .collect_vec();
    tracing::debug!(cached = counter.len(), "memo size");

    Ok(totals.iter().join("\n"))
}
