use std::collections::HashMap;

use num_bigint::BigUint;

use crate::{parser, stone::Stone};

/// How many copies of each stone value are in the row.
///
/// Row order never affects the count, so stones with equal values are blinked once
/// and their multiplicity carried forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoneCounts {
    counts: HashMap<Stone, BigUint>,
    blinks: usize,
}

impl StoneCounts {
    pub fn from_stones(stones: &[Stone]) -> Self {
        let mut counts: HashMap<Stone, BigUint> = HashMap::new();
        for stone in stones {
            *counts.entry(stone.clone()).or_default() += 1u32;
        }
        Self { counts, blinks: 0 }
    }

    pub fn blink(&self) -> Self {
        let mut next: HashMap<Stone, BigUint> = HashMap::with_capacity(self.counts.len() * 2);
        for (stone, count) in &self.counts {
            for successor in stone.blink() {
                *next.entry(successor).or_default() += count;
            }
        }
        Self {
            counts: next,
            blinks: self.blinks + 1,
        }
    }

    pub fn total(&self) -> BigUint {
        self.counts.values().sum()
    }

    pub fn blinks(&self) -> usize {
        self.blinks
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, stone: &Stone) -> BigUint {
        self.counts.get(stone).cloned().unwrap_or_default()
    }
}

pub fn count_after(stones: &[Stone], blinks: usize) -> BigUint {
    let mut counts = StoneCounts::from_stones(stones);
    for _ in 0..blinks {
        counts = counts.blink();
        tracing::trace!(
            blink = counts.blinks(),
            distinct = counts.distinct(),
            "blinked"
        );
    }
    counts.total()
}

#[tracing::instrument]
pub fn process(input: &str, blinks: usize) -> miette::Result<String> {
    let stones = parser::parse(input)?;
    Ok(count_after(&stones, blinks).to_string())
}
