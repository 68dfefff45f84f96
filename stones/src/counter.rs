use std::collections::HashMap;

use num_bigint::BigUint;

use crate::stone::Stone;

/// Memoized count of the stones a single stone becomes after a number of blinks.
///
/// Entries are never invalidated, so one counter can be reused across several
/// blink targets.
#[derive(Debug, Default)]
pub struct Counter {
    memo: HashMap<(usize, Stone), BigUint>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&mut self, steps: usize, stone: &Stone) -> BigUint {
        if steps == 0 {
            return BigUint::from(1u32);
        }

        let key = (steps, stone.clone());
        if let Some(count) = self.memo.get(&key) {
            return count.clone();
        }

        let total: BigUint = stone
            .blink()
            .into_iter()
            .map(|successor| self.count(steps - 1, &successor))
            .sum();

        self.memo.insert(key, total.clone());
        total
    }

    #[tracing::instrument(level = "debug", skip(self, stones), fields(stones = stones.len()))]
    pub fn total(&mut self, stones: &[Stone], steps: usize) -> BigUint {
        let total: BigUint = stones.iter().map(|stone| self.count(steps, stone)).sum();

        tracing::debug!(cached = self.memo.len(), %total, "counted stones");
        total
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn cached(&self, steps: usize, stone: &Stone) -> Option<&BigUint> {
        self.memo.get(&(steps, stone.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser, stone::Successors};
    use rstest::{fixture, rstest};

    #[fixture]
    fn counter() -> Counter {
        Counter::new()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    #[case(125)]
    #[case(2024)]
    #[case(u128::MAX)]
    fn test_zero_steps_is_one(mut counter: Counter, #[case] value: u128) {
        assert_eq!(BigUint::from(1u32), counter.count(0, &Stone::new(value)));
        assert!(counter.is_empty());
    }

    #[rstest]
    fn test_count_at_least_one(mut counter: Counter) {
        for steps in 0..=30 {
            for value in [0, 1, 9, 10, 99, 125, 1000, 2024, 28676032] {
                assert!(counter.count(steps, &Stone::new(value)) >= BigUint::from(1u32));
            }
        }
    }

    #[rstest]
    fn test_zero_becomes_one(mut counter: Counter) {
        for steps in 1..=40 {
            assert_eq!(
                counter.count(steps - 1, &Stone::new(1)),
                counter.count(steps, &Stone::new(0))
            );
        }
    }

    #[rstest]
    #[case(10)]
    #[case(1234)]
    #[case(253000)]
    #[case(28676032)]
    #[case(9)]
    #[case(125)]
    #[case(2021976)]
    fn test_recurrence(mut counter: Counter, #[case] value: u128) {
        let stone = Stone::new(value);
        for steps in 1..=30 {
            let expected = match stone.blink() {
                Successors::One(next) => counter.count(steps - 1, &next),
                Successors::Two(left, right) => {
                    counter.count(steps - 1, &left) + counter.count(steps - 1, &right)
                }
            };
            assert_eq!(expected, counter.count(steps, &stone));
        }
    }

    #[rstest]
    fn test_odd_digits_multiply(mut counter: Counter) {
        for value in [1u128, 125, 999, 2021976] {
            assert_eq!(
                counter.count(19, &Stone::new(value * 2024)),
                counter.count(20, &Stone::new(value))
            );
        }
    }

    #[rstest]
    fn test_memo_idempotent(mut counter: Counter) {
        let first = counter.count(25, &Stone::new(125));
        let other = counter.cached(24, &Stone::new(253000)).cloned();
        let size = counter.len();

        assert_eq!(first, counter.count(25, &Stone::new(125)));
        assert_eq!(size, counter.len());
        assert_eq!(other, counter.cached(24, &Stone::new(253000)).cloned());
        assert_eq!(Some(&first), counter.cached(25, &Stone::new(125)));
    }

    #[rstest]
    fn test_shared_across_targets(mut counter: Counter) -> miette::Result<()> {
        let stones = parser::parse("125 17")?;
        let short = counter.total(&stones, 25);
        let size = counter.len();
        counter.total(&stones, 75);
        assert!(counter.len() > size);
        assert_eq!(short, counter.total(&stones, 25));
        Ok(())
    }

    #[rstest]
    #[case("125 17", 6, 22)]
    #[case("125 17", 25, 55312)]
    #[case("125 17", 75, 65601038650482)]
    #[case("0", 1, 1)]
    #[case("1", 1, 1)]
    #[case("10", 1, 2)]
    #[case("", 75, 0)]
    #[case("1000000000000000000000000000000000000000", 1, 2)]
    #[case("1000000000000000000000000000000000000", 2, 2)]
    fn test_total(
        mut counter: Counter,
        #[case] input: &str,
        #[case] steps: usize,
        #[case] expected: u64,
    ) -> miette::Result<()> {
        let stones = parser::parse(input)?;
        assert_eq!(BigUint::from(expected), counter.total(&stones, steps));
        Ok(())
    }

    #[rstest]
    fn test_wide_stones_follow_rule(mut counter: Counter) -> miette::Result<()> {
        let stones = parser::parse(
            "9999999999999999999999999999999999999 340282366920938463463374607431768211455",
        )?;
        for steps in 1..=20 {
            let split: BigUint = stones
                .iter()
                .flat_map(|stone| stone.blink())
                .map(|next| counter.count(steps - 1, &next))
                .sum();
            assert_eq!(split, counter.total(&stones, steps));
        }
        Ok(())
    }

    #[test_log::test]
    fn test_total_logged() -> miette::Result<()> {
        let mut counter = Counter::new();
        let stones = parser::parse("0 1 10 99 999")?;
        assert_eq!(BigUint::from(7u32), counter.total(&stones, 1));
        assert_eq!(5, counter.len());
        Ok(())
    }
}
