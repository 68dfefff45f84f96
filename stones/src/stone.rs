use std::fmt;

use num_bigint::BigUint;

/// A single engraved stone. Values have no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stone(pub BigUint);

/// The stones a single stone turns into after one blink, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Successors {
    One(Stone),
    Two(Stone, Stone),
}

impl Stone {
    pub const MULTIPLIER: u32 = 2024;

    #[inline(always)]
    pub fn new(value: u128) -> Self {
        Self(BigUint::from(value))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::ZERO
    }

    /// Zero has one digit.
    pub fn digit_count(&self) -> u32 {
        self.0.to_str_radix(10).len() as u32
    }

    pub fn has_even_digits(&self) -> bool {
        !self.is_zero() && self.digit_count() % 2 == 0
    }

    /// The right half drops leading zeros, so `1000` splits into `10` and `0`.
    pub fn split_digits(&self) -> (Stone, Stone) {
        let power = BigUint::from(10u32).pow(self.digit_count() / 2);
        (Stone(&self.0 / &power), Stone(&self.0 % &power))
    }

    pub fn blink(&self) -> Successors {
        if self.is_zero() {
            return Successors::One(Stone::new(1));
        }

        if self.has_even_digits() {
            let (left, right) = self.split_digits();
            return Successors::Two(left, right);
        }

        Successors::One(Stone(&self.0 * Self::MULTIPLIER))
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BigUint> for Stone {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl IntoIterator for Successors {
    type Item = Stone;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Stone>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Successors::One(stone) => [Some(stone), None],
            Successors::Two(left, right) => [Some(left), Some(right)],
        }
        .into_iter()
        .flatten()
    }
}
