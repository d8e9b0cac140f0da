use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Sub},
    str::FromStr,
};

use crate::loader_error::LoaderError;

const SCALE: i64 = 1000;
const MAX_MILLI: i64 = 1_000_000 * SCALE;
const MAX_UNITS: f64 = (MAX_MILLI / SCALE) as f64;

/// A weight held as whole thousandths of the active unit, so catalog
/// fractions like 0.25 and 1.25 stay exact under repeated subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Weight(i64);

impl Weight {
    pub const ZERO: Weight = Weight(0);
    /// Heaviest weight anything will load or parse.
    pub const MAX: Weight = Weight(MAX_MILLI);

    #[must_use]
    pub const fn from_milli(milli: i64) -> Self {
        Weight(milli)
    }

    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Weight(units * SCALE)
    }

    /// Rounds to the nearest thousandth. Non-finite input, and anything no
    /// bar could hold, has no weight.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        (value.is_finite() && value.abs() <= MAX_UNITS)
            .then(|| Weight((value * SCALE as f64).round() as i64))
    }

    #[must_use]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Weight(self.0.saturating_sub(rhs.0))
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0 + rhs.0)
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(self, rhs: Self) -> Self::Output {
        Weight(self.0 - rhs.0)
    }
}

impl Mul<i64> for Weight {
    type Output = Weight;

    fn mul(self, rhs: i64) -> Self::Output {
        Weight(self.0 * rhs)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, weight| acc + weight)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let (whole, fraction) = (magnitude / SCALE as u64, magnitude % SCALE as u64);

        if fraction == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let fraction = format!("{fraction:03}");
            write!(f, "{sign}{whole}.{}", fraction.trim_end_matches('0'))
        }
    }
}

impl FromStr for Weight {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Weight::from_f64)
            .ok_or_else(|| LoaderError::InvalidWeight(trimmed.to_string()))
    }
}
