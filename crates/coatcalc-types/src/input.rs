//! Calculator inputs and their normalization rules.
//!
//! Area and unit counts never fail: anything that is not a positive number
//! falls back to 1. Coats and buffer have a closed range and are rejected
//! when out of range, so callers can report the problem to the user.

use std::convert::Infallible;
use std::str::FromStr;

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::{BufferError, CoatsError};

/// Surface area to cover, in square meters.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Area(f64);

impl Area {
    /// Value used when the input is missing or not a positive number.
    pub const FALLBACK: Self = Self(1.0);

    /// Creates an area, clamping non-positive or non-finite values to 1 m².
    #[must_use]
    pub fn new(square_meters: f64) -> Self {
        if square_meters.is_finite() && square_meters > 0.0 {
            Self(square_meters)
        } else {
            Self::FALLBACK
        }
    }

    /// Parses free-form user input, falling back to 1 m² on anything unusable.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .map_or(Self::FALLBACK, Self::new)
    }

    /// Returns the area in square meters.
    #[must_use]
    pub const fn square_meters(self) -> f64 {
        self.0
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl From<f64> for Area {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl FromStr for Area {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// Number of coats to apply: 1, 2 or 3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Coats(u8);

impl Coats {
    /// A single coat.
    pub const ONE: Self = Self(1);
    /// Two coats.
    pub const TWO: Self = Self(2);
    /// Three coats, the recommended maximum.
    pub const THREE: Self = Self(3);

    /// Creates a coat count.
    ///
    /// # Errors
    ///
    /// Returns an error unless `count` is 1, 2 or 3.
    pub fn new(count: u8) -> Result<Self, CoatsError> {
        match count {
            1..=3 => Ok(Self(count)),
            _ => Err(CoatsError(count.to_string())),
        }
    }

    /// Returns all supported coat counts in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::ONE, Self::TWO, Self::THREE]
    }

    /// Returns the coat count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the coat count as a float multiplier.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Coats {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Coats {
    type Error = CoatsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Coats {
    type Err = CoatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| CoatsError(s.to_string()))
            .and_then(Self::new)
    }
}

/// Safety margin percentage, between 0 and 20 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BufferPercent(f64);

impl BufferPercent {
    /// No buffer.
    pub const ZERO: Self = Self(0.0);

    /// Largest accepted buffer percentage.
    pub const MAX: f64 = 20.0;

    /// Creates a buffer percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or outside `0..=20`.
    pub fn new(percent: f64) -> Result<Self, BufferError> {
        if !percent.is_finite() {
            return Err(BufferError::NotFinite);
        }
        if !(0.0..=Self::MAX).contains(&percent) {
            return Err(BufferError::OutOfRange {
                value: percent,
                max: Self::MAX,
            });
        }
        Ok(Self(percent))
    }

    /// Returns the buffer as a percentage (e.g. `10.0` for 10%).
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// Returns the buffer as a fraction (e.g. `0.1` for 10%).
    #[must_use]
    pub const fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Returns true if no buffer is applied.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for BufferPercent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for BufferPercent {
    type Error = BufferError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for BufferPercent {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        number
            .parse::<f64>()
            .map_err(|_| BufferError::Parse(s.to_string()))
            .and_then(Self::new)
    }
}

/// Number of containers, always at least one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u32")]
pub struct Units(u32);

impl Units {
    /// Value used when the input is missing or not a positive integer.
    pub const FALLBACK: Self = Self(1);

    /// Creates a unit count, clamping anything below 1 up to 1.
    #[must_use]
    pub fn new(count: i64) -> Self {
        if count < 1 {
            Self::FALLBACK
        } else {
            Self(u32::try_from(count).unwrap_or(u32::MAX))
        }
    }

    /// Parses free-form user input, falling back to 1 on anything unusable.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map_or(Self::FALLBACK, Self::new)
    }

    /// Returns the unit count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the unit count as a float multiplier.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl From<i64> for Units {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl FromStr for Units {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}
