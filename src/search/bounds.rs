//! Digit lengths and the half-open ranges scanned for them.

use std::fmt;
use std::ops::Range;

use crate::diagnostics::SearchError;

pub const MIN_DIGIT_LENGTH: u32 = 1;

/// Widest length whose exclusive bound `10^L` still fits in a `u64`.
pub const MAX_DIGIT_LENGTH: u32 = 19;

/// The scan starts at floor(2.2 x 10^(L-1)) rather than 10^(L-1).
///
/// This is a scan-range optimization of unverified origin. Changing it
/// changes which numbers are reported, so it stays fixed.
pub const LOWER_BOUND_NUMERATOR: u128 = 22;
pub const LOWER_BOUND_DENOMINATOR: u128 = 10;

/// Number of decimal digits a candidate must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitLength(u32);

impl DigitLength {
    pub fn new(length: u32) -> Result<Self, SearchError> {
        Self::try_from(u64::from(length))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u64> for DigitLength {
    type Error = SearchError;

    fn try_from(length: u64) -> Result<Self, Self::Error> {
        if (u64::from(MIN_DIGIT_LENGTH)..=u64::from(MAX_DIGIT_LENGTH)).contains(&length) {
            Ok(Self(length as u32))
        } else {
            Err(SearchError::LengthOutOfRange {
                length,
                min: MIN_DIGIT_LENGTH,
                max: MAX_DIGIT_LENGTH,
            })
        }
    }
}

impl fmt::Display for DigitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open interval `[start, end)` of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    pub start: u64,
    pub end: u64,
}

impl SearchRange {
    pub fn new(start: u64, end: u64) -> Result<Self, SearchError> {
        if start > end {
            return Err(SearchError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Bounds for `length`: `[floor(2.2 x 10^(L-1)), 10^L)`, computed exactly.
    pub fn for_length(length: DigitLength) -> Result<Self, SearchError> {
        let exponent = length.get();
        let out_of_range = || SearchError::LengthOutOfRange {
            length: u64::from(exponent),
            min: MIN_DIGIT_LENGTH,
            max: MAX_DIGIT_LENGTH,
        };

        let end = 10u128.checked_pow(exponent).ok_or_else(out_of_range)?;
        let start = 10u128
            .checked_pow(exponent - 1)
            .and_then(|base| base.checked_mul(LOWER_BOUND_NUMERATOR))
            .ok_or_else(out_of_range)?
            / LOWER_BOUND_DENOMINATOR;

        let end = u64::try_from(end).map_err(|_| out_of_range())?;
        let start = u64::try_from(start).map_err(|_| out_of_range())?;
        Self::new(start, end)
    }

    /// Every `length`-digit number: `[10^(L-1), 10^L)`.
    pub fn digit_space(length: DigitLength) -> Result<Self, SearchError> {
        let exponent = length.get();
        let out_of_range = || SearchError::LengthOutOfRange {
            length: u64::from(exponent),
            min: MIN_DIGIT_LENGTH,
            max: MAX_DIGIT_LENGTH,
        };
        let start = 10u64.checked_pow(exponent - 1).ok_or_else(out_of_range)?;
        let end = 10u64.checked_pow(exponent).ok_or_else(out_of_range)?;
        Self::new(start, end)
    }

    /// True if `other` lies entirely inside this range.
    pub fn covers(&self, other: &SearchRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.start..self.end).contains(&value)
    }

    /// Candidates in ascending order.
    pub fn iter(&self) -> Range<u64> {
        self.start..self.end
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
