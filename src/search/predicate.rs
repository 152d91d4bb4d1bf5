//! The quodigious test for a single candidate.

/// Sum and product of a candidate's digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitStats {
    pub sum: u64,
    pub product: u64,
}

impl DigitStats {
    /// Both sum and product are >= 2 here, so the modulo never divides by zero.
    pub fn divides(&self, value: u64) -> bool {
        value % self.sum == 0 && value % self.product == 0
    }
}

/// Peels exactly `length` digits off `value`, least significant first.
///
/// Returns `None` as soon as a digit below 2 shows up; the remaining digits
/// are not visited.
#[inline]
pub fn digit_stats(value: u64, length: u32) -> Option<DigitStats> {
    if length == 0 {
        return None;
    }

    let mut current = value;
    let mut sum = 0u64;
    let mut product = 1u64;

    for _ in 0..length {
        let digit = current % 10;
        if digit < 2 {
            return None;
        }
        sum += digit;
        product *= digit;
        current /= 10;
    }

    Some(DigitStats { sum, product })
}

/// True if every one of the `length` digits of `value` is at least 2 and
/// `value` is divisible by both their sum and their product.
#[inline]
pub fn is_quodigious(value: u64, length: u32) -> bool {
    digit_stats(value, length).is_some_and(|stats| stats.divides(value))
}
