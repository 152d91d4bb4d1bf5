pub mod bounds;
pub mod predicate;
pub mod scanner;

pub use bounds::{DigitLength, MAX_DIGIT_LENGTH, MIN_DIGIT_LENGTH, SearchRange};
pub use predicate::{DigitStats, digit_stats, is_quodigious};
pub use scanner::{ScanSummary, Scanner, scan};
