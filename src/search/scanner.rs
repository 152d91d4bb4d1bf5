//! Linear scan of one digit length's search range.

use std::io::Write;
use std::ops::Range;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::bounds::{DigitLength, SearchRange};
use super::predicate::is_quodigious;
use crate::diagnostics::SearchError;

/// Outcome of one finished block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub length: DigitLength,
    pub range: SearchRange,
    pub matches: usize,
    pub elapsed: Duration,
}

/// Yields the quodigious numbers of one length in ascending order.
///
/// Every candidate in the range is visited; there is no early exit.
#[derive(Debug, Clone)]
pub struct Scanner {
    length: DigitLength,
    range: SearchRange,
    cursor: Range<u64>,
}

impl Scanner {
    pub fn new(length: DigitLength) -> Result<Self, SearchError> {
        let range = SearchRange::for_length(length)?;
        Self::with_range(length, range)
    }

    /// Scans an explicit range instead of the length's default bounds.
    ///
    /// The predicate only looks at the low `length` digits, so the range must
    /// stay inside `[10^(L-1), 10^L)`.
    pub fn with_range(length: DigitLength, range: SearchRange) -> Result<Self, SearchError> {
        let space = SearchRange::digit_space(length)?;
        if !space.covers(&range) {
            return Err(SearchError::RangeOutsideLength {
                start: range.start,
                end: range.end,
                length: length.get(),
            });
        }
        Ok(Self {
            length,
            range,
            cursor: range.iter(),
        })
    }

    pub fn length(&self) -> DigitLength {
        self.length
    }

    pub fn range(&self) -> SearchRange {
        self.range
    }

    /// Writes each match on its own line as soon as it is found, then the
    /// blank separator line, then flushes.
    pub fn write_block<W: Write>(self, out: &mut W) -> Result<ScanSummary, SearchError> {
        let started = Instant::now();
        let length = self.length;
        let range = self.range;
        let mut matches = 0usize;

        for value in self {
            trace!(length = length.get(), value, "match");
            writeln!(out, "{value}")?;
            matches += 1;
        }
        writeln!(out)?;
        out.flush()?;

        let summary = ScanSummary {
            length,
            range,
            matches,
            elapsed: started.elapsed(),
        };
        debug!(
            length = length.get(),
            range = %range,
            matches,
            elapsed = ?summary.elapsed,
            "block finished"
        );
        Ok(summary)
    }
}

impl Iterator for Scanner {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let length = self.length.get();
        self.cursor.find(|&value| is_quodigious(value, length))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursor.size_hint().1)
    }
}

/// Collects every match for `length`.
pub fn scan(length: DigitLength) -> Result<Vec<u64>, SearchError> {
    Ok(Scanner::new(length)?.collect())
}
