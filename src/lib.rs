pub mod diagnostics;
pub mod input;
pub mod logging;
pub mod search;

use std::io::{BufRead, Write};

use tracing::debug;

use diagnostics::Result;
use input::{InputLines, LengthTokens};
use search::{ScanSummary, Scanner};

/// Scans every length requested on each input line and writes the result
/// blocks to `out`, in input order.
///
/// A line is answered as soon as it is read, without waiting for EOF. On the
/// first bad token the blocks already written stay written and the error is
/// returned; `input.text()` then holds the offending line.
pub fn run<R: BufRead, W: Write>(input: &mut InputLines<R>, out: &mut W) -> Result<Vec<ScanSummary>> {
    let mut summaries = Vec::new();
    while let Some(line) = input.read_line()? {
        debug!(bytes = line.len(), "read input line");
        for length in LengthTokens::within(input.text(), line) {
            let scanner = Scanner::new(length?)?;
            summaries.push(scanner.write_block(out)?);
        }
    }
    Ok(summaries)
}
