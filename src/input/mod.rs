//! Requested digit lengths, read from whitespace-separated text.
//!
//! Input is consumed one line at a time and tokens are parsed lazily, so a
//! caller can answer each line as it arrives and finish the lengths before a
//! bad token before stopping.

use std::io::BufRead;
use std::ops::Range;

use crate::diagnostics::InputError;
use crate::diagnostics::position::Span;
use crate::search::DigitLength;

/// Line-at-a-time reader that keeps everything read so far.
///
/// Spans of tokens from [`LengthTokens::within`] index into [`text`], so a
/// diagnostic can echo the offending line.
///
/// [`text`]: InputLines::text
#[derive(Debug)]
pub struct InputLines<R> {
    reader: R,
    text: String,
}

impl<R: BufRead> InputLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            text: String::new(),
        }
    }

    /// Blocks until one more line (or EOF) is available. Returns the byte
    /// range of the new line within [`InputLines::text`], or `None` at EOF.
    pub fn read_line(&mut self) -> Result<Option<Range<usize>>, InputError> {
        let start = self.text.len();
        if self.reader.read_line(&mut self.text)? == 0 {
            return Ok(None);
        }
        Ok(Some(start..self.text.len()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One whitespace-delimited token and where it sits in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl Token<'_> {
    pub fn parse_length(&self) -> Result<DigitLength, InputError> {
        let value: u64 = self.text.parse().map_err(|_| InputError::Malformed {
            token: self.text.to_string(),
            span: self.span,
        })?;
        DigitLength::try_from(value).map_err(|source| InputError::OutOfRange {
            token: self.text.to_string(),
            span: self.span,
            source,
        })
    }
}

/// Iterator over the raw tokens of `text`.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::within(text, 0..text.len())
    }

    /// Tokens of `text[range]`, with spans still relative to all of `text`.
    pub fn within(text: &'a str, range: Range<usize>) -> Self {
        let end = range.end.min(text.len());
        Self {
            text,
            pos: range.start.min(end),
            end,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = &self.text.as_bytes()[..self.end];
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(Token {
            text: &self.text[start..self.pos],
            span: Span::new(start, self.pos),
        })
    }
}

/// Parsed digit lengths, in input order.
#[derive(Debug, Clone)]
pub struct LengthTokens<'a> {
    tokens: Tokens<'a>,
}

impl<'a> LengthTokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: Tokens::new(text),
        }
    }

    pub fn within(text: &'a str, range: Range<usize>) -> Self {
        Self {
            tokens: Tokens::within(text, range),
        }
    }
}

impl Iterator for LengthTokens<'_> {
    type Item = Result<DigitLength, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next().map(|token| token.parse_length())
    }
}

/// Parses every token up front; stops at the first bad one.
pub fn parse_lengths(text: &str) -> Result<Vec<DigitLength>, InputError> {
    LengthTokens::new(text).collect()
}
