//! Single-pass key/value pair scanner.
//!
//! Walks an input once and reports the byte ranges of the key and value of
//! every pair, without allocating. Within a pair the first value delimiter
//! separates key from value; any later value delimiters belong to the value.
//!
//! ```rust
//! use typed_path_template::pairs::collect_pairs;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pairs = collect_pairs("k=v=a|k1==v1", '|', '=')?;
//!     assert_eq!(pairs, vec![("k", "v=a"), ("k1", "=v1")]);
//!     Ok(())
//! }
//! ```

use crate::error::{ScanError, ScanResult};
use log::trace;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Byte ranges of one key/value pair within the scanned input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSpan {
    pub key: Range<usize>,
    pub value: Range<usize>,
}

impl PairSpan {
    /// Slice the key out of the scanned input.
    ///
    /// # Panics
    ///
    /// Panics if `input` is not the string that was scanned and the range is
    /// out of bounds or splits a character.
    pub fn key_in<'a>(&self, input: &'a str) -> &'a str {
        &input[self.key.clone()]
    }

    /// Slice the value out of the scanned input.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`key_in`](Self::key_in).
    pub fn value_in<'a>(&self, input: &'a str) -> &'a str {
        &input[self.value.clone()]
    }
}

/// Scan `input` for pairs, calling `on_pair` for each well-formed one.
///
/// Every well-formed pair preceding a malformed one is delivered before the
/// error is returned. Empty input is a no-op.
///
/// # Errors
///
/// * [`ScanError::InvalidArgument`] if both delimiters are the same
/// * [`ScanError::MalformedInput`] if a pair has no value delimiter, either
///   before a pair delimiter or before the end of input
pub fn scan_pairs<F>(
    input: &str,
    pair_delimiter: char,
    value_delimiter: char,
    mut on_pair: F,
) -> ScanResult<()>
where
    F: FnMut(PairSpan),
{
    if pair_delimiter == value_delimiter {
        return Err(ScanError::invalid_argument(
            "key/value delimiter is the same as pair delimiter",
        ));
    }
    if input.is_empty() {
        return Ok(());
    }

    let mut pair_start = 0;
    let mut value_delimiter_at: Option<usize> = None;
    for (position, ch) in input.char_indices() {
        if ch == value_delimiter && value_delimiter_at.is_none() {
            value_delimiter_at = Some(position);
        }
        if ch == pair_delimiter {
            let split = value_delimiter_at.ok_or(ScanError::malformed(position))?;
            on_pair(PairSpan {
                key: pair_start..split,
                value: split + value_delimiter.len_utf8()..position,
            });
            pair_start = position + pair_delimiter.len_utf8();
            value_delimiter_at = None;
        }
    }

    let split = value_delimiter_at.ok_or(ScanError::malformed(input.len()))?;
    on_pair(PairSpan {
        key: pair_start..split,
        value: split + value_delimiter.len_utf8()..input.len(),
    });
    Ok(())
}

/// Scan `input` and collect the pairs as string slices.
pub fn collect_pairs(
    input: &str,
    pair_delimiter: char,
    value_delimiter: char,
) -> ScanResult<Vec<(&str, &str)>> {
    let mut pairs = Vec::new();
    scan_pairs(input, pair_delimiter, value_delimiter, |span| {
        pairs.push((span.key_in(input), span.value_in(input)));
    })?;
    trace!("Collected {} pairs", pairs.len());
    Ok(pairs)
}

/// Delimiter configuration for the pair scanner.
///
/// Defaults to `|` between pairs and `=` between key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairScanner {
    pub pair_delimiter: char,
    pub value_delimiter: char,
}

impl Default for PairScanner {
    fn default() -> Self {
        Self {
            pair_delimiter: '|',
            value_delimiter: '=',
        }
    }
}

impl PairScanner {
    /// Create a scanner, rejecting identical delimiters.
    pub fn new(pair_delimiter: char, value_delimiter: char) -> ScanResult<Self> {
        let scanner = Self {
            pair_delimiter,
            value_delimiter,
        };
        scanner.validate()?;
        Ok(scanner)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ScanResult<()> {
        if self.pair_delimiter == self.value_delimiter {
            return Err(ScanError::invalid_argument(
                "key/value delimiter is the same as pair delimiter",
            ));
        }
        Ok(())
    }

    /// Scan `input` with this configuration.
    pub fn scan<F>(&self, input: &str, on_pair: F) -> ScanResult<()>
    where
        F: FnMut(PairSpan),
    {
        scan_pairs(input, self.pair_delimiter, self.value_delimiter, on_pair)
    }

    /// Scan `input` with this configuration and collect the pairs.
    pub fn collect<'a>(&self, input: &'a str) -> ScanResult<Vec<(&'a str, &'a str)>> {
        collect_pairs(input, self.pair_delimiter, self.value_delimiter)
    }
}
