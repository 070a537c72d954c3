//! Run-length unary encoding of binary strings.
//!
//! A binary string is split into maximal runs of identical bits. Each run is
//! written as a token: a marker block followed by a run block.
//!
//! # Token Format
//!
//! ```text
//! <marker> <run>
//!
//! marker  "0"  -> the run is made of '1' bits
//!         "00" -> the run is made of '0' bits
//! run     '0' repeated once per bit in the run
//! ```
//!
//! Tokens, and the two blocks inside a token, are separated by a single
//! space. No other whitespace is a separator.
//!
//! # Example
//!
//! `1000011` ("C") has runs `1`, `0000`, `11`:
//!
//! ```text
//! 0 0   00 0000   0 00
//! ```

use std::fmt;

use crate::binary::CODE_UNIT_BITS;
use crate::error::ValidationError;

/// The only recognised block separator.
pub const SEPARATOR: char = ' ';

/// Marks which bit value a run is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Written `0`; the run is made of `1` bits
    Ones,
    /// Written `00`; the run is made of `0` bits
    Zeros,
}

impl Marker {
    /// Marker for a run of the given binary digit.
    ///
    /// `'1'` maps to [`Marker::Ones`]; every other character to
    /// [`Marker::Zeros`].
    pub fn for_bit(bit: char) -> Self {
        if bit == '1' {
            Marker::Ones
        } else {
            Marker::Zeros
        }
    }

    /// Parse a marker block. Only `"0"` and `"00"` are markers.
    pub fn parse(block: &str) -> Option<Self> {
        match block {
            "0" => Some(Marker::Ones),
            "00" => Some(Marker::Zeros),
            _ => None,
        }
    }

    /// The marker block as written in an encoded string.
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Ones => "0",
            Marker::Zeros => "00",
        }
    }

    /// The binary digit this marker stands for.
    pub fn bit(self) -> char {
        match self {
            Marker::Ones => '1',
            Marker::Zeros => '0',
        }
    }
}

/// One maximal run of identical bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub marker: Marker,
    /// Number of bits in the run (always >= 1 when produced by [`runs`])
    pub run: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.marker.as_str(), SEPARATOR, "0".repeat(self.run))
    }
}

/// Scanner state: where the current run started and what it is made of.
#[derive(Debug, Clone, Copy)]
struct RunState {
    run_start: usize,
    run_char: char,
}

impl RunState {
    /// Close the run at `end` (exclusive).
    fn flush(self, end: usize) -> Token {
        Token {
            marker: Marker::for_bit(self.run_char),
            run: end - self.run_start,
        }
    }
}

/// Split a binary string into its maximal runs, left to right.
///
/// Single pass: an equal character extends the run, a different one flushes
/// it and starts the next, and the final run is flushed at end of input.
pub fn runs(bits: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut state: Option<RunState> = None;
    let mut end = 0;

    for (index, ch) in bits.chars().enumerate() {
        match state {
            Some(current) if current.run_char == ch => {}
            Some(current) => {
                tokens.push(current.flush(index));
                state = Some(RunState {
                    run_start: index,
                    run_char: ch,
                });
            }
            None => {
                state = Some(RunState {
                    run_start: index,
                    run_char: ch,
                });
            }
        }
        end = index + 1;
    }

    if let Some(current) = state {
        tokens.push(current.flush(end));
    }

    tokens
}

/// Encode a binary string as space-separated unary tokens.
///
/// The empty string encodes to the empty string.
pub fn binary_to_unary(bits: &str) -> String {
    join_tokens(&runs(bits))
}

/// Render tokens as an encoded string.
pub fn join_tokens(tokens: &[Token]) -> String {
    let separator = SEPARATOR.to_string();
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Check that an encoded string is well formed.
///
/// All of these must hold:
/// 1. apart from spaces, every character is `'0'`
/// 2. splitting on single spaces gives an even number of blocks
/// 3. every even-indexed block is a marker (`"0"` or `"00"`)
/// 4. the run blocks add up to a whole number of code units
///
/// Nothing beyond these checks is enforced; an empty run block, for
/// instance, passes as long as the totals work out.
pub fn validate(encoded: &str) -> bool {
    if encoded.chars().any(|ch| ch != SEPARATOR && ch != '0') {
        return false;
    }

    let blocks: Vec<&str> = encoded.split(SEPARATOR).collect();
    if blocks.len() % 2 != 0 {
        return false;
    }

    let mut run_bits = 0usize;
    for pair in blocks.chunks_exact(2) {
        if Marker::parse(pair[0]).is_none() {
            return false;
        }
        run_bits += pair[1].len();
    }

    run_bits % CODE_UNIT_BITS == 0
}

/// [`validate`] as a `Result`.
pub fn check(encoded: &str) -> Result<(), ValidationError> {
    if validate(encoded) {
        Ok(())
    } else {
        Err(ValidationError)
    }
}

/// Group the blocks of an encoded string into (marker, run) pairs.
///
/// Blocks are paired two at a time in order; a trailing unpaired block is
/// dropped. Callers should [`validate`] first.
pub fn parse_pairs(encoded: &str) -> Vec<(&str, &str)> {
    let blocks: Vec<&str> = encoded.split(SEPARATOR).collect();
    blocks
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Expand (marker, run) pairs back into a binary string.
///
/// Marker `"0"` expands to `'1'` bits; any other marker to `'0'` bits.
/// Each pair contributes one bit per character of its run block.
pub fn unary_to_binary(pairs: &[(&str, &str)]) -> String {
    let total: usize = pairs.iter().map(|(_, run)| run.len()).sum();
    let mut bits = String::with_capacity(total);

    for (marker, run) in pairs {
        let bit = Marker::parse(marker).unwrap_or(Marker::Zeros).bit();
        bits.extend(std::iter::repeat(bit).take(run.len()));
    }

    bits
}
