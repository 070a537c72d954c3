//! Fixed-width binary conversion for text.
//!
//! Every character becomes one 7-digit code unit of `'0'`/`'1'` characters,
//! MSB-first, zero-padded on the left. A binary string is the plain
//! concatenation of code units with no separators.
//!
//! # Input Domain
//! - Only code points 0..=127 fit in a code unit; anything wider is rejected
//!   with [`BinaryError::NonAscii`] rather than producing a longer unit
//! - Decoding requires a length that is a multiple of 7
//!
//! # Example
//! ```
//! use chuck_norris_core::binary::{binary_to_text, text_to_binary};
//!
//! let bits = text_to_binary("a").unwrap();
//! assert_eq!(bits, "1100001");
//! assert_eq!(binary_to_text(&bits).unwrap(), "a");
//! ```

use std::fmt::Write;

use crate::error::BinaryError;

/// Number of bits in one code unit.
pub const CODE_UNIT_BITS: usize = 7;

/// Largest code point that fits in a code unit.
const MAX_CODE_POINT: u32 = (1 << CODE_UNIT_BITS) - 1;

/// Render a single character as a 7-digit code unit.
///
/// # Errors
/// Returns `BinaryError::NonAscii` if the character needs more than 7 bits.
/// The position reported is always 0; use [`text_to_binary`] for positions
/// within a string.
pub fn to_code_unit(ch: char) -> Result<String, BinaryError> {
    let mut unit = String::with_capacity(CODE_UNIT_BITS);
    push_code_unit(&mut unit, ch, 0)?;
    Ok(unit)
}

/// Convert text to its binary string, one code unit per character.
///
/// A one-character string goes through exactly the same path as a longer
/// one. The empty string gives an empty binary string.
///
/// # Errors
/// Returns `BinaryError::NonAscii` with the character index of the first
/// character outside the 7-bit range. No partial output is returned.
pub fn text_to_binary(input: &str) -> Result<String, BinaryError> {
    let mut bits = String::with_capacity(input.len() * CODE_UNIT_BITS);
    for (position, ch) in input.chars().enumerate() {
        push_code_unit(&mut bits, ch, position)?;
    }
    Ok(bits)
}

/// Append the code unit for `ch` to `out`.
fn push_code_unit(out: &mut String, ch: char, position: usize) -> Result<(), BinaryError> {
    let code = ch as u32;
    if code > MAX_CODE_POINT {
        return Err(BinaryError::NonAscii { ch, position });
    }

    // Writing into a String can't fail
    let _ = write!(out, "{:0width$b}", code, width = CODE_UNIT_BITS);
    Ok(())
}

/// Convert a binary string back to text.
///
/// The string is split into consecutive 7-digit chunks; each chunk is read
/// MSB-first as a code point.
///
/// # Errors
/// - `BinaryError::InvalidDigit` if any character is not `'0'` or `'1'`
/// - `BinaryError::LengthNotMultiple` if the length is not a multiple of 7
pub fn binary_to_text(bits: &str) -> Result<String, BinaryError> {
    // Digits first: once they pass, bytes and chars line up
    if let Some((position, ch)) = bits
        .chars()
        .enumerate()
        .find(|&(_, ch)| ch != '0' && ch != '1')
    {
        return Err(BinaryError::InvalidDigit { ch, position });
    }

    if bits.len() % CODE_UNIT_BITS != 0 {
        return Err(BinaryError::LengthNotMultiple { len: bits.len() });
    }

    Ok(bits
        .as_bytes()
        .chunks(CODE_UNIT_BITS)
        .map(decode_code_unit)
        .collect())
}

/// Read one 7-digit chunk as a code point.
fn decode_code_unit(unit: &[u8]) -> char {
    let code = unit
        .iter()
        .fold(0u8, |acc, &digit| (acc << 1) | (digit - b'0'));
    char::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_unit_padding() {
        assert_eq!(to_code_unit('a').unwrap(), "1100001");
        assert_eq!(to_code_unit('C').unwrap(), "1000011");
        assert_eq!(to_code_unit(' ').unwrap(), "0100000");
        assert_eq!(to_code_unit('\0').unwrap(), "0000000");
        assert_eq!(to_code_unit('\x7f').unwrap(), "1111111");
    }

    #[test]
    fn test_single_char_matches_unit() {
        // Length-1 strings are not special-cased
        for ch in ['a', 'Z', '0', '\n'] {
            let single = text_to_binary(&ch.to_string()).unwrap();
            assert_eq!(single, to_code_unit(ch).unwrap());
            assert_eq!(single.len(), CODE_UNIT_BITS);
        }
    }

    #[test]
    fn test_multi_char() {
        let bits = text_to_binary("AB").unwrap();
        assert_eq!(bits, "10000011000010");
        assert_eq!(bits.len(), 2 * CODE_UNIT_BITS);
    }

    #[test]
    fn test_empty() {
        assert_eq!(text_to_binary("").unwrap(), "");
        assert_eq!(binary_to_text("").unwrap(), "");
    }

    #[test]
    fn test_non_ascii_rejected() {
        let result = text_to_binary("abé");
        assert_eq!(
            result,
            Err(BinaryError::NonAscii {
                ch: 'é',
                position: 2
            })
        );

        assert!(to_code_unit('\u{80}').is_err());
        assert!(to_code_unit('🦀').is_err());
    }

    #[test]
    fn test_binary_to_text() {
        assert_eq!(binary_to_text("1100001").unwrap(), "a");
        assert_eq!(binary_to_text("10000011000010").unwrap(), "AB");
    }

    #[test]
    fn test_length_not_multiple() {
        assert_eq!(
            binary_to_text("11000011"),
            Err(BinaryError::LengthNotMultiple { len: 8 })
        );
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            binary_to_text("1102001"),
            Err(BinaryError::InvalidDigit {
                ch: '2',
                position: 3
            })
        );
    }

    #[test]
    fn test_full_range_round_trip() {
        let text: String = (0u8..=127).map(char::from).collect();
        let bits = text_to_binary(&text).unwrap();
        assert_eq!(bits.len(), 128 * CODE_UNIT_BITS);
        assert_eq!(binary_to_text(&bits).unwrap(), text);
    }
}
