//! Encode and decode pipelines.
//!
//! ```text
//! encode:  text --text_to_binary--> bits --binary_to_unary--> encoded
//! decode:  encoded --validate--> pairs --unary_to_binary--> bits --binary_to_text--> text
//! ```
//!
//! The free functions are pure. [`Cipher`] wraps them with a [`Metrics`]
//! record for an interactive session.

use tracing::{debug, trace};

use crate::binary::{binary_to_text, text_to_binary};
use crate::error::{BinaryError, ValidationError};
use crate::metrics::Metrics;
use crate::unary::{self, Token};

/// Encode text as a space-separated unary token string.
///
/// # Errors
/// Returns `BinaryError::NonAscii` if any character needs more than 7 bits.
pub fn encode(text: &str) -> Result<String, BinaryError> {
    let (_, tokens) = encode_tokens(text)?;
    Ok(unary::join_tokens(&tokens))
}

/// Decode a unary token string back to text.
///
/// Malformed input is rejected before any decoding happens.
pub fn decode(encoded: &str) -> Result<String, ValidationError> {
    decode_bits(encoded).map(|(_, text)| text)
}

fn encode_tokens(text: &str) -> Result<(String, Vec<Token>), BinaryError> {
    let bits = text_to_binary(text)?;
    let tokens = unary::runs(&bits);

    trace!(chars = text.chars().count(), bits = bits.len(), runs = tokens.len(), "encoded text");
    Ok((bits, tokens))
}

fn decode_bits(encoded: &str) -> Result<(String, String), ValidationError> {
    unary::check(encoded).map_err(|err| {
        debug!(len = encoded.len(), "rejected malformed encoded input");
        err
    })?;

    let pairs = unary::parse_pairs(encoded);
    let bits = unary::unary_to_binary(&pairs);

    // Validation guarantees whole code units of '0'/'1'
    let text = binary_to_text(&bits).map_err(|err| {
        debug!(%err, "validated input failed to decode");
        ValidationError
    })?;

    trace!(pairs = pairs.len(), bits = bits.len(), chars = text.chars().count(), "decoded text");
    Ok((bits, text))
}

/// A metered encode/decode session.
///
/// Each call updates the session's [`Metrics`]; results are identical to the
/// free [`encode`] and [`decode`] functions.
#[derive(Debug, Default)]
pub struct Cipher {
    metrics: Metrics,
}

impl Cipher {
    /// Start a new session.
    pub fn new() -> Self {
        Self {
            metrics: Metrics::new(),
        }
    }

    /// Encode text, recording the outcome.
    pub fn encode(&mut self, text: &str) -> Result<String, BinaryError> {
        match encode_tokens(text) {
            Ok((bits, tokens)) => {
                let encoded = unary::join_tokens(&tokens);

                self.metrics.encode_ops += 1;
                self.metrics.chars_encoded += text.chars().count() as u64;
                self.metrics.bits_processed += bits.len() as u64;
                self.metrics.tokens_emitted += tokens.len() as u64;
                self.metrics.encoded_len += encoded.len() as u64;

                Ok(encoded)
            }
            Err(err) => {
                self.metrics.encode_failures += 1;
                Err(err)
            }
        }
    }

    /// Decode an encoded string, recording the outcome.
    pub fn decode(&mut self, encoded: &str) -> Result<String, ValidationError> {
        match decode_bits(encoded) {
            Ok((bits, text)) => {
                self.metrics.decode_ops += 1;
                self.metrics.chars_decoded += text.chars().count() as u64;
                self.metrics.bits_processed += bits.len() as u64;

                Ok(text)
            }
            Err(err) => {
                self.metrics.validation_failures += 1;
                Err(err)
            }
        }
    }

    /// Count a request for an operation the caller didn't recognise.
    pub fn record_unknown_operation(&mut self) {
        self.metrics.unknown_operations += 1;
    }

    /// Metrics so far.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// End the session and return its final metrics.
    pub fn finish(mut self) -> Metrics {
        self.metrics.complete();
        self.metrics
    }
}
