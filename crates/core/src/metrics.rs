//! Metrics collection and reporting for a cipher session.
//!
//! Tracks how many operations ran, how much text went through them, and how
//! often input was rejected.
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. It is owned by a single
//! [`Cipher`](crate::cipher::Cipher) session.

use std::time::{Duration, Instant};

/// Counters and timing for one session.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the session started
    pub start_time: Instant,

    /// When the session ended (set on completion)
    pub end_time: Option<Instant>,

    // === Operations ===
    /// Successful encode operations
    pub encode_ops: u64,

    /// Successful decode operations
    pub decode_ops: u64,

    /// Encode requests rejected for non-ASCII input
    pub encode_failures: u64,

    /// Decode requests rejected by validation
    pub validation_failures: u64,

    /// Operation names the shell didn't recognise
    pub unknown_operations: u64,

    // === Volume ===
    /// Characters of plain text encoded
    pub chars_encoded: u64,

    /// Characters of plain text produced by decoding
    pub chars_decoded: u64,

    /// Characters of encoded output produced
    pub encoded_len: u64,

    /// Tokens (runs) emitted by encoding
    pub tokens_emitted: u64,

    /// Binary digits passed through either direction
    pub bits_processed: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            encode_ops: 0,
            decode_ops: 0,
            encode_failures: 0,
            validation_failures: 0,
            unknown_operations: 0,
            chars_encoded: 0,
            chars_decoded: 0,
            encoded_len: 0,
            tokens_emitted: 0,
            bits_processed: 0,
        }
    }

    /// Mark the session as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Encoded characters per input character.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn expansion_ratio(&self) -> f64 {
        if self.chars_encoded == 0 {
            0.0
        } else {
            self.encoded_len as f64 / self.chars_encoded as f64
        }
    }

    /// Average run length across all emitted tokens.
    pub fn mean_run_length(&self) -> f64 {
        if self.tokens_emitted == 0 {
            0.0
        } else {
            (self.chars_encoded * crate::binary::CODE_UNIT_BITS as u64) as f64
                / self.tokens_emitted as f64
        }
    }

    /// Total rejected requests of any kind.
    pub fn total_failures(&self) -> u64 {
        self.encode_failures + self.validation_failures + self.unknown_operations
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Session Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Operations ===");
        println!("Encoded: {}", self.encode_ops);
        println!("Decoded: {}", self.decode_ops);
        println!("Rejected (non-ASCII): {}", self.encode_failures);
        println!("Rejected (invalid encoding): {}", self.validation_failures);
        println!("Unknown operations: {}", self.unknown_operations);
        println!();

        println!("=== Volume ===");
        println!("Characters encoded: {}", self.chars_encoded);
        println!("Characters decoded: {}", self.chars_decoded);
        println!("Bits processed: {}", self.bits_processed);
        println!("Tokens emitted: {}", self.tokens_emitted);
        println!("Mean run length: {:.2} bits", self.mean_run_length());
        println!("Expansion: {:.1}x", self.expansion_ratio());
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             encode_ops={}\n\
             decode_ops={}\n\
             encode_failures={}\n\
             validation_failures={}\n\
             unknown_operations={}\n\
             chars_encoded={}\n\
             chars_decoded={}\n\
             tokens_emitted={}\n\
             bits_processed={}\n\
             expansion_ratio={:.4}\n",
            self.duration().as_millis(),
            self.encode_ops,
            self.decode_ops,
            self.encode_failures,
            self.validation_failures,
            self.unknown_operations,
            self.chars_encoded,
            self.chars_decoded,
            self.tokens_emitted,
            self.bits_processed,
            self.expansion_ratio(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert_eq!(metrics.total_failures(), 0);
    }

    #[test]
    fn test_expansion_ratio() {
        let mut metrics = Metrics::new();
        assert_eq!(metrics.expansion_ratio(), 0.0);

        metrics.chars_encoded = 4;
        metrics.encoded_len = 60;
        assert_eq!(metrics.expansion_ratio(), 15.0);
    }

    #[test]
    fn test_mean_run_length() {
        let mut metrics = Metrics::new();
        metrics.chars_encoded = 2;
        metrics.tokens_emitted = 7;

        assert_eq!(metrics.mean_run_length(), 2.0);
    }

    #[test]
    fn test_complete_freezes_duration() {
        let mut metrics = Metrics::new();
        metrics.complete();
        let first = metrics.duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(metrics.duration(), first);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = Metrics::new();
        metrics.encode_ops = 3;
        metrics.validation_failures = 1;
        metrics.unknown_operations = 2;

        let text = metrics.export_text();
        assert!(text.contains("encode_ops=3"));
        assert!(text.contains("validation_failures=1"));
        assert!(text.contains("unknown_operations=2"));
        assert_eq!(metrics.total_failures(), 3);
    }
}
