//! Sample text generation for self-test runs.
//!
//! Generated samples mix shapes that stress the run detection:
//! - printable text (short, irregular runs)
//! - repeats of one character (runs that cross code unit boundaries)
//! - short repeating patterns
//! - the full 7-bit range, control characters included
//!
//! Everything stays within ASCII so every sample must round-trip.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PRINTABLE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,!?'-";

/// Generate `count` samples of at most `max_len` characters each.
///
/// The same seed always produces the same samples.
pub fn generate_samples(seed: u64, count: usize, max_len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            generate_sample_text(&mut rng, len)
        })
        .collect()
}

/// Generate one ASCII sample of exactly `len` characters.
pub fn generate_sample_text(rng: &mut ChaCha8Rng, len: usize) -> String {
    let mut text = String::with_capacity(len);

    while text.len() < len {
        let section_len = rng.gen_range(1..=16).min(len - text.len());

        match rng.gen_range(0..10) {
            // 40% text-like
            0..=3 => {
                for _ in 0..section_len {
                    let idx = rng.gen_range(0..PRINTABLE.len());
                    text.push(char::from(PRINTABLE[idx]));
                }
            }

            // 20% one repeated character
            4..=5 => {
                let ch = char::from(rng.gen_range(0u8..=127));
                text.extend(std::iter::repeat(ch).take(section_len));
            }

            // 20% short repeating pattern
            6..=7 => {
                let pattern = generate_pattern(rng);
                text.extend(pattern.iter().cycle().take(section_len));
            }

            // 20% anything in the 7-bit range
            _ => {
                for _ in 0..section_len {
                    text.push(char::from(rng.gen_range(0u8..=127)));
                }
            }
        }
    }

    text
}

/// Generate a small repeating pattern.
fn generate_pattern(rng: &mut ChaCha8Rng) -> Vec<char> {
    let pattern_len = rng.gen_range(2..=5);
    (0..pattern_len)
        .map(|_| char::from(rng.gen_range(0u8..=127)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_text() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let text = generate_sample_text(&mut rng, 100);
        assert_eq!(text.chars().count(), 100);
        assert!(text.is_ascii());
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_samples(12345, 20, 50), generate_samples(12345, 20, 50));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_samples(1, 20, 50), generate_samples(2, 20, 50));
    }

    #[test]
    fn test_lengths_bounded() {
        for sample in generate_samples(999, 200, 32) {
            assert!(sample.len() <= 32);
            assert!(sample.is_ascii());
        }
    }

    #[test]
    fn test_samples_round_trip() {
        for sample in generate_samples(2024, 100, 64) {
            let encoded = chuck_norris_core::encode(&sample).unwrap();
            assert_eq!(chuck_norris_core::decode(&encoded).unwrap(), sample);
        }
    }
}
