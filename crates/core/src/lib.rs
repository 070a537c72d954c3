//! chuck-norris-core: the "Chuck Norris" unary cipher
//!
//! Text is turned into 7-bit binary, one code unit per character, and the
//! binary string is then written as runs: each run of identical bits becomes
//! a marker (`0` for ones, `00` for zeros) followed by a block of zeros whose
//! length is the run length.
//!
//! ```
//! use chuck_norris_core::{decode, encode};
//!
//! let encoded = encode("C").unwrap();
//! assert_eq!(encoded, "0 0 00 0000 0 00");
//! assert_eq!(decode(&encoded).unwrap(), "C");
//! ```
//!
//! # Architecture
//!
//! - `binary`: text <-> fixed-width 7-bit binary
//! - `unary`: binary <-> run-length unary tokens, plus input validation
//! - `cipher`: the encode/decode pipelines and a metered session wrapper
//! - `metrics`: counters for a session
//!
//! # Design Principles
//!
//! - **No panics**: bad input is rejected with a structured error
//! - **Pure**: every transform is a stateless function over strings
//! - **ASCII only**: characters that need more than 7 bits are rejected

pub mod binary;
pub mod cipher;
pub mod error;
pub mod metrics;
pub mod unary;

// Re-export commonly used types
pub use cipher::{decode, encode, Cipher};
pub use error::{BinaryError, Error, Result, ValidationError};
