//! Interactive encode/decode command loop.
//!
//! Reads an operation name per prompt and dispatches it:
//!
//! ```text
//! Please input operation (encode/decode/exit):
//! encode
//! Input string:
//! C
//! Encoded string:
//! 0 0 00 0000 0 00
//!
//! Please input operation (encode/decode/exit):
//! exit
//! Bye
//! ```
//!
//! The loop is generic over its reader and writer so it can be driven from
//! tests as easily as from a terminal.

use std::io::{BufRead, Write};

use chuck_norris_core::{metrics::Metrics, Cipher, Result};
use tracing::{debug, info};

/// An operation requested at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
    Exit,
    Unknown(String),
}

impl Operation {
    /// Match an operation name exactly.
    pub fn parse(name: &str) -> Self {
        match name {
            "encode" => Operation::Encode,
            "decode" => Operation::Decode,
            "exit" => Operation::Exit,
            other => Operation::Unknown(other.to_string()),
        }
    }
}

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The command loop and its session state.
pub struct Shell<R, W> {
    input: R,
    output: W,
    cipher: Cipher,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            cipher: Cipher::new(),
        }
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        self.output.flush()?;
        Ok(())
    }

    /// End the session and return its metrics.
    pub fn finish(self) -> Metrics {
        self.cipher.finish()
    }

    fn step(&mut self) -> Result<Flow> {
        writeln!(self.output, "Please input operation (encode/decode/exit):")?;
        let Some(name) = self.read_line()? else {
            debug!("end of input at operation prompt");
            return Ok(Flow::Stop);
        };

        match Operation::parse(&name) {
            Operation::Encode => self.encode(),
            Operation::Decode => self.decode(),
            Operation::Exit => {
                writeln!(self.output, "Bye")?;
                info!("session ended by user");
                Ok(Flow::Stop)
            }
            Operation::Unknown(name) => {
                self.cipher.record_unknown_operation();
                writeln!(self.output, "There is no '{}' operation", name)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn encode(&mut self) -> Result<Flow> {
        writeln!(self.output, "Input string:")?;
        let Some(text) = self.read_line()? else {
            return Ok(Flow::Stop);
        };

        match self.cipher.encode(&text) {
            Ok(encoded) => {
                writeln!(self.output, "Encoded string:")?;
                writeln!(self.output, "{}", encoded)?;
            }
            Err(err) => {
                debug!(%err, "encode rejected");
                writeln!(self.output, "Input string must be ASCII.")?;
            }
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn decode(&mut self) -> Result<Flow> {
        writeln!(self.output, "Input encoded string:")?;
        let Some(encoded) = self.read_line()? else {
            return Ok(Flow::Stop);
        };

        match self.cipher.decode(&encoded) {
            Ok(text) => {
                writeln!(self.output, "Decoded string:")?;
                writeln!(self.output, "{}", text)?;
            }
            Err(_) => {
                writeln!(self.output, "Encoded string is not valid.")?;
            }
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PROMPT: &str = "Please input operation (encode/decode/exit):\n";

    fn run_session(input: &str) -> (String, Metrics) {
        let mut output = Vec::new();
        let mut shell = Shell::new(Cursor::new(input.as_bytes()), &mut output);
        shell.run().unwrap();
        let metrics = shell.finish();
        (String::from_utf8(output).unwrap(), metrics)
    }

    #[test]
    fn test_encode_then_exit() {
        let (output, metrics) = run_session("encode\nC\nexit\n");
        let expected = format!(
            "{PROMPT}Input string:\nEncoded string:\n0 0 00 0000 0 00\n\n{PROMPT}Bye\n"
        );
        assert_eq!(output, expected);
        assert_eq!(metrics.encode_ops, 1);
    }

    #[test]
    fn test_decode_valid() {
        let (output, metrics) = run_session("decode\n0 00 00 0000 0 0\nexit\n");
        assert!(output.contains("Input encoded string:\nDecoded string:\na\n\n"));
        assert_eq!(metrics.decode_ops, 1);
    }

    #[test]
    fn test_decode_invalid() {
        let (output, metrics) = run_session("decode\n0 0 1 00\nexit\n");
        assert!(output.contains("Encoded string is not valid.\n\n"));
        assert!(!output.contains("Decoded string:"));
        assert_eq!(metrics.validation_failures, 1);
    }

    #[test]
    fn test_unknown_operation() {
        let (output, metrics) = run_session("hello\nexit\n");
        let expected = format!("{PROMPT}There is no 'hello' operation\n{PROMPT}Bye\n");
        assert_eq!(output, expected);
        assert_eq!(metrics.unknown_operations, 1);
    }

    #[test]
    fn test_non_ascii_input() {
        let (output, metrics) = run_session("encode\ncafé\nexit\n");
        assert!(output.contains("Input string must be ASCII.\n\n"));
        assert_eq!(metrics.encode_failures, 1);
    }

    #[test]
    fn test_end_of_input_stops() {
        let (output, _) = run_session("encode\n");
        assert_eq!(output, format!("{PROMPT}Input string:\n"));

        let (output, _) = run_session("");
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn test_crlf_and_spaces() {
        // Only the line terminator is stripped
        let (output, _) = run_session("encode\r\n  \r\nexit\r\n");
        let encoded = chuck_norris_core::encode("  ").unwrap();
        assert!(output.contains(&format!("Encoded string:\n{encoded}\n")));
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!(Operation::parse("encode"), Operation::Encode);
        assert_eq!(Operation::parse("decode"), Operation::Decode);
        assert_eq!(Operation::parse("exit"), Operation::Exit);
        assert_eq!(
            Operation::parse("Encode"),
            Operation::Unknown("Encode".to_string())
        );
    }
}
