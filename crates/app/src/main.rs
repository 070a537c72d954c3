//! chuck-norris: interactive shell for the Chuck Norris unary cipher.
//!
//! With no arguments, runs the encode/decode prompt loop on stdin/stdout.
//! `-- TEXT...` encodes once; `--self-test N` round-trips generated samples.

mod config;
mod input_gen;
mod logging;
mod shell;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use chuck_norris_core::{metrics::Metrics, Cipher, Error, Result};
use config::{Config, Mode};
use shell::Shell;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args).map_err(Error::Config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    if config.print_config {
        config.print();
    }

    let result = match &config.mode {
        Mode::Interactive => run_interactive(&config),
        Mode::OneShot(text) => run_one_shot(&config, text),
        Mode::SelfTest { count } => run_self_test(&config, *count),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(config: &Config) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut shell = Shell::new(stdin.lock(), BufWriter::new(stdout.lock()));
    shell.run()?;
    let metrics = shell.finish();

    if config.print_metrics {
        metrics.print_summary();
    }
    Ok(ExitCode::SUCCESS)
}

fn run_one_shot(config: &Config, text: &str) -> Result<ExitCode> {
    let stdout = io::stdout();
    let metrics = encode_once(text, &mut stdout.lock())?;

    if config.print_metrics {
        metrics.print_summary();
    }
    Ok(ExitCode::SUCCESS)
}

fn run_self_test(config: &Config, count: usize) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mismatches = self_test(config, count, &mut stdout.lock())?;

    if mismatches == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Encode `text` once and write the encoding as a line.
fn encode_once<W: Write>(text: &str, out: &mut W) -> Result<Metrics> {
    let mut cipher = Cipher::new();
    let encoded = cipher.encode(text)?;
    writeln!(out, "{}", encoded)?;
    Ok(cipher.finish())
}

/// Round-trip `count` generated samples, report to `out`, and return the
/// number of samples that didn't come back unchanged.
fn self_test<W: Write>(config: &Config, count: usize, out: &mut W) -> Result<usize> {
    info!(seed = config.seed, count, max_len = config.sample_len, "starting self-test");

    let samples = input_gen::generate_samples(config.seed, count, config.sample_len);
    let mut cipher = Cipher::new();
    let mut mismatches = 0usize;

    for (index, sample) in samples.iter().enumerate() {
        let encoded = cipher.encode(sample)?;
        if cipher.decode(&encoded).ok().as_ref() != Some(sample) {
            warn!(index, sample = ?sample, "round-trip mismatch");
            mismatches += 1;
        }
    }

    let metrics = cipher.finish();
    if config.print_metrics {
        metrics.print_summary();
    }

    writeln!(out, "Seed: {}", config.seed)?;
    if mismatches == 0 {
        writeln!(out, "✓ {} samples round-tripped", count)?;
    } else {
        writeln!(out, "✗ {} of {} samples failed to round-trip", mismatches, count)?;
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(args: &[&str]) -> Config {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Config::from_args(&args).unwrap()
    }

    #[test]
    fn test_encode_once_prints_encoding() {
        let mut out = Vec::new();
        let metrics = encode_once("C", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 0 00 0000 0 00\n");
        assert_eq!(metrics.encode_ops, 1);
        assert!(metrics.end_time.is_some());
    }

    #[test]
    fn test_encode_once_rejects_non_ascii() {
        let mut out = Vec::new();
        let result = encode_once("über", &mut out);

        assert!(matches!(result, Err(Error::Binary(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_self_test_passes() {
        let mut config = test_config(&["--self-test", "200", "--seed", "42", "--sample-len", "48"]);
        config.print_metrics = false;

        let mut out = Vec::new();
        let mismatches = self_test(&config, 200, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert_eq!(mismatches, 0);
        assert!(report.contains("Seed: 42"));
        assert!(report.contains("✓ 200 samples round-tripped"));
    }

    #[test]
    fn test_self_test_zero_samples() {
        let mut config = test_config(&["--self-test", "0", "--seed", "1"]);
        config.print_metrics = false;

        let mut out = Vec::new();
        assert_eq!(self_test(&config, 0, &mut out).unwrap(), 0);
    }

    #[test]
    fn test_config_error_is_wrapped() {
        let err = Config::from_args(&["--bogus".to_string()])
            .map_err(Error::Config)
            .unwrap_err();
        assert_eq!(err.to_string(), "configuration error: unknown argument: --bogus");
    }
}
