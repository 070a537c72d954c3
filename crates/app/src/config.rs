//! Configuration for the chuck-norris shell.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! The tool works with ZERO arguments: it starts the interactive shell.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default fallback log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// What the binary should do once configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Read operations from stdin until `exit` or end of input
    Interactive,
    /// Encode the given text once and exit
    OneShot(String),
    /// Round-trip `count` generated samples and report
    SelfTest { count: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    // === Self-test ===
    /// Seed for sample generation
    pub seed: u64,

    /// Maximum length of a generated sample
    pub sample_len: usize,

    // === Logging ===
    /// Fallback filter used when `RUST_LOG` is unset
    pub log_level: String,

    // === Behavior ===
    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print the session metrics summary on exit
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided, a time-based seed is used and printed with
    /// the self-test results so the run can be repeated.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut seed: Option<u64> = None;
        let mut self_test: Option<usize> = None;
        let mut sample_len: Option<usize> = None;
        let mut log_level: Option<String> = None;
        let mut one_shot: Option<String> = None;
        let mut print_config = false;
        let mut print_metrics = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--self-test" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--self-test requires a number".to_string());
                    }
                    self_test = Some(args[i].parse().map_err(|_| "invalid self-test count")?);
                }
                "--sample-len" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-len requires a number".to_string());
                    }
                    sample_len = Some(args[i].parse().map_err(|_| "invalid sample-len")?);
                }
                "--log-level" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--log-level requires a filter".to_string());
                    }
                    log_level = Some(args[i].clone());
                }
                "--print-config" => {
                    print_config = true;
                }
                "--metrics" => {
                    print_metrics = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--" => {
                    one_shot = Some(args[i + 1..].join(" "));
                    break;
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let mode = match (self_test, one_shot) {
            (Some(_), Some(_)) => {
                return Err("--self-test can't be combined with literal text".to_string());
            }
            (Some(count), None) => Mode::SelfTest { count },
            (None, Some(text)) => Mode::OneShot(text),
            (None, None) => Mode::Interactive,
        };

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            print_metrics: print_metrics || matches!(mode, Mode::SelfTest { .. }),
            mode,
            seed,
            sample_len: sample_len.unwrap_or_else(|| rng.gen_range(8..=64)),
            log_level: log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            print_config,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.mode {
            Mode::Interactive => println!("Mode: interactive"),
            Mode::OneShot(text) => println!("Mode: encode {:?}", text),
            Mode::SelfTest { count } => println!("Mode: self-test ({} samples)", count),
        }
        println!("Seed: {}", self.seed);
        println!("Max sample length: {} chars", self.sample_len);
        println!("Log level: {}", self.log_level);
        println!("Print metrics: {}", self.print_metrics);
        println!();
    }
}

fn print_help() {
    println!("chuck-norris: Chuck Norris unary cipher");
    println!();
    println!("USAGE:");
    println!("    chuck-norris [OPTIONS] [-- TEXT...]");
    println!();
    println!("OPTIONS:");
    println!("    --self-test <N>         Round-trip N generated samples and exit");
    println!("    --seed <N>              Random seed for sample generation");
    println!("    --sample-len <N>        Max sample length (default: random 8-64)");
    println!();
    println!("    --log-level <FILTER>    Log filter when RUST_LOG is unset (default: warn)");
    println!("    --print-config          Print resolved configuration");
    println!("    --metrics               Print session metrics on exit");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    chuck-norris                          # Interactive encode/decode shell");
    println!("    chuck-norris -- Hello                 # Encode one string");
    println!("    chuck-norris --self-test 1000 --seed 42");
    println!();
}
