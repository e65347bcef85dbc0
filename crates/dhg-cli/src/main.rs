//! # dhg CLI entry point
//!
//! Parses command-line arguments, initializes logging on stderr, and runs
//! the token pipeline. Exit codes follow the constants in `dhg_cli`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dhg_cli::config::GeneratorConfig;
use dhg_cli::generate::{run_generate, GenerateArgs};
use dhg_cli::{report_failure, EXIT_USAGE};

/// Destination hash generator.
///
/// Finds the first `destination` field in a JSON document and prints
/// `<md5 hex>;<nonce>`, where the digest covers the normalized PRN, the
/// destination text, and a fresh 8-character nonce.
#[derive(Parser, Debug)]
#[command(name = "dhg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    // RUST_LOG wins over -v when set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity_filter(cli.verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("dhg starting");

    let result = match &cli.config {
        Some(path) => GeneratorConfig::load(path),
        None => Ok(GeneratorConfig::default()),
    }
    .and_then(|config| run_generate(&cli.generate, &config, &mut std::io::stdout().lock()));

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => ExitCode::from(report_failure(&e, &mut std::io::stderr().lock())),
    }
}

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_two_positionals() {
        let cli = Cli::try_parse_from(["dhg", "X1", "order.json"]).unwrap();
        assert_eq!(cli.generate.prn, "X1");
        assert_eq!(cli.generate.file, PathBuf::from("order.json"));
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_prn_with_spaces() {
        let cli = Cli::try_parse_from(["dhg", "A B c", "order.json"]).unwrap();
        assert_eq!(cli.generate.prn, "A B c");
    }

    #[test]
    fn cli_parse_missing_file_is_usage_error() {
        let err = Cli::try_parse_from(["dhg", "X1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_parse_no_arguments_is_usage_error() {
        assert!(Cli::try_parse_from(["dhg"]).is_err());
    }

    #[test]
    fn cli_parse_extra_positional_is_usage_error() {
        let err = Cli::try_parse_from(["dhg", "X1", "a.json", "b.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn cli_parse_all_options() {
        let cli = Cli::try_parse_from([
            "dhg",
            "-vv",
            "--config",
            "dhg.yaml",
            "--key",
            "target",
            "--nonce-length",
            "12",
            "--algorithm",
            "sha256",
            "--container-values",
            "json",
            "--max-depth",
            "32",
            "--seed",
            "7",
            "X1",
            "order.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("dhg.yaml")));
        assert_eq!(cli.generate.key.as_deref(), Some("target"));
        assert_eq!(cli.generate.nonce_length, Some(12));
        assert_eq!(cli.generate.algorithm.as_deref(), Some("sha256"));
        assert_eq!(cli.generate.container_values.as_deref(), Some("json"));
        assert_eq!(cli.generate.max_depth, Some(32));
        assert_eq!(cli.generate.seed, Some(7));
    }

    #[test]
    fn cli_parse_verify_option() {
        let cli = Cli::try_parse_from([
            "dhg",
            "--verify",
            "e299dc38e790cf90f0b051030b4892cf;AbC12345",
            "X1",
            "order.json",
        ])
        .unwrap();
        assert_eq!(
            cli.generate.verify.as_deref(),
            Some("e299dc38e790cf90f0b051030b4892cf;AbC12345")
        );
    }

    #[test]
    fn cli_parse_non_numeric_seed_is_usage_error() {
        let err = Cli::try_parse_from(["dhg", "--seed", "abc", "X1", "a.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn cli_parse_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["dhg", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn verbosity_levels_map_to_filters() {
        let level = |v: u8| verbosity_filter(v).to_string().to_lowercase();
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(9), "trace");
    }
}
