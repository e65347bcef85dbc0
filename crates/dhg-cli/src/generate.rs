//! # Token Generation
//!
//! The `dhg` pipeline: load the document, find the destination, draw a
//! nonce, build the token, print it. With `--verify`, the nonce comes from
//! the supplied token instead and the recomputed digest is compared.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use dhg_core::{
    load_document, ContainerPolicy, DhgError, KeyFinder, Prn, DEFAULT_MAX_DEPTH, DESTINATION_KEY,
};
use dhg_crypto::{DigestAlgorithm, NonceGenerator, Token, TokenBuilder, NONCE_LENGTH};

use crate::config::GeneratorConfig;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Arguments for token generation.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Caller identifier (PRN); lower-cased and stripped of spaces.
    pub prn: String,

    /// Path to the JSON document to search.
    pub file: PathBuf,

    /// Field name to search for [default: destination].
    #[arg(long)]
    pub key: Option<String>,

    /// Number of nonce characters [default: 8].
    #[arg(long)]
    pub nonce_length: Option<usize>,

    /// Digest algorithm: md5 or sha256 [default: md5].
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Text used when the matched value is an object or array:
    /// empty, json, or skip [default: empty].
    #[arg(long)]
    pub container_values: Option<String>,

    /// Maximum nesting depth the search may enter, at most 127 [default: 127].
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Seed the nonce generator for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Check an existing `digest;nonce` token instead of generating one.
    #[arg(long, value_name = "TOKEN")]
    pub verify: Option<String>,
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Field name to search for.
    pub key: String,
    /// Number of nonce characters.
    pub nonce_length: usize,
    /// Digest algorithm.
    pub algorithm: DigestAlgorithm,
    /// Container-valued match policy.
    pub container_policy: ContainerPolicy,
    /// Maximum nesting depth.
    pub max_depth: usize,
    /// Nonce seed, if the run should be reproducible.
    pub seed: Option<u64>,
}

impl Settings {
    /// Merge `args` over `config` over the built-in defaults.
    pub fn resolve(args: &GenerateArgs, config: &GeneratorConfig) -> Result<Self> {
        let key = args
            .key
            .clone()
            .or_else(|| config.key.clone())
            .unwrap_or_else(|| DESTINATION_KEY.to_string());

        let algorithm = match args.algorithm.as_deref().or(config.algorithm.as_deref()) {
            Some(name) => name.parse::<DigestAlgorithm>()?,
            None => DigestAlgorithm::default(),
        };

        let container_policy = match args.container_values.as_deref() {
            Some(name) => name.parse::<ContainerPolicy>().map_err(DhgError::from)?,
            None => config.container_values.unwrap_or_default(),
        };

        Ok(Self {
            key,
            nonce_length: args
                .nonce_length
                .or(config.nonce_length)
                .unwrap_or(NONCE_LENGTH),
            algorithm,
            container_policy,
            max_depth: args.max_depth.or(config.max_depth).unwrap_or(DEFAULT_MAX_DEPTH),
            seed: args.seed.or(config.seed),
        })
    }

    /// Key finder configured from these settings.
    pub fn finder(&self) -> Result<KeyFinder, DhgError> {
        Ok(KeyFinder::new(self.key.clone())?
            .with_max_depth(self.max_depth)?
            .with_container_policy(self.container_policy))
    }
}

/// Run the pipeline and write the result line to `out`.
///
/// Returns the process exit code on completion. A missing key, unreadable
/// input, or invalid setting is returned as an error for
/// [`report_failure`](crate::report_failure).
pub fn run_generate(
    args: &GenerateArgs,
    config: &GeneratorConfig,
    out: &mut impl Write,
) -> Result<u8> {
    let settings = Settings::resolve(args, config)?;
    tracing::debug!(?settings, file = %args.file.display(), "resolved settings");

    let finder = settings.finder()?;
    let prn = Prn::new(&args.prn);
    let document = load_document(&args.file)?;

    let destination = finder.find(&document)?.ok_or_else(|| DhgError::KeyNotFound {
        key: settings.key.clone(),
    })?;

    let builder = TokenBuilder::new(settings.algorithm);

    if let Some(line) = &args.verify {
        let token: Token = line.parse()?;
        let valid = builder.verify(&token, &prn, &destination);
        tracing::info!(valid, "token verification finished");
        writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
        return Ok(if valid { EXIT_SUCCESS } else { EXIT_FAILURE });
    }

    let mut generator = match settings.seed {
        Some(seed) => {
            tracing::warn!(seed, "nonce generator seeded; nonces are predictable");
            NonceGenerator::seeded(seed)
        }
        None => NonceGenerator::from_entropy(),
    };
    let nonce = generator.generate_with_length(settings.nonce_length)?;

    let token = builder.build(&prn, &destination, nonce);
    writeln!(out, "{token}")?;
    Ok(EXIT_SUCCESS)
}
