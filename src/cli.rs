//! Command line front end of the `hash64` binary.

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Hashed when the command line names nothing else.
pub const SAMPLE_INPUT: &str = "Retezeckzahashovani";

#[derive(Debug, Clone, Parser)]
#[command(name = "hash64", version)]
#[command(about = "Print 64-bit FarmHash or MurmurHash64A hashes of strings and files")]
pub struct Cli {
    /// Strings to hash, one output line each. Without strings or files the built-in sample is hashed.
    pub inputs: Vec<String>,

    /// Hash function: farm, fingerprint or murmur.
    #[arg(short, long, default_value_t = Algorithm::Farm)]
    pub algorithm: Algorithm,

    /// Seed folded into the hash, decimal or 0x-prefixed hexadecimal.
    #[arg(short, long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Hash the contents of a file. May be repeated.
    #[arg(short = 'f', long = "file")]
    pub files: Vec<PathBuf>,

    /// Print hashes as 16 hexadecimal digits.
    #[arg(long, conflicts_with = "json")]
    pub hex: bool,

    /// Print one JSON record per input.
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// One line of `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRecord {
    pub source: String,
    pub algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
    pub length: usize,
    pub hash: u64,
}

enum Source<'a> {
    Literal(&'a str),
    File(&'a PathBuf),
}

impl Source<'_> {
    fn label(&self) -> String {
        match self {
            Source::Literal(text) => (*text).to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn bytes(&self) -> Result<Cow<'_, [u8]>> {
        match self {
            Source::Literal(text) => Ok(Cow::Borrowed(text.as_bytes())),
            Source::File(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| Error::Read {
                    path: (*path).clone(),
                    source,
                }),
        }
    }
}

impl Cli {
    fn sources(&self) -> Vec<Source<'_>> {
        if self.inputs.is_empty() && self.files.is_empty() {
            return vec![Source::Literal(SAMPLE_INPUT)];
        }
        self.inputs
            .iter()
            .map(|input| Source::Literal(input.as_str()))
            .chain(self.files.iter().map(Source::File))
            .collect()
    }
}

/// Parses a seed given as decimal or `0x`-prefixed hexadecimal.
pub fn parse_seed(text: &str) -> Result<u64> {
    let trimmed = text.trim().replace('_', "");
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| Error::InvalidSeed(text.to_string()))
}

pub fn format_hash(hash: u64, hex: bool) -> String {
    if hex {
        format!("{:016x}", hash)
    } else {
        hash.to_string()
    }
}

/// Hashes every input named by `cli` and writes one line per input to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.seed.is_some() && !cli.algorithm.supports_seed() {
        return Err(Error::SeedNotSupported(cli.algorithm));
    }

    for source in cli.sources() {
        let data = source.bytes()?;
        let hash = cli.algorithm.hash(&data, cli.seed)?;
        tracing::debug!(
            source = %source.label(),
            algorithm = %cli.algorithm,
            length = data.len(),
            hash,
            "hashed input"
        );

        if cli.json {
            let record = HashRecord {
                source: source.label(),
                algorithm: cli.algorithm,
                seed: cli.seed,
                length: data.len(),
                hash,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_hash(hash, cli.hex))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Installs a stderr logger. `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hash64=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hash64=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
