// SPDX-License-Identifier: Apache-2.0

//! Command-line harness: hash a string or file, or run the reference vectors.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use malwaredb_murmur3::selftest::{self, SelfTestReport};
use malwaredb_murmur3::{hash32, Digest, Encoding, VERSION};

#[derive(Parser, Debug)]
#[command(name = "murmur3")]
#[command(version = VERSION)]
#[command(about = "MurmurHash3 (x86, 32-bit) of a string or file")]
struct Args {
    /// Text to hash; without it (and without --file) the reference vectors are checked
    #[arg(conflicts_with = "file")]
    input: Option<String>,

    /// Hash the contents of a file instead (- for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed, decimal or 0x-prefixed hex
    #[arg(short, long, default_value = "0", value_parser = parse_seed)]
    seed: u32,

    /// How INPUT is turned into bytes: utf8 or utf16le
    #[arg(short, long, default_value = "utf8")]
    encoding: Encoding,

    /// Representation of the printed hash
    #[arg(long, value_enum, default_value = "hex")]
    format: OutputFormat,

    /// Print only the hash value (in self-test mode, only the computed values)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Hex,
    Decimal,
    Base64,
}

fn parse_seed(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid seed '{s}': {e}"))
}

fn render(digest: Digest, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => format!("{digest:x}"),
        OutputFormat::Decimal => digest.0.to_string(),
        OutputFormat::Base64 => digest.to_base64(),
    }
}

fn selftest_lines(report: &SelfTestReport, format: OutputFormat, quiet: bool) -> Vec<String> {
    report
        .outcomes
        .iter()
        .map(|outcome| {
            let actual = render(outcome.actual, format);
            if quiet {
                return actual;
            }
            let expected = render(Digest(outcome.vector.expected), format);
            format!(
                "Hash for '{}': {actual}, expected {expected}",
                outcome.vector.label
            )
        })
        .collect()
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.file {
        let data = read_input(path)?;
        debug!(
            "hashing {} bytes from {} with seed {:#x}",
            data.len(),
            path.display(),
            args.seed
        );
        let value = render(Digest(hash32(&data, args.seed)), args.format);
        if args.quiet {
            println!("{value}");
        } else {
            println!("Hash value for {} is {value}", path.display());
        }
        return Ok(());
    }

    if let Some(input) = &args.input {
        let data = args.encoding.encode(input);
        debug!(
            "hashing {} bytes as {} with seed {:#x}",
            data.len(),
            args.encoding,
            args.seed
        );
        let value = render(Digest(hash32(&data, args.seed)), args.format);
        if args.quiet {
            println!("{value}");
        } else {
            println!("Hash value for '{input}' is {value}");
        }
        return Ok(());
    }

    let report = selftest::run();
    for line in selftest_lines(&report, args.format, args.quiet) {
        println!("{line}");
    }
    if !report.passed() {
        bail!("{} self-test vector(s) failed", report.failures().count());
    }
    Ok(())
}
