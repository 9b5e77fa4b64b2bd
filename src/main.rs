//! Command-line front-end for the compsniff library.
//!
//! This binary is deliberately thin glue: it owns the process-wide concerns
//! the library refuses to (installing the `env_logger` backend, reading the
//! input source, choosing an exit code) and delegates every detection
//! decision to `compsniff::Extractor`.
//!
//! Usage: `compsniff [--json] [--out PATH] [FILE]`
//! With no FILE (or `-`) the input is read from stdin.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use serde::Serialize;

use compsniff::{Extractor, SniffConfig};

#[derive(Serialize)]
struct Report {
    kind: compsniff::CompressionKind,
    name: String,
    input_bytes: usize,
    decoded_bytes: usize,
}

const USAGE: &str = "usage: compsniff [--json] [--out PATH] [FILE]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    json: bool,
}

/// Parses the command line. `Ok(None)` means help was requested and the
/// caller should print usage and exit successfully.
fn parse_args(raw: impl Iterator<Item = String>) -> Result<Option<Args>, String> {
    let mut args = Args::default();
    let mut iter = raw;
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--out" => {
                args.out = Some(iter.next().ok_or("--out requires a path")?);
            }
            "--help" | "-h" => return Ok(None),
            "-" => args.input = None,
            _ if arg.starts_with('-') => return Err(format!("unknown flag: {}", arg)),
            _ => args.input = Some(arg),
        }
    }
    Ok(Some(args))
}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("compsniff {}\n{}", compsniff::VERSION, USAGE);
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let input = match read_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("compsniff: cannot read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let extractor = Extractor::new(SniffConfig::default());
    let extraction = match extractor.try_extract_slice(&input) {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("compsniff: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let report = Report {
            kind: extraction.kind,
            name: extraction.kind.to_string(),
            input_bytes: input.len(),
            decoded_bytes: extraction.data.len(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("compsniff: cannot serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "{}: {} -> {} bytes",
            extraction.kind,
            input.len(),
            extraction.data.len()
        );
    }

    if let Some(path) = args.out {
        if let Err(e) = fs::write(&path, &extraction.data) {
            eprintln!("compsniff: cannot write {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
