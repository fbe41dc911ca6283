//! bitweave: command-line boundary for the interleaving codec.
//!
//! Reads one submission (argument, file, or stdin), picks the codec
//! direction — automatically by classification, or forced by flag — and
//! prints the result. All failures are structured errors on stderr; the
//! process never panics on user input.

mod config;

use bitweave_core::codec::{decode, encode};
use bitweave_core::dispatch::{classify, render_codes, transcode, Classified};
use bitweave_core::{Error, Result};
use config::{Config, Direction};
use std::io::Read;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let input = read_input(config)?;

    let output = match config.direction {
        Direction::Auto => transcode(&input)?,
        Direction::Encode => render_codes(&encode(&input)?),
        Direction::Decode => match classify(&input) {
            Classified::AllIntegers(codes) => decode(&codes)?,
            Classified::FreeText(_) => {
                return Err(Error::Input(
                    "--decode requires space-separated base-10 integers".to_string(),
                ));
            }
        },
    };

    write_output(config, &output)
}

/// Read the submission from the configured source.
///
/// File and stdin input have one trailing newline stripped; it belongs to
/// the transport, not the submission.
fn read_input(config: &Config) -> Result<String> {
    if let Some(text) = &config.input_text {
        return Ok(text.clone());
    }

    let raw = match &config.input_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let trimmed = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(&raw);
    Ok(trimmed.to_string())
}

fn write_output(config: &Config, output: &str) -> Result<()> {
    match &config.output_file {
        Some(path) => std::fs::write(path, format!("{output}\n"))?,
        None => println!("{output}"),
    }
    Ok(())
}
