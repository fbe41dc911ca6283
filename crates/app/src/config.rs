//! Configuration for the bitweave command-line tool.
//!
//! Handles parsing command-line arguments into a resolved configuration.
//!
//! # Philosophy
//!
//! The tool should work with minimal ceremony: a bare positional argument
//! is the submission, stdin is the fallback, and the direction is chosen
//! automatically unless forced.

use std::path::PathBuf;

/// Which way to run the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Classify the input and pick the direction automatically
    Auto,
    /// Always encode, even if the input looks like integers
    Encode,
    /// Always decode; non-integer input is a usage error
    Decode,
}

/// Complete configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Submission given directly on the command line
    pub input_text: Option<String>,

    /// Read the submission from this file instead
    pub input_file: Option<PathBuf>,

    /// Write the result here instead of stdout
    pub output_file: Option<PathBuf>,

    /// Codec direction
    pub direction: Direction,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// Exactly one input source is allowed; with neither a positional
    /// argument nor `--in`, the submission is read from stdin.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_text: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut direction = Direction::Auto;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--encode" => {
                    if direction == Direction::Decode {
                        return Err("--encode conflicts with --decode".to_string());
                    }
                    direction = Direction::Encode;
                }
                "--decode" => {
                    if direction == Direction::Encode {
                        return Err("--decode conflicts with --encode".to_string());
                    }
                    direction = Direction::Decode;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                arg if arg.starts_with("--") => {
                    return Err(format!("unknown argument: {arg}"));
                }
                _ => {
                    if input_text.is_some() {
                        return Err("only one positional argument is allowed".to_string());
                    }
                    input_text = Some(args[i].clone());
                }
            }
            i += 1;
        }

        if input_text.is_some() && input_file.is_some() {
            return Err("a positional argument conflicts with --in".to_string());
        }

        Ok(Config {
            input_text,
            input_file,
            output_file,
            direction,
        })
    }
}

fn print_help() {
    println!("bitweave: interleave text into 32-bit codes and back");
    println!();
    println!("USAGE:");
    println!("    bitweave [OPTIONS] [TEXT]");
    println!();
    println!("ARGS:");
    println!("    TEXT                  Submission to transcode (default: stdin)");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Read the submission from a file");
    println!("    --out <PATH>          Write the result to a file (default: stdout)");
    println!("    --encode              Force the encode direction");
    println!("    --decode              Force the decode direction");
    println!("    --help, -h            Print this help");
    println!();
    println!("By default the direction is chosen automatically: a submission");
    println!("whose space-separated tokens are all base-10 integers is decoded,");
    println!("anything else is encoded.");
    println!();
    println!("EXAMPLES:");
    println!("    bitweave FRED                 # -> 251792692");
    println!("    bitweave 251792692            # -> FRED");
    println!("    bitweave --encode 12345       # encode the digits as text");
    println!("    echo tacocat | bitweave       # read from stdin");
    println!();
}
