// crates/rm_tags/src/lib.rs

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

pub mod config;

use config::RunConfig;
use strip_tags::strip_tags_in_file;

/// One-line usage string printed for `-h`.
pub const USAGE: &str = "usage: rm_tags -f <filepath>";

/// Builds the argument parser.
///
/// Clap's automatic help is disabled in favor of the fixed usage line, and
/// parse errors are ignored so a dangling `-f` degrades to the missing
/// filepath message instead of aborting.
fn cli() -> Command {
    Command::new("rm_tags")
        .about("Removes annotation-tag lines from a tutorial source file, in place")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true)
        .arg(
            Arg::new("help")
                .short('h')
                .action(ArgAction::SetTrue)
                .help("Print the usage line and exit"),
        )
        .arg(
            Arg::new("filepath")
                .short('f')
                .num_args(1)
                .help("File to strip; rewritten in place"),
        )
}

/// Keeps only the flags the tool defines (`-h`, and `-f` with its value).
/// Anything else is dropped without an error or a warning, matching the
/// tool's historical getopt surface.
fn known_args(args: &[String]) -> Vec<String> {
    let mut kept = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" => kept.push(arg.clone()),
            "-f" => {
                kept.push(arg.clone());
                if let Some(value) = iter.next() {
                    kept.push(value.clone());
                }
            }
            _ => {}
        }
    }
    kept
}

/// Parses `args` (binary name excluded) and performs the requested action.
///
/// Usage outcomes (`-h`, missing filepath) print to standard output and
/// return their exit code; filesystem failures surface as errors for the
/// caller to report.
pub fn run(args: &[String], config: &RunConfig) -> Result<i32> {
    let matches = cli().get_matches_from(
        std::iter::once("rm_tags".to_string()).chain(known_args(args)),
    );

    if matches.get_flag("help") {
        println!("{}", USAGE);
        return Ok(0);
    }

    let filepath = matches
        .get_one::<String>("filepath")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    if filepath.is_empty() {
        println!("ERROR: No filepath provided in the command line arguments.");
        return Ok(config.usage_exit_code);
    }

    let target = absolutize(&filepath)?;
    strip_tags_in_file(&target, &config.markers)?;
    Ok(0)
}

/// Resolves `filepath` against the current working directory.
fn absolutize(filepath: &str) -> Result<PathBuf> {
    let path = PathBuf::from(filepath);
    if path.is_absolute() {
        return Ok(path);
    }
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    Ok(current_dir.join(path))
}
