//! Command-line interface for prev-cmp
//! Compares two files after stripping parenthesized numbers such as `(42)` and prints
//! `Equal` or `Different`.
//!
//! Usage:
//!   prev-cmp `<file1>` `<file2>` [-v...]
//!
//! Exit status is 0 after any comparison, 1 when fewer than two files are given and
//! 2 when a file cannot be read.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "usage: prev-cmp [file1] [file2]";

/// Arguments for a comparison run
struct CliArgs {
    file1: PathBuf,
    file2: PathBuf,
    verbosity: u8,
}

impl CliArgs {
    /// `None` when the command line does not yield two files.
    ///
    /// Parse errors count as a usage error; `--help` and `--version` print and exit.
    fn parse_from<I, T>(argv: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match command().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) => return None,
        };
        Self::from_matches(&matches)
    }

    /// `None` when either file is missing
    fn from_matches(matches: &ArgMatches) -> Option<Self> {
        Some(CliArgs {
            file1: matches.get_one::<PathBuf>("file1")?.clone(),
            file2: matches.get_one::<PathBuf>("file2")?.clone(),
            verbosity: matches.get_count("verbose"),
        })
    }
}

fn command() -> Command {
    Command::new("prev-cmp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare two files, ignoring parenthesized numbers like (42)")
        .override_usage("prev-cmp [file1] [file2]")
        .arg(
            Arg::new("file1")
                .help("First file to compare")
                .value_parser(value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("file2")
                .help("Second file to compare")
                .value_parser(value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            // Anything past the second file is accepted and ignored
            Arg::new("extra")
                .value_parser(value_parser!(OsString))
                .num_args(1..)
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .index(3)
                .hide(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let Some(args) = CliArgs::parse_from(std::env::args_os()) else {
        println!("{}", USAGE);
        process::exit(1);
    };

    prev_cmp::logging::init(args.verbosity);
    handle_compare_command(&args);
}

/// Handle the comparison
fn handle_compare_command(args: &CliArgs) {
    let verdict = prev_cmp::compare(&args.file1, &args.file2).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(2);
    });

    println!("{}", verdict);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn parses_two_files_and_verbosity() {
        let matches = command().get_matches_from(["prev-cmp", "-vv", "a.txt", "b.txt", "extra"]);
        let args = CliArgs::from_matches(&matches).unwrap();
        assert_eq!(args.file1, PathBuf::from("a.txt"));
        assert_eq!(args.file2, PathBuf::from("b.txt"));
        assert_eq!(args.verbosity, 2);
    }

    #[test]
    fn hyphen_prefixed_paths_are_files() {
        let args = CliArgs::parse_from(["prev-cmp", "-a.txt", "-b.txt"]).unwrap();
        assert_eq!(args.file1, PathBuf::from("-a.txt"));
        assert_eq!(args.file2, PathBuf::from("-b.txt"));
        assert_eq!(args.verbosity, 0);
    }

    #[test]
    fn verbose_flag_still_counts_before_hyphen_paths() {
        let args = CliArgs::parse_from(["prev-cmp", "-v", "-a.txt", "b.txt"]).unwrap();
        assert_eq!(args.file1, PathBuf::from("-a.txt"));
        assert_eq!(args.verbosity, 1);
    }

    #[test]
    fn unparseable_arguments_are_a_usage_error() {
        assert!(CliArgs::parse_from(["prev-cmp", "--bogus"]).is_none());
        assert!(CliArgs::parse_from(["prev-cmp"]).is_none());
    }

    #[test]
    fn one_file_is_not_enough() {
        let matches = command().get_matches_from(["prev-cmp", "a.txt"]);
        assert!(CliArgs::from_matches(&matches).is_none());
    }
}
