mod bump;
mod check;
mod config;
mod output;
mod range;

use config::WeaverConfig;
use output::{Output, OutputFormat};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "weaver")]
#[command(about = "Semantic Versioning 2.0.0 toolkit")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (overrides weaver.toml)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true, conflicts_with = "format")]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a string is a strict SemVer 2.0.0 version
    Validate(check::VersionArgs),

    /// Print the components of a version
    Parse(check::VersionArgs),

    /// Strip whitespace and a leading "v" or "=" then parse
    Clean(check::VersionArgs),

    /// Extract the first version-like number run from arbitrary text
    Coerce(check::CoerceArgs),

    /// Compare two versions by precedence (-1, 0 or 1)
    Compare(check::CompareArgs),

    /// Check whether a version satisfies a range
    Satisfies(range::SatisfiesArgs),

    /// Print the lowest version a range admits
    Minimum(range::MinimumArgs),

    /// Sort versions by precedence, dropping invalid ones
    Sort(range::SortArgs),

    /// Increment a version
    Inc(bump::IncArgs),

    /// Decrement the major, minor or patch component of a version
    Dec(bump::DecArgs),
}

/// Logger filter: RUST_LOG, then -v count, then weaver.toml, then warn
fn init_logger(verbose: u8, config: &WeaverConfig) {
    let level = match verbose {
        0 => config.log.level.clone().unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    env_logger::Builder::new()
        .parse_filters(&level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();

    let config = WeaverConfig::load_from_cwd()
        .context("Failed to load weaver.toml")?
        .unwrap_or_default();
    init_logger(args.verbose, &config);

    let format = if args.json {
        OutputFormat::Json
    } else {
        args.format.or(config.output.format).unwrap_or_default()
    };
    let output = Output::new(format);

    match args.command {
        Commands::Validate(a) => check::validate(a, &output),
        Commands::Parse(a) => check::parse(a, &output),
        Commands::Clean(a) => check::clean(a, &output),
        Commands::Coerce(a) => check::coerce(a, &output),
        Commands::Compare(a) => check::compare(a, &output),
        Commands::Satisfies(a) => range::satisfies(a, &output),
        Commands::Minimum(a) => range::minimum(a, &output),
        Commands::Sort(a) => range::sort(a, &output),
        Commands::Inc(a) => bump::inc(a, &config.inc, &output),
        Commands::Dec(a) => bump::dec(a, &output),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            // Usage and configuration errors
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let args = Args::try_parse_from(["weaver", "-vv", "minimum", "^1.2", "--json"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.json);
        assert!(matches!(args.command, Commands::Minimum(_)));
    }

    #[test]
    fn test_json_conflicts_with_format() {
        assert!(Args::try_parse_from(["weaver", "--json", "--format", "plain", "validate", "1.2.3"]).is_err());
    }

    #[test]
    fn test_inc_release_is_optional() {
        let args = Args::try_parse_from(["weaver", "inc", "1.2.3"]).unwrap();
        match args.command {
            Commands::Inc(inc) => assert!(inc.release.is_none()),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
