//! Range commands: satisfies, minimum, sort

use anyhow::Result;
use clap::Args;
use log::{debug, warn};
use serde_json::json;

use crate::output::{version_json, Output};
use weaver_semver::{clean, Semver};

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Version to test
    pub version: String,

    /// Range expression (e.g. ">=1.2.0 <2.0.0 || ^3.1")
    pub range: String,
}

#[derive(Args, Debug)]
pub struct MinimumArgs {
    /// Range expression
    pub range: String,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Only keep versions inside this range
    #[arg(long)]
    pub range: Option<String>,
}

pub fn satisfies(args: SatisfiesArgs, output: &Output) -> Result<i32> {
    let range = match Semver::parse_range(&args.range) {
        Ok(r) => r,
        Err(e) => {
            output.error(&args.range, e);
            return Ok(1);
        }
    };
    debug!("Parsed range {:?} as {}", args.range, range);

    if clean(&args.version).is_err() {
        warn!("{:?} is not a valid version", args.version);
    }

    let satisfied = Semver::satisfies_range(&args.version, &range);
    output.emit(
        satisfied,
        json!({ "version": args.version, "range": args.range, "satisfies": satisfied }),
    );
    Ok(if satisfied { 0 } else { 1 })
}

pub fn minimum(args: MinimumArgs, output: &Output) -> Result<i32> {
    let range = match Semver::parse_range(&args.range) {
        Ok(r) => r,
        Err(e) => {
            output.error(&args.range, e);
            return Ok(1);
        }
    };
    debug!("Parsed range {:?} as {}", args.range, range);

    match range.minimum() {
        Some(version) => {
            output.emit(&version, version_json(&version));
            Ok(0)
        }
        None => {
            output.error(&args.range, "range admits no version");
            Ok(1)
        }
    }
}

pub fn sort(args: SortArgs, output: &Output) -> Result<i32> {
    for version in &args.versions {
        if clean(version).is_err() {
            warn!("Skipping invalid version {:?}", version);
        }
    }

    let refs: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let kept = match &args.range {
        Some(range) => Semver::satisfied_by(&refs, range),
        None => args.versions.clone(),
    };
    let kept: Vec<&str> = kept.iter().map(String::as_str).collect();

    let sorted = if args.reverse {
        Semver::rsort(&kept)
    } else {
        Semver::sort(&kept)
    };

    output.emit(sorted.join("\n"), json!(sorted));
    Ok(0)
}
