//! Release commands: inc, dec

use anyhow::Result;
use clap::Args;
use log::info;
use std::str::FromStr;

use crate::config::IncConfig;
use crate::output::{version_json, Output};
use weaver_semver::{decrement, increment, ReleaseType};

#[derive(Args, Debug)]
pub struct IncArgs {
    /// Version to increment
    pub version: String,

    /// Release type (major, minor, patch, premajor, preminor, prepatch,
    /// prerelease, release). Defaults to [inc] release in weaver.toml, then patch.
    pub release: Option<String>,
}

#[derive(Args, Debug)]
pub struct DecArgs {
    /// Version to decrement
    pub version: String,

    /// Release type (major, minor, patch)
    pub release: String,
}

pub fn inc(args: IncArgs, config: &IncConfig, output: &Output) -> Result<i32> {
    let name = args
        .release
        .or_else(|| config.release.clone())
        .unwrap_or_else(|| ReleaseType::Patch.to_string());

    let release_type = match ReleaseType::from_str(&name) {
        Ok(r) => r,
        Err(e) => {
            output.error(&name, e);
            return Ok(1);
        }
    };

    match increment(&args.version, release_type) {
        Ok(version) => {
            info!("{} {} -> {}", release_type, args.version, version);
            output.emit(&version, version_json(&version));
            Ok(0)
        }
        Err(e) => {
            output.error(&args.version, e);
            Ok(1)
        }
    }
}

pub fn dec(args: DecArgs, output: &Output) -> Result<i32> {
    let release_type = match ReleaseType::from_str(&args.release) {
        Ok(r) => r,
        Err(e) => {
            output.error(&args.release, e);
            return Ok(1);
        }
    };

    match decrement(&args.version, release_type) {
        Ok(version) => {
            info!("{} {} -> {}", release_type, args.version, version);
            output.emit(&version, version_json(&version));
            Ok(0)
        }
        Err(e) => {
            output.error(&args.version, e);
            Ok(1)
        }
    }
}
