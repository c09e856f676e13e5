//! Single-version commands: validate, parse, clean, coerce, compare

use anyhow::Result;
use clap::Args;
use log::debug;
use serde_json::json;
use std::cmp::Ordering;

use crate::output::{describe, version_json, Output};
use weaver_semver::Comparator;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Version string
    pub version: String,
}

#[derive(Args, Debug)]
pub struct CoerceArgs {
    /// Text to extract a version from
    pub text: String,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

pub fn validate(args: VersionArgs, output: &Output) -> Result<i32> {
    let valid = weaver_semver::validate(&args.version);
    debug!("validate {:?} -> {}", args.version, valid);

    output.emit(
        if valid { "valid" } else { "invalid" },
        json!({ "version": args.version, "valid": valid }),
    );
    Ok(if valid { 0 } else { 1 })
}

pub fn parse(args: VersionArgs, output: &Output) -> Result<i32> {
    match weaver_semver::parse(&args.version) {
        Ok(version) => {
            output.emit(describe(&version), version_json(&version));
            Ok(0)
        }
        Err(e) => {
            output.error(&args.version, e);
            Ok(1)
        }
    }
}

pub fn clean(args: VersionArgs, output: &Output) -> Result<i32> {
    match weaver_semver::clean(&args.version) {
        Ok(version) => {
            output.emit(&version, version_json(&version));
            Ok(0)
        }
        Err(e) => {
            output.error(&args.version, e);
            Ok(1)
        }
    }
}

pub fn coerce(args: CoerceArgs, output: &Output) -> Result<i32> {
    match weaver_semver::coerce(&args.text) {
        Some(version) => {
            output.emit(&version, version_json(&version));
            Ok(0)
        }
        None => {
            output.error(&args.text, "no version found");
            Ok(1)
        }
    }
}

pub fn compare(args: CompareArgs, output: &Output) -> Result<i32> {
    let left = match weaver_semver::parse(&args.left) {
        Ok(v) => v,
        Err(e) => {
            output.error(&args.left, e);
            return Ok(1);
        }
    };
    let right = match weaver_semver::parse(&args.right) {
        Ok(v) => v,
        Err(e) => {
            output.error(&args.right, e);
            return Ok(1);
        }
    };

    let order = match Comparator::compare(&left, &right) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    output.emit(order, json!({ "left": args.left, "right": args.right, "order": order }));
    Ok(0)
}
