//! Rendering of command results as plain text or JSON

use clap::ValueEnum;
use colored::Colorize;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt::Display;
use weaver_semver::Version;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Output { format }
    }

    /// Print a result on stdout
    pub fn emit(&self, plain: impl Display, value: Value) {
        match self.format {
            OutputFormat::Plain => println!("{}", plain),
            OutputFormat::Json => println!("{}", value),
        }
    }

    /// Report input the command could not handle
    pub fn error(&self, input: &str, error: impl Display) {
        match self.format {
            OutputFormat::Plain => eprintln!("{}: {}", input.bold(), error.to_string().red()),
            OutputFormat::Json => println!("{}", json!({ "input": input, "error": error.to_string() })),
        }
    }
}

pub fn version_json(version: &Version) -> Value {
    json!({
        "version": version.to_string(),
        "major": version.major(),
        "minor": version.minor(),
        "patch": version.patch(),
        "prerelease": version.pre_release(),
        "build": version.build(),
    })
}

pub fn describe(version: &Version) -> String {
    format!(
        "major: {}\nminor: {}\npatch: {}\nprerelease: {}\nbuild: {}",
        version.major(),
        version.minor(),
        version.patch(),
        version.pre_release().unwrap_or("-"),
        version.build().unwrap_or("-"),
    )
}
