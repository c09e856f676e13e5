//! Release type transitions

use std::fmt;
use std::str::FromStr;

use crate::version::{is_numeric, parse, ParseError, Version};

/// Release type directive for [`inc`] and [`dec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
    Release,
}

impl ReleaseType {
    /// Get the string representation of the release type
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::PreMajor => "premajor",
            ReleaseType::PreMinor => "preminor",
            ReleaseType::PrePatch => "prepatch",
            ReleaseType::PreRelease => "prerelease",
            ReleaseType::Release => "release",
        }
    }

    /// Get all release types in discriminant order
    pub fn all() -> &'static [ReleaseType] {
        &[
            ReleaseType::Major,
            ReleaseType::Minor,
            ReleaseType::Patch,
            ReleaseType::PreMajor,
            ReleaseType::PreMinor,
            ReleaseType::PrePatch,
            ReleaseType::PreRelease,
            ReleaseType::Release,
        ]
    }
}

impl FromStr for ReleaseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|release| release.as_str() == lower)
            .ok_or(ParseError::InvalidReleaseType)
    }
}

impl TryFrom<i32> for ReleaseType {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::all().get(index).copied())
            .ok_or(ParseError::InvalidReleaseType)
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Add one to a digit string, mapping overflow to `error`.
pub(crate) fn bump(component: &str, error: ParseError) -> Result<String, ParseError> {
    let value: u64 = component.parse().map_err(|_| error)?;
    value.checked_add(1).map(|v| v.to_string()).ok_or(error)
}

/// Subtract one from a digit string, failing with `error` at zero.
fn drop_one(component: &str, error: ParseError) -> Result<String, ParseError> {
    let value: u64 = component.parse().map_err(|_| error)?;
    value.checked_sub(1).map(|v| v.to_string()).ok_or(error)
}

/// Produce the next version for the given release type.
///
/// Build metadata is never carried over.
pub fn inc(version: &Version, release_type: ReleaseType) -> Result<Version, ParseError> {
    let (major, minor, patch) = (version.major(), version.minor(), version.patch());
    let pre_release = version.pre_release();

    let next = match release_type {
        ReleaseType::Major => Version::from_parts(bump(major, ParseError::InvalidMajor)?, "0", "0", None, None),
        ReleaseType::Minor => Version::from_parts(major, bump(minor, ParseError::InvalidMinor)?, "0", None, None),
        ReleaseType::Patch => {
            if pre_release.is_some() {
                version.release()
            } else {
                Version::from_parts(major, minor, bump(patch, ParseError::InvalidPatch)?, None, None)
            }
        }
        ReleaseType::PreMajor => Version::from_parts(
            bump(major, ParseError::InvalidMajor)?,
            "0",
            "0",
            Some("0".to_string()),
            None,
        ),
        ReleaseType::PreMinor => Version::from_parts(
            major,
            bump(minor, ParseError::InvalidMinor)?,
            "0",
            Some("0".to_string()),
            None,
        ),
        ReleaseType::PrePatch => Version::from_parts(
            major,
            minor,
            bump(patch, ParseError::InvalidPatch)?,
            Some("0".to_string()),
            None,
        ),
        ReleaseType::PreRelease => match pre_release {
            Some(pre) if is_numeric(pre) => Version::from_parts(
                major,
                minor,
                patch,
                Some(bump(pre, ParseError::InvalidPrerelease)?),
                None,
            ),
            Some(_) => version.release(),
            None => Version::from_parts(
                major,
                minor,
                bump(patch, ParseError::InvalidPatch)?,
                Some("0".to_string()),
                None,
            ),
        },
        ReleaseType::Release => {
            if pre_release.is_none() {
                return Err(ParseError::InvalidInput);
            }
            version.release()
        }
    };

    Ok(next)
}

/// Parse `input` then apply [`inc`]
pub fn increment(input: &str, release_type: ReleaseType) -> Result<Version, ParseError> {
    inc(&parse(input)?, release_type)
}

/// Produce the previous release for `Major`, `Minor` or `Patch`.
///
/// Lower components are reset to zero; pre-release and build are dropped.
pub fn dec(version: &Version, release_type: ReleaseType) -> Result<Version, ParseError> {
    let (major, minor, patch) = (version.major(), version.minor(), version.patch());

    match release_type {
        ReleaseType::Major => Ok(Version::from_parts(drop_one(major, ParseError::InvalidMajor)?, "0", "0", None, None)),
        ReleaseType::Minor => Ok(Version::from_parts(major, drop_one(minor, ParseError::InvalidMinor)?, "0", None, None)),
        ReleaseType::Patch => Ok(Version::from_parts(major, minor, drop_one(patch, ParseError::InvalidPatch)?, None, None)),
        _ => Err(ParseError::InvalidReleaseType),
    }
}

/// Parse `input` then apply [`dec`]
pub fn decrement(input: &str, release_type: ReleaseType) -> Result<Version, ParseError> {
    dec(&parse(input)?, release_type)
}
