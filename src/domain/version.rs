use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a tag string, best effort.
    ///
    /// A leading `v` or `V` is ignored. Anything the semver grammar accepts
    /// (including pre-release and build suffixes) is read through
    /// [`semver::Version`]. Everything else is split on `.`: each of the first
    /// three components contributes its leading digits, and missing or
    /// digit-less components read as 0. `"2.1"` is `2.1.0`, `""` is `0.0.0`.
    pub fn parse_lossy(tag: &str) -> Self {
        let clean_tag = tag
            .trim()
            .trim_start_matches('v')
            .trim_start_matches('V');

        if let Ok(v) = semver::Version::parse(clean_tag) {
            return Version::new(v.major, v.minor, v.patch);
        }

        let mut parts = clean_tag.split('.').map(leading_number);
        let major = parts.next().unwrap_or(0);
        let minor = parts.next().unwrap_or(0);
        let patch = parts.next().unwrap_or(0);
        Version::new(major, minor, patch)
    }

    /// Bump version according to the release segment
    /// Increment `segment` and reset every lower segment to 0.
    ///
    /// Fails when the incremented component would not fit in a `u64`.
    pub fn bump(&self, segment: ReleaseSegment) -> Result<Self> {
        let overflow = || ReleaseError::VersionOverflow {
            version: self.to_string(),
            segment: segment.to_string(),
        };
        let bumped = match segment {
            ReleaseSegment::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            ReleaseSegment::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            ReleaseSegment::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

fn leading_number(component: &str) -> u64 {
    let digits: String = component
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which part of the version a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseSegment {
    Major,
    Minor,
    Patch,
}

impl ReleaseSegment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseSegment::Major => "major",
            ReleaseSegment::Minor => "minor",
            ReleaseSegment::Patch => "patch",
        }
    }
}

impl FromStr for ReleaseSegment {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("major") => Ok(ReleaseSegment::Major),
            s if s.eq_ignore_ascii_case("minor") => Ok(ReleaseSegment::Minor),
            s if s.eq_ignore_ascii_case("patch") => Ok(ReleaseSegment::Patch),
            _ => Err(ReleaseError::invalid_segment(s)),
        }
    }
}

impl fmt::Display for ReleaseSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
