// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git --version` parsing.

use serde::Serialize;
use std::fmt;

use crate::error::RepoError;

/// Oldest git with `switch` and `restore`.
pub const MIN_GIT_VERSION: (u32, u32) = (2, 23);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GitVersion {
    /// Parses `git version X.Y[.Z][.vendor...]`.
    ///
    /// Unlike the listing parsers this one fails: an unreadable version
    /// means the configured executable is probably not git.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Parse`] if the text does not start with
    /// `git version` followed by numeric major and minor components.
    pub fn parse(text: &str) -> Result<Self, RepoError> {
        let mut words = text.split_whitespace();
        let (Some("git"), Some("version"), Some(number)) = (words.next(), words.next(), words.next())
        else {
            return Err(RepoError::parse(format!(
                "unexpected git version output: {:?}",
                text.trim()
            )));
        };

        let mut nums = number.split('.');
        let major = parse_component(nums.next(), "major", number)?;
        let minor = parse_component(nums.next(), "minor", number)?;
        // vendor builds carry suffixes like "2.39.2.windows.1" or "2.40.0-rc1"
        let patch = nums
            .next()
            .and_then(|p| p.split(|c: char| !c.is_ascii_digit()).next())
            .and_then(|p| p.parse().ok())
            .unwrap_or(0);

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        (self.major, self.minor) >= MIN_GIT_VERSION
    }
}

fn parse_component(part: Option<&str>, name: &str, number: &str) -> Result<u32, RepoError> {
    part.and_then(|p| p.parse().ok())
        .ok_or_else(|| RepoError::parse(format!("invalid {name} version in {number:?}")))
}

impl fmt::Display for GitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::GitVersion;

    #[test]
    fn test_parse_standard_version() {
        let version = GitVersion::parse("git version 2.39.2\n").unwrap();
        assert_eq!(version.to_string(), "2.39.2");
        assert!(version.is_supported());
    }

    #[test]
    fn test_parse_vendor_suffixes() {
        let version = GitVersion::parse("git version 2.39.2.windows.1").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (2, 39, 2));
        let version = GitVersion::parse("git version 2.41.0-rc1 (Apple Git-1)").unwrap();
        assert_eq!(version.patch, 0);
        assert_eq!(GitVersion::parse("git version 2.45").unwrap().patch, 0);
    }

    #[test]
    fn test_minimum_version() {
        assert!(!GitVersion::parse("git version 2.22.5").unwrap().is_supported());
        assert!(GitVersion::parse("git version 2.23.0").unwrap().is_supported());
        assert!(GitVersion::parse("git version 3.0.0").unwrap().is_supported());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = GitVersion::parse("hg version 6.1").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r#"failed to parse git output: unexpected git version output: "hg version 6.1""#);
        assert!(GitVersion::parse("git version x.1").is_err());
        assert!(GitVersion::parse("").is_err());
    }
}
