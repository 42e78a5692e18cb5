//! Minecraft-style version parsing and ordering
//!
//! Copyright (c) 2025 Sunset Team
//! Licensed under the Apache-2.0 license

use crate::error::VersionError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Parsed dot-separated version
///
/// Minecraft release versions vary in arity ("1.20" and "1.20.1" are both
/// real releases), so components are kept as a sequence rather than a fixed
/// major/minor/patch triple. A missing trailing component compares as zero,
/// which makes "1.20" and "1.20.0" the same version.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u32>,
    pre_release: Option<String>,
}

impl Version {
    /// Create a version from numeric components
    pub fn new(components: Vec<u32>) -> Self {
        Self {
            components,
            pre_release: None,
        }
    }

    /// Parse a version string
    ///
    /// Accepts an optional `v` prefix and an optional `-suffix` pre-release
    /// tag ("1.20.2-pre1"). Everything before the suffix must be a
    /// dot-separated sequence of non-negative integers.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let input = version_str;

        // Remove 'v' prefix if present
        let version_str = version_str.strip_prefix('v').unwrap_or(version_str);

        // Split on '-' for the pre-release tag
        let (version_part, pre_release) = if let Some(dash_pos) = version_str.find('-') {
            (
                &version_str[..dash_pos],
                Some(version_str[dash_pos + 1..].to_string()),
            )
        } else {
            (version_str, None)
        };

        if version_part.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut components = Vec::new();
        for part in version_part.split('.') {
            let value = part.parse().map_err(|_| VersionError::InvalidComponent {
                component: part.to_string(),
                input: input.to_string(),
            })?;
            components.push(value);
        }

        Ok(Self {
            components,
            pre_release,
        })
    }

    /// Numeric components as parsed, without trailing-zero normalization
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// The pre-release tag, if any
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// Check if this is a pre-release version
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    fn component(&self, index: usize) -> u32 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
        }
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            match self.component(i).cmp(&other.component(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        // Pre-release versions have lower precedence than their release
        match (&self.pre_release, &other.pre_release) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

// Equality must agree with the ordering ("1.20" == "1.20.0"), so it cannot
// be derived from the fields. No Hash impl for the same reason.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        let v = Version::parse("1.20.1").unwrap();
        assert_eq!(v.components(), &[1, 20, 1]);
        assert_eq!(v.pre_release(), None);

        let v = Version::parse("v1.20").unwrap();
        assert_eq!(v.components(), &[1, 20]);

        let v = Version::parse("1.20.2-pre1").unwrap();
        assert_eq!(v.components(), &[1, 20, 2]);
        assert_eq!(v.pre_release(), Some("pre1"));
        assert!(v.is_pre_release());

        let v = Version::parse("1.21-rc1").unwrap();
        assert_eq!(v.components(), &[1, 21]);
        assert_eq!(v.pre_release(), Some("rc1"));

        assert_eq!(Version::new(vec![1, 20]), Version::parse("1.20").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Version::parse(""), Err(VersionError::Empty));
        assert_eq!(Version::parse("-pre1"), Err(VersionError::Empty));

        assert!(matches!(
            Version::parse("abc"),
            Err(VersionError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Version::parse("1..2"),
            Err(VersionError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Version::parse("1.20.x"),
            Err(VersionError::InvalidComponent { .. })
        ));

        // The offending component is named in the error
        match Version::parse("1.20.x") {
            Err(VersionError::InvalidComponent { component, input }) => {
                assert_eq!(component, "x");
                assert_eq!(input, "1.20.x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_version_comparison() {
        let parse = |s| Version::parse(s).unwrap();

        assert!(parse("1.20.1") < parse("1.20.2"));
        assert!(parse("1.21") > parse("1.20.9"));
        assert!(parse("1.20") < parse("1.20.1"));
        assert!(parse("2.0") > parse("1.99.99"));

        // Missing trailing components compare as zero
        assert_eq!(parse("1.20"), parse("1.20.0"));
        assert_eq!(parse("1.20"), parse("1.20.0.0"));

        // A release outranks its own pre-release
        assert!(parse("1.20.2-pre1") < parse("1.20.2"));
        assert!(parse("1.20.2-pre1") < parse("1.20.2-pre2"));
        assert!(parse("1.20.2-pre1") > parse("1.20.1"));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["1.20.1", "1.21", "1.20.2-pre1", "0.14.4"] {
            assert_eq!(Version::parse(s).unwrap().to_string(), s);
        }

        // Canonical rendering strips redundant leading zeros and the prefix
        assert_eq!(Version::parse("1.07").unwrap().to_string(), "1.7");
        assert_eq!(Version::parse("v1.20").unwrap().to_string(), "1.20");
    }

    #[test]
    fn test_serde_string_form() {
        let v = Version::parse("1.20.1").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"1.20.1\"");

        let v: Version = serde_json::from_str("\"1.20.2-pre1\"").unwrap();
        assert_eq!(v.to_string(), "1.20.2-pre1");

        assert!(serde_json::from_str::<Version>("\"nonsense\"").is_err());
    }
}
