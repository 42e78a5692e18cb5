//! Deprecation-removal severity policy
//!
//! Copyright (c) 2025 Sunset Team
//! Licensed under the Apache-2.0 license

use crate::error::VersionError;
use crate::version::Version;
use serde::{Deserialize, Serialize};

/// Severity of a single deprecation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Removal version not reached yet
    Silent,
    /// Removal version reached, but errors are suppressed
    Warn,
    /// Removal version reached
    Error,
}

/// Decide the severity for one deprecated element
///
/// `Silent` while the current version is below the removal version; once the
/// removal version is reached or passed, `Warn` if errors are suppressed and
/// `Error` otherwise.
pub fn decide(removal: &Version, current: &Version, errors_suppressed: bool) -> Decision {
    if current < removal {
        Decision::Silent
    } else if errors_suppressed {
        Decision::Warn
    } else {
        Decision::Error
    }
}

/// Diagnostic text for an element due for removal
pub fn removal_message(removal: &Version, current: &Version) -> String {
    format!(
        "This element is deprecated for removal in {} or newer. Current minecraft version is {}.",
        removal, current
    )
}

/// One candidate element from a deprecation report
///
/// Carries what the build-side extraction records per element: a display
/// name, the marked-for-removal flag, and the version string the removal is
/// scheduled for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deprecation {
    /// Display name of the element, e.g. "net.example.Widget#resize()"
    pub element: String,

    /// Whether the element is marked for removal
    #[serde(default)]
    pub for_removal: bool,

    /// Version at or after which the element is slated to disappear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl Deprecation {
    /// Parse the declared removal version, if any
    ///
    /// Elements without a `since` string are skipped by the policy, so an
    /// absent or empty value is `Ok(None)` rather than an error. A present
    /// but unparseable value surfaces immediately.
    pub fn removal_version(&self) -> Result<Option<Version>, VersionError> {
        match self.since.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => Version::parse(s).map(Some),
        }
    }
}

/// One evaluated element whose removal version has been reached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub element: String,
    pub removal_version: Version,
    pub decision: Decision,
    pub message: String,
}

/// Removal-checking configuration, passed by value into each evaluation
///
/// A policy without a current version is disabled: every element evaluates
/// to nothing. This mirrors how a build behaves when no target version has
/// been configured.
#[derive(Debug, Clone, Default)]
pub struct RemovalPolicy {
    current: Option<Version>,
    errors_suppressed: bool,
}

impl RemovalPolicy {
    /// Policy for a configured current version
    pub fn new(current: Version, errors_suppressed: bool) -> Self {
        Self {
            current: Some(current),
            errors_suppressed,
        }
    }

    /// Policy with checking disabled
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether any element can produce a finding
    pub fn is_enabled(&self) -> bool {
        self.current.is_some()
    }

    /// The configured current version, if checking is enabled
    pub fn current(&self) -> Option<&Version> {
        self.current.as_ref()
    }

    /// Evaluate one element against the configured current version
    ///
    /// Returns `Ok(None)` when there is nothing to report: checking is
    /// disabled, the element is not marked for removal, it declares no
    /// removal version, or the removal version lies in the future. Fails
    /// when a declared removal version does not parse.
    pub fn evaluate(&self, deprecation: &Deprecation) -> Result<Option<Finding>, VersionError> {
        let current = match &self.current {
            Some(current) => current,
            None => return Ok(None),
        };

        if !deprecation.for_removal {
            return Ok(None);
        }

        let removal = match deprecation.removal_version()? {
            Some(removal) => removal,
            None => return Ok(None),
        };

        let decision = decide(&removal, current, self.errors_suppressed);
        if decision == Decision::Silent {
            return Ok(None);
        }

        let message = removal_message(&removal, current);
        Ok(Some(Finding {
            element: deprecation.element.clone(),
            removal_version: removal,
            decision,
            message,
        }))
    }

    /// Evaluate a whole report, keeping only elements due for removal
    pub fn evaluate_report(&self, report: &[Deprecation]) -> Result<Vec<Finding>, VersionError> {
        if self.current.is_none() {
            tracing::debug!("no current version configured, deprecation checking disabled");
            return Ok(Vec::new());
        }

        let mut findings = Vec::new();
        for deprecation in report {
            if let Some(finding) = self.evaluate(deprecation)? {
                findings.push(finding);
            }
        }
        Ok(findings)
    }
}
