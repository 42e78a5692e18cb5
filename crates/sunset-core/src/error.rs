//! Version parsing errors
//!
//! Copyright (c) 2025 Sunset Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Version parsing error
///
/// The only error kind the core library produces. Parse failures are always
/// surfaced to the caller; any fallback policy (such as disabling checks when
/// the configured version is unusable) belongs to the integration layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The version string had no numeric components
    #[error("empty version string")]
    Empty,

    /// A dot-separated component was not a non-negative integer
    #[error("invalid version component '{component}' in '{input}'")]
    InvalidComponent { component: String, input: String },
}
