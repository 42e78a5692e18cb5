//! Sunset Core - version ordering and deprecation-removal policy
//!
//! This crate carries the two pieces a deprecation-removal check is built
//! from:
//! - **Version**: parsing and total ordering for Minecraft-style
//!   dot-separated versions ("1.20", "1.20.1", "1.20.2-pre1")
//! - **RemovalPolicy**: the pure decision of whether an element that is
//!   deprecated for removal should be silent, warn, or fail the build,
//!   given the version the project currently targets
//!
//! Everything here is a pure function over immutable values: no I/O, no
//! shared state, safe to call from any number of build workers at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use sunset_core::{Decision, Deprecation, RemovalPolicy, Version};
//!
//! let current = Version::parse("1.21").unwrap();
//! let policy = RemovalPolicy::new(current, false);
//!
//! let element = Deprecation {
//!     element: "net.example.Widget#resize()".to_string(),
//!     for_removal: true,
//!     since: Some("1.20".to_string()),
//! };
//!
//! let finding = policy.evaluate(&element).unwrap().expect("due for removal");
//! assert_eq!(finding.decision, Decision::Error);
//! ```
//!
//! Comparisons use the conventional rules for Minecraft releases: components
//! compare left to right, a missing trailing component counts as zero
//! (`1.20 == 1.20.0`), and a pre-release sorts just below its release.
//!
//! Copyright (c) 2025 Sunset Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod policy;
pub mod version;

// Re-export commonly used types for convenience
pub use error::VersionError;
pub use policy::{decide, removal_message, Decision, Deprecation, Finding, RemovalPolicy};
pub use version::Version;
