//! Wildcard-aware semantic versioning
//!
//! This crate parses semantic versions that may be only partially specified
//! (`1.2`, `1.x`, `*`) and range expressions combining bare versions,
//! operators (`=`, `!=`, `<`, `<=`, `>`, `>=`, `^`, `~`), inclusive hyphen
//! ranges and `||` disjunction. Unset version components act as wildcards:
//! they compare equal to anything at and below their level.
//!
//! ```
//! use wildver::{ComparatorSet, Version};
//!
//! let range = ComparatorSet::parse("^1.2.3 || 2.0.0 - 2.5.0").unwrap();
//! assert!(range.contains(&Version::parse("1.9.0").unwrap()));
//! assert!(range.contains(&Version::parse("2.4.1").unwrap()));
//! assert!(!range.contains(&Version::parse("3.0.0").unwrap()));
//! ```

pub mod constraint;
mod semver;
mod version;

pub use constraint::{Comparator, ComparatorList, ComparatorSet, Condition, Range, Requirement};
pub use semver::Semver;
pub use version::{ParseError, Version};
