//! Semver facade providing one-shot version and range operations

use crate::constraint::ComparatorSet;
use crate::version::{ParseError, Version};

/// Main facade for version/range checks when the parsed structures are not
/// worth keeping around
pub struct Semver;

impl Semver {
    /// Check if a concrete version satisfies a range expression.
    ///
    /// Unparseable or partial versions and unparseable ranges count as
    /// unsatisfied.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let v = match Version::parse(version) {
            Ok(v) if v.is_valid() => v,
            _ => return false,
        };
        match ComparatorSet::parse(range) {
            Ok(set) => set.contains(&v),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the range, preserving input order and
    /// original spellings.
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let set = match ComparatorSet::parse(range) {
            Ok(set) => set,
            Err(_) => return Vec::new(),
        };
        versions
            .iter()
            .filter(|s| match Version::parse(s) {
                Ok(v) => v.is_valid() && set.contains(&v),
                Err(_) => false,
            })
            .map(|s| s.to_string())
            .collect()
    }

    /// Parse a range expression once for reuse across many checks.
    pub fn parse_range(range: &str) -> Result<ComparatorSet, ParseError> {
        ComparatorSet::parse(range)
    }
}
