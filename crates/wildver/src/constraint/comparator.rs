//! Comparator algebra: leaf predicates and the AND/OR composites

use std::cmp::Ordering;
use std::fmt;

use super::Condition;
use crate::version::Version;

/// Single operator + version predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub cond: Condition,
    pub version: Version,
}

impl Requirement {
    pub fn new(cond: Condition, version: Version) -> Self {
        Requirement { cond, version }
    }

    /// Check whether `v` satisfies this requirement.
    ///
    /// Caret and tilde are deliberately looser than npm-style ranges: caret
    /// constrains the major (the minor too when major is 0) and tilde
    /// constrains major.minor, but neither ever pins the patch, even when the
    /// requirement spells one out.
    pub fn contains(&self, v: &Version) -> bool {
        let ord = v.compare(&self.version);
        match self.cond {
            Condition::Eq => ord == Ordering::Equal,
            Condition::Ne => ord != Ordering::Equal,
            Condition::Lt => ord == Ordering::Less,
            Condition::Le => ord != Ordering::Greater,
            Condition::Gt => ord == Ordering::Greater,
            Condition::Ge => ord != Ordering::Less,
            Condition::Caret => match self.version.major {
                None => true,
                Some(0) => {
                    v.major == Some(0)
                        && (self.version.minor.is_none() || self.version.minor == v.minor)
                }
                Some(major) => v.major == Some(major),
            },
            Condition::Tilde => match self.version.major {
                None => true,
                Some(major) => {
                    v.major == Some(major)
                        && (self.version.minor.is_none() || self.version.minor == v.minor)
                }
            },
            // the zero value matches nothing
            Condition::None => false,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cond, self.version)
    }
}

/// Closed version interval, inclusive at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub min: Version,
    pub max: Version,
}

impl Range {
    pub fn new(min: Version, max: Version) -> Self {
        Range { min, max }
    }

    /// Check whether `v` lies within the interval. A wildcard component in a
    /// bound matches unconditionally at its level.
    pub fn contains(&self, v: &Version) -> bool {
        self.min.compare(v) != Ordering::Greater && self.max.compare(v) != Ordering::Less
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// A single node of a parsed range expression.
///
/// The variant set is closed; `contains` and rendering dispatch with an
/// exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparator {
    /// Bare version, matching by wildcard-aware equality
    Version(Version),
    Requirement(Requirement),
    Range(Range),
    List(ComparatorList),
    Set(ComparatorSet),
}

impl Comparator {
    pub fn contains(&self, v: &Version) -> bool {
        match self {
            Comparator::Version(w) => w.contains(v),
            Comparator::Requirement(r) => r.contains(v),
            Comparator::Range(r) => r.contains(v),
            Comparator::List(l) => l.contains(v),
            Comparator::Set(s) => s.contains(v),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Version(v) => v.fmt(f),
            Comparator::Requirement(r) => r.fmt(f),
            Comparator::Range(r) => r.fmt(f),
            Comparator::List(l) => l.fmt(f),
            Comparator::Set(s) => s.fmt(f),
        }
    }
}

impl From<Version> for Comparator {
    fn from(v: Version) -> Self {
        Comparator::Version(v)
    }
}

impl From<Requirement> for Comparator {
    fn from(r: Requirement) -> Self {
        Comparator::Requirement(r)
    }
}

impl From<Range> for Comparator {
    fn from(r: Range) -> Self {
        Comparator::Range(r)
    }
}

impl From<ComparatorList> for Comparator {
    fn from(l: ComparatorList) -> Self {
        Comparator::List(l)
    }
}

impl From<ComparatorSet> for Comparator {
    fn from(s: ComparatorSet) -> Self {
        Comparator::Set(s)
    }
}

/// Conjunction: passes only when every member passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparatorList(pub Vec<Comparator>);

impl ComparatorList {
    pub fn contains(&self, v: &Version) -> bool {
        self.0.iter().all(|c| c.contains(v))
    }
}

impl fmt::Display for ComparatorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            // a nested disjunction needs parentheses to survive re-parsing
            if matches!(c, Comparator::Set(_)) {
                write!(f, "({c})")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Disjunction: passes when any member passes. The empty set is the
/// "no constraint" default and contains every version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparatorSet(pub Vec<Comparator>);

impl ComparatorSet {
    pub fn contains(&self, v: &Version) -> bool {
        self.0.is_empty() || self.0.iter().any(|c| c.contains(v))
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(cond: Condition, s: &str) -> Requirement {
        Requirement::new(cond, Version::parse(s).unwrap())
    }

    #[test]
    fn test_requirement_ordering_conditions() {
        let v123 = Version::new(1, 2, 3);
        assert!(req(Condition::Eq, "1.2.3").contains(&v123));
        assert!(!req(Condition::Eq, "1.2.4").contains(&v123));
        assert!(req(Condition::Ne, "1.2.4").contains(&v123));
        assert!(req(Condition::Lt, "1.3.0").contains(&v123));
        assert!(!req(Condition::Lt, "1.2.3").contains(&v123));
        assert!(req(Condition::Le, "1.2.3").contains(&v123));
        assert!(req(Condition::Gt, "1.2.2").contains(&v123));
        assert!(!req(Condition::Gt, "1.2.3").contains(&v123));
        assert!(req(Condition::Ge, "1.2.3").contains(&v123));
    }

    #[test]
    fn test_requirement_with_wildcard_version() {
        // a wildcard in the requirement compares equal at its level
        assert!(req(Condition::Eq, "1.2").contains(&Version::new(1, 2, 9)));
        assert!(!req(Condition::Eq, "1.2").contains(&Version::new(1, 3, 0)));
        assert!(req(Condition::Ge, "1.2").contains(&Version::new(1, 2, 0)));
    }

    #[test]
    fn test_caret() {
        assert!(req(Condition::Caret, "1.2.3").contains(&Version::new(1, 9, 0)));
        assert!(req(Condition::Caret, "1.2.3").contains(&Version::new(1, 0, 0)));
        assert!(!req(Condition::Caret, "1.2.3").contains(&Version::new(2, 0, 0)));

        // major 0 pins the minor
        assert!(req(Condition::Caret, "0.1.2").contains(&Version::new(0, 1, 9)));
        assert!(!req(Condition::Caret, "0.1.2").contains(&Version::new(0, 2, 0)));
        assert!(!req(Condition::Caret, "0.1.2").contains(&Version::new(1, 1, 2)));
        assert!(req(Condition::Caret, "0.x").contains(&Version::new(0, 7, 0)));

        // wildcard major matches everything
        assert!(req(Condition::Caret, "*").contains(&Version::new(42, 0, 0)));
    }

    #[test]
    fn test_tilde() {
        assert!(req(Condition::Tilde, "1.2.3").contains(&Version::new(1, 2, 9)));
        assert!(!req(Condition::Tilde, "1.2.3").contains(&Version::new(1, 3, 0)));
        assert!(!req(Condition::Tilde, "1.2.3").contains(&Version::new(2, 2, 3)));
        // patch is never pinned
        assert!(req(Condition::Tilde, "1.2.3").contains(&Version::new(1, 2, 0)));
        // minor left open
        assert!(req(Condition::Tilde, "1.x").contains(&Version::new(1, 9, 9)));
        assert!(req(Condition::Tilde, "*").contains(&Version::new(3, 0, 0)));
    }

    #[test]
    fn test_range_inclusive() {
        let r = Range::new(Version::new(1, 0, 0), Version::new(2, 0, 0));
        assert!(r.contains(&Version::new(1, 0, 0)));
        assert!(r.contains(&Version::new(1, 5, 0)));
        assert!(r.contains(&Version::new(2, 0, 0)));
        assert!(!r.contains(&Version::new(0, 9, 9)));
        assert!(!r.contains(&Version::new(2, 0, 1)));
    }

    #[test]
    fn test_range_wildcard_bound() {
        // wildcard bound matches unconditionally at its level
        let r = Range::new(
            Version::parse("1.x").unwrap(),
            Version::parse("2.x").unwrap(),
        );
        assert!(r.contains(&Version::new(1, 0, 0)));
        assert!(r.contains(&Version::new(2, 999, 999)));
        assert!(!r.contains(&Version::new(3, 0, 0)));
    }

    #[test]
    fn test_list_and_set_logic() {
        let list = ComparatorList(vec![
            req(Condition::Ge, "1.0.0").into(),
            req(Condition::Lt, "2.0.0").into(),
        ]);
        assert!(list.contains(&Version::new(1, 5, 0)));
        assert!(!list.contains(&Version::new(2, 5, 0)));

        let set = ComparatorSet(vec![
            Comparator::List(list),
            Comparator::Version(Version::new(3, 0, 0)),
        ]);
        assert!(set.contains(&Version::new(1, 5, 0)));
        assert!(set.contains(&Version::new(3, 0, 0)));
        assert!(!set.contains(&Version::new(2, 5, 0)));

        // vacuous truths
        assert!(ComparatorList::default().contains(&Version::new(9, 9, 9)));
        assert!(ComparatorSet::default().contains(&Version::new(9, 9, 9)));
    }

    #[test]
    fn test_rendering() {
        let list = ComparatorList(vec![
            req(Condition::Ge, "1.0.0").into(),
            req(Condition::Lt, "2.0.0").into(),
        ]);
        assert_eq!(list.to_string(), ">=1.0.0 <2.0.0");

        let set = ComparatorSet(vec![
            Comparator::List(list.clone()),
            Comparator::Version(Version::new(3, 0, 0)),
        ]);
        assert_eq!(set.to_string(), ">=1.0.0 <2.0.0 || 3.0.0");

        // nested sets are parenthesized inside a list
        let nested = ComparatorList(vec![Comparator::Set(set), req(Condition::Ne, "1.5.0").into()]);
        assert_eq!(nested.to_string(), "(>=1.0.0 <2.0.0 || 3.0.0) !=1.5.0");

        let r = Range::new(Version::new(1, 0, 0), Version::new(2, 0, 0));
        assert_eq!(r.to_string(), "1.0.0 - 2.0.0");
        assert_eq!(req(Condition::Caret, "1.2").to_string(), "^1.2");
    }
}
