//! Version value type: parsing, rendering and partial comparison

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

lazy_static! {
    // Numeric components are unsigned base-10; a signed token is malformed,
    // never a wildcard.
    static ref NUMERIC_RE: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("invalid numeric component {0:?}")]
    InvalidNumber(String),
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// A semantic version, possibly only partially specified.
///
/// An unset numeric component is a wildcard: it compares equal to anything at
/// its level, so partial versions like `1.2`, `1.x` or `*` are usable inside
/// range expressions. A concrete version has all three numeric components set
/// (see [`Version::is_valid`]). Once a component is unset, every
/// lower-significance component is unset too; the parser enforces this by
/// stopping at the first wildcard token.
///
/// Pre-release and build strings are carried verbatim; their inner grammar is
/// not validated and they compare as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub pre: String,
    pub build: String,
}

impl Version {
    /// The all-unset sentinel version.
    pub const NIL: Version = Version {
        major: None,
        minor: None,
        patch: None,
        pre: String::new(),
        build: String::new(),
    };

    /// Create a fully specified version without pre-release or build data.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            ..Version::NIL
        }
    }

    /// Parse a version string.
    ///
    /// Accepts an optional leading `v`/`V`, up to three dot-separated numeric
    /// components where `*`, `x`, `X` or an empty segment marks the component
    /// and everything below it as unset, then `-pre` and `+build` suffixes.
    /// The empty string parses to [`Version::NIL`].
    pub fn parse(s: &str) -> Result<Version, ParseError> {
        if s.is_empty() {
            return Ok(Version::NIL);
        }
        let s = s.strip_prefix(['v', 'V']).unwrap_or(s);
        let (s, build) = split_at(s, '+');
        let (s, pre) = split_at(s, '-');

        let mut v = Version {
            pre: pre.to_string(),
            build: build.to_string(),
            ..Version::NIL
        };
        let (token, mut rest) = split_at(s, '.');
        if !is_wildcard(token) {
            v.major = Some(parse_component(token)?);
            let (token, r) = split_at(rest, '.');
            rest = r;
            if !is_wildcard(token) {
                v.minor = Some(parse_component(token)?);
                let (token, r) = split_at(rest, '.');
                rest = r;
                if !is_wildcard(token) {
                    v.patch = Some(parse_component(token)?);
                }
            }
        }
        match rest.chars().next() {
            Some(c) => Err(ParseError::UnexpectedChar(c)),
            None => Ok(v),
        }
    }

    /// Whether this is a concrete version with all three numeric components set.
    ///
    /// Partial versions are only meaningful inside range expressions and are
    /// never valid as the version being tested.
    pub fn is_valid(&self) -> bool {
        self.major.is_some() && self.minor.is_some() && self.patch.is_some()
    }

    /// Wildcard-aware three-way comparison.
    ///
    /// Compares major, minor and patch in order; as soon as either side is
    /// unset at the current level the comparison short-circuits to `Equal`.
    /// When all numeric components compare equal, pre-release and build
    /// strings break the tie lexicographically.
    ///
    /// This is a partial ordering (a wildcard compares equal to everything at
    /// its level), so `Version` deliberately does not implement [`Ord`].
    pub fn compare(&self, other: &Version) -> Ordering {
        for (a, b) in [
            (self.major, other.major),
            (self.minor, other.minor),
            (self.patch, other.patch),
        ] {
            match (a, b) {
                (Some(a), Some(b)) => match a.cmp(&b) {
                    Ordering::Equal => {}
                    ord => return ord,
                },
                _ => return Ordering::Equal,
            }
        }
        match self.pre.cmp(&other.pre) {
            Ordering::Equal => self.build.cmp(&other.build),
            ord => ord,
        }
    }

    /// Equality under the wildcard-aware comparison.
    pub fn contains(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

fn split_at(s: &str, sep: char) -> (&str, &str) {
    match s.split_once(sep) {
        Some((left, right)) => (left, right),
        None => (s, ""),
    }
}

fn is_wildcard(token: &str) -> bool {
    matches!(token, "" | "*" | "x" | "X")
}

fn parse_component(token: &str) -> Result<u64, ParseError> {
    if !NUMERIC_RE.is_match(token) {
        return Err(ParseError::InvalidNumber(token.to_string()));
    }
    // overflow of u64 is treated the same as a non-numeric token
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(major) = self.major {
            write!(f, "{major}")?;
            if let Some(minor) = self.minor {
                write!(f, ".{minor}")?;
                if let Some(patch) = self.patch {
                    write!(f, ".{patch}")?;
                }
            }
        }
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(D::Error::custom)
    }
}
