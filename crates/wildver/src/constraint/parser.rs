//! Range expression parser
//!
//! Grammar (whitespace-insensitive around tokens):
//!
//! ```text
//! set         := list ( "||" list )*
//! list        := comparator+
//! comparator  := version | version "-" version | op version
//! op          := "==" | "=" | "!=" | "!" | "<=" | "<" | ">=" | ">" | "^" | "~"
//! ```

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Comparator, ComparatorList, ComparatorSet, Condition, Range, Requirement};
use crate::version::{ParseError, Version};

lazy_static! {
    // Fixed operator prefixes, longest spelling first so `<=` wins over `<`.
    static ref CONDITION_RE: Regex = Regex::new(r"^(==|=|!=|!|<=|<|>=|>|\^|~)").unwrap();
}

impl ComparatorSet {
    /// Parse a range expression such as `">=1.0 <2 || 3.x || 1.0.0 - 1.5.0"`.
    ///
    /// Comparators separated by whitespace are ANDed into a list; `||` closes
    /// the current list and ORs it into the set. The empty string parses to
    /// the empty set, which contains everything.
    pub fn parse(s: &str) -> Result<ComparatorSet, ParseError> {
        let mut set = ComparatorSet::default();
        let mut list = ComparatorList::default();
        let mut rest = s;
        loop {
            rest = rest.trim_start();
            let first = match rest.chars().next() {
                Some(c) => c,
                None => {
                    if !list.0.is_empty() {
                        set.0.push(Comparator::List(list));
                    } else if !set.0.is_empty() {
                        // input ended right after a `||`
                        return Err(ParseError::UnexpectedEnd);
                    }
                    return Ok(set);
                }
            };

            if let Some(r) = rest.strip_prefix("||") {
                if list.0.is_empty() {
                    // leading or doubled `||`
                    return Err(ParseError::UnexpectedChar('|'));
                }
                set.0.push(Comparator::List(std::mem::take(&mut list)));
                rest = r;
                continue;
            }

            if first.is_ascii_digit() || matches!(first, '*' | 'x' | 'X') {
                let (token, r) = split_token(rest);
                let min = Version::parse(token)?;
                rest = r.trim_start();
                if let Some(r) = rest.strip_prefix('-') {
                    rest = r.trim_start();
                    if rest.is_empty() {
                        return Err(ParseError::UnexpectedEnd);
                    }
                    let (token, r) = split_token(rest);
                    let max = Version::parse(token)?;
                    rest = r;
                    list.0.push(Range::new(min, max).into());
                } else {
                    list.0.push(min.into());
                }
                continue;
            }

            let m = match CONDITION_RE.find(rest) {
                Some(m) => m,
                None => return Err(ParseError::UnexpectedChar(first)),
            };
            let cond = Condition::parse(m.as_str());
            rest = rest[m.end()..].trim_start();
            if rest.is_empty() {
                return Err(ParseError::UnexpectedEnd);
            }
            let (token, r) = split_token(rest);
            let version = Version::parse(token)?;
            rest = r;
            list.0.push(Requirement::new(cond, version).into());
        }
    }
}

// Split off one whitespace-delimited token, leaving the delimiter in the
// remainder for the next trim.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

impl FromStr for ComparatorSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparatorSet::parse(s)
    }
}

impl Serialize for ComparatorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ComparatorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ComparatorSet::parse(&s).map_err(D::Error::custom)
    }
}
