//! Comparison operators for version requirements

use std::fmt;

/// Comparison operators accepted in range expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    /// Zero value for an absent condition; never produced by the parser
    #[default]
    None,
    /// Equal (`=` or `==`)
    Eq,
    /// Not equal (`!` or `!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than or equal (`>=`)
    Ge,
    /// Caret (`^`): compatible within major, or within minor when major is 0
    Caret,
    /// Tilde (`~`): compatible within major.minor, patch unconstrained
    Tilde,
}

impl Condition {
    /// Map an operator spelling to its condition; unknown spellings map to
    /// [`Condition::None`].
    pub fn parse(s: &str) -> Condition {
        match s {
            "=" | "==" => Condition::Eq,
            "!" | "!=" => Condition::Ne,
            "<" => Condition::Lt,
            ">" => Condition::Gt,
            "<=" => Condition::Le,
            ">=" => Condition::Ge,
            "^" => Condition::Caret,
            "~" => Condition::Tilde,
            _ => Condition::None,
        }
    }

    /// Canonical spelling of the operator; `None` renders as the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::None => "",
            Condition::Eq => "==",
            Condition::Ne => "!=",
            Condition::Lt => "<",
            Condition::Gt => ">",
            Condition::Le => "<=",
            Condition::Ge => ">=",
            Condition::Caret => "^",
            Condition::Tilde => "~",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
