//! Range constraint types and the expression parser

mod comparator;
mod condition;
mod parser;

pub use comparator::{Comparator, ComparatorList, ComparatorSet, Range, Requirement};
pub use condition::Condition;
