//! Sum-of-products expressions: term extraction, printing, parsing and evaluation.
//!
//! Negation is written as a `!` right before the variable, e.g. `!AB + C`.

mod expression;
mod term;

pub use expression::{normalize, Expression};
pub use term::{bit_of, extract, Literal, Term, NEGATION};
