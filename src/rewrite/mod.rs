//! Spoken-form rewriting.
//!
//! Turns spoken tokens in a transcribed utterance (number words,
//! punctuation names, symbol names, formatting commands) into their
//! written form by folding an ordered list of literal substitution
//! rules over the text.
//!
//! ## Processing model
//! 1. Pad the utterance with one leading space so sentence-initial
//!    commands match their `" word"` patterns
//! 2. Apply every rule in table order, each replacing all
//!    non-overlapping occurrences of its pattern
//! 3. Spacing-cleanup rules at the end of the table strip the space
//!    artifacts the word rules leave behind
//! 4. Strip the padding space again
//!
//! Tables are static per locale; the engine holds no mutable state.

pub mod english;
mod engine;
pub mod french;
mod types;

pub use engine::{process, RewriteEngine};
pub use types::{Replacement, RewriteResult, Rule, RuleCategory, RuleTable};
