//! Spoken-form rewriting for speech-to-text dictation output.
//!
//! A dictation host hands this crate the raw text of a recognized
//! utterance; the crate rewrites spoken tokens (number words,
//! punctuation names, symbol names, formatting commands) into their
//! written form and hands the text back for injection. The transform
//! is an ordered fold of literal substring substitutions over the
//! utterance; which rule table is used (French or English, plus user
//! rules) is a configuration concern.

pub mod config;
pub mod pipeline;
pub mod rewrite;

pub use config::{AppConfig, CustomRule, Locale, CONFIG_LOCK};
pub use pipeline::{PipelineResult, TranscriptPipeline};
pub use rewrite::{
    process, Replacement, RewriteEngine, RewriteResult, Rule, RuleCategory, RuleTable,
};
