// Transcript pipeline - glues the configuration to the rewrite engine.
//
// The host hands in the raw utterance from the recognizer and gets
// back the rewritten text to inject as keystrokes.

use std::time::Instant;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::config::AppConfig;
use crate::rewrite::RewriteEngine;

/// Pipeline processing result.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Final text to inject
    pub text: String,
    /// Raw utterance, kept only when processing changed it
    pub original_text: Option<String>,
    /// Whether the text differs from the raw utterance
    pub changed: bool,
    /// Total processing time in microseconds
    pub elapsed_us: u64,
}

/// One engine per configuration; stateless across utterances.
pub struct TranscriptPipeline {
    engine: RewriteEngine,
    nfc_normalize: bool,
}

impl TranscriptPipeline {
    /// Resolve the configured locale table, merge user rules, build
    /// the engine.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut table = config.locale.table();
        if !config.custom_rules.is_empty() {
            table = table.with_custom_rules(
                config
                    .custom_rules
                    .iter()
                    .map(|r| (r.pattern.clone(), r.replacement.clone())),
            );
        }
        tracing::info!(
            locale = table.locale(),
            rules = table.len(),
            "transcript pipeline ready"
        );
        Self {
            engine: RewriteEngine::new(table),
            nfc_normalize: config.nfc_normalize,
        }
    }

    /// Process one utterance.
    pub fn process(&self, utterance: &str) -> PipelineResult {
        let start = Instant::now();

        let prepared = if self.nfc_normalize {
            fold_whitespace_nfc(utterance)
        } else {
            utterance.to_string()
        };

        let result = self.engine.rewrite(&prepared);
        let changed = result.text != utterance;

        tracing::debug!(
            changed,
            rules_fired = result.applied.len(),
            "utterance processed"
        );

        PipelineResult {
            original_text: changed.then(|| utterance.to_string()),
            text: result.text,
            changed,
            elapsed_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// NFC normalization + whitespace folding.
///
/// Recognizers emit decomposed accents and irregular spacing; rule
/// patterns are composed and single-spaced.
fn fold_whitespace_nfc(text: &str) -> String {
    let nfc: String = text.nfc().collect();

    let mut result = String::with_capacity(nfc.len());
    let mut prev_whitespace = false;

    for ch in nfc.chars() {
        if ch.is_whitespace() {
            if !prev_whitespace {
                result.push(' ');
                prev_whitespace = true;
            }
        } else {
            result.push(ch);
            prev_whitespace = false;
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CustomRule, Locale};

    fn pipeline(locale: Locale) -> TranscriptPipeline {
        TranscriptPipeline::from_config(&AppConfig {
            locale,
            ..Default::default()
        })
    }

    #[test]
    fn test_french_utterance() {
        let result = pipeline(Locale::French).process("bonjour virgule comment allez-vous point");
        assert_eq!(result.text, "bonjour, comment allez-vous.");
        assert!(result.changed);
        assert_eq!(
            result.original_text.as_deref(),
            Some("bonjour virgule comment allez-vous point")
        );
    }

    #[test]
    fn test_english_utterance() {
        let result = pipeline(Locale::English).process("a at sign b dot com");
        assert_eq!(result.text, "a@b.com");
    }

    #[test]
    fn test_unchanged_utterance_keeps_no_original() {
        let result = pipeline(Locale::French).process("bonjour");
        assert_eq!(result.text, "bonjour");
        assert!(!result.changed);
        assert!(result.original_text.is_none());
    }

    #[test]
    fn test_decomposed_accents_still_match() {
        // "zéro" with U+0301 combining acute; the NFC pre-pass folds it
        // into the composed form the table uses.
        let decomposed = "ze\u{301}ro";
        let result = pipeline(Locale::French).process(decomposed);
        assert_eq!(result.text, "0");
    }

    #[test]
    fn test_whitespace_folding() {
        let result = pipeline(Locale::French).process("sept   cent");
        assert_eq!(result.text, "700");
    }

    #[test]
    fn test_nfc_pass_can_be_disabled() {
        let p = TranscriptPipeline::from_config(&AppConfig {
            locale: Locale::French,
            nfc_normalize: false,
            ..Default::default()
        });
        // Without the pre-pass the decomposed accent no longer matches.
        assert_eq!(p.process("ze\u{301}ro").text, "ze\u{301}ro");
        // And irregular spacing defeats the multi-word phrase.
        assert_eq!(p.process("sept   cent").text, "7   100");
    }

    #[test]
    fn test_custom_rule_applies() {
        let p = TranscriptPipeline::from_config(&AppConfig {
            locale: Locale::English,
            custom_rules: vec![CustomRule {
                pattern: " smiley".to_string(),
                replacement: " :)".to_string(),
            }],
            ..Default::default()
        });
        assert_eq!(p.process("ok smiley").text, "ok :)");
    }
}
