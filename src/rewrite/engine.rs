//! Rewrite engine: ordered literal substitution over one utterance.

use std::time::Instant;

use aho_corasick::AhoCorasick;

use crate::rewrite::types::{Replacement, RewriteResult, RuleTable};

/// Apply `table` to `text`.
///
/// Straight-line fold: each rule in table order replaces every
/// non-overlapping occurrence of its pattern, leftmost first, and the
/// output of rule *i* is the input of rule *i + 1*. No branching, no
/// early exit, no per-rule conditionality. Cannot fail; any string in,
/// a string out.
///
/// Spoken-word patterns carry a leading space (`" word"`), so a command
/// at the very start of an utterance would never match on its own. The
/// input is therefore padded with one leading space for the duration of
/// the fold, and a single leading space is stripped afterwards if one
/// is still there.
pub fn process(text: &str, table: &RuleTable) -> String {
    let mut current = pad(text);

    for rule in table.rules() {
        if current.contains(rule.pattern.as_str()) {
            current = current.replace(rule.pattern.as_str(), &rule.replacement);
        }
    }

    unpad(current)
}

fn pad(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + 1);
    padded.push(' ');
    padded.push_str(text);
    padded
}

fn unpad(text: String) -> String {
    match text.strip_prefix(' ') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Reusable engine (precompiled prefilter, replacement records).
///
/// Holds no mutable state; one instance can serve concurrent callers.
pub struct RewriteEngine {
    table: RuleTable,
    /// Any-match automaton over all patterns. If no pattern occurs in
    /// the padded input, no rule can fire on the first pass and the
    /// fold is the identity, so the whole rewrite can be skipped.
    prefilter: Option<AhoCorasick>,
}

impl RewriteEngine {
    pub fn new(table: RuleTable) -> Self {
        // A build failure only disables the fast path
        let prefilter = AhoCorasick::new(table.rules().iter().map(|r| r.pattern.as_str())).ok();
        Self { table, prefilter }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Rewrite an utterance, recording which rules fired.
    ///
    /// Same output as [`process`] on the same table.
    pub fn rewrite(&self, text: &str) -> RewriteResult {
        let start = Instant::now();

        if text.is_empty() {
            return RewriteResult::unchanged(String::new(), start.elapsed().as_micros() as u64);
        }

        let padded = pad(text);

        if let Some(prefilter) = &self.prefilter {
            if !prefilter.is_match(padded.as_str()) {
                return RewriteResult::unchanged(
                    text.to_string(),
                    start.elapsed().as_micros() as u64,
                );
            }
        }

        let mut current = padded;
        let mut applied = Vec::new();

        for rule in self.table.rules() {
            let count = current.matches(rule.pattern.as_str()).count();
            if count == 0 {
                continue;
            }
            current = current.replace(rule.pattern.as_str(), &rule.replacement);
            applied.push(Replacement {
                pattern: rule.pattern.clone(),
                replacement: rule.replacement.clone(),
                count,
                category: rule.category,
            });
        }

        let out = unpad(current);
        let changed = out != text;

        RewriteResult {
            text: out,
            changed,
            applied,
            elapsed_us: start.elapsed().as_micros() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::types::RuleCategory;

    fn toy_table() -> RuleTable {
        let mut table = RuleTable::new("toy");
        table.extend_group(
            &[("seven hundred", "700"), ("hundred", "100"), ("seven", "7")],
            RuleCategory::Quantities,
        );
        table.extend_group(&[(" comma", ",")], RuleCategory::Punctuation);
        table.extend_group(&[(" ,", ",")], RuleCategory::SpacingCleanup);
        table
    }

    #[test]
    fn test_process_is_deterministic() {
        let table = toy_table();
        let a = process("seven hundred comma", &table);
        let b = process("seven hundred comma", &table);
        assert_eq!(a, b);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let table = toy_table();
        assert_eq!(process("seven hundred", &table), "700");
    }

    #[test]
    fn test_rule_output_feeds_next_rule() {
        let table = toy_table();
        // " comma" leaves "x," directly; the cleanup pass has nothing
        // left to do but must not disturb it either.
        assert_eq!(process("x comma", &table), "x,");
    }

    #[test]
    fn test_empty_input() {
        let table = toy_table();
        assert_eq!(process("", &table), "");
        let result = RewriteEngine::new(table).rewrite("");
        assert_eq!(result.text, "");
        assert!(!result.changed);
    }

    #[test]
    fn test_no_match_is_identity() {
        let table = toy_table();
        assert_eq!(process("nothing to do here", &table), "nothing to do here");
    }

    #[test]
    fn test_command_at_utterance_start_matches() {
        let table = toy_table();
        // "comma" alone: the pad supplies the leading space the pattern
        // needs, and the artifact is stripped again.
        assert_eq!(process("comma", &table), ",");
    }

    #[test]
    fn test_engine_matches_free_function() {
        let table = toy_table();
        let engine = RewriteEngine::new(table.clone());
        for input in ["seven hundred comma", "comma", "", "plain text", "  x"] {
            assert_eq!(engine.rewrite(input).text, process(input, &table));
        }
    }

    #[test]
    fn test_engine_records_applied_rules() {
        let engine = RewriteEngine::new(toy_table());
        let result = engine.rewrite("seven comma seven");
        assert!(result.changed);
        let seven = result
            .applied
            .iter()
            .find(|r| r.pattern == "seven")
            .unwrap();
        assert_eq!(seven.count, 2);
    }

    #[test]
    fn test_prefilter_short_circuit_is_unobservable() {
        let engine = RewriteEngine::new(toy_table());
        let text = "a sentence with no commands at all";
        let result = engine.rewrite(text);
        assert_eq!(result.text, text);
        assert!(!result.changed);
        assert!(result.applied.is_empty());
    }
}
