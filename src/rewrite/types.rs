//! Rewrite rule and result types.

use serde::{Deserialize, Serialize};

/// Semantic grouping of rules.
///
/// The category is descriptive metadata; the position of a rule in the
/// table is what carries the ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Number words (units, teens, tens, hundreds, thousands)
    Quantities,
    /// Punctuation names ("virgule", "question mark")
    Punctuation,
    /// Bracket and quote names
    Brackets,
    /// Whitespace and layout commands ("nouvelle ligne", "tab")
    Formatting,
    /// Symbol names ("arobase", "at sign")
    Symbols,
    /// Final pass stripping the space artifacts left by word rules
    SpacingCleanup,
    /// User-defined rule from the configuration file
    Custom,
}

/// One literal substitution: every non-overlapping occurrence of
/// `pattern` (leftmost first) becomes `replacement`.
///
/// Patterns and replacements are plain substrings, never regexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
    pub category: RuleCategory,
}

impl Rule {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        category: RuleCategory,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            category,
        }
    }
}

/// Ordered rule list for one locale.
///
/// Order is load-bearing: the output of each rule is the input of the
/// next, so longer phrases must sit in front of the shorter phrases
/// they contain, word rules in front of the spacing cleanup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    locale: String,
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            rules: Vec::new(),
        }
    }

    /// Append a group of `(pattern, replacement)` pairs in the given order.
    pub fn extend_group(&mut self, pairs: &[(&str, &str)], category: RuleCategory) {
        self.rules
            .extend(pairs.iter().map(|(p, r)| Rule::new(*p, *r, category)));
    }

    /// Insert user rules just ahead of the spacing-cleanup pass, so they
    /// see the same leading-space conventions as the built-in word rules
    /// and their output still gets cleaned.
    pub fn with_custom_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let at = self
            .rules
            .iter()
            .position(|r| r.category == RuleCategory::SpacingCleanup)
            .unwrap_or(self.rules.len());
        let custom: Vec<Rule> = rules
            .into_iter()
            .filter(|(p, _)| !p.is_empty())
            .map(|(p, r)| Rule::new(p, r, RuleCategory::Custom))
            .collect();
        self.rules.splice(at..at, custom);
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Record of one rule having fired during a rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    pub pattern: String,
    pub replacement: String,
    /// How many occurrences this rule replaced
    pub count: usize,
    pub category: RuleCategory,
}

/// Rewrite outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResult {
    /// Rewritten text
    pub text: String,
    /// Whether the text differs from the input
    pub changed: bool,
    /// Rules that fired, in table order
    pub applied: Vec<Replacement>,
    /// Processing time in microseconds
    pub elapsed_us: u64,
}

impl RewriteResult {
    /// Result for an input no rule touched.
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> RuleTable {
        let mut table = RuleTable::new("test");
        table.extend_group(&[(" comma", ",")], RuleCategory::Punctuation);
        table.extend_group(&[(" ,", ",")], RuleCategory::SpacingCleanup);
        table
    }

    #[test]
    fn test_extend_group_preserves_order() {
        let table = small_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].pattern, " comma");
        assert_eq!(table.rules()[1].category, RuleCategory::SpacingCleanup);
    }

    #[test]
    fn test_custom_rules_sit_before_cleanup() {
        let table = small_table().with_custom_rules(vec![(" btw".to_string(), " by the way".to_string())]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rules()[1].pattern, " btw");
        assert_eq!(table.rules()[1].category, RuleCategory::Custom);
        assert_eq!(table.rules()[2].category, RuleCategory::SpacingCleanup);
    }

    #[test]
    fn test_custom_rules_skip_empty_patterns() {
        let table = small_table().with_custom_rules(vec![(String::new(), "x".to_string())]);
        assert_eq!(table.len(), 2);
    }
}
