// ABOUTME: Keyword-based health condition extraction over free-text medical history
// ABOUTME: Lowercase substring containment against an ordered keyword table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitai_core::constants::health::CONDITION_KEYWORDS;
use fitai_core::models::ConditionSet;
use tracing::debug;

/// Flat keyword → label rule table
///
/// Matching is plain substring containment on lowercased text, so short keywords
/// can match inside longer words (`"bp"` inside `"bpm"`).
#[derive(Debug, Clone)]
pub struct HealthConditionExtractor {
    rules: Vec<(String, String)>,
}

impl Default for HealthConditionExtractor {
    fn default() -> Self {
        Self::with_keywords(CONDITION_KEYWORDS.iter().copied())
    }
}

impl HealthConditionExtractor {
    /// Build an extractor from `(keyword, label)` pairs; keywords are lowercased
    pub fn with_keywords<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let rules = pairs
            .into_iter()
            .map(|(keyword, label)| (keyword.to_lowercase(), label.to_owned()))
            .collect();
        Self { rules }
    }

    /// Number of rules in the table
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Labels whose keywords occur in `text`, in table order, each at most once
    #[must_use]
    pub fn extract(&self, text: &str) -> ConditionSet {
        let mut conditions = ConditionSet::new();
        if text.trim().is_empty() {
            return conditions;
        }

        let haystack = text.to_lowercase();
        for (keyword, label) in &self.rules {
            if haystack.contains(keyword.as_str()) && conditions.insert(label.as_str()) {
                debug!(keyword = keyword.as_str(), label = label.as_str(), "Detected condition");
            }
        }
        conditions
    }
}

/// Extract conditions with the built-in keyword table; absent text yields an empty set
#[must_use]
pub fn detect_health_conditions(text: Option<&str>) -> ConditionSet {
    text.map_or_else(ConditionSet::new, |text| {
        HealthConditionExtractor::default().extract(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_table_lowercases_keywords() {
        let extractor = HealthConditionExtractor::with_keywords([("GOUT", "Gout")]);
        assert_eq!(extractor.rule_count(), 1);
        assert!(extractor.extract("history of gout").contains("Gout"));
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        assert!(HealthConditionExtractor::default().extract("   \n").is_empty());
    }
}
