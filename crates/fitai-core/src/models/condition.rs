// ABOUTME: Ordered, deduplicated set of canonical health condition labels
// ABOUTME: Output of the keyword extractor and input to meal exclusion rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Canonical condition labels in first-detected order, each at most once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet(Vec<String>);

impl ConditionSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a label, returning `false` when it was already present
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    /// Whether the label is present
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    /// Number of distinct labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no condition was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate labels in detection order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Labels joined with `", "` for human-readable annotations
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = ConditionSet::new();
        assert!(set.insert("Diabetes"));
        assert!(!set.insert("Diabetes"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_joined_keeps_detection_order() {
        let set: ConditionSet = ["Diabetes", "Heart Disease", "Diabetes"].into_iter().collect();
        assert_eq!(set.joined(), "Diabetes, Heart Disease");
    }
}
