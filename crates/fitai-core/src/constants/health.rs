// ABOUTME: Keyword table mapping medical text fragments to canonical condition labels
// ABOUTME: Restriction table mapping condition labels to food substrings to avoid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Canonical condition labels
pub mod labels {
    /// Diabetes (any type)
    pub const DIABETES: &str = "Diabetes";
    /// Hypertension
    pub const HIGH_BLOOD_PRESSURE: &str = "High Blood Pressure";
    /// Cardiovascular disease
    pub const HEART_DISEASE: &str = "Heart Disease";
    /// Asthma
    pub const ASTHMA: &str = "Asthma";
    /// Non-specific respiratory problems
    pub const RESPIRATORY_ISSUES: &str = "Respiratory Issues";
    /// Cancer
    pub const CANCER: &str = "Cancer";
    /// Kidney disease
    pub const KIDNEY_DISEASE: &str = "Kidney Disease";
    /// Lung disease
    pub const LUNG_DISEASE: &str = "Lung Disease";
    /// Arthritis
    pub const ARTHRITIS: &str = "Arthritis";
    /// Thyroid disorder
    pub const THYROID_DISORDER: &str = "Thyroid Disorder";
    /// Elevated cholesterol
    pub const HIGH_CHOLESTEROL: &str = "High Cholesterol";
    /// Migraine
    pub const MIGRAINE: &str = "Migraine";
    /// Depression
    pub const DEPRESSION: &str = "Depression";
    /// Anxiety
    pub const ANXIETY: &str = "Anxiety";
}

/// Lowercase keyword to canonical condition label, matched by substring containment.
///
/// Short keywords such as `"bp"` also match inside longer words. That is a known
/// limitation of the flat table, not something the extractor tries to correct.
pub const CONDITION_KEYWORDS: &[(&str, &str)] = &[
    ("diabetes", labels::DIABETES),
    ("diabetic", labels::DIABETES),
    ("blood sugar", labels::DIABETES),
    ("glucose", labels::DIABETES),
    ("high blood pressure", labels::HIGH_BLOOD_PRESSURE),
    ("hypertension", labels::HIGH_BLOOD_PRESSURE),
    ("bp", labels::HIGH_BLOOD_PRESSURE),
    ("heart disease", labels::HEART_DISEASE),
    ("cardiac", labels::HEART_DISEASE),
    ("coronary", labels::HEART_DISEASE),
    ("asthma", labels::ASTHMA),
    ("respiratory", labels::RESPIRATORY_ISSUES),
    ("cancer", labels::CANCER),
    ("tumor", labels::CANCER),
    ("malignant", labels::CANCER),
    ("kidney disease", labels::KIDNEY_DISEASE),
    ("renal", labels::KIDNEY_DISEASE),
    ("lung disease", labels::LUNG_DISEASE),
    ("pulmonary", labels::LUNG_DISEASE),
    ("arthritis", labels::ARTHRITIS),
    ("thyroid", labels::THYROID_DISORDER),
    ("cholesterol", labels::HIGH_CHOLESTEROL),
    ("migraine", labels::MIGRAINE),
    ("depression", labels::DEPRESSION),
    ("anxiety", labels::ANXIETY),
];

/// Condition label to lowercase food-name substrings excluded from meal selection
pub const DIETARY_RESTRICTIONS: &[(&str, &[&str])] = &[
    (
        labels::DIABETES,
        &["high sugar", "sweet", "candy", "cake", "dessert"],
    ),
    (
        labels::HIGH_BLOOD_PRESSURE,
        &["high sodium", "salty", "pickled", "processed"],
    ),
    (
        labels::HEART_DISEASE,
        &["high fat", "fried", "fatty", "butter"],
    ),
    (
        labels::HIGH_CHOLESTEROL,
        &["high cholesterol", "egg yolk", "fatty meat"],
    ),
];

/// Look up the restricted food substrings for a condition label
#[must_use]
pub fn restrictions_for(condition: &str) -> Option<&'static [&'static str]> {
    DIETARY_RESTRICTIONS
        .iter()
        .find(|(label, _)| *label == condition)
        .map(|(_, terms)| *terms)
}
