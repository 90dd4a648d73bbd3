//! Search configuration: matching options and per-field weights.
//!
//! Both types deserialize with defaults for every missing key, so a list
//! view can be configured from a partial JSON or YAML document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Default minimum score an item needs to survive a search.
pub const DEFAULT_MIN_SCORE: f64 = 30.0;

/// Options controlling how a query is matched.
///
/// # Example
///
/// ```
/// use sift::SearchOptions;
///
/// let options = SearchOptions::new()
///     .with_min_score(50.0)
///     .with_case_sensitive(true);
///
/// assert!(options.fuzzy);
/// assert_eq!(options.min_score, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Enable the subsequence tier.
    pub fuzzy: bool,
    /// Threshold compared against an item's best weighted field score.
    pub min_score: f64,
    /// Compare without folding case.
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            fuzzy: true,
            min_score: DEFAULT_MIN_SCORE,
            case_sensitive: false,
        }
    }
}

impl SearchOptions {
    /// Creates options with defaults: fuzzy on, min score 30, case-insensitive.
    pub fn new() -> Self {
        SearchOptions::default()
    }

    /// Enables or disables subsequence matching.
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Sets the minimum score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Enables or disables case-sensitive matching.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Checks that the minimum score is a non-negative number.
    pub fn validate(&self) -> Result<()> {
        if self.min_score.is_nan() || self.min_score < 0.0 {
            return Err(SiftError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}

/// Per-field score multipliers. Fields without an entry weigh 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldWeights(HashMap<String, f64>);

impl FieldWeights {
    /// Creates an empty weight map.
    pub fn new() -> Self {
        FieldWeights::default()
    }

    /// Sets the weight for a field, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, weight: f64) {
        self.0.insert(field.into(), weight);
    }

    /// Returns the weight for a field.
    pub fn get(&self, field: &str) -> f64 {
        self.0.get(field).copied().unwrap_or(1.0)
    }

    /// Returns `true` if no field has an explicit weight.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that every weight is positive and finite.
    pub fn validate(&self) -> Result<()> {
        // Sorted so the reported field is stable across runs.
        let mut fields: Vec<_> = self.0.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        for (field, &weight) in fields {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(SiftError::InvalidWeight {
                    field: field.clone(),
                    weight,
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FieldWeights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        FieldWeights(iter.into_iter().map(|(k, w)| (k.into(), w)).collect())
    }
}
