//! Scored multi-field search.
//!
//! [`SearchConfig`] names the fields to search, their weights and the
//! matching options. [`SearchConfig::apply`] scores every item against a
//! query, keeps those whose best field clears the threshold and orders them
//! by relevance.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::{FieldWeights, SearchOptions};
use crate::error::Result;
use crate::score::{classify, score_number};
use crate::value::Value;

/// Fields, weights and options for a free-text search.
///
/// # Example
///
/// ```
/// use sift::{Number, SearchConfig, Value};
///
/// struct Company {
///     name: String,
///     id: u32,
/// }
///
/// fn accessor<'a>(c: &'a Company, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&c.name),
///         "id" => Value::Number(Number::from(c.id)),
///         _ => Value::None,
///     }
/// }
///
/// let companies = vec![
///     Company { name: "Alpha Corp".into(), id: 1 },
///     Company { name: "Beta Inc".into(), id: 2 },
///     Company { name: "Alphabet".into(), id: 3 },
/// ];
///
/// let search = SearchConfig::new().field("name");
/// let hits = search.apply(&companies, "alpha", accessor);
///
/// let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Alpha Corp", "Alphabet"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fields to score, in no particular order.
    pub fields: Vec<String>,
    /// Multipliers for individual fields.
    pub weights: FieldWeights,
    /// Matching options.
    pub options: SearchOptions,
}

impl SearchConfig {
    /// Creates a config with no fields and default options.
    pub fn new() -> Self {
        SearchConfig::default()
    }

    /// Adds a field with weight 1.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Adds a field with an explicit weight.
    pub fn weighted_field(mut self, field: impl Into<String>, weight: f64) -> Self {
        let field = field.into();
        self.weights.set(field.clone(), weight);
        self.fields.push(field);
        self
    }

    /// Replaces the matching options.
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Validates options and weights.
    ///
    /// The search itself never re-checks these; call this where the config
    /// enters the program.
    pub fn validate(&self) -> Result<()> {
        self.options.validate()?;
        self.weights.validate()
    }

    /// Filters and ranks `items` by relevance to `query`.
    ///
    /// A blank query returns every item in its original order. Otherwise
    /// items scoring below `min_score` are dropped and the rest are ordered
    /// by score, highest first, keeping input order among equal scores.
    pub fn apply<'a, T, F>(&self, items: &'a [T], query: &str, accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let Some(needle) = self.normalize_query(query) else {
            return items.iter().collect();
        };

        let mut candidates: Vec<(&'a T, f64)> = items
            .iter()
            .map(|item| (item, self.best_score(item, &needle, &accessor)))
            .filter(|(_, score)| *score >= self.options.min_score)
            .collect();

        // sort_by is stable, so equal scores keep input order
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        tracing::debug!(
            target: "sift::search",
            query_len = needle.chars().count(),
            fields = self.fields.len(),
            candidates = items.len(),
            retained = candidates.len(),
            "search applied"
        );

        candidates.into_iter().map(|(item, _)| item).collect()
    }

    /// Returns the weighted score `item` would receive for `query`.
    ///
    /// This is the maximum over the searched fields, not a sum. A blank
    /// query scores 0.
    pub fn score_item<T, F>(&self, item: &T, query: &str, accessor: F) -> f64
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        match self.normalize_query(query) {
            Some(needle) => self.best_score(item, &needle, &accessor),
            None => 0.0,
        }
    }

    fn normalize_query<'q>(&self, query: &'q str) -> Option<Cow<'q, str>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(if self.options.case_sensitive {
            Cow::Borrowed(query)
        } else {
            Cow::Owned(query.to_lowercase())
        })
    }

    fn best_score<T, F>(&self, item: &T, needle: &str, accessor: &F) -> f64
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.fields
            .iter()
            .map(|field| {
                let raw = self.field_score(needle, &accessor(item, field));
                f64::from(raw) * self.weights.get(field)
            })
            .fold(0.0, f64::max)
    }

    fn field_score(&self, needle: &str, value: &Value<'_>) -> u32 {
        match value {
            Value::String(text) if self.options.case_sensitive => {
                classify(needle, text, self.options.fuzzy).points()
            }
            Value::String(text) => {
                classify(needle, &text.to_lowercase(), self.options.fuzzy).points()
            }
            Value::Number(n) => score_number(needle, *n),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug, PartialEq)]
    struct User {
        name: String,
        email: String,
        id: u64,
        active: bool,
        team: Option<String>,
    }

    fn user(name: &str, email: &str, id: u64) -> User {
        User {
            name: name.to_string(),
            email: email.to_string(),
            id,
            active: true,
            team: None,
        }
    }

    fn accessor<'a>(u: &'a User, field: &str) -> Value<'a> {
        match field {
            "name" => Value::String(&u.name),
            "email" => Value::String(&u.email),
            "id" => Value::Number(Number::U64(u.id)),
            "active" => Value::Bool(u.active),
            "team" => u.team.as_deref().map_or(Value::None, Value::String),
            _ => Value::None,
        }
    }

    fn names<'a>(users: &[&'a User]) -> Vec<&'a str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    fn sample_users() -> Vec<User> {
        vec![
            user("Maria Lopez", "mlopez@example.com", 12),
            user("Mark Twain", "twain@example.com", 7),
            user("Anna Marks", "anna@example.com", 31),
            user("Bob Stone", "bob@example.com", 100),
        ]
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let users = sample_users();
        let search = SearchConfig::new().field("name");

        assert_eq!(search.apply(&users, "", accessor).len(), 4);
        let results = search.apply(&users, "   ", accessor);
        assert_eq!(
            names(&results),
            ["Maria Lopez", "Mark Twain", "Anna Marks", "Bob Stone"]
        );
    }

    #[test]
    fn ranks_by_tier() {
        let users = sample_users();
        let search = SearchConfig::new().field("name");

        // prefix (90) for both "Mar..." names, substring (70) for Anna Marks
        let results = search.apply(&users, "mar", accessor);
        assert_eq!(names(&results), ["Maria Lopez", "Mark Twain", "Anna Marks"]);
    }

    #[test]
    fn case_sensitive_mode() {
        let users = sample_users();
        let search = SearchConfig::new()
            .field("name")
            .options(SearchOptions::new().with_case_sensitive(true).with_fuzzy(false));

        assert!(search.apply(&users, "mar", accessor).is_empty());
        assert_eq!(search.apply(&users, "Mar", accessor).len(), 3);
    }

    #[test]
    fn max_not_sum_across_fields() {
        let users = vec![user("Zed", "zed@example.com", 1)];
        let search = SearchConfig::new().field("name").field("email");

        // exact on name, prefix on email: best field wins
        assert_eq!(search.score_item(&users[0], "zed", accessor), 100.0);
    }

    #[test]
    fn weights_scale_field_scores() {
        let users = vec![
            user("Support", "ops@example.com", 1),
            user("Ops Team", "support@example.com", 2),
        ];
        let search = SearchConfig::new()
            .weighted_field("name", 0.5)
            .weighted_field("email", 1.5);

        assert_eq!(search.score_item(&users[0], "support", accessor), 50.0);
        assert_eq!(search.score_item(&users[1], "support", accessor), 135.0);

        let results = search.apply(&users, "support", accessor);
        assert_eq!(names(&results), ["Ops Team", "Support"]);
    }

    #[test]
    fn numeric_fields_match_by_containment() {
        let users = sample_users();
        let search = SearchConfig::new().field("id");

        let results = search.apply(&users, "1", accessor);
        assert_eq!(names(&results), ["Maria Lopez", "Anna Marks", "Bob Stone"]);
    }

    #[test]
    fn unscorable_fields_contribute_zero() {
        let users = sample_users();
        let search = SearchConfig::new()
            .field("active")
            .field("team")
            .field("missing")
            .options(SearchOptions::new().with_min_score(0.0));

        assert_eq!(search.score_item(&users[0], "true", accessor), 0.0);
        // min score 0 keeps everything, order untouched
        assert_eq!(search.apply(&users, "x", accessor).len(), 4);
    }

    #[test]
    fn threshold_excludes_weak_matches() {
        let users = sample_users();
        let search = SearchConfig::new()
            .field("name")
            .options(SearchOptions::new().with_min_score(60.0));

        // "mtn" is only a subsequence of "Mark Twain" (56)
        assert!(search.apply(&users, "mtn", accessor).is_empty());
    }

    #[test]
    fn does_not_mutate_input() {
        let users = sample_users();
        let search = SearchConfig::new().field("name");
        let _ = search.apply(&users, "bob", accessor);

        assert_eq!(users, sample_users());
    }

    #[test]
    fn validate_reports_bad_weight() {
        let search = SearchConfig::new().weighted_field("name", -2.0);
        assert!(search.validate().is_err());
        assert!(SearchConfig::new().field("name").validate().is_ok());
    }
}
