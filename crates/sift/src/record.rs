//! Field access for caller-defined item types.
//!
//! Every stage reads item fields through an accessor with the shape
//! `for<'a> Fn(&'a T, &str) -> Value<'a>`. The [`Record`] trait is the
//! declarative way to provide one; it is what `#[derive(Record)]` generates.

use crate::value::Value;

/// Trait for item types that expose named fields to the engine.
///
/// Usually derived with `#[derive(Record)]` (feature `derive`), but simple to
/// implement by hand.
///
/// # Derive Usage
///
/// ```ignore
/// use sift::{Record, SearchConfig};
///
/// #[derive(Record)]
/// struct User {
///     #[record(text)]
///     name: String,
///     #[record(text)]
///     email: String,
///     #[record(number)]
///     id: u64,
/// }
///
/// let search = SearchConfig::new()
///     .field(User::NAME)
///     .weighted_field(User::EMAIL, 0.5);
/// let hits = search.apply(&users, "ali", User::accessor);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sift::{Number, Record, Value};
///
/// struct Report {
///     title: String,
///     pages: u32,
/// }
///
/// impl Record for Report {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "title" => Value::String(&self.title),
///             "pages" => Value::Number(Number::from(self.pages)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] if the field does not
    /// exist or is not exposed.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Adapts [`Record::field_value`] to the accessor shape the engine's
    /// stages take.
    ///
    /// ```ignore
    /// let sorted = sort.apply(items.iter().collect(), Report::accessor);
    /// ```
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}
