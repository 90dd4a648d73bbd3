//! Sift - in-memory search, filter, sort and pagination for list views.
//!
//! Sift backs admin and resource list views whose data is already in
//! memory. It runs a fixed pipeline:
//!
//! ```text
//! items → scored search → predicate filters → sort → page
//! ```
//!
//! Every stage is a pure function of its inputs. Stages borrow from the
//! caller's slice and never mutate it.
//!
//! - [`score`]: heuristic 0–100 relevance for one (query, text) pair
//! - [`SearchConfig`]: weighted multi-field search with a score threshold
//! - [`PredicateSet`] / [`ActiveFilters`]: named caller predicates, AND-ed
//! - [`SortState`]: single-field toggle sort, locale-aware for strings
//! - [`Pagination`]: clamped page navigation with derived bounds
//! - [`ListState`]: all of the above behind one list view
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{ListState, Number, PredicateSet, SearchConfig, Value};
//!
//! struct User {
//!     name: String,
//!     role: &'static str,
//!     id: u32,
//! }
//!
//! fn accessor<'a>(user: &'a User, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&user.name),
//!         "id" => Value::Number(Number::from(user.id)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let users = vec![
//!     User { name: "Alice Moreau".into(), role: "admin", id: 1 },
//!     User { name: "Alan Turing".into(), role: "viewer", id: 2 },
//!     User { name: "Bob Alder".into(), role: "admin", id: 3 },
//! ];
//!
//! let search = SearchConfig::new().field("name").weighted_field("id", 0.5);
//! let predicates = PredicateSet::new()
//!     .with("role", |u: &User, v| v.as_str() == Some(u.role));
//!
//! let mut state = ListState::new(20)?;
//! state.set_query("al");
//! state.update_filter("role", "admin");
//! state.toggle_sort("name");
//!
//! let view = state.evaluate(&users, &search, &predicates, accessor);
//! let names: Vec<_> = view.current_items().iter().map(|u| u.name.as_str()).collect();
//! assert_eq!(names, ["Alice Moreau", "Bob Alder"]);
//! # Ok::<(), sift::SiftError>(())
//! ```
//!
//! # Failure Policy
//!
//! Evaluating a list never fails. A field that is missing or of an
//! unsupported type scores 0 and compares equal; a blank query disables
//! search; page numbers are clamped. Only configuration is validated, via
//! [`SearchConfig::validate`] and [`Pagination::new`].
//!
//! # Logging
//!
//! Sift emits [`tracing`](https://docs.rs/tracing) events under the
//! `sift::search`, `sift::filter` and `sift::pagination` targets and never
//! installs a subscriber.

mod config;
mod error;
mod filter;
mod list;
mod ordering;
mod pagination;
mod record;
mod score;
mod search;
mod value;

pub use config::{FieldWeights, SearchOptions, DEFAULT_MIN_SCORE};
pub use error::{Result, SiftError};
pub use filter::{ActiveFilters, FilterValue, PredicateSet};
pub use list::{ListState, ListView};
pub use ordering::{compare_values, locale_cmp, Dir, SortState};
pub use pagination::{PageInfo, Pagination, DEFAULT_ITEMS_PER_PAGE};
pub use record::Record;
pub use score::{classify, score, score_number, MatchKind};
pub use search::SearchConfig;
pub use value::{Number, Value};

#[cfg(feature = "derive")]
pub use sift_macros::Record;
