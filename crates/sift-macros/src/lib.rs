//! Proc macros for Sift.
//!
//! - [`Record`] - Generate field accessors and field name constants

mod attrs;
mod derive;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for list items.
///
/// This macro generates an implementation of `sift::Record`, exposing the
/// annotated fields to search, sort and filter stages by name.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `text` | Text field (anything `AsRef<str>`); scored and sorted as a string |
/// | `number` | Numeric field (any `Copy` type with `Into<sift::Number>`) |
/// | `bool` | Boolean field; readable, never scored or ordered |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Expose the field under a different name |
///
/// Fields without a `#[record(...)]` attribute are not exposed.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Device::HOSTNAME`)
/// 2. Implementation of `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use sift::{Record, SearchConfig, SortState, Dir};
///
/// #[derive(Record)]
/// struct Device {
///     #[record(text)]
///     hostname: String,
///
///     #[record(number)]
///     port: u16,
///
///     #[record(bool)]
///     online: bool,
///
///     #[record(skip)]
///     api_token: String,
/// }
///
/// let search = SearchConfig::new().field(Device::HOSTNAME);
/// let hits = search.apply(&devices, "edge", Device::accessor);
/// let sorted = SortState::by(Device::PORT, Dir::Asc).apply(hits, Device::accessor);
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
