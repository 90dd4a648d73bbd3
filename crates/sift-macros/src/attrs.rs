//! Parsing for `#[record(...)]` field attributes.

use syn::{meta::ParseNestedMeta, Attribute, Error, LitStr, Result};

/// How a field is exposed through `Record::field_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[record(text)]`: borrowed as `Value::String`.
    Text,
    /// `#[record(number)]`: converted with `Number::from`.
    Number,
    /// `#[record(bool)]`: copied as `Value::Bool`.
    Bool,
}

impl FieldKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "text" => Some(FieldKind::Text),
            "number" => Some(FieldKind::Number),
            "bool" => Some(FieldKind::Bool),
            _ => None,
        }
    }
}

/// Everything a field's `#[record(...)]` attribute can say.
#[derive(Debug, Clone, Default)]
pub struct RecordAttr {
    pub kind: Option<FieldKind>,
    pub skip: bool,
    pub rename: Option<String>,
}

impl RecordAttr {
    fn parse_entry(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("skip") {
            self.skip = true;
            return Ok(());
        }

        if meta.path.is_ident("rename") {
            let name: LitStr = meta.value()?.parse()?;
            if name.value().is_empty() {
                return Err(Error::new(name.span(), "Record field rename cannot be empty"));
            }
            self.rename = Some(name.value());
            return Ok(());
        }

        let keyword = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();

        let Some(kind) = FieldKind::from_keyword(&keyword) else {
            return Err(meta.error(
                "unsupported #[record] option; use text, number, bool, skip or rename = \"...\"",
            ));
        };

        if self.kind.replace(kind).is_some() {
            return Err(meta.error("a Record field takes exactly one kind"));
        }
        Ok(())
    }
}

/// Reads the `#[record(...)]` attribute on a field, if there is one.
///
/// A second `#[record]` on the same field is an error.
pub fn parse_record_attrs(attrs: &[Attribute]) -> Result<RecordAttr> {
    let mut parsed = RecordAttr::default();
    let mut seen = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("record")) {
        if seen {
            return Err(Error::new_spanned(attr, "duplicate #[record] attribute"));
        }
        seen = true;
        attr.parse_nested_meta(|meta| parsed.parse_entry(meta))?;
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(attrs: &[Attribute]) -> Result<RecordAttr> {
        parse_record_attrs(attrs)
    }

    #[test]
    fn kinds() {
        let text = parse(&[parse_quote!(#[record(text)])]).unwrap();
        assert_eq!(text.kind, Some(FieldKind::Text));
        assert!(!text.skip);

        let number = parse(&[parse_quote!(#[record(number)])]).unwrap();
        assert_eq!(number.kind, Some(FieldKind::Number));

        let flag = parse(&[parse_quote!(#[record(bool)])]).unwrap();
        assert_eq!(flag.kind, Some(FieldKind::Bool));
    }

    #[test]
    fn skip_and_rename() {
        let skipped = parse(&[parse_quote!(#[record(skip)])]).unwrap();
        assert!(skipped.skip);
        assert_eq!(skipped.kind, None);

        let renamed = parse(&[parse_quote!(#[record(text, rename = "display_name")])]).unwrap();
        assert_eq!(renamed.kind, Some(FieldKind::Text));
        assert_eq!(renamed.rename.as_deref(), Some("display_name"));
    }

    #[test]
    fn unrelated_attributes_are_ignored() {
        let attr = parse(&[parse_quote!(#[serde(default)]), parse_quote!(#[doc = "x"])]).unwrap();
        assert_eq!(attr.kind, None);
        assert!(!attr.skip);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = parse(&[parse_quote!(#[record(timestamp)])]).unwrap_err();
        assert!(err.to_string().contains("unsupported #[record] option"));

        // only the documented spellings are accepted
        assert!(parse(&[parse_quote!(#[record(String)])]).is_err());
    }

    #[test]
    fn rejects_two_kinds() {
        let err = parse(&[parse_quote!(#[record(text, number)])]).unwrap_err();
        assert!(err.to_string().contains("exactly one kind"));
    }

    #[test]
    fn rejects_duplicate_attribute() {
        let attrs: [Attribute; 2] = [parse_quote!(#[record(text)]), parse_quote!(#[record(skip)])];
        assert!(parse(&attrs).is_err());
    }

    #[test]
    fn rejects_empty_rename() {
        assert!(parse(&[parse_quote!(#[record(text, rename = "")])]).is_err());
    }
}
