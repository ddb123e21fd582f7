//! Internal implementation of split-id parsing.
//!
//! This module contains the [`SplitId`] type and the validation rules shared by parsing and
//! component-wise construction.

use crate::constants::{MAX_SPLIT_ID_SEGMENTS, MIN_SPLIT_ID_SEGMENTS, SPLIT_ID_SEPARATOR};
use crate::{SplitIdError, SplitIdResult};
use std::{fmt, str::FromStr};

/// A composite identifier split into its components.
///
/// Once constructed, every component is known to be non-empty, free of whitespace and free of
/// the `/` separator, so the [`Display`](fmt::Display) form re-parses to an equal value.
///
/// # Construction
/// - [`SplitId::parse`] splits an id string (for example a record's `id` field).
/// - [`SplitId::new`] validates and assembles individual components.
///
/// # Errors
/// Both constructors return [`SplitIdError::InvalidInput`] when the input does not follow the
/// canonical `<container_id>/<document_id>[/<item_id>]` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SplitId {
    container_id: String,
    document_id: String,
    item_id: Option<String>,
}

impl SplitId {
    /// Builds a split id from its components.
    ///
    /// # Arguments
    ///
    /// * `container_id` - First segment.
    /// * `document_id` - Second segment.
    /// * `item_id` - Optional third segment.
    ///
    /// # Errors
    ///
    /// Returns [`SplitIdError::InvalidInput`] if any component is empty, contains whitespace or
    /// contains the separator.
    pub fn new(
        container_id: impl Into<String>,
        document_id: impl Into<String>,
        item_id: Option<String>,
    ) -> SplitIdResult<Self> {
        let container_id = container_id.into();
        let document_id = document_id.into();

        validate_segment(&container_id, "container_id")?;
        validate_segment(&document_id, "document_id")?;
        if let Some(item) = &item_id {
            validate_segment(item, "item_id")?;
        }

        Ok(Self {
            container_id,
            document_id,
            item_id,
        })
    }

    /// Splits an id string into its components.
    ///
    /// This does **not** normalise the input. Surrounding whitespace, empty segments and
    /// leading/trailing separators are all rejected.
    ///
    /// # Arguments
    ///
    /// * `input` - Id string in `<container_id>/<document_id>[/<item_id>]` form.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`SplitId`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`SplitIdError::InvalidInput`] if `input` is empty, has the wrong number of
    /// segments, or contains an invalid segment.
    pub fn parse(input: &str) -> SplitIdResult<Self> {
        if input.is_empty() {
            return Err(SplitIdError::InvalidInput(
                "split id cannot be empty".into(),
            ));
        }

        let segments: Vec<&str> = input.split(SPLIT_ID_SEPARATOR).collect();
        if !(MIN_SPLIT_ID_SEGMENTS..=MAX_SPLIT_ID_SEGMENTS).contains(&segments.len()) {
            return Err(SplitIdError::InvalidInput(format!(
                "expected {} to {} segments separated by '{}', got {} in '{}'",
                MIN_SPLIT_ID_SEGMENTS,
                MAX_SPLIT_ID_SEGMENTS,
                SPLIT_ID_SEPARATOR,
                segments.len(),
                input
            )));
        }

        for segment in &segments {
            validate_segment(segment, input)?;
        }

        let container_id = segments[0].to_owned();
        let document_id = segments[1].to_owned();
        let item_id = segments.get(2).map(|s| (*s).to_owned());

        Ok(Self {
            container_id,
            document_id,
            item_id,
        })
    }

    /// Returns true if `input` would parse successfully.
    ///
    /// This is a purely syntactic check and does not allocate the components.
    pub fn is_valid(input: &str) -> bool {
        let mut count = 0usize;
        for segment in input.split(SPLIT_ID_SEPARATOR) {
            count += 1;
            if count > MAX_SPLIT_ID_SEGMENTS || !is_valid_segment(segment) {
                return false;
            }
        }
        count >= MIN_SPLIT_ID_SEGMENTS
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    /// Consumes the split id, returning the owned document id.
    pub fn into_document_id(self) -> String {
        self.document_id
    }
}

/// Parses `id` and returns only its document id.
///
/// # Errors
///
/// Returns the [`SplitIdError`] from [`SplitId::parse`] unchanged.
pub fn document_id_of(id: &str) -> SplitIdResult<String> {
    SplitId::parse(id).map(SplitId::into_document_id)
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains(SPLIT_ID_SEPARATOR)
        && !segment.chars().any(char::is_whitespace)
}

fn validate_segment(segment: &str, context: &str) -> SplitIdResult<()> {
    if segment.is_empty() {
        return Err(SplitIdError::InvalidInput(format!(
            "empty segment in '{}'",
            context
        )));
    }
    if segment.contains(SPLIT_ID_SEPARATOR) {
        return Err(SplitIdError::InvalidInput(format!(
            "segment '{}' in '{}' contains the separator '{}'",
            segment, context, SPLIT_ID_SEPARATOR
        )));
    }
    if segment.chars().any(char::is_whitespace) {
        return Err(SplitIdError::InvalidInput(format!(
            "segment '{}' in '{}' contains whitespace",
            segment, context
        )));
    }
    Ok(())
}

impl fmt::Display for SplitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.container_id, SPLIT_ID_SEPARATOR, self.document_id
        )?;
        if let Some(item) = &self.item_id {
            write!(f, "{}{}", SPLIT_ID_SEPARATOR, item)?;
        }
        Ok(())
    }
}

impl FromStr for SplitId {
    type Err = SplitIdError;

    /// Equivalent to [`SplitId::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SplitId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SplitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SplitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SplitId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_segments() {
        let id = SplitId::parse("orders/9f1c2b").unwrap();

        assert_eq!(id.container_id(), "orders");
        assert_eq!(id.document_id(), "9f1c2b");
        assert_eq!(id.item_id(), None);
    }

    #[test]
    fn test_parse_three_segments() {
        let id = SplitId::parse("orders/9f1c2b/line-3").unwrap();

        assert_eq!(id.container_id(), "orders");
        assert_eq!(id.document_id(), "9f1c2b");
        assert_eq!(id.item_id(), Some("line-3"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result = SplitId::parse("");

        match result {
            Err(SplitIdError::InvalidInput(msg)) => {
                assert!(msg.contains("cannot be empty"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_single_segment() {
        let result = SplitId::parse("orders");

        match result {
            Err(SplitIdError::InvalidInput(msg)) => {
                assert!(msg.contains("got 1"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_too_many_segments() {
        let result = SplitId::parse("a/b/c/d");

        match result {
            Err(SplitIdError::InvalidInput(msg)) => {
                assert!(msg.contains("got 4"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!(SplitId::parse("orders/").is_err());
        assert!(SplitId::parse("/9f1c2b").is_err());
        assert!(SplitId::parse("orders//line-3").is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        let result = SplitId::parse("orders/9f1c 2b");

        match result {
            Err(SplitIdError::InvalidInput(msg)) => {
                assert!(msg.contains("whitespace"));
            }
            _ => panic!("Expected InvalidInput error"),
        }

        assert!(SplitId::parse(" orders/9f1c2b").is_err());
        assert!(SplitId::parse("orders/9f1c2b\n").is_err());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let lower = SplitId::parse("orders/abc").unwrap();
        let upper = SplitId::parse("orders/ABC").unwrap();

        assert_ne!(lower, upper);
        assert_eq!(upper.document_id(), "ABC");
    }

    #[test]
    fn test_is_valid_matches_parse() {
        let inputs = [
            "orders/9f1c2b",
            "orders/9f1c2b/line-3",
            "",
            "orders",
            "a/b/c/d",
            "orders/",
            "orders/ 9f",
            "o/d/",
        ];

        for input in inputs {
            assert_eq!(
                SplitId::is_valid(input),
                SplitId::parse(input).is_ok(),
                "mismatch for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_new_validates_components() {
        let id = SplitId::new("orders", "9f1c2b", Some("line-3".into())).unwrap();
        assert_eq!(id.to_string(), "orders/9f1c2b/line-3");

        assert!(SplitId::new("", "9f1c2b", None).is_err());
        assert!(SplitId::new("orders", "9f/1c", None).is_err());
        assert!(SplitId::new("orders", "9f1c2b", Some(" ".into())).is_err());
    }

    #[test]
    fn test_new_error_names_component() {
        let err = SplitId::new("orders", "", None).unwrap_err();

        assert!(matches!(err, SplitIdError::InvalidInput(msg) if msg.contains("document_id")));
    }

    #[test]
    fn test_display_reparses() {
        for input in ["orders/9f1c2b", "orders/9f1c2b/line-3"] {
            let parsed = SplitId::parse(input).unwrap();
            let displayed = parsed.to_string();

            assert_eq!(displayed, input);
            assert_eq!(SplitId::parse(&displayed).unwrap(), parsed);
        }
    }

    #[test]
    fn test_from_str() {
        let result: Result<SplitId, _> = "orders/9f1c2b".parse();
        assert_eq!(result.unwrap().document_id(), "9f1c2b");

        let result: Result<SplitId, _> = "orders".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_document_id_of() {
        assert_eq!(document_id_of("orders/9f1c2b/line-3").unwrap(), "9f1c2b");
        assert!(document_id_of("not-split").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = SplitId::parse("").unwrap_err();

        assert_eq!(err.to_string(), "Invalid split id: split id cannot be empty");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_string_form() {
        let id = SplitId::parse("orders/9f1c2b/line-3").unwrap();

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"orders/9f1c2b/line-3\"");

        let back: SplitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_string() {
        let result: Result<SplitId, _> = serde_json::from_str("\"orders\"");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid split id"));
    }
}
