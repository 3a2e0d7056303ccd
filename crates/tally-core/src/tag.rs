//! Tag types and expression reduction
//!
//! A [`Tag`] is one committed unit of a row's formula: either free text the
//! user promoted from the input field, or a pick from the suggestion list.
//! [`expression`] reduces a tag sequence to the string handed to the
//! arithmetic engine.

use crate::suggestion::SuggestionItem;

/// One committed unit contributing to a row's expression.
///
/// Tags carry a display label (always non-empty) and the value substituted
/// into the expression when the row is calculated.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    label: String,
    value: TagValue,
}

impl Tag {
    /// Create a tag with an explicit label and value.
    pub fn new<S: Into<String>>(label: S, value: TagValue) -> Self {
        let label = label.into();
        debug_assert!(!label.is_empty(), "tag label must be non-empty");
        Self { label, value }
    }

    /// Create a free-text tag: label and value are both the given text.
    ///
    /// This is the shape produced when uncommitted input is promoted to a
    /// tag on Enter.
    pub fn text<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        Self::new(text.clone(), TagValue::Text(text))
    }

    /// Create a numeric literal tag, labeled with the number's rendering.
    pub fn number(value: f64) -> Self {
        Self::new(format_number(value), TagValue::Number(value))
    }

    /// Get the display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the tag's value
    pub fn value(&self) -> &TagValue {
        &self.value
    }
}

/// The value a tag substitutes into a row's expression.
///
/// Replaces the loosely-typed "string, number, or object carrying a nested
/// value" union with an explicit variant per source; [`TagValue::literal`]
/// is the single unwrap point.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Free text committed from the row's input field
    Text(String),
    /// Numeric literal
    Number(f64),
    /// A picked suggestion, carrying the full catalog item
    Suggestion(SuggestionItem),
}

impl TagValue {
    /// The evaluable literal this value contributes to the expression.
    pub fn literal(&self) -> String {
        match self {
            TagValue::Text(s) => s.clone(),
            TagValue::Number(n) => format_number(*n),
            TagValue::Suggestion(item) => item.value.literal(),
        }
    }
}

/// Reduce a tag sequence to a single evaluable expression string.
///
/// Tags contribute their literals in insertion order, joined by single
/// spaces; an empty sequence reduces to the empty string. No arithmetic
/// well-formedness is checked here — malformed expressions surface when
/// the row is calculated.
pub fn expression(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.value().literal())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a number the way it reads in an expression: integral values
/// without a trailing ".0".
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::ItemValue;

    fn text_tag(symbol: &str) -> Tag {
        Tag::text(symbol)
    }

    #[test]
    fn test_reduce_tags_in_order() {
        let tags = vec![text_tag("2"), text_tag("+"), text_tag("3")];
        assert_eq!(expression(&tags), "2 + 3");
    }

    #[test]
    fn test_reduce_empty_sequence() {
        assert_eq!(expression(&[]), "");
    }

    #[test]
    fn test_reduce_single_tag() {
        assert_eq!(expression(&[text_tag("42")]), "42");
    }

    #[test]
    fn test_number_literal_rendering() {
        assert_eq!(Tag::number(5.0).value().literal(), "5");
        assert_eq!(Tag::number(2.5).value().literal(), "2.5");
        assert_eq!(Tag::number(-3.0).value().literal(), "-3");
    }

    #[test]
    fn test_suggestion_literal_unwraps_item_value() {
        let item = SuggestionItem {
            name: "Base rate".into(),
            category: "rates".into(),
            value: ItemValue::Number(7.0),
            id: "1".into(),
        };
        let tag = Tag::new("Base rate", TagValue::Suggestion(item));
        assert_eq!(tag.value().literal(), "7");

        let tags = vec![tag, text_tag("*"), text_tag("2")];
        assert_eq!(expression(&tags), "7 * 2");
    }
}
