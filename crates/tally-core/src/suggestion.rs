//! Suggestion catalog types
//!
//! The suggestion source itself — fetch timing, caching, retries — is an
//! external collaborator. The core consumes a materialized list of catalog
//! items and pairs each with a display label for the selection widget. An
//! empty catalog degrades gracefully: free-text tags stay available.

use crate::tag::{format_number, Tag, TagValue};
use serde::{Deserialize, Serialize};

/// One fetched autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub name: String,
    pub category: String,
    pub value: ItemValue,
    pub id: String,
}

/// The string-or-number payload carried by a suggestion item.
///
/// The wire format carries this untagged: `"value": 7` and `"value": "+"`
/// are both valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    Number(f64),
    Text(String),
}

impl ItemValue {
    /// The literal this value contributes to an expression.
    pub fn literal(&self) -> String {
        match self {
            ItemValue::Number(n) => format_number(*n),
            ItemValue::Text(s) => s.clone(),
        }
    }
}

/// Display pairing handed to the selection widget: a label plus the
/// backing catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionOption {
    pub label: String,
    pub item: SuggestionItem,
}

impl SuggestionOption {
    /// Map fetched items into selectable options, labeled by item name.
    pub fn from_items(items: Vec<SuggestionItem>) -> Vec<SuggestionOption> {
        items
            .into_iter()
            .map(|item| SuggestionOption {
                label: item.name.clone(),
                item,
            })
            .collect()
    }
}

impl From<SuggestionOption> for Tag {
    /// Picking an option commits it as a tag labeled like the option.
    fn from(option: SuggestionOption) -> Self {
        Tag::new(option.label, TagValue::Suggestion(option.item))
    }
}
