//! # tally-core
//!
//! Core data structures for the tally formula-row library.
//!
//! This crate provides the fundamental types used throughout tally:
//! - [`Tag`] and [`TagValue`] - committed expression units
//! - [`Row`] - one formula-building lane (input text, tags, result)
//! - [`RowStore`] - the ordered, index-addressed row collection
//! - [`SuggestionItem`] and [`SuggestionOption`] - the suggestion catalog
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{expression, RowStore, Tag};
//!
//! let mut store = RowStore::new();
//! store
//!     .set_selected_tags(0, vec![Tag::text("2"), Tag::text("+"), Tag::text("3")])
//!     .unwrap();
//!
//! let expr = expression(store.row(0).unwrap().tags());
//! assert_eq!(expr, "2 + 3");
//! ```

pub mod error;
pub mod row;
pub mod store;
pub mod suggestion;
pub mod tag;

// Re-exports for convenience
pub use error::{Error, Result};
pub use row::Row;
pub use store::RowStore;
pub use suggestion::{ItemValue, SuggestionItem, SuggestionOption};
pub use tag::{expression, Tag, TagValue};
