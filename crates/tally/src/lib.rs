//! # tally
//!
//! A library for building and evaluating formula rows: independent lanes
//! that accumulate tags (free text or suggestion picks) and reduce them to
//! an arithmetic expression on demand.
//!
//! ## Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let controller = InputController::new();
//! let mut store = RowStore::new();
//!
//! // Type "2", commit it, then "+", "3" the same way
//! for token in ["2", "+", "3"] {
//!     controller.input_changed(&mut store, 0, token).unwrap();
//!     controller.key_pressed(&mut store, 0, Key::Enter).unwrap();
//! }
//!
//! controller.calculate(&mut store, 0).unwrap();
//! assert_eq!(store.row(0).unwrap().evaluation(), Some(5.0));
//! ```

pub mod controller;
pub mod engine;
pub mod prelude;

pub use controller::{InputController, Key};
pub use engine::{ExpressionEngine, FormulaEngine};

// Re-export core types
pub use tally_core::{
    expression, Error, ItemValue, Result, Row, RowStore, SuggestionItem, SuggestionOption, Tag,
    TagValue,
};

// Re-export formula types
pub use tally_formula::{
    evaluate, evaluate_str, parse_expression, Expr, FormulaError, FormulaResult,
};
