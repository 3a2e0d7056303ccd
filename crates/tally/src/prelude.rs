//! Prelude module - common imports for tally users
//!
//! ```rust
//! use tally::prelude::*;
//! ```

pub use crate::{
    // Error types
    Error,
    // Engine seam
    ExpressionEngine,
    FormulaEngine,
    FormulaError,
    // Controller
    InputController,
    ItemValue,
    Key,
    Result,
    // Main types
    Row,
    RowStore,
    // Suggestion types
    SuggestionItem,
    SuggestionOption,
    Tag,
    TagValue,
};
