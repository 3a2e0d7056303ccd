//! Row state store

use crate::error::{Error, Result};
use crate::row::Row;
use crate::tag::Tag;

/// Ordered collection of formula rows; index is the sole row identity.
///
/// The store is the single mutator of its rows: everything else reads them
/// through shared borrows. A store always holds at least one row. Every
/// index-addressed mutation is scoped to exactly the targeted row and fails
/// with [`Error::RowOutOfBounds`] when the index does not name an existing
/// row.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    /// Create a store holding one empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![Row::new()],
        }
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A store never has zero rows; this exists for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// All rows, in display order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append a new empty row, returning its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(Row::new());
        self.rows.len() - 1
    }

    /// Replace the uncommitted input text of the row at `index`.
    pub fn set_input_text<S: Into<String>>(&mut self, index: usize, text: S) -> Result<()> {
        self.row_mut(index)?.set_input_text(text.into());
        Ok(())
    }

    /// Replace the full tag sequence of the row at `index`.
    pub fn set_selected_tags(&mut self, index: usize, tags: Vec<Tag>) -> Result<()> {
        self.row_mut(index)?.set_tags(tags);
        Ok(())
    }

    /// Set the last evaluation result of the row at `index`; `None` records
    /// a failed or absent result.
    pub fn set_evaluation(&mut self, index: usize, value: Option<f64>) -> Result<()> {
        self.row_mut(index)?.set_evaluation(value);
        Ok(())
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut Row> {
        let count = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(Error::RowOutOfBounds(index, count))
    }
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}
