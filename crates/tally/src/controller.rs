//! Input controller
//!
//! Translates discrete user actions into [`RowStore`] mutations and owns
//! the text-to-tag promotion policy. The controller never renders and never
//! fetches; it is the single write path between a surface and the store.

use crate::engine::{ExpressionEngine, FormulaEngine};
use tally_core::{expression, Error, Result, RowStore, Tag};

/// Keys the controller intercepts in a row's input field. Everything else
/// reaches the underlying text field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    Backspace,
}

/// Translates user actions into row-store mutations.
///
/// Mutation scoping, commit-on-Enter, and failure absorption on Calculate
/// all live here; the store stays policy-free.
#[derive(Debug, Clone, Default)]
pub struct InputController<E = FormulaEngine> {
    engine: E,
}

impl InputController<FormulaEngine> {
    /// Controller backed by the bundled arithmetic engine.
    pub fn new() -> Self {
        Self {
            engine: FormulaEngine,
        }
    }
}

impl<E: ExpressionEngine> InputController<E> {
    /// Controller backed by a custom engine.
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Text in the row's input field changed.
    ///
    /// Empty updates are ignored: clearing happens only through Enter
    /// commits and Backspace edits, never through this path.
    pub fn input_changed(&self, store: &mut RowStore, row: usize, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        store.set_input_text(row, text)
    }

    /// The selection widget reports its complete post-change tag list,
    /// which replaces the row's tags wholesale.
    pub fn selection_changed(&self, store: &mut RowStore, row: usize, tags: Vec<Tag>) -> Result<()> {
        store.set_selected_tags(row, tags)
    }

    /// One of the intercepted keys was pressed in the row's input field.
    pub fn key_pressed(&self, store: &mut RowStore, row: usize, key: Key) -> Result<()> {
        match key {
            Key::Enter => self.commit_input(store, row),
            Key::Backspace => self.erase_last_char(store, row),
            // Suppressed: prevents focus navigation, no state change.
            Key::Tab => Ok(()),
        }
    }

    /// Append a new empty row, returning its index.
    pub fn add_row(&self, store: &mut RowStore) -> usize {
        store.add_row()
    }

    /// Evaluate the row's committed tags and store the outcome.
    ///
    /// No-op when the row has neither uncommitted text nor tags (an
    /// existing result stays untouched). Evaluation failures are absorbed
    /// here: the row's result becomes `None` and no error reaches the
    /// caller. Only an out-of-range index is an error.
    pub fn calculate(&self, store: &mut RowStore, row: usize) -> Result<()> {
        let state = Self::row(store, row)?;
        if state.input_text().is_empty() && state.tags().is_empty() {
            return Ok(());
        }

        let expr = expression(state.tags());
        match self.engine.evaluate(&expr) {
            Ok(value) => {
                tracing::debug!(row, %expr, value, "row evaluated");
                store.set_evaluation(row, Some(value))
            }
            Err(err) => {
                tracing::debug!(row, %expr, %err, "evaluation failed");
                store.set_evaluation(row, None)
            }
        }
    }

    /// Promote the row's input text to a free-text tag and clear the input.
    /// Empty input is a no-op.
    fn commit_input(&self, store: &mut RowStore, row: usize) -> Result<()> {
        let state = Self::row(store, row)?;
        if state.input_text().is_empty() {
            return Ok(());
        }

        let mut tags = state.tags().to_vec();
        tags.push(Tag::text(state.input_text()));
        store.set_selected_tags(row, tags)?;
        store.set_input_text(row, "")
    }

    /// Remove the last character of the row's input text. Empty input is a
    /// no-op; committed tags are never touched.
    fn erase_last_char(&self, store: &mut RowStore, row: usize) -> Result<()> {
        let state = Self::row(store, row)?;
        if state.input_text().is_empty() {
            return Ok(());
        }

        let mut text = state.input_text().to_string();
        text.pop();
        store.set_input_text(row, text)
    }

    fn row(store: &RowStore, index: usize) -> Result<&tally_core::Row> {
        store
            .row(index)
            .ok_or(Error::RowOutOfBounds(index, store.len()))
    }
}
