//! Expression engine seam
//!
//! The evaluation capability is injected into the controller so embedders
//! and tests can swap the arithmetic engine without touching anything else.

use tally_formula::{evaluate_str, FormulaResult};

/// Evaluation capability consumed by the input controller.
pub trait ExpressionEngine {
    /// Evaluate an expression string to a number.
    fn evaluate(&self, expression: &str) -> FormulaResult<f64>;
}

/// The bundled engine, backed by tally-formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaEngine;

impl ExpressionEngine for FormulaEngine {
    fn evaluate(&self, expression: &str) -> FormulaResult<f64> {
        evaluate_str(expression)
    }
}
