//! Expression evaluator
//!
//! Evaluates expression ASTs to produce numeric values.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::parser::parse_expression;

/// Evaluate an expression AST
pub fn evaluate(expr: &Expr) -> FormulaResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::BinaryOp { op, left, right } => evaluate_binary_op(*op, left, right),
        Expr::UnaryOp { op, operand } => evaluate_unary_op(*op, operand),
    }
}

/// Parse and evaluate an expression string
///
/// # Example
/// ```rust
/// use tally_formula::evaluate_str;
///
/// assert_eq!(evaluate_str("2 + 3").unwrap(), 5.0);
/// assert_eq!(evaluate_str("(1 + 2) * 3").unwrap(), 9.0);
/// ```
pub fn evaluate_str(input: &str) -> FormulaResult<f64> {
    let expr = parse_expression(input)?;
    evaluate(&expr)
}

/// Evaluate a binary operation
fn evaluate_binary_op(op: BinaryOperator, left: &Expr, right: &Expr) -> FormulaResult<f64> {
    let l = evaluate(left)?;
    let r = evaluate(right)?;

    match op {
        BinaryOperator::Add => finite(l + r),
        BinaryOperator::Subtract => finite(l - r),
        BinaryOperator::Multiply => finite(l * r),
        BinaryOperator::Divide => {
            // x/0 is refused outright rather than producing an IEEE infinity
            if r == 0.0 {
                Err(FormulaError::DivisionByZero)
            } else {
                finite(l / r)
            }
        }
        BinaryOperator::Power => finite(l.powf(r)),
    }
}

/// Evaluate a unary operation
fn evaluate_unary_op(op: UnaryOperator, operand: &Expr) -> FormulaResult<f64> {
    let val = evaluate(operand)?;

    match op {
        UnaryOperator::Negate => Ok(-val),
    }
}

fn finite(n: f64) -> FormulaResult<f64> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(FormulaError::Evaluation(
            "result is not a finite number".into(),
        ))
    }
}
