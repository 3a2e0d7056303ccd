//! # tally-formula
//!
//! Arithmetic expression parser and evaluator for tally.
//!
//! This crate provides:
//! - Expression parsing (text → AST)
//! - Expression evaluation (AST → f64)
//!
//! The grammar covers addition, subtraction, multiplication, division,
//! exponentiation, parentheses, unary minus, and integer/decimal literals
//! with optional scientific notation. Division by zero and non-finite
//! results are typed errors, never IEEE infinities.
//!
//! ## Example
//!
//! ```rust
//! use tally_formula::evaluate_str;
//!
//! assert_eq!(evaluate_str("1 + 2 * 3").unwrap(), 7.0);
//! assert!(evaluate_str("2 +").is_err());
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_str};
pub use parser::parse_expression;
