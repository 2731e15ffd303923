#![allow(nonstandard_style)]

//! Calculator-style numeric input: keystroke editing of an arithmetic
//! expression and its evaluation to a single number.

pub mod config;
pub mod editing;
pub mod error_handling;
pub mod evaluating;
pub mod field;
pub mod formatting;
pub mod parsing;
pub mod scanning;

pub use editing::{apply_input, apply_key, backspace, clear, is_in_progress, Key};
pub use error_handling::{CalcError, EvalError, Result, SyntaxError};
pub use evaluating::{evaluate_expression, try_evaluate};
pub use field::ExpressionField;
pub use formatting::{format_expression_value, format_for_display};
