use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expression is empty")]
    empty,

    #[error("invalid character, '{0}', encountered")]
    unexpected_character(char),

    #[error("'{0}' has more than one decimal point")]
    multiple_decimal_points(String),

    #[error("a decimal point needs at least one digit")]
    lone_decimal_point,

    #[error("'{0}' is not a finite number")]
    not_finite(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("an operator is missing an operand")]
    stack_underflow,

    #[error("division by zero")]
    division_by_zero,

    #[error("result is not a finite number")]
    non_finite,

    #[error("expression does not reduce to a single value")]
    malformed_expression,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    syntax(#[from] SyntaxError),

    #[error(transparent)]
    eval(#[from] EvalError),

    #[error("expression is still being typed")]
    in_progress,
}

impl CalcError {
    /// The only message a user ever sees, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        "Invalid expression"
    }
}

pub type Result<T, E = CalcError> = std::result::Result<T, E>;
