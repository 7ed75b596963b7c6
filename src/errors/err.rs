use thiserror::Error;

use crate::source_pos::Span;

pub type EvalResult<T> = Result<T, EvalError>;

/// Why an expression could not be evaluated. Every variant is terminal:
/// evaluation stops at the first one encountered, left to right.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("unclosed parentheses")]
    UnclosedParentheses,

    #[error("invalid token: {token}")]
    InvalidToken { token: String, span: Span },

    #[error("not enough operands for operator {operator}")]
    NotEnoughOperands { operator: char },

    #[error("unknown operator {operator}")]
    UnknownOperator { operator: char },

    #[error("missing operator between {operands} operands")]
    MissingOperator { operands: usize },

    #[error("division by zero: {dividend} / {divisor}")]
    DivisionByZero { dividend: f64, divisor: f64 },

    #[error("zero base with non-positive exponent: 0 ^ {exponent}")]
    ZeroBase { exponent: f64 },

    #[error("negative base with non-integer exponent: {base} ^ {exponent}")]
    NegativeBase { base: f64, exponent: f64 },

    #[error("result is not a finite number: {value}")]
    NonFiniteResult { value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text is not a well-formed expression.
    Syntax,
    /// The expression is well-formed but its value is undefined over the reals.
    Math,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::DivisionByZero { .. }
            | EvalError::ZeroBase { .. }
            | EvalError::NegativeBase { .. }
            | EvalError::NonFiniteResult { .. } => ErrorKind::Math,
            _ => ErrorKind::Syntax,
        }
    }
}
