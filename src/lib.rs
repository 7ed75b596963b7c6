//! Infix arithmetic evaluator.
//!
//! `evaluate` runs an expression such as `2.2*(52*(1+2^5)/26)` through the
//! [`Lexer`](syntax::Lexer) and the [shunting-yard](syntax::shunting_yard)
//! evaluator. Besides digits it understands `+ - * / ^`, parentheses, the
//! constants `e` and `p` (pi) and unary minus. All operators are left
//! associative, `^` included.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod server;
pub mod source_pos;
pub mod syntax;

pub use errors::{ErrorKind, EvalError, EvalResult};
use syntax::{shunting_yard, Lexer, SpannedTok};

pub fn tokenize(expression: &str) -> EvalResult<Vec<SpannedTok>> {
    Lexer::new(expression).tokenize()
}

pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let tokens = tokenize(expression)?;
    shunting_yard::evaluate(&tokens)
}
