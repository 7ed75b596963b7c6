use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::errors::EvalError;

/// Exit status when the expression cannot be evaluated.
pub const FAILURE_EXIT_CODE: u8 = 52;

pub const PROMPT: &str = "Enter an expression: ";

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("cannot read expression: {0}")]
    Io(#[from] io::Error),
}

/// Prompts on `output`, reads one line from `input` and prints its value.
pub fn run(mut input: impl BufRead, mut output: impl Write) -> Result<f64, CliError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let expression = line.trim();
    tracing::debug!(%expression, "read expression");

    let result = crate::evaluate(expression)?;
    writeln!(output, "Result: {}", result)?;
    Ok(result)
}
