//! Interactive sessions for the two modes
//!
//! Input and output are injected so the sessions can be driven from tests.
//! Prompts are only written for values missing from the command line.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use binarith_eval::{compute, EvalError, PostfixEvaluator};
use tracing::debug;

use crate::{ArithArgs, PostfixArgs};

/// Arithmetic mode: two operands, one operator, every bit pattern printed.
pub fn run_arith<const WIDTH: usize, R: BufRead, W: Write>(
    args: &ArithArgs,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    debug!(width = WIDTH, "arithmetic mode");

    let lhs = value_or_prompt(&args.lhs, input, output, "Enter the first number: ")?;
    let rhs = value_or_prompt(&args.rhs, input, output, "Enter the second number: ")?;
    let op = value_or_prompt(&args.op, input, output, "Enter the operation (+, -, *): ")?;

    let lhs = parse_operand(&lhs, 1)?;
    let rhs = parse_operand(&rhs, 2)?;
    let report = compute::<WIDTH>(lhs, rhs, &op)?;

    writeln!(output, "First number (binary): {}", report.lhs_bits())?;
    writeln!(output, "Second number (binary): {}", report.rhs_bits())?;
    writeln!(output, "Result (binary): {}", report.result_bits())?;
    writeln!(output, "Result (decimal): {}", report.result_decimal())?;
    Ok(())
}

/// Postfix mode: one expression in, one signed decimal out.
pub fn run_postfix<const WIDTH: usize, R: BufRead, W: Write>(
    args: &PostfixArgs,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    debug!(width = WIDTH, "postfix mode");

    let expression = if args.expression.is_empty() {
        write!(output, "Enter a postfix expression: ")?;
        output.flush()?;
        // end of input reads as an empty expression
        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("failed to read the expression")?;
        line
    } else {
        args.expression.join(" ")
    };

    let result = PostfixEvaluator::<WIDTH>::new().evaluate(&expression)?;
    writeln!(output, "Result (decimal): {}", result)?;
    Ok(())
}

/// Text printed to stderr for a failed run.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<EvalError>() {
        Some(eval) => format!("Error: {}", eval),
        None => format!("Error: {:#}", err),
    }
}

fn value_or_prompt<R: BufRead, W: Write>(
    given: &Option<String>,
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value.trim().to_string());
    }

    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read standard input")?;
    if read == 0 {
        bail!("unexpected end of input after prompt {:?}", prompt.trim_end());
    }
    Ok(line.trim().to_string())
}

fn parse_operand(text: &str, position: usize) -> Result<i64, EvalError> {
    text.parse().map_err(|_| EvalError::InvalidToken {
        token: text.to_string(),
        position,
        reason: "not a decimal integer".to_string(),
    })
}
