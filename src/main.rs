//! `bigint-calc` reads two unsigned integers and prints their sum, difference,
//! product, quotient and remainder, one per line.
//!
//! Operands may be passed on the command line; any that are missing are
//! prompted for on stdin. Set `RUST_LOG` to see the engine's tracing output on
//! stderr.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use digit_bigint::BigInt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bigint-calc",
    about = "Add, subtract, multiply, divide and reduce two unsigned big integers"
)]
struct Args {
    /// First operand, as decimal digits
    first: Option<String>,

    /// Second operand, as decimal digits
    second: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(args, stdin.lock(), &mut stdout.lock())
}

fn run<R: BufRead, W: Write>(args: Args, mut input: R, out: &mut W) -> Result<()> {
    let first = operand(args.first, "Enter the first big integer: ", &mut input, out)
        .context("Failed to read the first operand")?;
    let second = operand(args.second, "Enter the second big integer: ", &mut input, out)
        .context("Failed to read the second operand")?;

    report(out, "Addition", Ok(&first + &second))?;
    report(out, "Subtraction", first.try_sub(&second))?;
    report(out, "Multiplication", Ok(&first * &second))?;
    report(out, "Division", first.try_div(&second))?;
    report(out, "Modulo", first.try_rem(&second))?;
    Ok(())
}

fn operand<R: BufRead, W: Write>(
    given: Option<String>,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<BigInt> {
    let text = match given {
        Some(text) => text,
        None => {
            write!(out, "{}", prompt)?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };
    let value: BigInt = text.trim().parse()?;
    tracing::debug!(digits = value.len(), "parsed operand");
    Ok(value)
}

fn report<W: Write>(out: &mut W, label: &str, result: digit_bigint::Result<BigInt>) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "{}: {}", label, value),
        Err(e) => {
            tracing::warn!(operation = label, error = %e, "operation failed");
            writeln!(out, "{}: error: {}", label, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str], stdin: &str) -> Result<String> {
        let args = Args::try_parse_from(std::iter::once("bigint-calc").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(args, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_operands_from_args() {
        let out = run_with(&["100", "7"], "").unwrap();
        assert_eq!(
            out,
            "Addition: 107\nSubtraction: 93\nMultiplication: 700\nDivision: 14\nModulo: 2\n"
        );
    }

    #[test]
    fn test_operands_from_stdin() {
        let out = run_with(&[], "123\n 877 \n").unwrap();
        assert_eq!(
            out,
            "Enter the first big integer: Enter the second big integer: \
             Addition: 1000\nSubtraction: error: underflow: the result would be negative\n\
             Multiplication: 107871\nDivision: 0\nModulo: 123\n"
        );
    }

    #[test]
    fn test_second_operand_prompted() {
        let out = run_with(&["99"], "99\n").unwrap();
        assert!(out.starts_with("Enter the second big integer: Addition: 198\n"));
        assert!(out.ends_with("Multiplication: 9801\nDivision: 1\nModulo: 0\n"));
    }

    #[test]
    fn test_division_by_zero_is_reported_per_line() {
        let out = run_with(&["5", "0"], "").unwrap();
        assert_eq!(
            out,
            "Addition: 5\nSubtraction: 5\nMultiplication: 0\n\
             Division: error: division by zero\nModulo: error: division by zero\n"
        );
    }

    #[test]
    fn test_invalid_operand_stops() {
        let err = run_with(&["12a", "3"], "").unwrap_err();
        assert_eq!(
            err.downcast_ref::<digit_bigint::Error>(),
            Some(&digit_bigint::Error::InvalidNumber { input: "12a".to_owned() })
        );
        assert!(err.to_string().contains("first operand"));
    }

    #[test]
    fn test_empty_stdin_is_invalid() {
        let err = run_with(&[], "").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<digit_bigint::Error>(),
            Some(digit_bigint::Error::InvalidNumber { .. })
        ));
    }
}
