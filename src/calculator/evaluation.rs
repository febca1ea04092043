//! Expression evaluation using fasteval.
//!
//! Wraps fasteval behind the [`Evaluator`] trait so the equation editor
//! can be driven by any evaluator, and formats results for display.

use fasteval::{EmptyNamespace, Evaler, Parser, Slab};
use thiserror::Error;

/// Why an expression could not be turned into a number.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// The text is not a well-formed expression.
    #[error("failed to parse expression: {0}")]
    Parse(String),
    /// The expression parsed but the evaluator rejected it.
    #[error("failed to evaluate expression: {0}")]
    Eval(String),
    /// The expression produced something that is not a finite number.
    #[error("expression did not produce a number: {0}")]
    NotANumber(f64),
}

/// Turns equation text into a numeric value.
pub trait Evaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

/// [`Evaluator`] backed by fasteval with an empty namespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastEvaluator;

impl Evaluator for FastEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let parser = Parser::new();
        let mut slab = Slab::new();
        let mut namespace = EmptyNamespace;

        let parsed = parser
            .parse(expression, &mut slab.ps)
            .map_err(|e| EvalError::Parse(e.to_string()))?;

        let value = parsed
            .from(&slab.ps)
            .eval(&slab, &mut namespace)
            .map_err(|e| EvalError::Eval(e.to_string()))?;

        // fasteval only yields f64, so NaN and the infinities stand in for
        // results that are not usable numbers (e.g. division by zero).
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NotANumber(value))
        }
    }
}

/// Format a result using the shortest decimal text that round-trips.
///
/// Whole numbers carry no fraction and large or tiny values are written
/// out in full rather than in exponent form.
pub fn format_result(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> Result<f64, EvalError> {
        FastEvaluator.evaluate(input)
    }

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(eval("2+2"), Ok(4.0));
        assert_eq!(eval("(3+4)*2"), Ok(14.0));
        assert_eq!(eval("1+3.5"), Ok(4.5));
        assert_eq!(eval("10/4"), Ok(2.5));
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("8-2-1"), Ok(5.0));
        assert_eq!(eval("-(2+3)"), Ok(-5.0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(eval("2+"), Err(EvalError::Parse(_))));
        assert!(matches!(eval("(1+2"), Err(EvalError::Parse(_))));
        assert!(matches!(eval(""), Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_undefined_name_fails_evaluation() {
        assert!(matches!(eval("abc+1"), Err(EvalError::Eval(_))));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(eval("2/0"), Err(EvalError::NotANumber(v)) if v.is_infinite()));
        assert!(matches!(eval("0/0"), Err(EvalError::NotANumber(v)) if v.is_nan()));
    }

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(-14.0), "-14");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn test_format_fractions_without_trailing_zeros() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(0.125), "0.125");
        assert!(format_result(1.0 / 3.0).starts_with("0.333"));
    }

    #[test]
    fn test_format_never_uses_exponent() {
        assert_eq!(format_result(1e20), "100000000000000000000");
        assert_eq!(format_result(1e-7), "0.0000001");
    }
}
