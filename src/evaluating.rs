use crate::editing::is_in_progress;
use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::tokenize;

impl BinaryOperator {
    pub fn call(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        use BinaryOperator::*;

        let value = match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => {
                if right == 0.0 {
                    return Err(EvalError::division_by_zero);
                }
                left / right
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::non_finite)
        }
    }
}

pub fn evaluate(expression: &[ExprNode]) -> Result<f64, EvalError> {
    let mut slots = Vec::<f64>::new();
    for node in expression {
        match node {
            ExprNode::number(value) => slots.push(*value),

            ExprNode::operator(Operator::unary(operator)) => {
                let value = slots.pop().ok_or(EvalError::stack_underflow)?;
                slots.push(operator.call(value));
            }

            ExprNode::operator(Operator::binary(operator)) => {
                let right = slots.pop().ok_or(EvalError::stack_underflow)?;
                let left = slots.pop().ok_or(EvalError::stack_underflow)?;
                slots.push(operator.call(left, right)?);
            }
        }
    }

    match slots.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::malformed_expression),
    }
}

/// Tokenizes, reorders and reduces `text` in one go.
pub fn evaluate_expression(text: &str) -> Result<f64> {
    let outcome = tokenize(text)
        .map_err(CalcError::from)
        .and_then(|tokens| {
            let postfix = to_postfix(&tokens);
            tracing::trace!(?tokens, ?postfix, "translated expression");
            evaluate(&postfix).map_err(CalcError::from)
        });

    if let Err(error) = &outcome {
        tracing::debug!(expression = text, %error, "expression rejected");
    }
    outcome
}

/// Like [`evaluate_expression`], but refuses text that is still being typed.
pub fn try_evaluate(text: &str) -> Result<f64> {
    if is_in_progress(text) {
        return Err(CalcError::in_progress);
    }
    evaluate_expression(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(evaluate_expression("3+4×2"), Ok(11.0));
        assert_eq!(evaluate_expression("10÷4"), Ok(2.5));
        assert_eq!(evaluate_expression("8−2−1"), Ok(5.0));
        assert_eq!(evaluate_expression("7"), Ok(7.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate_expression("3×−4"), Ok(-12.0));
        assert_eq!(evaluate_expression("−5"), Ok(-5.0));
        assert_eq!(evaluate_expression("−2×3"), Ok(-6.0));
        assert_eq!(evaluate_expression("−−5"), Ok(5.0));
        assert_eq!(evaluate_expression("2−−3"), Ok(5.0));
    }

    #[test]
    fn test_zero_is_a_value() {
        assert_eq!(evaluate_expression("0"), Ok(0.0));
        assert_eq!(evaluate_expression("2−2"), Ok(0.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate_expression("5÷0"),
            Err(CalcError::eval(EvalError::division_by_zero))
        );
        assert_eq!(
            evaluate_expression("5÷−0"),
            Err(CalcError::eval(EvalError::division_by_zero))
        );
    }

    #[test]
    fn test_non_finite_result() {
        let big = format!("1{}", "0".repeat(300));
        assert_eq!(
            evaluate_expression(&format!("{big}×{big}")),
            Err(CalcError::eval(EvalError::non_finite))
        );
    }

    #[test]
    fn test_underflow_and_malformed() {
        assert_eq!(
            evaluate_expression("3+"),
            Err(CalcError::eval(EvalError::stack_underflow))
        );
        assert_eq!(
            evaluate_expression("×3"),
            Err(CalcError::eval(EvalError::stack_underflow))
        );
        assert_eq!(
            evaluate(&[ExprNode::number(1.0), ExprNode::number(2.0)]),
            Err(EvalError::malformed_expression)
        );
        assert_eq!(evaluate(&[]), Err(EvalError::malformed_expression));
    }

    #[test]
    fn test_syntax_errors_surface() {
        assert_eq!(
            evaluate_expression("1..2"),
            Err(CalcError::syntax(SyntaxError::multiple_decimal_points(
                "1..2".into()
            )))
        );
    }

    #[test]
    fn test_try_evaluate_skips_in_progress_text() {
        assert_eq!(try_evaluate("3+"), Err(CalcError::in_progress));
        assert_eq!(try_evaluate("3."), Err(CalcError::in_progress));
        assert_eq!(try_evaluate("3+4"), Ok(7.0));
    }

    #[test]
    fn test_user_message() {
        let error = evaluate_expression("5÷0").unwrap_err();
        assert_eq!(error.user_message(), "Invalid expression");
    }
}
