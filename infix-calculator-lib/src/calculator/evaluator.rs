use crate::calculator::error::EvaluationError;
use crate::calculator::token::Token;
use std::collections::VecDeque;

/// Evaluates a postfix token sequence down to a single value.
///
/// Literals are pushed onto a value stack; each operator pops its right-hand
/// operand first (it was pushed most recently), then its left-hand operand,
/// and pushes the result back. A well-formed sequence leaves exactly one
/// value on the stack.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::calculator::evaluator::evaluate_postfix;
/// use infix_calculator::calculator::token::Token;
///
/// // 2 3 + == 2 + 3
/// let postfix_tokens = vec![
///     Token::Literal(2.0),
///     Token::Literal(3.0),
///     Token::Plus,
/// ];
/// let result = evaluate_postfix(postfix_tokens)?;
/// assert_eq!(result, 5.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64, EvaluationError> {
    let mut values: VecDeque<f64> = VecDeque::new();

    for token in postfix_tokens {
        match token {
            Token::Literal(value) => values.push_front(value),
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::MalformedExpression);
            }
            operator_token => {
                let operator = operator_token
                    .as_binary_operator()
                    .ok_or(EvaluationError::MalformedExpression)?;
                let second_value = values
                    .pop_front()
                    .ok_or(EvaluationError::MalformedExpression)?;
                let first_value = values
                    .pop_front()
                    .ok_or(EvaluationError::MalformedExpression)?;
                values.push_front(operator.evaluate(first_value, second_value)?);
            }
        }
    }

    let result = values
        .pop_front()
        .ok_or(EvaluationError::MalformedExpression)?;
    if !values.is_empty() {
        return Err(EvaluationError::MalformedExpression);
    }
    Ok(result)
}
