pub mod error;
pub mod evaluator;
pub mod keypad;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::calculator::error::EvaluationError;
use crate::calculator::token::Token;
use crate::debug;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given infix arithmetic expression.
///
/// The expression is tokenized, converted to postfix (Reverse Polish)
/// notation with the shunting-yard algorithm, and then reduced with a value
/// stack. The function is pure: the same expression always produces the
/// same result, and no state survives between calls.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format. Characters that are
///   not digits, decimal points, operators or parentheses are ignored.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::calculator::evaluate;
///
/// let result = evaluate("(2+3)*4".to_string())?;
/// assert_eq!(result, 20.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: String) -> Result<f64, EvaluationError> {
    let postfix_tokens = convert(expression)?;
    debug!(&postfix_tokens);
    evaluator::evaluate_postfix(postfix_tokens)
}

/// Converts the given infix expression into its space-separated postfix
/// text form, without evaluating it.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The postfix form of the expression, in text.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::calculator::to_postfix;
///
/// let postfix = to_postfix("2+3*4".to_string())?;
/// assert_eq!(postfix, "2 3 4 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(expression: String) -> Result<String> {
    let postfix_tokens = convert(expression)?;
    tokens_to_string(postfix_tokens)
}

/// Converts the given input string into an equivalent postfix token
/// sequence, which is easier to evaluate than the original string.
fn convert(expression: String) -> Result<Vec<Token>, EvaluationError> {
    let infix_tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::parse(infix_tokens)?;
    Ok(postfix_tokens)
}

/// Prints the given vector of tokens as text, separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
