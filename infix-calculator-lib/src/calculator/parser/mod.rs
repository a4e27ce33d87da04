mod infix_converter;

use crate::calculator::error::EvaluationError;
use crate::calculator::parser::infix_converter::infix_to_postfix;
use crate::calculator::token::Token;

/// Parses the given infix tokens into an equivalent postfix
/// (Reverse Polish) token sequence, which can be evaluated with a single
/// value stack instead of needing precedence lookahead.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent tokens, in postfix format.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::calculator::parser::parse;
/// use infix_calculator::calculator::token::Token;
///
/// let infix_tokens = vec![
///     Token::Literal(2.0),
///     Token::Plus,
///     Token::Literal(3.0),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(
///     postfix_tokens,
///     vec![Token::Literal(2.0), Token::Literal(3.0), Token::Plus],
/// );
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    infix_to_postfix(infix_tokens)
}
