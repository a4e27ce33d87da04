use crate::calculator::error::EvaluationError;
use crate::calculator::token::Token;
use itertools::Itertools;

/// Scans the expression text into a sequence of infix tokens.
///
/// A contiguous run of digits and decimal points forms one numeric literal.
/// Characters that are not digits, operators or parentheses (whitespace
/// included) are dropped without error, matching the keypad input this
/// lexer was written for.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent tokens, still in infix order.
pub fn tokenize(expression: String) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens: Vec<Token> = vec![];
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        if character.is_ascii_digit() || character == '.' {
            let literal: String = characters
                .peeking_take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| EvaluationError::InvalidNumberLiteral(literal))?;
            tokens.push(Token::Literal(value));
            continue;
        }

        characters.next();
        match character {
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Dash),
            '*' => tokens.push(Token::Asterisk),
            '/' => tokens.push(Token::ForwardSlash),
            '%' => tokens.push(Token::Percent),
            '(' => tokens.push(Token::OpenParenthesis),
            ')' => tokens.push(Token::CloseParenthesis),
            _ => {}
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_tokenizes_in_infix_order() {
        let tokens = tokenize("2+3".to_string()).unwrap();

        let expected = vec![Token::Literal(2.0), Token::Plus, Token::Literal(3.0)];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn digit_runs_form_single_literals() {
        let tokens = tokenize("12.5*(34)".to_string()).unwrap();

        let expected = vec![
            Token::Literal(12.5),
            Token::Asterisk,
            Token::OpenParenthesis,
            Token::Literal(34.0),
            Token::CloseParenthesis,
        ];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn all_operators_tokenize() {
        let tokens = tokenize("1+2-3*4/5%6".to_string()).unwrap();

        let expected = vec![
            Token::Literal(1.0),
            Token::Plus,
            Token::Literal(2.0),
            Token::Dash,
            Token::Literal(3.0),
            Token::Asterisk,
            Token::Literal(4.0),
            Token::ForwardSlash,
            Token::Literal(5.0),
            Token::Percent,
            Token::Literal(6.0),
        ];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn unrecognized_characters_are_dropped() {
        let tokens = tokenize("2 +x3".to_string()).unwrap();

        let expected = vec![Token::Literal(2.0), Token::Plus, Token::Literal(3.0)];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn literal_with_multiple_decimal_points_returns_err() {
        let error = tokenize("1.2.3+4".to_string()).unwrap_err();

        assert_eq!(
            error,
            EvaluationError::InvalidNumberLiteral("1.2.3".to_string())
        )
    }

    #[test]
    fn lone_decimal_point_returns_err() {
        let error = tokenize("2+.".to_string()).unwrap_err();

        assert_eq!(error, EvaluationError::InvalidNumberLiteral(".".to_string()))
    }

    #[test]
    fn empty_expression_tokenizes_to_nothing() {
        let tokens = tokenize("".to_string()).unwrap();

        assert_eq!(tokens, vec![])
    }
}
