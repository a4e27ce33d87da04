use crate::calculator::error::EvaluationError;
use crate::calculator::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    Literal(f64),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Percent,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// A 'value' is a token that represents a numerical value,
    /// as opposed to an operator or parenthesis.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// The operator this token stands for, or `None` for values
    /// and parentheses.
    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            Token::Percent => Some(BinaryOperator::Remainder),
            Token::Literal(_) | Token::OpenParenthesis | Token::CloseParenthesis => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = EvaluationError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Plus),
            "-" => Ok(Token::Dash),
            "*" => Ok(Token::Asterisk),
            "/" => Ok(Token::ForwardSlash),
            "%" => Ok(Token::Percent),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => input
                .parse::<f64>()
                .map(Token::Literal)
                .map_err(|_| EvaluationError::InvalidNumberLiteral(input.to_string())),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
