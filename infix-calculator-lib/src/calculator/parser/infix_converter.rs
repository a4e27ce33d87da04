use crate::calculator::error::EvaluationError;
use crate::calculator::operator::Associativity;
use crate::calculator::token::Token;
use std::collections::VecDeque;

/// Converts infix tokens to postfix order using the shunting-yard algorithm.
///
/// Literals move straight to the output; operators wait on a stack until an
/// operator of lower precedence (or, for these left-associative operators,
/// equal precedence) arrives or the input ends. A closing parenthesis
/// flushes the stack down to its matching opening parenthesis, which is
/// discarded without being emitted.
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Literal(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            operator_token => parse_operator_token(&mut operators, &mut output, operator_token)?,
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::UnbalancedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(EvaluationError::UnbalancedParentheses);
            }
            Some(Token::OpenParenthesis) => {
                // Discard the open parenthesis.
                return Ok(());
            }
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: Token,
) -> Result<(), EvaluationError> {
    let operator = token
        .as_binary_operator()
        .ok_or(EvaluationError::MalformedExpression)?;
    loop {
        let top_pops_first = match operators.front() {
            None | Some(Token::OpenParenthesis) => false,
            Some(top_of_operator_stack) => {
                let other_operator = top_of_operator_stack
                    .as_binary_operator()
                    .ok_or(EvaluationError::MalformedExpression)?;

                other_operator.precedence_gt(&operator)
                    || (other_operator.precedence_eq(&operator)
                        && operator.associativity() == Associativity::Left)
            }
        };

        if !top_pops_first {
            break;
        }

        let other_operator_token = operators
            .pop_front()
            .ok_or(EvaluationError::MalformedExpression)?; // Pop other_operator
        output.push(other_operator_token); // Push other_operator
    }

    operators.push_front(token); // Push operator
    Ok(())
}
