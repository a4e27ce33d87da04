use thiserror::Error;

/// A failure in any stage of expression evaluation.
///
/// Every variant is local to a single [`evaluate`](crate::calculator::evaluate)
/// call; the calculator is ready for the next expression afterwards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A parenthesis without a matching counterpart, in either direction:
    /// a `)` that closes nothing, or a `(` that is never closed.
    #[error("unbalanced parentheses in expression")]
    UnbalancedParentheses,

    /// Division or remainder with a zero right-hand operand.
    #[error("division by zero")]
    DivisionByZero,

    /// The postfix sequence did not reduce to exactly one value, either
    /// because an operator ran out of operands or because values were
    /// left over at the end.
    #[error("malformed expression")]
    MalformedExpression,

    /// A run of digits and decimal points that does not parse as a number,
    /// such as `1.2.3`.
    #[error("invalid number literal: '{0}'")]
    InvalidNumberLiteral(String),
}
