use crate::calculator::error::EvaluationError;
use crate::calculator::evaluate;
use crate::calculator::operator::BinaryOperator;

/// A single key press on the calculator keypad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Key {
    /// One of the digit keys, `'0'` through `'9'`.
    Digit(char),
    /// The `00` key, which appends two zeroes at once.
    DoubleZero,
    /// The decimal point key.
    Decimal,
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
    /// Clears the accumulated expression.
    Clear,
    /// Evaluates the accumulated expression.
    Equals,
}

/// The stateful shell around the pure [`evaluate`] core.
///
/// Accumulates key presses into an expression string and, on [`Key::Equals`],
/// replaces it with the result. On a failed evaluation the display resets to
/// `"0"` and the error is returned, so the caller can show a single generic
/// notification regardless of the error kind.
///
/// # Examples
///
/// ```
/// use infix_calculator::calculator::keypad::{Calculator, Key};
/// use infix_calculator::calculator::operator::BinaryOperator;
///
/// let mut calculator = Calculator::new();
/// calculator.press(Key::Digit('2')).unwrap();
/// calculator.press(Key::Operator(BinaryOperator::Add)).unwrap();
/// calculator.press(Key::Digit('3')).unwrap();
/// calculator.press(Key::Equals).unwrap();
/// assert_eq!(calculator.display(), "5");
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    display: String,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    /// The accumulated expression, or the result of the latest evaluation.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Applies a single key press to the calculator state.
    ///
    /// returns: `Err` only when `Key::Equals` fails to evaluate the
    /// accumulated expression, in which case the display has been reset
    /// to `"0"`.
    pub fn press(&mut self, key: Key) -> Result<(), EvaluationError> {
        match key {
            Key::Digit(digit) => self.display.push(digit),
            Key::DoubleZero => self.display.push_str("00"),
            Key::Decimal => self.display.push('.'),
            Key::Operator(operator) => self.display.push_str(&operator.to_string()),
            Key::OpenParenthesis => self.display.push('('),
            Key::CloseParenthesis => self.display.push(')'),
            Key::Clear => self.display.clear(),
            Key::Equals => match evaluate(self.display.clone()) {
                Ok(result) => self.display = result.to_string(),
                Err(error) => {
                    self.display = "0".to_string();
                    return Err(error);
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press_all(calculator: &mut Calculator, keys: &[Key]) -> Result<(), EvaluationError> {
        for &key in keys {
            calculator.press(key)?;
        }
        Ok(())
    }

    #[test]
    fn key_presses_accumulate_into_expression() {
        let mut calculator = Calculator::new();

        press_all(
            &mut calculator,
            &[
                Key::OpenParenthesis,
                Key::Digit('2'),
                Key::Operator(BinaryOperator::Add),
                Key::Digit('3'),
                Key::CloseParenthesis,
                Key::Operator(BinaryOperator::Multiply),
                Key::Digit('4'),
            ],
        )
        .unwrap();

        assert_eq!(calculator.display(), "(2+3)*4")
    }

    #[test]
    fn equals_replaces_expression_with_result() {
        let mut calculator = Calculator::new();

        press_all(
            &mut calculator,
            &[
                Key::Digit('2'),
                Key::Operator(BinaryOperator::Add),
                Key::Digit('3'),
                Key::Operator(BinaryOperator::Multiply),
                Key::Digit('4'),
                Key::Equals,
            ],
        )
        .unwrap();

        assert_eq!(calculator.display(), "14")
    }

    #[test]
    fn double_zero_key_appends_two_zeroes() {
        let mut calculator = Calculator::new();

        press_all(&mut calculator, &[Key::Digit('5'), Key::DoubleZero]).unwrap();

        assert_eq!(calculator.display(), "500")
    }

    #[test]
    fn decimal_key_builds_fractional_literals() {
        let mut calculator = Calculator::new();

        press_all(
            &mut calculator,
            &[
                Key::Digit('1'),
                Key::Decimal,
                Key::Digit('5'),
                Key::Operator(BinaryOperator::Multiply),
                Key::Digit('2'),
                Key::Equals,
            ],
        )
        .unwrap();

        assert_eq!(calculator.display(), "3")
    }

    #[test]
    fn clear_empties_the_display() {
        let mut calculator = Calculator::new();

        press_all(&mut calculator, &[Key::Digit('7'), Key::Clear]).unwrap();

        assert_eq!(calculator.display(), "")
    }

    #[test]
    fn failed_evaluation_resets_display_to_zero() {
        let mut calculator = Calculator::new();
        press_all(
            &mut calculator,
            &[
                Key::OpenParenthesis,
                Key::Digit('1'),
                Key::Operator(BinaryOperator::Add),
                Key::Digit('2'),
            ],
        )
        .unwrap();

        let error = calculator.press(Key::Equals).unwrap_err();

        assert_eq!(error, EvaluationError::UnbalancedParentheses);
        assert_eq!(calculator.display(), "0")
    }

    #[test]
    fn calculator_is_usable_after_a_failed_evaluation() {
        let mut calculator = Calculator::new();
        press_all(&mut calculator, &[Key::Digit('1'), Key::Digit('0')]).unwrap();
        press_all(
            &mut calculator,
            &[Key::Operator(BinaryOperator::Divide), Key::Digit('0')],
        )
        .unwrap();
        calculator.press(Key::Equals).unwrap_err();

        press_all(
            &mut calculator,
            &[
                Key::Clear,
                Key::Digit('5'),
                Key::Operator(BinaryOperator::Remainder),
                Key::Digit('2'),
                Key::Equals,
            ],
        )
        .unwrap();

        assert_eq!(calculator.display(), "1")
    }
}
