use crate::tokenizer::{self, Operation, Token, Value};
use compact_str::{format_compact, CompactString};
use thiserror::Error;

/// Shown in place of a result that is not a finite number.
pub const ERROR_SENTINEL: &str = "Error";

#[derive(Debug, Default)]
enum CalculatorState {
    #[default]
    Ready,
    // A `*` or `/` waiting for its right operand
    Pending(Operation),
}

// `*` and `/` apply as tokens arrive, `+` and `-` on finalize
#[derive(Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    reduced: Vec<Token>,
}

impl Calculator {
    pub fn handle_token(&mut self, token: Token) -> Result<(), CalculatorError> {
        use CalculatorState::*;
        use Token::*;

        match (&self.state, token) {
            (Ready, Op(op @ (Operation::Mul | Operation::Div))) => self.state = Pending(op),
            (Ready, token) => self.reduced.push(token),
            (Pending(op), Val(r)) => {
                let op = *op;
                let Some(Val(l)) = self.reduced.pop() else {
                    return Err(CalculatorError::OperandExpected);
                };
                let value = match op {
                    Operation::Div if r == 0.0 => return Err(CalculatorError::DivisionByZero),
                    Operation::Div => l / r,
                    _ => l * r,
                };
                self.reduced.push(Val(value));
                self.state = Ready;
            }
            (Pending(_), Op(_)) => return Err(CalculatorError::OperandExpected),
        }

        Ok(())
    }

    /// `None` when no token was handled.
    pub fn finalize(&mut self) -> Result<Option<Evaluation>, CalculatorError> {
        let state = std::mem::take(&mut self.state);
        let reduced = std::mem::take(&mut self.reduced);

        if matches!(state, CalculatorState::Pending(_)) {
            return Err(CalculatorError::OperandExpected);
        }

        let mut items = reduced.into_iter();
        let Some(first) = items.next() else {
            return Ok(None);
        };

        let mut total = match first {
            Token::Val(v) => v,
            Token::Op(_) => Value::NAN,
        };
        while let Some(op) = items.next() {
            let rhs = items.next();
            total = match (op, rhs) {
                (Token::Op(Operation::Add), Some(Token::Val(r))) => total + r,
                (Token::Op(Operation::Sub), Some(Token::Val(r))) => total - r,
                (Token::Op(Operation::Add | Operation::Sub), _) => Value::NAN,
                // Adjacent values without an operator between them
                _ => total,
            };
        }

        Ok(Some(Evaluation::from_value(total)))
    }
}

/// Trailing operators are dropped first. `Ok(None)` means there was nothing to
/// evaluate.
pub fn evaluate(expr: &str) -> Result<Option<Evaluation>, CalculatorError> {
    let expr = expr.trim_end_matches(tokenizer::is_operator);
    if expr.is_empty() {
        return Ok(None);
    }

    let mut calculator = Calculator::default();
    for token in tokenizer::tokenize(expr) {
        calculator.handle_token(token)?;
    }
    calculator.finalize()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Finite(Value),
    NonFinite,
}

impl Evaluation {
    fn from_value(value: Value) -> Self {
        if value.is_finite() {
            Self::Finite(value)
        } else {
            Self::NonFinite
        }
    }

    pub fn render(&self) -> CompactString {
        match *self {
            // Covers negative zero as well
            Self::Finite(v) if v == 0.0 => "0".into(),
            Self::Finite(v) => format_compact!("{v}"),
            Self::NonFinite => ERROR_SENTINEL.into(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Operand expected")]
    OperandExpected,
    #[error("Division by zero")]
    DivisionByZero,
}
