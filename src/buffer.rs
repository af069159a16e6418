use crate::intent::Digit;
use crate::tokenizer::{is_operator, Operation};
use compact_str::CompactString;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: CompactString,
    just_evaluated: bool,
}

impl ExpressionBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    pub fn push_digit(&mut self, digit: Digit) {
        if self.just_evaluated {
            self.text.clear();
            self.just_evaluated = false;
        }
        self.text.push(digit.as_char());
    }

    /// An operator after an evaluation continues from the result. Consecutive
    /// operators coalesce into the last one typed, and only `-` can start an
    /// empty expression.
    pub fn push_operator(&mut self, op: Operation) {
        if self.text.is_empty() {
            if op == Operation::Sub {
                self.text.push('-');
            }
            return;
        }

        self.just_evaluated = false;
        if self.text.ends_with(is_operator) {
            self.text.pop();
        }
        self.text.push(op.symbol());
    }

    pub fn push_decimal(&mut self) {
        if self.just_evaluated {
            self.text = "0.".into();
            self.just_evaluated = false;
            return;
        }

        if self.text.is_empty() || self.text.ends_with(is_operator) {
            self.text.push_str("0.");
        } else if !trailing_operand(&self.text).contains('.') {
            self.text.push('.');
        }
    }

    /// Leaves the evaluated flag alone; see [`clear_evaluated`].
    ///
    /// [`clear_evaluated`]: ExpressionBuffer::clear_evaluated
    pub fn delete(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.just_evaluated = false;
    }

    pub fn clear_evaluated(&mut self) {
        self.just_evaluated = false;
    }

    pub fn replace_with_result(&mut self, result: CompactString) {
        self.text = result;
        self.just_evaluated = true;
    }
}

/// The operand being typed at the end of `text`: everything after the last
/// binary operator. A `-` at the start of the text or right after another
/// operator is a sign and stays part of the operand.
pub fn trailing_operand(text: &str) -> &str {
    let Some(boundary) = text.rfind(is_operator) else {
        return text;
    };

    let is_sign = text.as_bytes()[boundary] == b'-'
        && (boundary == 0 || text[..boundary].ends_with(is_operator));
    if is_sign {
        &text[boundary..]
    } else {
        &text[boundary + 1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    fn typed(digits: &[u8]) -> ExpressionBuffer {
        let mut buffer = ExpressionBuffer::default();
        for &n in digits {
            buffer.push_digit(digit(n));
        }
        buffer
    }

    #[test]
    fn test_digits_append() {
        assert_eq!(typed(&[0, 4, 2]).text(), "042");
    }

    #[test]
    fn test_operator_coalescing() {
        let mut buffer = typed(&[5]);
        buffer.push_operator(Operation::Add);
        buffer.push_operator(Operation::Mul);
        assert_eq!(buffer.text(), "5*");
        buffer.push_operator(Operation::Sub);
        assert_eq!(buffer.text(), "5-");
    }

    #[test]
    fn test_operator_on_empty_buffer() {
        let mut buffer = ExpressionBuffer::default();
        buffer.push_operator(Operation::Add);
        buffer.push_operator(Operation::Mul);
        buffer.push_operator(Operation::Div);
        assert_eq!(buffer.text(), "");
        buffer.push_operator(Operation::Sub);
        assert_eq!(buffer.text(), "-");
    }

    #[test]
    fn test_decimal_duplicate_suppressed() {
        let mut buffer = typed(&[1]);
        buffer.push_decimal();
        buffer.push_digit(digit(2));
        buffer.push_decimal();
        buffer.push_digit(digit(3));
        assert_eq!(buffer.text(), "1.23");
    }

    #[test]
    fn test_decimal_starts_with_zero() {
        let mut buffer = ExpressionBuffer::default();
        buffer.push_decimal();
        assert_eq!(buffer.text(), "0.");

        let mut buffer = typed(&[1]);
        buffer.push_decimal();
        buffer.push_operator(Operation::Add);
        buffer.push_decimal();
        assert_eq!(buffer.text(), "1.+0.");

        let mut buffer = ExpressionBuffer::default();
        buffer.push_operator(Operation::Sub);
        buffer.push_decimal();
        assert_eq!(buffer.text(), "-0.");
    }

    #[test]
    fn test_decimal_allowed_in_next_operand() {
        let mut buffer = typed(&[1]);
        buffer.push_decimal();
        buffer.push_digit(digit(5));
        buffer.push_operator(Operation::Mul);
        buffer.push_digit(digit(2));
        buffer.push_decimal();
        assert_eq!(buffer.text(), "1.5*2.");
    }

    #[test]
    fn test_after_evaluation() {
        let mut buffer = ExpressionBuffer::default();
        buffer.replace_with_result("4".into());
        assert!(buffer.is_just_evaluated());
        buffer.push_operator(Operation::Add);
        assert_eq!(buffer.text(), "4+");
        assert!(!buffer.is_just_evaluated());

        buffer.replace_with_result("4".into());
        buffer.push_digit(digit(5));
        assert_eq!(buffer.text(), "5");
        assert!(!buffer.is_just_evaluated());

        buffer.replace_with_result("4".into());
        buffer.push_decimal();
        assert_eq!(buffer.text(), "0.");
    }

    #[test]
    fn test_delete_keeps_flag() {
        let mut buffer = ExpressionBuffer::default();
        buffer.delete();
        assert_eq!(buffer.text(), "");

        buffer.replace_with_result("12".into());
        buffer.delete();
        assert_eq!(buffer.text(), "1");
        assert!(buffer.is_just_evaluated());
    }

    #[test]
    fn test_clear() {
        let mut buffer = typed(&[1, 2]);
        buffer.replace_with_result("12".into());
        buffer.clear();
        assert_eq!(buffer, ExpressionBuffer::default());
    }

    #[test]
    fn test_trailing_operand() {
        assert_eq!(trailing_operand(""), "");
        assert_eq!(trailing_operand("12.5"), "12.5");
        assert_eq!(trailing_operand("1+23"), "23");
        assert_eq!(trailing_operand("1+"), "");
        assert_eq!(trailing_operand("-5"), "-5");
        assert_eq!(trailing_operand("3*-5"), "-5");
        assert_eq!(trailing_operand("3-5"), "5");
        assert_eq!(trailing_operand("-"), "-");
    }
}
