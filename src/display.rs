use crate::buffer::trailing_operand;

/// What the entry line of the display shows for `text`: the operand being
/// typed, or the operator just typed when no operand has started yet.
pub fn current_entry(text: &str) -> &str {
    if text.is_empty() {
        return "0";
    }

    match trailing_operand(text) {
        "" => &text[text.len() - 1..],
        operand => operand,
    }
}
