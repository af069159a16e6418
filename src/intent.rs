use crate::tokenizer::Operation;

/// A single user action, whatever device it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Digit(Digit),
    Operator(Operation),
    DecimalPoint,
    Delete,
    Clear,
    Equals,
}

impl Intent {
    pub fn from_key(key: char) -> Option<Self> {
        let intent = match key {
            '0'..='9' => Self::Digit(Digit::from_char(key)?),
            '.' => Self::DecimalPoint,
            '=' | '\n' | '\r' => Self::Equals,
            '\x08' | '\x7f' => Self::Delete,
            'c' | 'C' => Self::Clear,
            // Keypad labels
            '−' => Self::Operator(Operation::Sub),
            '×' => Self::Operator(Operation::Mul),
            '÷' => Self::Operator(Operation::Div),
            _ => Self::Operator(Operation::from_char(key)?),
        };
        Some(intent)
    }
}

/// Splits a line of typed keys into intents. Whole words name the keys that
/// have no printable character of their own.
pub fn parse_keys(line: &str) -> Vec<Intent> {
    let mut intents = vec![];
    for word in line.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "del" | "delete" | "backspace" => intents.push(Intent::Delete),
            "clear" => intents.push(Intent::Clear),
            _ => intents.extend(word.chars().filter_map(Intent::from_key)),
        }
    }
    intents
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}
