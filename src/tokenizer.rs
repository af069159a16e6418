use compact_str::{CompactString, ToCompactString};

#[derive(Debug, Default)]
enum TokenizerState {
    #[default]
    Clean,
    InNumber(CompactString),
    InOperator(Operation),
}

#[derive(Debug)]
pub struct Tokenizer {
    state: TokenizerState,
    // A '-' seen while this is set starts a negative literal instead of a subtraction
    expects_value: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            state: TokenizerState::Clean,
            expects_value: true,
        }
    }
}

impl Tokenizer {
    pub fn update(&mut self, c: char) -> Option<Token> {
        use TokenizerState::*;

        match self.state {
            Clean => {
                self.start(c);
                None
            }
            InNumber(ref mut literal) => match c {
                ' ' => self.finalize(),
                _ if is_operator(c) => {
                    let token = self.finalize();
                    self.start(c);
                    token
                }
                _ => {
                    literal.push(c);
                    None
                }
            },
            // Operators are single characters, the next one always closes them
            InOperator(_) => {
                let token = self.finalize();
                self.start(c);
                token
            }
        }
    }

    pub fn finalize(&mut self) -> Option<Token> {
        use TokenizerState::*;
        let token = match std::mem::take(&mut self.state) {
            Clean => None,
            InNumber(literal) => Some(Token::Val(parse_literal(&literal))),
            InOperator(op) => Some(Token::Op(op)),
        };
        if let Some(token) = token {
            self.expects_value = matches!(token, Token::Op(_));
        }
        token
    }

    fn start(&mut self, c: char) {
        self.state = match Operation::from_char(c) {
            Some(Operation::Sub) if self.expects_value => TokenizerState::InNumber("-".into()),
            Some(op) => TokenizerState::InOperator(op),
            None if c == ' ' => TokenizerState::Clean,
            None => TokenizerState::InNumber(c.to_compact_string()),
        };
    }
}

pub fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::default();
    let mut tokens: Vec<Token> = expr.chars().filter_map(|c| tokenizer.update(c)).collect();
    tokens.extend(tokenizer.finalize());
    tokens
}

/// Parses the longest numeric prefix of `literal`: an optional `-`, digits and
/// at most one `.`. Anything after that prefix is ignored, and a prefix without
/// a single digit is `NaN`.
fn parse_literal(literal: &str) -> Value {
    let bytes = literal.as_bytes();
    let digits_start = usize::from(bytes.first() == Some(&b'-'));
    let mut end = digits_start;
    let mut seen_point = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !bytes[digits_start..end].iter().any(u8::is_ascii_digit) {
        return Value::NAN;
    }
    literal[..end].parse().unwrap_or(Value::NAN)
}

pub fn is_operator(c: char) -> bool {
    Operation::from_char(c).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Val(Value),
    Op(Operation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

pub type Value = f64;
