//! Keypad-driven arithmetic calculator.
//!
//! Key presses become [`Intent`]s, a [`Session`] applies them to an expression
//! buffer, and `=` evaluates the buffer with `*` `/` binding tighter than
//! `+` `-`.

pub mod buffer;
pub mod calculator;
pub mod display;
pub mod intent;
pub mod session;
pub mod tokenizer;

pub use calculator::{evaluate, CalculatorError, Evaluation, ERROR_SENTINEL};
pub use display::current_entry;
pub use intent::{parse_keys, Digit, Intent};
pub use session::Session;
pub use tokenizer::Operation;
