use crate::buffer::ExpressionBuffer;
use crate::calculator::{self, ERROR_SENTINEL};
use crate::display;
use crate::intent::Intent;
use tracing::{debug, trace, warn};

/// One calculator, fed one intent at a time.
///
/// Every input device goes through [`Session::handle`]; the display reads
/// [`Session::full_expression`] and [`Session::current_entry`] afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    buffer: ExpressionBuffer,
}

impl Session {
    pub fn handle(&mut self, intent: Intent) {
        debug!(?intent, expression = self.buffer.text(), "handling intent");

        match intent {
            Intent::Digit(d) => self.buffer.push_digit(d),
            Intent::Operator(op) => self.buffer.push_operator(op),
            Intent::DecimalPoint => self.buffer.push_decimal(),
            Intent::Delete => self.delete(),
            Intent::Clear => self.buffer.clear(),
            Intent::Equals => self.equals(),
        }
    }

    pub fn apply(mut self, intent: Intent) -> Self {
        self.handle(intent);
        self
    }

    pub fn full_expression(&self) -> &str {
        self.buffer.text()
    }

    pub fn current_entry(&self) -> &str {
        display::current_entry(self.buffer.text())
    }

    pub fn is_just_evaluated(&self) -> bool {
        self.buffer.is_just_evaluated()
    }

    // Editing a result turns it back into typed input, except for the error
    // sentinel which is not an expression at all.
    fn delete(&mut self) {
        if self.buffer.is_just_evaluated() && self.buffer.text() == ERROR_SENTINEL {
            self.buffer.clear();
            return;
        }
        self.buffer.delete();
        self.buffer.clear_evaluated();
    }

    fn equals(&mut self) {
        match calculator::evaluate(self.buffer.text()) {
            Ok(None) => trace!("nothing to evaluate"),
            Ok(Some(evaluation)) => {
                let result = evaluation.render();
                debug!(?evaluation, %result, "evaluated");
                self.buffer.replace_with_result(result);
            }
            Err(e) => {
                warn!(expression = self.buffer.text(), "{}", e);
                self.buffer.clear();
            }
        }
    }
}
