//! A calculator-backed amount field.
//!
//! Keeps the text being typed next to the last value that evaluated
//! cleanly, so a display can keep showing a number while the user is
//! halfway through an expression.

use crate::editing::{self, EMPTY_EXPRESSION};
use crate::error_handling::{CalcError, Result};
use crate::evaluating::try_evaluate;
use crate::formatting::{format_amount, format_for_display};

#[derive(Clone, Debug)]
pub struct ExpressionField {
    /// Current text, in display glyphs.
    expression: String,
    /// Last value that evaluated successfully.
    value: f64,
    /// Set by a failed confirm, cleared by the next successful evaluation.
    error: Option<CalcError>,
}

impl Default for ExpressionField {
    fn default() -> Self {
        Self {
            expression: EMPTY_EXPRESSION.to_string(),
            value: 0.0,
            error: None,
        }
    }
}

impl ExpressionField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// The inline message to show under the field, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(CalcError::user_message)
    }

    pub fn is_in_progress(&self) -> bool {
        editing::is_in_progress(&self.expression)
    }

    /// The last valid value with two fraction digits.
    pub fn amount_text(&self) -> String {
        format_amount(self.value)
    }

    /// Applies one keypad character and refreshes the value if possible.
    pub fn input(&mut self, key: char) {
        self.expression = editing::apply_input(&self.expression, key);
        self.sync();
    }

    pub fn backspace(&mut self) {
        self.expression = editing::backspace(&self.expression);
        self.sync();
    }

    pub fn clear(&mut self) {
        self.expression = editing::clear();
        self.value = 0.0;
        self.error = None;
    }

    /// Evaluates the field on an explicit "equals".
    ///
    /// On success the text is replaced by the rendered result. On failure the
    /// text is kept and the error is remembered for display.
    pub fn confirm(&mut self) -> Result<f64> {
        match try_evaluate(&self.expression) {
            Ok(value) => {
                self.expression = format_for_display(value);
                self.value = value;
                self.error = None;
                Ok(value)
            }
            Err(error) => {
                tracing::debug!(expression = %self.expression, %error, "confirm failed");
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    // Background refresh: failures keep the previous value and stay silent.
    fn sync(&mut self) {
        if let Ok(value) = try_evaluate(&self.expression) {
            self.value = value;
            self.error = None;
        }
        tracing::trace!(expression = %self.expression, value = self.value, "field updated");
    }
}
