//! Rendering resolved values back into text.

use crate::scanning::UI_MINUS;

/// Renders a value so that it can be typed back into the field.
///
/// Ten fraction digits at most, with trailing zeros and a dangling point
/// removed. Non-finite values and negative zero both come out as `"0"`.
pub fn format_expression_value(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }

    let fixed = format!("{:.10}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Same as [`format_expression_value`] with the minus glyph the keypad uses.
pub fn format_for_display(value: f64) -> String {
    format_expression_value(value).replace('-', &UI_MINUS.to_string())
}

/// Two fraction digits, as shown next to a currency code.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }
    // adding zero turns -0.0 into 0.0
    format!("{:.2}", amount + 0.0)
}
