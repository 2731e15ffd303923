//! Keystroke-level editing of calculator text.
//!
//! Every function here takes the current text and returns the next one.
//! The text is kept in display glyphs (`+ − × ÷`), is never empty, and is
//! never handed to the evaluator by this module.

use crate::parsing::BinaryOperator;
use crate::scanning::{is_calculator_operator, is_operator, normalize, UI_MINUS};

/// What the field shows when nothing has been typed.
pub const EMPTY_EXPRESSION: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    digit(char),
    point,
    operator(BinaryOperator),
}

impl Key {
    /// Accepts the keypad glyphs as well as their ASCII spellings.
    pub fn from_char(character: char) -> Option<Self> {
        use BinaryOperator::*;
        match character {
            '0'..='9' => Some(Key::digit(character)),
            '.' => Some(Key::point),
            '+' => Some(Key::operator(addition)),
            '−' | '-' => Some(Key::operator(subtraction)),
            '×' | '*' => Some(Key::operator(multiplication)),
            '÷' | '/' => Some(Key::operator(division)),
            _ => None,
        }
    }
}

fn is_operator_character(character: char) -> bool {
    is_calculator_operator(character) || is_operator(character)
}

fn is_minus(character: char) -> bool {
    character == UI_MINUS || character == '-'
}

fn is_lone_minus(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_minus(c))
}

fn is_negative_zero(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('0'), None) if is_minus(c)
    )
}

fn ends_with_operator(text: &str) -> bool {
    text.chars().last().map_or(false, is_operator_character)
}

/// The number currently being typed: everything after the last operator.
pub fn last_number_segment(text: &str) -> String {
    let normalized = normalize(text);
    match normalized.rfind(is_operator) {
        Some(index) => normalized[(index + 1)..].to_string(),
        None => normalized,
    }
}

fn push_digit(current: &str, digit: char) -> String {
    if current == EMPTY_EXPRESSION {
        digit.to_string()
    } else if is_negative_zero(current) && digit != '0' {
        format!("{UI_MINUS}{digit}")
    } else {
        format!("{current}{digit}")
    }
}

fn push_point(current: &str) -> String {
    if current == EMPTY_EXPRESSION {
        "0.".to_string()
    } else if is_lone_minus(current) {
        format!("{UI_MINUS}0.")
    } else if ends_with_operator(current) {
        format!("{current}0.")
    } else if last_number_segment(current).contains('.') {
        current.to_string()
    } else {
        format!("{current}.")
    }
}

fn push_operator(current: &str, operator: BinaryOperator) -> String {
    let glyph = operator.glyph();
    let is_subtraction = operator == BinaryOperator::subtraction;

    if current == EMPTY_EXPRESSION && is_subtraction {
        return glyph.to_string();
    }
    // an unresolved sign cannot take another operator
    if is_lone_minus(current) {
        return current.to_string();
    }

    let last = match current.chars().last() {
        Some(last) if is_operator_character(last) => last,
        _ => return format!("{current}{glyph}"),
    };

    if is_subtraction && !is_minus(last) {
        // "×−": multiply by a negative number
        return format!("{current}{glyph}");
    }

    let mut next = current.to_string();
    next.pop();
    if !is_subtraction && is_minus(last) && ends_with_operator(&next) {
        // replace the whole "×−" pair, not just the sign
        next.pop();
    }
    next.push(glyph);
    next
}

pub fn apply_key(current: &str, key: Key) -> String {
    let current = if current.is_empty() {
        EMPTY_EXPRESSION
    } else {
        current
    };

    match key {
        Key::digit(digit) => push_digit(current, digit),
        Key::point => push_point(current),
        Key::operator(operator) => push_operator(current, operator),
    }
}

/// Applies one keypad character. Characters that are not keys leave the text as is.
pub fn apply_input(current: &str, input: char) -> String {
    match Key::from_char(input) {
        Some(key) => apply_key(current, key),
        None if current.is_empty() => EMPTY_EXPRESSION.to_string(),
        None => current.to_string(),
    }
}

pub fn backspace(current: &str) -> String {
    let mut next = current.to_string();
    next.pop();
    if next.is_empty() || is_lone_minus(&next) {
        EMPTY_EXPRESSION.to_string()
    } else {
        next
    }
}

pub fn clear() -> String {
    EMPTY_EXPRESSION.to_string()
}

/// True while the text cannot be evaluated yet.
pub fn is_in_progress(text: &str) -> bool {
    match normalize(text).chars().last() {
        None => true,
        Some(last) => is_operator(last) || last == '.',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(keys: &str) -> String {
        keys.chars()
            .fold(EMPTY_EXPRESSION.to_string(), |text, key| apply_input(&text, key))
    }

    #[test]
    fn test_leading_zero_collapses() {
        assert_eq!(apply_input("0", '7'), "7");
        assert_eq!(apply_input("0", '0'), "0");
        assert_eq!(apply_input("12", '0'), "120");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(apply_input("0", '−'), "−");
        assert_eq!(apply_input("−", '5'), "−5");
        assert_eq!(apply_input("−0", '5'), "−5");
        assert_eq!(apply_input("−0", '0'), "−00");
        assert_eq!(apply_input("−", '0'), "−0");
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(apply_input("0", '.'), "0.");
        assert_eq!(apply_input("−", '.'), "−0.");
        assert_eq!(apply_input("3+", '.'), "3+0.");
        assert_eq!(apply_input("12", '.'), "12.");
        assert_eq!(apply_input("12.5", '.'), "12.5");
        assert_eq!(apply_input("1.5+2", '.'), "1.5+2.");
        assert_eq!(apply_input("1.5+2.", '.'), "1.5+2.");
    }

    #[test]
    fn test_operators() {
        assert_eq!(apply_input("3", '+'), "3+");
        assert_eq!(apply_input("0", '×'), "0×");
        assert_eq!(apply_input("3+", '×'), "3×");
        assert_eq!(apply_input("3×", '−'), "3×−");
        assert_eq!(apply_input("3−", '−'), "3−");
        assert_eq!(apply_input("3−", '÷'), "3÷");
        assert_eq!(apply_input("−", '+'), "−");
        assert_eq!(apply_input("−", '−'), "−");
    }

    #[test]
    fn test_compound_operator_is_replaced_whole() {
        assert_eq!(apply_input("3×−", '+'), "3+");
        assert_eq!(apply_input("3×−", '÷'), "3÷");
        assert_eq!(apply_input("3×−", '−'), "3×−");
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(apply_input("3", '*'), "3×");
        assert_eq!(apply_input("3", '/'), "3÷");
        assert_eq!(apply_input("0", '-'), "−");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(apply_input("12", 'x'), "12");
        assert_eq!(apply_input("12", '('), "12");
        assert_eq!(apply_input("", 'x'), "0");
        assert_eq!(apply_input("", '4'), "4");
    }

    #[test]
    fn test_typing_sequence() {
        assert_eq!(type_keys("3×−4"), "3×−4");
        assert_eq!(type_keys("−.5"), "−0.5");
        assert_eq!(type_keys("00.0.1"), "0.01");
        assert_eq!(type_keys("1+×−÷2"), "1÷2");
    }

    #[test]
    fn test_backspace() {
        assert_eq!(backspace("123"), "12");
        assert_eq!(backspace("3×−"), "3×");
        assert_eq!(backspace("7"), "0");
        assert_eq!(backspace("−5"), "0");
        assert_eq!(backspace("0"), "0");
        assert_eq!(backspace(""), "0");
    }

    #[test]
    fn test_clear() {
        assert_eq!(clear(), "0");
    }

    #[test]
    fn test_in_progress() {
        assert!(is_in_progress("3+"));
        assert!(is_in_progress("3×−"));
        assert!(is_in_progress("−"));
        assert!(is_in_progress("4."));
        assert!(is_in_progress(""));
        assert!(is_in_progress("  "));
        assert!(!is_in_progress("3+4"));
        assert!(!is_in_progress("0"));
        assert!(!is_in_progress("4.5"));
    }

    #[test]
    fn test_last_number_segment() {
        assert_eq!(last_number_segment("12.5"), "12.5");
        assert_eq!(last_number_segment("3+4.2"), "4.2");
        assert_eq!(last_number_segment("3×−"), "");
    }
}
