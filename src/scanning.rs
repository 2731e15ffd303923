//! Turns calculator text into numbers and operator symbols.

use crate::error_handling::SyntaxError;
use crate::parsing::BinaryOperator;

pub const UI_PLUS: char = '+';
pub const UI_MINUS: char = '−';
pub const UI_MULTIPLY: char = '×';
pub const UI_DIVIDE: char = '÷';

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    number(f64),
    operator(BinaryOperator),
}

/// Maps display glyphs onto their ASCII operators and drops whitespace.
pub fn normalize(expression: &str) -> String {
    expression
        .chars()
        .filter(|character| !character.is_whitespace())
        .map(|character| match character {
            UI_MINUS => '-',
            UI_MULTIPLY => '*',
            UI_DIVIDE => '/',
            other => other,
        })
        .collect()
}

pub fn is_operator(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/')
}

/// True for the four keys of the keypad that act as operators.
pub fn is_calculator_operator(character: char) -> bool {
    matches!(character, UI_PLUS | UI_MINUS | UI_MULTIPLY | UI_DIVIDE)
}

fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

fn is_digit_or_dot(character: char) -> bool {
    is_digit(character) || character == '.'
}

pub struct StringScanner {
    string: String,
    index: usize,
}

impl StringScanner {
    pub fn new(expression: &str) -> Self {
        Self {
            string: normalize(expression),
            index: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    fn view(&self) -> &str {
        &self.string[self.index..]
    }

    // Only ever called with ASCII predicates, so the count is also a byte length.
    fn count_while<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view().chars().take_while(|c| predicate(*c)).count()
    }

    fn get_number(&mut self) -> Result<Token, SyntaxError> {
        let count = self.count_while(is_digit_or_dot);
        let literal = &self.string[self.index..(self.index + count)];
        self.index += count;

        if literal.matches('.').count() > 1 {
            return Err(SyntaxError::multiple_decimal_points(literal.into()));
        }
        if !literal.chars().any(is_digit) {
            return Err(SyntaxError::lone_decimal_point);
        }

        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::number(value)),
            _ => Err(SyntaxError::not_finite(literal.into())),
        }
    }

    fn get_token(&mut self) -> Option<Result<Token, SyntaxError>> {
        let character = self.view().chars().next()?;

        if let Some(operator) = BinaryOperator::from_symbol(character) {
            self.index += character.len_utf8();
            Some(Ok(Token::operator(operator)))
        } else if is_digit_or_dot(character) {
            Some(self.get_number())
        } else {
            Some(Err(SyntaxError::unexpected_character(character)))
        }
    }
}

impl Iterator for StringScanner {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if let Some(Err(_)) = token {
            // nothing after a bad character is worth scanning
            self.index = self.string.len();
        }
        token
    }
}

pub fn tokenize(expression: &str) -> Result<Vec<Token>, SyntaxError> {
    let scanner = StringScanner::new(expression);
    if scanner.is_empty() {
        return Err(SyntaxError::empty);
    }
    scanner.collect()
}
