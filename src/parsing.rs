use crate::scanning::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    negative,
}

impl UnaryOperator {
    pub fn call(&self, value: f64) -> f64 {
        use UnaryOperator::*;
        match self {
            negative => -value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    /// Recognizes the ASCII symbols only; glyphs are normalized before this.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        use BinaryOperator::*;
        match symbol {
            '+' => Some(addition),
            '-' => Some(subtraction),
            '*' => Some(multiplication),
            '/' => Some(division),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        use crate::scanning::{UI_DIVIDE, UI_MINUS, UI_MULTIPLY, UI_PLUS};
        use BinaryOperator::*;
        match self {
            addition => UI_PLUS,
            subtraction => UI_MINUS,
            multiplication => UI_MULTIPLY,
            division => UI_DIVIDE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    unary(UnaryOperator),
    binary(BinaryOperator),
}

impl Operator {
    fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        use Operator::*;
        match self {
            binary(addition | subtraction) => 1,
            binary(multiplication | division) => 2,
            unary(_) => 3,
        }
    }

    fn is_right_associative(&self) -> bool {
        matches!(self, Operator::unary(_))
    }
}

/// One entry of a postfix sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExprNode {
    number(f64),
    operator(Operator),
}

pub struct Yard {
    expression: Vec<ExprNode>,
    stack: Vec<Operator>,
    after_number: bool,
}

impl Yard {
    pub fn new() -> Self {
        Self {
            expression: Vec::new(),
            stack: Vec::new(),
            after_number: false,
        }
    }

    fn add_number(&mut self, value: f64) {
        self.expression.push(ExprNode::number(value));
        self.after_number = true;
    }

    fn pop_higher_operator(&mut self, incoming: &Operator) -> Option<Operator> {
        let top = self.stack.last()?;
        let outranks = top.precedence() > incoming.precedence()
            || (top.precedence() == incoming.precedence() && !incoming.is_right_associative());
        if outranks {
            self.stack.pop()
        } else {
            None
        }
    }

    fn add_operator(&mut self, operator: BinaryOperator) {
        // minus is only a subtraction when a number sits directly to its left
        let operator = if operator == BinaryOperator::subtraction && !self.after_number {
            Operator::unary(UnaryOperator::negative)
        } else {
            Operator::binary(operator)
        };

        while let Some(higher) = self.pop_higher_operator(&operator) {
            self.expression.push(ExprNode::operator(higher));
        }
        self.stack.push(operator);
        self.after_number = false;
    }

    pub fn add(&mut self, token: &Token) {
        match token {
            Token::number(value) => self.add_number(*value),
            Token::operator(operator) => self.add_operator(*operator),
        }
    }

    pub fn finish(mut self) -> Vec<ExprNode> {
        while let Some(operator) = self.stack.pop() {
            self.expression.push(ExprNode::operator(operator));
        }
        self.expression
    }
}

/// Reorders tokens into postfix form. Arity is not checked here.
pub fn to_postfix(tokens: &[Token]) -> Vec<ExprNode> {
    let mut yard = Yard::new();
    for token in tokens {
        yard.add(token);
    }
    yard.finish()
}
