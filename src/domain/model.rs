use crate::utils::error::{CalcError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Arabic,
    Roman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

/// Symbol to operator lookup; the classifier only ever captures these four characters.
pub const OPERATIONS: [(char, Operator); 4] = [
    ('+', Operator::Add),
    ('-', Operator::Subtract),
    ('*', Operator::Multiply),
    ('/', Operator::Divide),
];

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        OPERATIONS
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, operator)| *operator)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Integer arithmetic; division truncates toward zero.
    pub fn apply(self, left: i64, right: i64) -> Result<i64> {
        let value = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 {
                    return Err(CalcError::ArithmeticError {
                        operation: "/ by zero".to_string(),
                    });
                }
                left.checked_div(right)
            }
        };

        value.ok_or_else(|| CalcError::ArithmeticError {
            operation: format!("{} {} {} overflows", left, self.symbol(), right),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One classified input line. Operands are the raw matched tokens, decoded at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    pub system: NumeralSystem,
    pub operator: Operator,
    pub first_operand: String,
    pub second_operand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub input: String,
    pub system: NumeralSystem,
    pub operator: Operator,
    pub first_value: i64,
    pub second_value: i64,
    pub value: i64,
    pub result: String,
}
