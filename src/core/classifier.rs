use crate::core::{NumeralSystem, Operator, ParsedExpression};
use crate::utils::error::Result;
use regex::{Captures, Regex, RegexBuilder};

pub const ARABIC_PATTERN: &str = r"^\s*([1-9]|10)\s*([+\-*/])\s*([1-9]|10)\s*$";
pub const ROMAN_PATTERN: &str =
    r"^\s*(V|X|V?I{1,3}|I[VX])\s*([+\-*/])\s*(V|X|V?I{1,3}|I[VX])\s*$";

/// Recognises `<operand> <op> <operand>` in Arabic (1..=10) or Roman (I..=X) form.
#[derive(Debug, Clone)]
pub struct Classifier {
    arabic: Regex,
    roman: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        let arabic = Regex::new(ARABIC_PATTERN)?;
        let roman = RegexBuilder::new(ROMAN_PATTERN)
            .case_insensitive(true)
            .build()?;
        Ok(Self { arabic, roman })
    }

    /// Arabic is tried first and Roman second; a Roman match replaces an Arabic one.
    pub fn classify(&self, input: &str) -> Option<ParsedExpression> {
        let mut parsed = None;

        if let Some(caps) = self.arabic.captures(input) {
            parsed = Self::build(NumeralSystem::Arabic, &caps);
        }
        if let Some(caps) = self.roman.captures(input) {
            parsed = Self::build(NumeralSystem::Roman, &caps);
        }

        match &parsed {
            Some(expression) => tracing::debug!(
                "Classified {:?} as {:?}: {} {} {}",
                input,
                expression.system,
                expression.first_operand,
                expression.operator,
                expression.second_operand
            ),
            None => tracing::debug!("Input {:?} matched no expression pattern", input),
        }

        parsed
    }

    fn build(system: NumeralSystem, caps: &Captures<'_>) -> Option<ParsedExpression> {
        let operator = caps[2].chars().next().and_then(Operator::from_symbol)?;
        Some(ParsedExpression {
            system,
            operator,
            first_operand: caps[1].to_string(),
            second_operand: caps[3].to_string(),
        })
    }
}
