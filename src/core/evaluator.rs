use crate::config::OutOfRangePolicy;
use crate::core::classifier::Classifier;
use crate::core::{Evaluation, NumeralSystem, ParsedExpression};
use crate::utils::error::{CalcError, Result};

pub struct Calculator {
    classifier: Classifier,
    out_of_range: OutOfRangePolicy,
}

impl Calculator {
    pub fn new(out_of_range: OutOfRangePolicy) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new()?,
            out_of_range,
        })
    }

    pub fn evaluate(&self, input: &str) -> Result<String> {
        self.evaluate_detailed(input).map(|evaluation| evaluation.result)
    }

    pub fn evaluate_detailed(&self, input: &str) -> Result<Evaluation> {
        let expression = self
            .classifier
            .classify(input)
            .ok_or(CalcError::InvalidExpression)?;

        let (first_value, second_value, value) = self.compute(&expression)?;
        let result = self.format(expression.system, value)?;
        tracing::debug!("{} => {} ({})", input.trim(), result, value);

        Ok(Evaluation {
            input: input.to_string(),
            system: expression.system,
            operator: expression.operator,
            first_value,
            second_value,
            value,
            result,
        })
    }

    fn compute(&self, expression: &ParsedExpression) -> Result<(i64, i64, i64)> {
        let codec = expression.system.codec();
        let first = codec.decode(&expression.first_operand)?;
        let second = codec.decode(&expression.second_operand)?;
        let value = expression.operator.apply(first, second)?;
        Ok((first, second, value))
    }

    fn format(&self, system: NumeralSystem, value: i64) -> Result<String> {
        match system.codec().encode(value) {
            Err(CalcError::RomanResultOutOfRange { value })
                if self.out_of_range == OutOfRangePolicy::Empty =>
            {
                tracing::warn!("Roman result {} is not representable, printing nothing", value);
                Ok(String::new())
            }
            other => other,
        }
    }
}

/// Evaluates one expression with the default settings.
pub fn evaluate(input: &str) -> Result<String> {
    Calculator::new(OutOfRangePolicy::default())?.evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn calculator() -> Calculator {
        Calculator::new(OutOfRangePolicy::Error).unwrap()
    }

    #[test]
    fn test_arabic_results() {
        let calc = calculator();
        assert_eq!(calc.evaluate("3 + 4").unwrap(), "7");
        assert_eq!(calc.evaluate("2 - 9").unwrap(), "-7");
        assert_eq!(calc.evaluate("10 * 10").unwrap(), "100");
        assert_eq!(calc.evaluate("7 / 2").unwrap(), "3");
        assert_eq!(calc.evaluate(" 2   +   3 ").unwrap(), "5");
    }

    #[test]
    fn test_every_arabic_pair() {
        let calc = calculator();
        for a in 1..=10i64 {
            for b in 1..=10i64 {
                assert_eq!(calc.evaluate(&format!("{} + {}", a, b)).unwrap(), (a + b).to_string());
                assert_eq!(calc.evaluate(&format!("{} - {}", a, b)).unwrap(), (a - b).to_string());
                assert_eq!(calc.evaluate(&format!("{} * {}", a, b)).unwrap(), (a * b).to_string());
                assert_eq!(calc.evaluate(&format!("{} / {}", a, b)).unwrap(), (a / b).to_string());
            }
        }
    }

    #[test]
    fn test_roman_results() {
        let calc = calculator();
        assert_eq!(calc.evaluate("IV * II").unwrap(), "VIII");
        assert_eq!(calc.evaluate("x * x").unwrap(), "C");
        assert_eq!(calc.evaluate("IX + IX").unwrap(), "XVIII");
        assert_eq!(calc.evaluate("X / III").unwrap(), "III");
    }

    #[test]
    fn test_negative_roman_result() {
        let err = calculator().evaluate("I - V").unwrap_err();
        assert!(matches!(err, CalcError::NoNegativeRomanNumerals));
    }

    #[test]
    fn test_zero_roman_result() {
        let err = calculator().evaluate("I - I").unwrap_err();
        assert!(matches!(err, CalcError::RomanResultOutOfRange { value: 0 }));

        let err = calculator().evaluate("I / II").unwrap_err();
        assert!(matches!(err, CalcError::RomanResultOutOfRange { value: 0 }));
    }

    #[test]
    fn test_zero_roman_result_with_empty_policy() {
        let calc = Calculator::new(OutOfRangePolicy::Empty).unwrap();
        assert_eq!(calc.evaluate("V - V").unwrap(), "");
        assert!(matches!(
            calc.evaluate("II - V"),
            Err(CalcError::NoNegativeRomanNumerals)
        ));
    }

    #[test]
    fn test_invalid_expression() {
        let calc = calculator();
        assert!(matches!(calc.evaluate("x + y"), Err(CalcError::InvalidExpression)));
        assert!(matches!(calc.evaluate("5 / 0"), Err(CalcError::InvalidExpression)));
        assert!(matches!(calc.evaluate("1 + I"), Err(CalcError::InvalidExpression)));
    }

    #[test]
    fn test_evaluate_detailed() {
        let evaluation = calculator().evaluate_detailed("vi - ii").unwrap();
        assert_eq!(evaluation.system, NumeralSystem::Roman);
        assert_eq!(evaluation.operator, Operator::Subtract);
        assert_eq!(evaluation.first_value, 6);
        assert_eq!(evaluation.second_value, 2);
        assert_eq!(evaluation.value, 4);
        assert_eq!(evaluation.result, "IV");
    }

    #[test]
    fn test_free_function() {
        assert_eq!(evaluate("IV * II").unwrap(), "VIII");
    }
}
