use crate::core::NumeralCodec;
use crate::utils::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicCodec;

impl NumeralCodec for ArabicCodec {
    fn decode(&self, token: &str) -> Result<i64> {
        token.trim().parse::<i64>().map_err(|e| {
            tracing::debug!("Arabic operand '{}' did not parse: {}", token, e);
            CalcError::InvalidExpression
        })
    }

    fn encode(&self, value: i64) -> Result<String> {
        Ok(value.to_string())
    }
}
