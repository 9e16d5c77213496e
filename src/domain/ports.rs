use crate::utils::error::Result;

/// Converts operand tokens to integers and integer results back to text
/// for a single numeral system.
pub trait NumeralCodec: Send + Sync {
    fn decode(&self, token: &str) -> Result<i64>;
    fn encode(&self, value: i64) -> Result<String>;
}
