pub mod arabic;
pub mod classifier;
pub mod evaluator;
pub mod roman;

pub use crate::domain::model::{Evaluation, NumeralSystem, Operator, ParsedExpression, OPERATIONS};
pub use crate::domain::ports::NumeralCodec;
pub use crate::utils::error::Result;

use arabic::ArabicCodec;
use roman::RomanCodec;

impl NumeralSystem {
    pub fn codec(self) -> &'static dyn NumeralCodec {
        match self {
            NumeralSystem::Arabic => &ArabicCodec,
            NumeralSystem::Roman => &RomanCodec,
        }
    }
}
