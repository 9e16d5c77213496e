pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, OutOfRangePolicy, OutputFormat, Settings};
pub use crate::core::classifier::Classifier;
pub use crate::core::evaluator::{evaluate, Calculator};
pub use crate::core::roman::{integer_to_roman, roman_to_integer};
pub use crate::domain::model::{Evaluation, NumeralSystem, Operator, ParsedExpression};
pub use crate::utils::error::{CalcError, Result};
