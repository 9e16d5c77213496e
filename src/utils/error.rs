use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Arithmetic error: {operation}")]
    ArithmeticError { operation: String },

    #[error("Roman numeral system has no negative numbers")]
    NoNegativeRomanNumerals,

    #[error("Invalid Roman numeral character: '{ch}'")]
    InvalidCharacter { ch: char },

    #[error("Result {value} cannot be written as a Roman numeral (1..=100)")]
    RomanResultOutOfRange { value: i64 },

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidExpression | CalcError::InvalidCharacter { .. } => {
                ErrorCategory::Input
            }
            CalcError::ArithmeticError { .. }
            | CalcError::NoNegativeRomanNumerals
            | CalcError::RomanResultOutOfRange { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::Pattern(_) | CalcError::IoError(_) | CalcError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Process exit code used when strict exit is enabled.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Arithmetic => 3,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
