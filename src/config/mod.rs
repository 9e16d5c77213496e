pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_contains, validate_non_empty_string, validate_path, Validate,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const RESULT_PLACEHOLDER: &str = "{result}";
pub const DEFAULT_PROMPT: &str = "\nВведите математическое выражение:";
pub const DEFAULT_RESULT_TEMPLATE: &str = "Результат операции = {result}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to do when a Roman result is 0 or above 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Fail with a dedicated error.
    #[default]
    Error,
    /// Succeed with an empty result string.
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Evaluates `a op b` in Arabic (1-10) or Roman (I-X) numerals")]
pub struct CliConfig {
    /// Expression to evaluate instead of reading a line from stdin
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    pub out_of_range: Option<OutOfRangePolicy>,

    #[arg(long, help = "Do not print the input prompt")]
    pub no_prompt: bool,

    #[arg(long, help = "Exit with a non-zero code when evaluation fails")]
    pub strict_exit: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings: defaults, then the TOML file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prompt: String,
    pub show_prompt: bool,
    pub result_template: String,
    pub format: OutputFormat,
    pub out_of_range: OutOfRangePolicy,
    pub strict_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: true,
            result_template: DEFAULT_RESULT_TEMPLATE.to_string(),
            format: OutputFormat::default(),
            out_of_range: OutOfRangePolicy::default(),
            strict_exit: false,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(path) = &cli.config {
            validate_path("config", path)?;
            tracing::debug!("Loading configuration from {}", path);
            settings.apply_toml(&TomlConfig::from_file(path)?);
        }

        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_toml(&mut self, config: &TomlConfig) {
        if let Some(output) = &config.output {
            if let Some(prompt) = &output.prompt {
                self.prompt = prompt.clone();
            }
            if let Some(template) = &output.result_template {
                self.result_template = template.clone();
            }
            if let Some(format) = output.format {
                self.format = format;
            }
        }
        if let Some(out_of_range) = config.evaluation.as_ref().and_then(|e| e.out_of_range) {
            self.out_of_range = out_of_range;
        }
        if let Some(strict_exit) = config.process.as_ref().and_then(|p| p.strict_exit) {
            self.strict_exit = strict_exit;
        }
    }

    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(out_of_range) = cli.out_of_range {
            self.out_of_range = out_of_range;
        }
        if cli.no_prompt || cli.expression.is_some() {
            self.show_prompt = false;
        }
        if cli.strict_exit {
            self.strict_exit = true;
        }
    }

    pub fn render_result(&self, result: &str) -> String {
        self.result_template.replace(RESULT_PLACEHOLDER, result)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("output.result_template", &self.result_template)?;
        validate_contains(
            "output.result_template",
            &self.result_template,
            RESULT_PLACEHOLDER,
        )
    }
}
