use crate::config::{OutputFormat, Settings};
use crate::core::Evaluation;
use crate::utils::error::{CalcError, Result};

/// The single stdout line for an evaluation outcome. Failures carry the bare error message.
pub fn render(settings: &Settings, input: &str, outcome: &Result<Evaluation>) -> Result<String> {
    match (settings.format, outcome) {
        (OutputFormat::Text, Ok(evaluation)) => Ok(settings.render_result(&evaluation.result)),
        (OutputFormat::Text, Err(e)) => Ok(e.to_string()),
        (OutputFormat::Json, Ok(evaluation)) => Ok(serde_json::to_string(evaluation)?),
        (OutputFormat::Json, Err(e)) => render_json_error(input, e),
    }
}

fn render_json_error(input: &str, error: &CalcError) -> Result<String> {
    let body = serde_json::json!({
        "input": input,
        "error": error.to_string(),
    });
    Ok(serde_json::to_string(&body)?)
}
