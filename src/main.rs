use anyhow::Context;
use clap::Parser;
use roman_calc::app::report;
use roman_calc::utils::logger;
use roman_calc::{Calculator, CliConfig, Settings};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先解析配置，日誌格式取決於最終的輸出格式
    let resolved = Settings::resolve(&cli);
    let log_format = match &resolved {
        Ok(settings) => settings.format,
        Err(_) => cli.format.unwrap_or_default(),
    };
    logger::init_for_format(log_format, cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match resolved {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let calculator = Calculator::new(settings.out_of_range)?;

    let input = match &cli.expression {
        Some(expression) => expression.clone(),
        None => read_expression(&settings)?,
    };

    let outcome = calculator.evaluate_detailed(&input);
    let line = report::render(&settings, &input, &outcome)?;
    println!("{}", line);

    if let Err(e) = outcome {
        tracing::debug!("Evaluation failed: {} (Category: {:?})", e, e.category());
        if settings.strict_exit {
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

/// Reads one line as bytes; invalid UTF-8 is replaced and left for the classifier to reject.
fn read_expression(settings: &Settings) -> anyhow::Result<String> {
    if settings.show_prompt {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", settings.prompt)?;
        stdout.flush()?;
    }

    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_until(b'\n', &mut buf)
        .context("Failed to read expression from stdin")?;

    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
