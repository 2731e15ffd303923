use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use keypad_calc::config::Config;
use keypad_calc::scanning::normalize;
use keypad_calc::{evaluate_expression, format_expression_value, ExpressionField};
use tracing_subscriber::EnvFilter;

/// Calculator keypad for a numeric amount field.
#[derive(Parser, Debug)]
#[command(name = "keypad_calc", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate one expression and exit
    #[arg(short, long, value_name = "EXPRESSION")]
    eval: Option<String>,
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt(config: &Config) -> Result<()> {
    print!("{}", config.prompt);
    std::io::stdout().flush().context("Failed to flush stdout")
}

fn report(field: &ExpressionField, config: &Config) {
    let expression = if config.ascii_operators {
        normalize(field.expression())
    } else {
        field.expression().to_string()
    };

    if field.is_in_progress() {
        println!("{expression}  (pending, last value {})", field.amount_text());
    } else {
        println!("{expression}  = {}", format_expression_value(field.value()));
    }

    if let Some(message) = field.error_message() {
        println!("Error, {}", message);
    }
}

// Each character is a key: `<` is backspace, `c` clears and `=` confirms.
fn run_keypad(config: &Config) -> Result<()> {
    let mut field = ExpressionField::new();

    prompt(config)?;
    for line in std::io::stdin().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            break;
        }

        for key in line.chars() {
            match key {
                '<' => field.backspace(),
                'c' | 'C' => field.clear(),
                '=' => {
                    // the error stays on the field and is reported below
                    let _ = field.confirm();
                }
                key if key.is_whitespace() => {}
                key => field.input(key),
            }
        }

        report(&field, config);
        prompt(config)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.eval {
        Some(expression) => match evaluate_expression(&expression) {
            Ok(value) => {
                println!("{}", format_expression_value(value));
                Ok(())
            }
            Err(error) => bail!("{} ({})", error.user_message(), error),
        },
        None => run_keypad(&config),
    }
}
