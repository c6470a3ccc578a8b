//! ribbon-dye - Terminal front end for the ribbon dye calculator.

mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dye_core::config::DEFAULT_TIMEOUT_SECS;
use dye_core::{
    calculate_request, format_result, parse_request, user_message, validate_table, FabricType,
    LoadStatus, RecipeStore, StoreConfig,
};

/// Compute dye quantities for ribbon fabrics from the published recipe table.
#[derive(Parser, Debug)]
#[command(name = "ribbon-dye")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recipe table URL (defaults to the published table)
    #[arg(long, global = true, conflicts_with = "data")]
    url: Option<String>,

    /// Read the recipe table from a local JSON file instead
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the dosages for one bath
    Calc(CalcArgs),
    /// List fabric types
    Fabrics,
    /// List the widths offered for a fabric
    Widths {
        /// Fabric type
        fabric: String,
    },
    /// Load the recipe table and report inconsistencies
    Check,
    /// Interactive session (default)
    Shell,
}

/// Inputs of a one-shot calculation.
#[derive(clap::Args, Debug)]
struct CalcArgs {
    /// Color identifier
    #[arg(short, long)]
    color: String,

    /// Fabric type, e.g. "Doppio Raso" (case-insensitive)
    #[arg(short, long)]
    fabric: String,

    /// Width label, e.g. 7mm
    #[arg(short, long)]
    width: String,

    /// Bath volume in liters
    #[arg(short, long, allow_hyphen_values = true)]
    liters: String,

    /// Percent adjustment
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    percent: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = store_config(&args);

    match args.command.unwrap_or(Command::Shell) {
        Command::Fabrics => {
            for fabric in FabricType::ALL {
                println!("{}", fabric);
            }
        }
        Command::Widths { fabric } => {
            let fabric = FabricType::from_name(&fabric)
                .with_context(|| format!("Unknown fabric '{}'", fabric))?;
            for width in fabric.widths() {
                println!("{}", width);
            }
        }
        Command::Check => {
            let store = load_store(&config)?;
            let report = validate_table(store.table());
            for warning in &report.warnings {
                warn!("{}", warning);
            }
            if !report.is_clean() {
                anyhow::bail!("{} problem(s) found", report.warnings.len());
            }
            info!("Recipe table is consistent");
        }
        Command::Calc(calc) => {
            let store = RecipeStore::load(&config);
            println!("{}", run_calc(&store, &calc)?);
        }
        Command::Shell => {
            let store = RecipeStore::load(&config);
            if let LoadStatus::Unavailable { reason } = store.status() {
                warn!("Working offline: {}", reason);
            }
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_shell(&store, stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

fn store_config(args: &Args) -> StoreConfig {
    let config = match (&args.data, &args.url) {
        (Some(path), _) => StoreConfig::file(path),
        (None, Some(url)) => StoreConfig::remote(url.as_str()),
        (None, None) => StoreConfig::default(),
    };
    config.with_timeout(Duration::from_secs(args.timeout))
}

/// One-shot commands fail outright when the table is missing.
fn load_store(config: &StoreConfig) -> Result<RecipeStore> {
    let store = RecipeStore::load(config);
    if let LoadStatus::Unavailable { reason } = store.status() {
        anyhow::bail!("Recipe table unavailable from {}: {}", config.source, reason);
    }
    Ok(store)
}

/// Calculate one bath and render it as text or JSON.
fn run_calc(store: &RecipeStore, args: &CalcArgs) -> Result<String> {
    if let LoadStatus::Unavailable { reason } = store.status() {
        anyhow::bail!("Recipe table unavailable: {}", reason);
    }

    let fabric = match args.fabric.trim() {
        "" => "",
        name => FabricType::from_name(name)
            .with_context(|| format!("Unknown fabric '{}'", name))?
            .name(),
    };

    let outcome = parse_request(&args.color, fabric, &args.width, &args.liters, &args.percent)
        .and_then(|request| calculate_request(store.table(), request));
    let calc = match outcome {
        Ok(calc) => calc,
        Err(e) => anyhow::bail!("{}", user_message(&e)),
    };

    if args.json {
        Ok(serde_json::to_string_pretty(&calc)?)
    } else {
        Ok(format_result(&calc))
    }
}

fn run_shell(store: &RecipeStore, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut shell = shell::Shell::new(store);
    writeln!(output, "{}", shell::HELP)?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match shell.handle_line(&line) {
            shell::Reply::Quit => break,
            shell::Reply::Text(text) => writeln!(output, "{}", text)?,
            shell::Reply::Silent => {}
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dye_core::RecipeTable;
    use pretty_assertions::assert_eq;

    fn store() -> RecipeStore {
        let table = RecipeTable::from_json(
            r#"{"1001": {"Cotone": {"7mm": {"Blue": 2.0, "Red": 1.0}}}}"#,
        )
        .unwrap();
        RecipeStore::from_table(table, "test")
    }

    fn calc_args(fabric: &str, width: &str, json: bool) -> CalcArgs {
        CalcArgs {
            color: "1001".to_string(),
            fabric: fabric.to_string(),
            width: width.to_string(),
            liters: "10".to_string(),
            percent: "20".to_string(),
            json,
        }
    }

    #[test]
    fn test_calc_matches_fabric_case_insensitively() {
        let output = run_calc(&store(), &calc_args("cotone", "7mm", false)).unwrap();
        assert_eq!(output, "Blue    :   24.00\nRed     :   12.00");
    }

    #[test]
    fn test_calc_json_output() {
        let output = run_calc(&store(), &calc_args("COTONE", "7mm", true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["request"]["fabric"], "Cotone");
        assert_eq!(value["request"]["liters"], 10);
        assert_eq!(value["request"]["percent"], 20);
        let substances: Vec<&String> = value["amounts"].as_object().unwrap().keys().collect();
        assert_eq!(substances, vec!["Blue", "Red"]);
        assert!((value["amounts"]["Blue"].as_f64().unwrap() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_calc_unknown_fabric() {
        let err = run_calc(&store(), &calc_args("Velluto", "7mm", false)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown fabric 'Velluto'");
    }

    #[test]
    fn test_calc_user_messages() {
        let err = run_calc(&store(), &calc_args("Cotone", "15mm", false)).unwrap_err();
        assert_eq!(err.to_string(), "Dati non trovati.");

        let err = run_calc(&store(), &calc_args("", "7mm", false)).unwrap_err();
        assert_eq!(err.to_string(), "Completa tutti i campi.");
    }

    #[test]
    fn test_calc_fails_when_table_unavailable() {
        let store = RecipeStore::unavailable("connection refused");
        let err = run_calc(&store, &calc_args("Cotone", "7mm", false)).unwrap_err();
        assert_eq!(err.to_string(), "Recipe table unavailable: connection refused");
    }
}
