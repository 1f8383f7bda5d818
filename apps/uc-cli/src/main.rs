use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uc_app::{AppError, AppResult, Settings, convert_labels, load_settings};
use uc_core::{Category, registry, si};

/// Exit status for rejected input (bad number, unknown unit or category).
const EXIT_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "uc-cli")]
#[command(about = "Unit converter CLI - length, weight and temperature", long_about = None)]
struct Cli {
    /// Path to a YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Decimal places in the result line (overrides settings)
    #[arg(long, global = true)]
    decimals: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of one category
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Category (Length, Weight, Temperature); defaults to the settings category
        #[arg(short, long)]
        category: Option<String>,
        /// Source unit (e.g. Inch, kg, Celsius)
        #[arg(short, long)]
        from: String,
        /// Target unit
        #[arg(short, long)]
        to: String,
        /// Print the conversion as JSON instead of a result line
        #[arg(long)]
        json: bool,
        /// Also print the input in SI base units (m, kg, K)
        #[arg(long)]
        si: bool,
    },
    /// List units, optionally for a single category
    Units {
        /// Category to list
        category: Option<String>,
    },
    /// List categories
    Categories,
    /// Print the effective settings as YAML
    Settings,
}

/// Log filter from `RUST_LOG`, or `info` when unset or unparseable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> ExitCode {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.user_message());
            exit_code(&err)
        }
    }
}

fn exit_code(err: &AppError) -> ExitCode {
    if err.is_input_error() {
        ExitCode::from(EXIT_INPUT)
    } else {
        ExitCode::FAILURE
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let settings = resolve_settings(cli.config.as_deref(), cli.decimals)?;
    debug!(?settings, "settings resolved");

    match cli.command {
        Commands::Convert {
            value,
            category,
            from,
            to,
            json,
            si,
        } => cmd_convert(&settings, &value, category.as_deref(), &from, &to, json, si),
        Commands::Units { category } => cmd_units(category.as_deref()),
        Commands::Categories => cmd_categories(),
        Commands::Settings => cmd_settings(&settings),
    }
}

fn resolve_settings(config: Option<&Path>, decimals: Option<usize>) -> AppResult<Settings> {
    let settings = match config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    match decimals {
        Some(n) => settings.with_decimals(n),
        None => Ok(settings),
    }
}

fn cmd_convert(
    settings: &Settings,
    value: &str,
    category: Option<&str>,
    from: &str,
    to: &str,
    json: bool,
    with_si: bool,
) -> AppResult<()> {
    let category = category.unwrap_or(settings.default_category.label());
    let conversion = convert_labels(category, from, to, value)?;

    if json {
        println!("{}", conversion.to_json()?);
    } else {
        println!("{}", conversion.display(settings.decimals));
    }

    if with_si {
        println!("{}", si_line(conversion.input, conversion.from, settings.decimals)?);
    }
    Ok(())
}

fn si_line(value: f64, unit: uc_core::Unit, decimals: usize) -> AppResult<String> {
    let (si_value, symbol) = si::si_value(value, unit)?;
    Ok(format!(
        "{value:.decimals$} {unit} = {si_value:.decimals$} {symbol} (SI)"
    ))
}

fn cmd_units(category: Option<&str>) -> AppResult<()> {
    let categories: Vec<Category> = match category {
        Some(name) => vec![name.parse()?],
        None => registry::categories().to_vec(),
    };

    for category in categories {
        println!("{category}:");
        for unit in category.units() {
            if unit.is_base() {
                println!("  {unit} (base)");
            } else {
                println!("  {unit}");
            }
        }
    }
    Ok(())
}

fn cmd_categories() -> AppResult<()> {
    for category in registry::categories() {
        println!("{category}");
    }
    Ok(())
}

fn cmd_settings(settings: &Settings) -> AppResult<()> {
    print!("{}", settings.to_yaml()?);
    Ok(())
}
