mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::contracts::NormalizeArgs;
use commands::format::{CurrencyArgs, PercentageArgs};
use commands::preview::{InvestorPreviewArgs, MerchantPreviewArgs};
use commands::schedule::ScheduleArgs;

/// Merchant financing and investor offering schedules
#[derive(Parser)]
#[command(
    name = "mfc",
    version,
    about = "Merchant financing and investor offering schedules",
    long_about = "A CLI for computing payment schedules with decimal precision. \
                  Supports monthly amortizing merchant financing, quarterly \
                  interest-only investor offerings, dashboard previews, contract \
                  quotes, and normalization of backend contract responses."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Calculator defaults file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a full payment schedule
    Schedule(ScheduleArgs),
    /// Merchant financing preview with display strings
    MerchantPreview(MerchantPreviewArgs),
    /// Investor offering return preview
    InvestorPreview(InvestorPreviewArgs),
    /// Submission-time contract quote
    Quote(ScheduleArgs),
    /// Format an amount as US dollars
    FormatCurrency(CurrencyArgs),
    /// Format a percentage value
    FormatPercentage(PercentageArgs),
    /// Normalize a backend contracts response (bare array or wrapper)
    NormalizeContracts(NormalizeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args, config),
        Commands::MerchantPreview(args) => commands::preview::run_merchant_preview(args, config),
        Commands::InvestorPreview(args) => commands::preview::run_investor_preview(args, config),
        Commands::Quote(args) => commands::schedule::run_quote(args, config),
        Commands::FormatCurrency(args) => commands::format::run_format_currency(args),
        Commands::FormatPercentage(args) => commands::format::run_format_percentage(args),
        Commands::NormalizeContracts(args) => commands::contracts::run_normalize(args),
        Commands::Version => {
            println!("mfc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
