use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_desk::cli::{
    handle_check, handle_export, handle_preview, handle_type_command, load_catalog, CheckInput,
    ExportFormat, TypeCommands,
};
use expense_desk::config::Settings;
use expense_desk::services::GracePolicy;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Expense entry checker for project expense tracking",
    long_about = "Resolves expense entries the way the entry form does: derives \
                  amounts from kilometers and per-type rates, enforces maximum \
                  caps, and reports which form fields a type requires. All \
                  commands are read-only over caller-supplied files."
)]
struct Cli {
    /// Catalog file (JSON or YAML); built-in starter types when omitted
    #[arg(short, long, env = "EXPENSES_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, env = "EXPENSES_SETTINGS", global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense-type catalog commands
    #[command(subcommand)]
    Types(TypeCommands),

    /// Preview the resolved amount and form fields for an input
    Preview {
        /// Expense type name or ID
        expense_type: String,
        /// Kilometers traveled
        #[arg(short = 'k', long)]
        distance: Option<f64>,
        /// Directly-entered amount (e.g. "450" or "450.00")
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Validate a full entry, including the backdating grace window
    Check {
        /// Expense type name or ID
        expense_type: String,
        /// Expense date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Kilometers traveled
        #[arg(short = 'k', long)]
        distance: Option<f64>,
        /// Directly-entered amount
        #[arg(short, long)]
        amount: Option<String>,
        /// Travel origin
        #[arg(long)]
        from: Option<String>,
        /// Travel destination
        #[arg(long)]
        to: Option<String>,
        /// Whether a receipt is attached
        #[arg(long)]
        receipt: bool,
    },

    /// Convert an entries JSON file to CSV or pretty JSON
    Export {
        /// Path to the entries JSON file
        entries: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::from_json_reader(File::open(path)?)?,
        None => Settings::default(),
    };
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Types(cmd) => handle_type_command(&catalog, cmd)?,

        Commands::Preview {
            expense_type,
            distance,
            amount,
        } => handle_preview(&catalog, &expense_type, distance, amount)?,

        Commands::Check {
            expense_type,
            date,
            distance,
            amount,
            from,
            to,
            receipt,
        } => {
            let grace = GracePolicy::new(settings.grace_days);
            let input = CheckInput {
                expense_type,
                date,
                distance_km: distance,
                amount,
                travel_from: from,
                travel_to: to,
                receipt,
            };
            handle_check(&catalog, &grace, input, chrono::Local::now().date_naive())?;
        }

        Commands::Export {
            entries,
            format,
            output,
        } => handle_export(&catalog, &entries, format, output)?,

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
