use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use expense_dashboard::cli::{
    handle_add, handle_categories, handle_export, handle_list, handle_months, handle_show,
    handle_summary, AddArgs, ExportArgs, FilterArgs,
};
use expense_dashboard::config::paths::DATA_DIR_ENV;
use expense_dashboard::config::{DashboardPaths, Settings};
use expense_dashboard::models::Category;
use expense_dashboard::storage::{initialize_storage, seed_expenses, Storage};

const LOG_ENV: &str = "EXPENSE_DASHBOARD_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses and explore where the money goes",
    long_about = "Record expenses from the command line and view them through month \
                  and category filters, with totals, category shares and a \
                  month-over-month trend."
)]
struct Cli {
    /// Directory holding config.json and data/
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses in the current view
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Show one expense by id
    Show {
        /// Full id or short exp-xxxxxxxx form
        id: String,
    },

    /// Show the dashboard: stat cards, category breakdown and expenses
    Summary(FilterArgs),

    /// List months that hold expenses
    Months,

    /// Show totals and shares for every category
    Categories(FilterArgs),

    /// Export the current view
    Export(ExportArgs),

    /// Initialize storage with the starter expenses
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => DashboardPaths::with_base_dir(dir),
        None => DashboardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut storage, &settings, args)?,
        Some(Commands::List(filter)) => handle_list(&storage, &settings, filter)?,
        Some(Commands::Show { id }) => handle_show(&storage, &settings, &id)?,
        Some(Commands::Summary(filter)) => handle_summary(&storage, &settings, filter)?,
        Some(Commands::Months) => handle_months(&storage)?,
        Some(Commands::Categories(filter)) => handle_categories(&storage, &settings, filter)?,
        Some(Commands::Export(args)) => handle_export(&storage, args)?,
        Some(Commands::Init) => {
            println!("Initializing expense dashboard at: {}", paths.base_dir().display());
            if initialize_storage(&paths)? {
                println!("Added {} starter expenses.", seed_expenses().len());
            } else {
                println!("Expense file already exists, leaving it untouched.");
            }
            settings.save(&paths)?;
            println!();
            println!("Run 'expenses summary' to see the dashboard.");
        }
        Some(Commands::Config) => {
            println!("Expense Dashboard Configuration");
            println!("===============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!(
                "  Categories:       {}",
                Category::all()
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        None => {
            println!("expenses - track spending from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses init' to start with sample data.");
        }
    }

    Ok(())
}

