use anyhow::Result;
use clap::{Parser, Subcommand};

use finwise::cli::{
    handle_budget_command, handle_calc_command, handle_dashboard_command,
    handle_export_command, handle_goal_command, handle_learn_command, handle_summary_command,
    handle_transaction_command, BudgetCommands, CalcCommands, ExportArgs, GoalCommands,
    LearnArgs, TransactionCommands,
};
use finwise::config::{paths::FinwisePaths, settings::Settings};
use finwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finwise",
    version,
    about = "Terminal personal-finance tracker",
    long_about = "finwise records income and expenses, tracks monthly budget limits \
                  and savings goals, and includes loan and investment calculators."
)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Overview of the month: totals, recent activity, goals and trend
    Dashboard {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Income and expenses by category for a month
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Loan and investment calculators
    #[command(subcommand)]
    Calc(CalcCommands),

    /// Financial tips
    Learn(LearnArgs),

    /// Export data to a file
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();
    finwise::log::init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "Command failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("finwise - Terminal personal-finance tracker");
        println!();
        println!("Run 'finwise --help' for usage information.");
        println!("Run 'finwise init' to set up the data directory.");
        return Ok(());
    };

    let paths = FinwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match command {
        Commands::Init => {
            println!("Initializing finwise at: {}", paths.base_dir().display());
            finwise::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Try:");
            println!("  finwise transaction add income 3000 salary");
            println!("  finwise budget set food 400");
            println!("  finwise dashboard");
        }
        Commands::Config => {
            println!("finwise Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Recent transactions: {}", settings.recent_transactions);
            println!("  Dashboard goals:     {}", settings.dashboard_goals);
            println!("  Trend days:          {}", settings.trend_days);
        }
        Commands::Transaction(cmd) => handle_transaction_command(&storage, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&storage, &settings, cmd)?,
        Commands::Dashboard { month } => handle_dashboard_command(&storage, &settings, month)?,
        Commands::Summary { month } => handle_summary_command(&storage, &settings, month)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Calc(cmd) => handle_calc_command(&settings, cmd)?,
        Commands::Learn(args) => handle_learn_command(args)?,
    }

    Ok(())
}
