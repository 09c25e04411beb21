use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_add_command, handle_config_command, handle_copy_command, handle_get_command,
    handle_remove_command, handle_report_command, AddArgs, ConfigArgs, CopyArgs, EntryLocation,
    ReportArgs,
};
use tally::config::{Settings, TallyPaths};
use tally::storage::PeriodStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "tally records earnings and expenses per period and prints them \
                  as a categorized, fixed-width report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the earnings/expenses report of a period
    #[command(alias = "print")]
    Report(ReportArgs),

    /// Add an entry to a period
    Add(AddArgs),

    /// Show an entry of a period
    Get(EntryLocation),

    /// Copy an entry from one period to another
    Copy(CopyArgs),

    /// Remove an entry from a period
    #[command(alias = "rm")]
    Remove(EntryLocation),

    /// List stored periods
    #[command(alias = "list")]
    Periods,

    /// Show configuration and paths, or change report defaults
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    tally::logging::init_tracing(Some(&paths.log_file()));

    let settings = Settings::load_or_create(&paths)?;
    let store = PeriodStore::new(paths.clone());

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(&store, &settings, args)?,
        Some(Commands::Add(args)) => handle_add_command(&store, &settings, args)?,
        Some(Commands::Get(args)) => handle_get_command(&store, &settings, args)?,
        Some(Commands::Copy(args)) => handle_copy_command(&store, &settings, args)?,
        Some(Commands::Remove(args)) => handle_remove_command(&store, &settings, args)?,
        Some(Commands::Periods) => {
            let periods = store.list_periods()?;
            if periods.is_empty() {
                println!("No periods found.");
            }
            for period in periods {
                println!("{}", period);
            }
        }
        Some(Commands::Config(args)) => handle_config_command(&paths, settings, args)?,
        None => {
            println!("tally - personal finance tracker");
            println!();
            println!("Run 'tally --help' for usage information.");
        }
    }

    Ok(())
}
