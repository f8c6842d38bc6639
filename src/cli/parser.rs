use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bmitracker
/// CLI application to track BMI measurements with SQLite
#[derive(Parser)]
#[command(
    name = "bmitracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple BMI tracking CLI: record, classify and review measurements using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new BMI measurement
    Add {
        /// Body weight in kilograms
        weight: f64,

        /// Body height in centimetres (realistic range: 50-300)
        height: f64,

        /// Name of the person measured (defaults to the configured placeholder)
        #[arg(long = "name", short = 'n')]
        name: Option<String>,
    },

    /// Show the measurement history, most recent first
    List {
        /// How many rows to show (default from config, normally 10)
        #[arg(long, short, help = "Limit output to the N most recent measurements")]
        limit: Option<usize>,

        /// Show the entire history instead of the most recent rows
        #[arg(long, help = "Show all measurements")]
        all: bool,
    },

    /// Delete a measurement by ID
    Del {
        /// Record ID to delete (see the ID column of `list`)
        id: i64,
    },

    /// Export measurement data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
