use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI timesheet: one row per day of the period, totals and overtime
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A timesheet CLI: log daily in/out times over a period and compute totals and overtime",
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
    /// Initialize the database, the configuration and an empty timesheet
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Set the employee name shown on the sheet
    Employee {
        /// Employee name (an empty string clears it)
        name: String,
    },

    /// Set the contracted hours for the period
    Contract {
        /// Whole hours, e.g. 40 (unparseable values store 0)
        #[arg(allow_hyphen_values = true)]
        hours: String,
    },

    /// Set the period bounds
    Period {
        /// First day of the period (YYYY-MM-DD, "" clears it)
        #[arg(long)]
        start: Option<String>,

        /// Last day of the period (YYYY-MM-DD, "" clears it)
        #[arg(long)]
        end: Option<String>,
    },

    /// Edit the entry of one day
    Set {
        /// Day to edit (YYYY-MM-DD)
        date: String,

        /// Entry time (HH:MM, "" clears it)
        #[arg(long = "in", help = "Entry time (HH:MM, empty string clears it)")]
        time_in: Option<String>,

        /// Exit time (HH:MM, "" clears it)
        #[arg(long = "out", help = "Exit time (HH:MM, empty string clears it)")]
        time_out: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete the entry of one day
    Del {
        /// Day to delete (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the timesheet for the current period
    Show,

    /// Replace the timesheet with a JSON document
    Import {
        /// JSON record document (current layout or the browser one with Spanish keys)
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the timesheet of the current period
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
