use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dutylogger
/// CLI application to record driver daily duty entries into timesheets
#[derive(Parser)]
#[command(
    name = "dutylogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple duty logging CLI: record odometer readings and shift times, derive overtime and remarks",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or custom deployments)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, driver roster and workbooks
    Init {
        /// Pre-generate dated template rows for this month (YYYY-MM) in
        /// strict-layout sheets; defaults to the current month
        #[arg(long = "month")]
        month: Option<String>,

        /// Recreate workbooks that already exist
        #[arg(long = "force")]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Record today's duty entry for a driver
    Submit {
        /// Driver access code
        #[arg(long = "code")]
        code: String,

        /// Opening odometer reading
        #[arg(long = "opening")]
        opening: String,

        /// Closing odometer reading
        #[arg(long = "closing")]
        closing: String,

        /// Shift start time (HH:MM)
        #[arg(long = "start")]
        start: String,

        /// Shift end time (HH:MM)
        #[arg(long = "end")]
        end: String,

        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show a driver's saved day records
    List {
        /// Vehicle code
        #[arg(long = "car")]
        car: String,

        /// Only show this date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Export a driver's timesheet report
    Export {
        /// Vehicle code
        #[arg(long = "car")]
        car: String,

        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Absolute output file path
        #[arg(long = "file")]
        file: String,

        /// Overwrite the output file if it exists
        #[arg(long = "force")]
        force: bool,
    },

    /// Print the operations journal
    Log {
        #[arg(long = "print", help = "Print the operations journal")]
        print: bool,
    },

    /// Archive the data directory into a zip file
    Backup {
        /// Destination archive path
        #[arg(long = "file")]
        file: String,

        /// Overwrite the archive if it exists
        #[arg(long = "force")]
        force: bool,
    },
}
