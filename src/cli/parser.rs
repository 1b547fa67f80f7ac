use crate::core::Language;
use crate::export::ExportFormat;
use crate::models::Period;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for timetracker
#[derive(Parser)]
#[command(
    name = "timetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time tracking: filter, summarize and export clock-in records",
    long_about = None
)]
pub struct Cli {
    /// Override the data file (employees + time records)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Override the session file
    #[arg(global = true, long = "session", value_name = "FILE")]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Reporting window.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Period ending today (day, week, month) or custom
    #[arg(long, short = 'p', value_enum)]
    pub period: Option<Period>,

    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Range expression: YYYY, YYYY-MM, YYYY-MM-DD or START:END
    #[arg(long, value_name = "RANGE", conflicts_with_all = ["from", "to"])]
    pub range: Option<String>,
}

/// Record selection shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Explicit day(s) to include; overrides the date range (repeatable, comma separated)
    #[arg(long = "day", value_name = "DATE")]
    pub days: Vec<String>,

    /// Only records of this user id (admins only for other users)
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,

    /// Only records tagged with this client
    #[arg(long, value_name = "TAG")]
    pub client: Option<String>,

    /// Label language (overrides the configuration)
    #[arg(long, value_enum)]
    pub lang: Option<Language>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration and a data file with sample records
    Init {
        /// Reset the configuration file to defaults and reseed the data file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Log in (mock authentication: "admin" in the username grants admin)
    Login {
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(long, short = 'P')]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Print the filtered records and their summary
    Report {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export the report to a file
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "txt")]
        format: ExportFormat,

        /// Output file (default: ./timetracker_report_<today>.<ext>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the client tags present in the data
    Clients,

    /// List the days of a range (for picking --day values)
    Days {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show an employee profile with statistics for a period
    Employee {
        id: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },
}
