use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// Classroom random roll call with weighted selection
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classroom random roll call: less-called students are more likely to be picked",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or several classes)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and initialize the data directory
    Init,

    /// Print the active configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Run the web interface and JSON API
    Serve {
        #[arg(long, value_name = "ADDR", help = "Listen address (default from config)")]
        bind: Option<String>,
    },

    /// Replace the roster with the names in a .txt, .csv, .xlsx or .xls file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Call one student at random
    Call {
        #[arg(long, hide = true, help = "Seed the random source (reproducible draws)")]
        seed: Option<u64>,
    },

    /// Show the roster with call counts
    List,

    /// Show the most recent calls
    History {
        #[arg(long, short = 'n', help = "Number of calls to show (default from config)")]
        limit: Option<usize>,
    },

    /// Show call statistics
    Stats,

    /// Remove the roster and the whole call history
    Clear {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Export call statistics
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Copy the roster and history documents
    Backup {
        #[arg(long, value_name = "PATH", help = "Target directory, or archive with --compress")]
        dest: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the activity log")]
        print: bool,
    },
}
