use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for calreport
#[derive(Parser)]
#[command(
    name = "calreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Report upcoming meeting load from a calendar store and export it to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override calendar store path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override reference timezone (IANA name, e.g. Europe/Rome)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty calendar store
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that the configuration is usable")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List upcoming meetings and their total duration
    List {
        #[arg(long, short, help = "Number of days from now to include")]
        days: Option<u32>,

        #[arg(long = "rows", help = "Show the report table instead of one line per meeting")]
        rows: bool,
    },

    /// Print only the total meeting time
    Summary {
        #[arg(long, short, help = "Number of days from now to include")]
        days: Option<u32>,
    },

    /// Export upcoming meetings to a file
    Export {
        #[arg(long, short, help = "Number of days from now to include")]
        days: Option<u32>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: timestamped name in export_dir)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
