use crate::core::MAX_STEPS;
use crate::export::ExportFormat;
use crate::models::WrapPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for minesim
#[derive(Parser)]
#[command(
    name = "minesim",
    version = env!("CARGO_PKG_VERSION"),
    about = "Simulated mine-truck haulage: live mine profile, rolling truck log and shift reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple mines)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colours in the mine profile and tables
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show, check or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Run a number of refreshes, rendering the fleet after each one
    Run {
        /// Number of refreshes, at most 10000 (default: `default_steps` from config)
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(..=MAX_STEPS as i64))]
        steps: Option<u32>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Pause between refreshes, in milliseconds
        #[arg(long = "interval-ms", default_value_t = 0)]
        interval_ms: u64,

        /// Only print the final state
        #[arg(long, short = 'q')]
        quiet: bool,

        /// Close the shift after the last refresh and export the report
        #[arg(long = "shift-over")]
        shift_over: bool,

        /// Export format for the report and the log
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output directory (default: `output_dir` from config)
        #[arg(long, value_name = "DIR")]
        out: Option<String>,

        /// Also export the full truck log
        #[arg(long = "export-log")]
        export_log: bool,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Behaviour on the step a truck reaches the end of its route
        #[arg(long, value_enum)]
        wrap: Option<WrapPolicy>,
    },

    /// Interactive session: refresh, close shifts and export from stdin commands
    Session {
        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Export format for reports and the log
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output directory (default: `output_dir` from config)
        #[arg(long, value_name = "DIR")]
        out: Option<String>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Behaviour on the step a truck reaches the end of its route
        #[arg(long, value_enum)]
        wrap: Option<WrapPolicy>,
    },
}
