use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::Verbosity;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Manage staffing requirements and their tech stack needs")]
pub struct Cli {
    /// Path to the configuration file (defaults to STAFFING_CONFIG_PATH or ~/.staffing.config)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v for debug, -vv for trace)
    #[clap(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[clap(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive shell (default)
    Shell {
        /// Preload a few sample requirements
        #[clap(long)]
        sample: bool,
    },

    /// Load sample requirements and print the dashboard and list
    Demo {
        /// Only list requirements matching this search term
        #[clap(long, short = 's')]
        search: Option<String>,

        /// Also print an export of the sample data (json, yaml)
        #[clap(long, short = 'f')]
        format: Option<String>,
    },

    /// Print the effective configuration as YAML
    Config,

    /// Show the tag colour assigned to one or more labels
    Palette {
        /// Labels such as business unit names
        #[clap(required = true)]
        labels: Vec<String>,
    },
}
