mod cli;
mod logging;
mod prompts;
mod render;
mod sample;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use tracing::debug;

use staffing_core::{export, get_config_path, Config, ExportFormat, Session, View};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbosity());

    let config_path = match cli.config.as_deref() {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };
    let config = load_config(&config_path)?;

    match cli.command {
        None => shell::run(Session::new(config))?,
        Some(Command::Shell { sample }) => {
            let mut session = Session::new(config);
            if sample {
                sample::load_samples(&mut session)?;
                session.navigate(View::Dashboard);
            }
            shell::run(session)?;
        }
        Some(Command::Demo { search, format }) => run_demo(config, search, format)?,
        Some(Command::Config) => {
            println!("{}", format!("# {}", config_path.display()).dimmed());
            print!("{}", config.to_yaml()?);
        }
        Some(Command::Palette { labels }) => {
            let session = Session::new(config);
            for label in &labels {
                println!("{:<24} {}", render::tag(&session, label), session.color_for(label));
            }
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "Loading config");

    Config::load(path).with_context(|| format!("Failed to load config from {:?}", path))
}

fn run_demo(config: Config, search: Option<String>, format: Option<String>) -> Result<()> {
    let format = format
        .map(|f| f.parse::<ExportFormat>())
        .transpose()?;

    let mut session = Session::new(config);
    sample::load_samples(&mut session)?;

    session.navigate(View::Dashboard);
    render::dashboard(&session);

    println!("\n{}", "All Requirements".bold().underline());
    if let Some(term) = search {
        session.set_search_term(term);
    }
    session.navigate(View::List);
    render::requirement_list(&session);

    if let Some(format) = format {
        println!("\n{}", format!("Export ({})", format).bold().underline());
        println!("{}", export::render(session.store(), format)?);
    }

    Ok(())
}
