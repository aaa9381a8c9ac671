use anyhow::{Context, Result};
use std::path::PathBuf;
use tickbox::config::Config;
use tickbox::logger::Logger;

const USAGE: &str = "\
Usage: tickbox [OPTIONS]

Options:
  --config <PATH>             Load configuration from PATH
  --generate-config [PATH]    Write the default configuration and exit
  -h, --help                  Print this help";

enum Command {
    Run { config_path: Option<PathBuf> },
    GenerateConfig(Option<PathBuf>),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--generate-config" => return Ok(Command::GenerateConfig(args.next().map(PathBuf::from))),
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Run { config_path })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::GenerateConfig(path) => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Command::Run { config_path } => config_path,
    };

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;

    // Run the TUI application
    tickbox::ui::run_app(config, logger).await?;

    Ok(())
}
