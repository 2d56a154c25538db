mod artifact;

use anyhow::{Context, Result};
use artifact::{WriteOutcome, render_module, write_if_changed};
use clap::Parser;
use sass_variables_config::Config;
use sass_variables_core::extract;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Extract SCSS variables into a generated JavaScript module.
#[derive(Debug, Parser)]
#[command(name = "sass-variables", version, about)]
struct Cli {
    /// Config file [default: ./sass-variables.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stylesheet to read, overriding `sass_variables` from the config
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Application directory, overriding `app_dir` from the config
    #[arg(long, value_name = "DIR")]
    app_dir: Option<PathBuf>,

    /// Print the variables as JSON instead of writing the module
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = load_config(&cli, &config_path)?;

    let Some(input) = config.sass_variables.as_deref() else {
        warn_unconfigured(&config_path);
        return Ok(());
    };

    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read stylesheet {}", input.display()))?;
    if source.is_empty() {
        warn_unconfigured(&config_path);
        return Ok(());
    }

    let variables = extract(&source);
    log::debug!("{} keys extracted from {}", variables.len(), input.display());

    if cli.stdout {
        println!("{}", serde_json::to_string(&variables)?);
        return Ok(());
    }

    let output_path = config.output_path();
    match write_if_changed(&output_path, &render_module(&variables)?)? {
        WriteOutcome::Written => log::info!("sass-variables: wrote {}", output_path.display()),
        WriteOutcome::Unchanged => log::debug!("{} is up to date", output_path.display()),
    }

    Ok(())
}

/// Loads the config file (if any) and applies command-line overrides.
fn load_config(cli: &Cli, config_path: &Path) -> Result<Config> {
    let mut config = Config::load_from_path(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?
        .unwrap_or_default();

    if let Some(input) = &cli.input {
        config.sass_variables = Some(input.clone());
    }
    if let Some(app_dir) = &cli.app_dir {
        config.app_dir = app_dir.clone();
    }

    Ok(config)
}

fn warn_unconfigured(config_path: &Path) {
    log::warn!(
        "Please configure `sass_variables = \"styles/_variables.scss\"` in {}",
        config_path.display()
    );
}
