//! popviz headless entry point.
//!
//! Loads the dataset, builds the viewer, replays an optional session script,
//! and prints the text of the final frame.

use std::path::PathBuf;

use clap::Parser;
use popviz::{AppConfig, DataSource, PopvizApp, load_script, run_script};
use popviz_ui::{Runtime, init_logging};

/// Country population viewer
#[derive(Parser, Debug)]
#[command(name = "popviz", version, about)]
struct Cli {
    /// restcountries v2 JSON file (defaults to the configured URL)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session script to replay
    #[arg(long)]
    events: Option<PathBuf>,

    /// Start in the countries view of this continent
    #[arg(long)]
    continent: Option<String>,

    /// Write the effective configuration back (to --config, or the default path)
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_from_default_path(),
    };
    let settings = config.settings();
    init_logging(settings.log_level);

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save(path)?,
            None => config.save_to_default_path()?,
        }
    }

    let source = match cli.data {
        Some(path) => DataSource::File(path),
        None => DataSource::Url(config.data_url.clone()),
    };
    let countries = source.load().inspect_err(|e| {
        log::error!("Failed to load countries from {}: {}", source, e);
    })?;

    let mut app = PopvizApp::new(countries);
    if let Some(continent) = &cli.continent {
        if !app.open_region(continent) {
            return Err(format!("Unknown continent '{}'", continent).into());
        }
    }

    let mut runtime = Runtime::new(app, &settings);
    if let Some(path) = &cli.events {
        let events = load_script(path)?;
        let handled = run_script(&mut runtime, &events);
        log::info!("Replayed {} events ({} handled)", events.len(), handled);
    }

    for text in runtime.frame().texts() {
        println!("{}", text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "popviz",
            "--data",
            "countries.json",
            "--continent",
            "Asia",
            "--save-config",
        ])
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("countries.json")));
        assert_eq!(cli.continent.as_deref(), Some("Asia"));
        assert!(cli.save_config);
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["popviz"]).unwrap();
        assert!(!cli.save_config);
    }
}
