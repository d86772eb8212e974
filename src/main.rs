mod app;
mod cli;

use clap::Parser;
use vidctl::config::Config;

fn main() {
    let cli = cli::Cli::parse();

    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    vidctl::engine::init_tracing(&config.logging.level);
    if let Some(e) = load_error {
        tracing::warn!(error = %format!("{:#}", e), "config not loaded, using defaults");
    }

    app::run(cli, &config);
}
