//! Binary crate for the `weathernow` terminal client.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Terminal setup and teardown
//! - The interactive search view

use clap::Parser;
use weathernow_core::Config;

mod app;
mod handler;
mod tui;
mod ui;

#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "WeatherNow terminal client")]
struct Cli {
    /// Base URL of the WeatherNow proxy server; overrides the config file.
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let server_url = cli.server.unwrap_or(config.server_url);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let result = app::App::new(server_url).run(&mut terminal).await;

    tui::restore()?;
    result
}
