mod api;
mod app;
mod config;
mod error;
mod events;
mod state;
mod ui;
mod utils;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("claim-tui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal user interface for claiming workflow tasks")
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .value_name("DIRECTORY")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config).await
}
