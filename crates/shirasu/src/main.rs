//! shirasu - OneBot bot runtime
//!
//! | Command | Description |
//! |---------|-------------|
//! | `shirasu` | Connect using `./shirasu.toml`, the user config dir or defaults |
//! | `shirasu --config bot.toml` | Connect using an explicit configuration file |
//! | `shirasu --list-addons` | Print the registered addon modules |

// Force-link shirasu-providers to ensure linkme addon registrations are included
extern crate shirasu_providers;

use anyhow::Context;
use clap::Parser;
use shirasu::cli::{Cli, addon_listing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_addons {
        println!("{}", addon_listing());
        return Ok(());
    }

    shirasu::run(cli.config.as_deref())
        .await
        .context("shirasu stopped with an error")
}
