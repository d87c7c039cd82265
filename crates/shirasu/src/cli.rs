//! Command line interface

use std::path::PathBuf;

use clap::Parser;
use shirasu_application::addon::list_addon_modules;

/// Command line interface for shirasu
#[derive(Parser, Debug)]
#[command(name = "shirasu")]
#[command(about = "shirasu - OneBot bot runtime")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the registered addon modules and exit
    #[arg(long)]
    pub list_addons: bool,
}

/// One line per registered addon module
pub fn addon_listing() -> String {
    list_addon_modules()
        .into_iter()
        .map(|(name, description)| format!("{name:<14}{description}"))
        .collect::<Vec<_>>()
        .join("\n")
}
