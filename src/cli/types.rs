use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::add::AddArgs;
use crate::cli::commands::update::UpdateArgs;

#[derive(Parser, Debug)]
#[command(name = "mealsheet")]
#[command(about = "Keep a meal list in a Google Sheets spreadsheet", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .mealsheet/
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every meal with its position
    List,

    /// Add a meal after the last one
    Add(AddArgs),

    /// Replace the meal at a position from `list`
    Update(UpdateArgs),

    /// Write the header row into an empty sheet
    Init,
}
