//! Mealsheet CLI entry point.

use clap::Parser;

use mealsheet::adapters::sheets::SheetStore;
use mealsheet::cli::{commands, handle_error, load_config, Cli, Commands};
use mealsheet::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let store = match SheetStore::connect(config.sheets) {
        Ok(store) => store,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::List => commands::list::execute(&store, cli.json).await,
        Commands::Add(args) => commands::add::execute(args, &store, cli.json).await,
        Commands::Update(args) => commands::update::execute(args, &store, cli.json).await,
        Commands::Init => commands::init::execute(&store, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
