//! personctl CLI - serves a person record over HTTP
//!
//! Subcommands:
//! - `serve`: run the `GET /person` endpoint (wiring style selectable)
//! - `person`: print the response body without a listener

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::person::PersonArgs;
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "personctl",
    author,
    version,
    about = "Person record service showing three ways to inject handler dependencies"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Print the person envelope as served by GET /person
    Person(PersonArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Person(args) => commands::run_person(args)?,
    }

    Ok(())
}
