use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use plogic_client::config::Config;
use plogic_client::dispatcher::{Dispatcher, Outcome};
use plogic_client::render::{html, text};
use plogic_client::server;
use plogic_client::service::http::HttpService;

use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the evaluation service (overrides PLOGIC_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// How results are printed
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Html,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an expression and print its truth table
    Evaluate {
        /// The expression to evaluate
        expression: String,
    },
    /// Check whether two expressions are equivalent
    Compare {
        first: String,
        second: String,
    },
    /// Evaluate an expression under fixed conditions
    Where {
        expression: String,

        /// Conditions written as `a:1, b:0`
        conditions: String,
    },
    /// Serve the web page locally
    Serve {
        /// Port to listen on (overrides PLOGIC_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn print_outcome(outcome: &Outcome, format: Format) -> anyhow::Result<()> {
    let output = match format {
        Format::Text => text::render_text(&outcome.view),
        Format::Html => html::render_region(&outcome.view),
        Format::Json => match &outcome.result {
            Ok(response) => serde_json::to_string_pretty(response)?,
            Err(_) => serde_json::to_string_pretty(&outcome.view)?,
        },
    };

    if outcome.is_success() {
        println!("{}", output);
    } else {
        eprintln!("{}", output);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let port = match &args.command {
        Commands::Serve { port } => *port,
        _ => None,
    };
    let config = Config::resolve(args.base_url, port)?.install()?;
    log::info!("Using evaluation service at {}", config.base_url);

    let service = HttpService::new(&config.base_url)?;
    let dispatcher = Dispatcher::new(Arc::new(service));

    let outcome = match args.command {
        Commands::Evaluate { expression } => dispatcher.evaluate(&expression).await,
        Commands::Compare { first, second } => dispatcher.compare(&first, &second).await,
        Commands::Where {
            expression,
            conditions,
        } => dispatcher.where_condition(&expression, &conditions).await,
        Commands::Serve { .. } => {
            server::serve(config.port, dispatcher)
                .await
                .context("UI server stopped")?;
            return Ok(());
        }
    };

    print_outcome(&outcome, args.format)?;
    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
