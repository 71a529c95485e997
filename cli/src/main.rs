mod menu;
mod search;

use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use kondate_core::{Genre, MatchScope, Strategy, DEFAULT_RESULT_LIMIT};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "kondate")]
#[command(about = "Find recipes for the ingredients you have, or ask AI for a menu", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes and rank them by how many ingredients they use
    Search {
        /// Ingredients separated by spaces, e.g. "豚肉 玉ねぎ"
        ingredients: String,
        /// Narrow to a genre (see `kondate genres`)
        #[arg(long)]
        genre: Option<Genre>,
        /// How results are matched against the ingredients
        #[arg(long, value_enum, default_value_t = StrategyArg::Ranked)]
        strategy: StrategyArg,
        /// Fields checked by the all-keywords strategy
        #[arg(long, default_value_t = MatchScope::Title)]
        match_scope: MatchScope,
        /// Maximum number of recipes to show (at least 1)
        #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: NonZeroUsize,
        /// Search endpoint (overrides KONDATE_SEARCH_ENDPOINT)
        #[arg(long)]
        endpoint: Option<String>,
        /// Request timeout in seconds (overrides KONDATE_SEARCH_TIMEOUT_SECS)
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the AI chef for a menu built from your ingredients
    Menu {
        /// Ingredients, e.g. "鶏もも肉、パプリカ、玉ねぎ"
        ingredients: String,
        /// Anything else, e.g. "3品ほしい。一品は汁物"
        #[arg(long)]
        request: Option<String>,
    },
    /// List the genres accepted by `search --genre`
    Genres,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Score by matched ingredients, best first
    Ranked,
    /// Only recipes containing every ingredient
    AllKeywords,
}

impl StrategyArg {
    fn with_scope(self, scope: MatchScope) -> Strategy {
        match self {
            StrategyArg::Ranked => Strategy::Ranked,
            StrategyArg::AllKeywords => Strategy::AllKeywords(scope),
        }
    }
}

/// Console logging on stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            ingredients,
            genre,
            strategy,
            match_scope,
            limit,
            endpoint,
            timeout_secs,
            json,
        } => {
            let options = search::SearchOptions {
                strategy: strategy.with_scope(match_scope),
                genre,
                limit,
                endpoint,
                timeout: timeout_secs.map(Duration::from_secs),
                json,
            };
            search::search(&ingredients, options).await?;
        }
        Commands::Menu {
            ingredients,
            request,
        } => {
            menu::menu(&ingredients, request.as_deref()).await?;
        }
        Commands::Genres => {
            for genre in Genre::ALL {
                println!("{:<8} {}", genre.key(), genre.label());
            }
        }
    }

    Ok(())
}
