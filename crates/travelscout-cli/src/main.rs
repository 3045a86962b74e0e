use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::{sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travelscout_core::{
    providers::source_from_config, search, CatalogStore, Config, Renderer, TimeSlots, ViewRecord,
};
use travelscout_tui::{run_tui, App};

#[derive(Parser)]
#[command(name = "travelscout")]
#[command(version, about = "Find travel destinations by name or category", long_about = None)]
struct Cli {
    /// Catalog URL or file path (overrides the config file)
    #[arg(long, global = true, env = "TRAVELSCOUT_CATALOG")]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search destinations by keyword, or list a category (beach, temple, country)
    Search {
        /// Search query
        query: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Load the catalog and report what is in it
    Check,
    /// Interactive terminal widget (the default)
    Tui,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Card<'a> {
    #[serde(flatten)]
    record: &'a ViewRecord,
    local_time: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));

    // The alternate screen owns the terminal in TUI mode, so stay quiet unless asked
    let default_filter = if interactive {
        "off"
    } else {
        "travelscout_core=info,travelscout_api=info,travelscout=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load()?;
    if let Some(catalog) = cli.catalog {
        config.catalog.source = catalog;
    }

    match cli.command {
        Some(Commands::Search { query, format }) => run_search(&config, &query, format).await,
        Some(Commands::Check) => run_check(&config).await,
        Some(Commands::Tui) | None => run_interactive(config).await,
    }
}

async fn load_store(config: &Config) -> anyhow::Result<CatalogStore> {
    let source = source_from_config(&config.catalog)?;
    let store = CatalogStore::new();
    if let Err(e) = store.load(source.as_ref()).await {
        anyhow::bail!("{}", e.user_message());
    }
    Ok(store)
}

async fn run_search(config: &Config, query: &str, format: OutputFormat) -> anyhow::Result<()> {
    tracing::info!("Searching for: {}", query);
    let store = load_store(config).await?;

    let results = match search(query, &store) {
        Ok(results) => results,
        Err(e) => anyhow::bail!("{}", e.user_message()),
    };

    let records = Renderer::new(config.display.fallback_image_url.clone()).render(&results);
    let mut slots = TimeSlots::for_records(&records);
    slots.fill_all(chrono::Utc::now());

    let cards: Vec<Card> = records
        .iter()
        .map(|record| Card {
            record,
            local_time: slots.display_text(&record.id),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        OutputFormat::Text => {
            for card in &cards {
                println!("{}", card.record.name);
                println!("  {}", card.record.description);
                println!(
                    "  Image: {} (fallback: {})",
                    card.record.image_url, card.record.fallback_image_url
                );
                if let Some(time) = &card.local_time {
                    println!("  {}", time);
                }
                println!();
            }
        }
    }

    Ok(())
}

async fn run_check(config: &Config) -> anyhow::Result<()> {
    let store = load_store(config).await?;
    if let Some(catalog) = store.catalog() {
        println!("{}: {}", config.catalog.source, catalog.counts());
    }
    Ok(())
}

async fn run_interactive(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(CatalogStore::new());
    let source = source_from_config(&config.catalog)?;

    // Load in the background; the widget is usable (and says so) meanwhile
    let loader = Arc::clone(&store);
    tokio::spawn(async move {
        if let Err(e) = loader.load(source.as_ref()).await {
            tracing::debug!("Catalog load finished with error: {}", e);
        }
    });

    let app = App::new(Renderer::new(config.display.fallback_image_url.clone()));
    run_tui(app, store, Duration::from_millis(config.ui.tick_rate_ms)).await
}
