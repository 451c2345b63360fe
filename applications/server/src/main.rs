/// Soft Server - track search service and command line client
use clap::{Parser, Subcommand};
use soft_core::{TrackCatalog, CATALOG_VERSION};
use soft_home::{HomeSession, SilentHandle};
use soft_playback::format_duration;
use soft_search::{
    SearchConfig, SearchGateway, SearchOutcome, TrackSearchClient, DEFAULT_API_BASE,
};
use soft_server::{api, config::ServerConfig, sources, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soft-server")]
#[command(about = "Soft Music track search server", long_about = None, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Search a running server the way the home view does
    Search {
        /// Search query (blank runs the default query)
        #[arg(default_value = "")]
        query: String,
        /// Search API base URL
        #[arg(long, env = "SOFT_API_BASE", default_value = DEFAULT_API_BASE)]
        api_base: String,
        /// Query whose failed search falls back to the built-in catalog
        #[arg(long, default_value = "")]
        default_query: String,
    },
    /// Print the built-in fallback catalog
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soft_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Search {
            query,
            api_base,
            default_query,
        } => {
            search(&query, api_base, default_query).await?;
        }
        Commands::Catalog => {
            print_catalog();
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Soft Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let source = sources::from_config(&config)?;
    let app_state = AppState::new(source, config.search.limit);
    let app = api::create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn search(query: &str, api_base: String, default_query: String) -> anyhow::Result<()> {
    let config = SearchConfig::new(api_base).with_default_query(default_query);
    let client = TrackSearchClient::new(&config)?;
    let gateway = SearchGateway::new(client, config.default_query);
    let mut session = HomeSession::new(gateway, SilentHandle::for_entry);

    let outcome = session.submit(query).await?;
    let snapshot = session.snapshot();

    for (i, tile) in session.tiles().iter().enumerate() {
        println!(
            "{:>2}. {} - {} [{}]",
            i + 1,
            tile.artist,
            tile.title,
            tile.duration_label
        );
        println!("    {}", tile.preview_url);
    }

    let message = snapshot.status.message();
    if !message.is_empty() {
        println!("{}", message);
    }
    if let SearchOutcome::Failed(e) = outcome {
        tracing::warn!("Search failed: {}", e);
    }

    Ok(())
}

fn print_catalog() {
    println!("Fallback catalog v{}", CATALOG_VERSION);
    for (i, track) in TrackCatalog::tracks().iter().enumerate() {
        println!(
            "{:>2}. {} - {} [{}]",
            i + 1,
            track.artist,
            track.title,
            format_duration(track.duration_secs_f64())
        );
    }
}
