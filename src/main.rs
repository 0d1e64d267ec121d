//! Music gateway services.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use music_gateway::api::{Service, create_router};
use music_gateway::upstream::{DEFAULT_BASE_URL, UpstreamConfig};

/// Thin HTTP services in front of a music provider's Web API.
#[derive(Parser)]
#[command(name = "music-gateway")]
#[command(about = "Player, playlist and user services for a music streaming Web API")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "MUSIC_GATEWAY_HOST", default_value = "0.0.0.0", global = true)]
    host: String,

    /// Server port
    #[arg(short, long, env = "MUSIC_GATEWAY_PORT", default_value = "8080", global = true)]
    port: u16,

    /// Base URL of the upstream Web API
    #[arg(long, env = "MUSIC_GATEWAY_UPSTREAM_URL", default_value = DEFAULT_BASE_URL, global = true)]
    upstream_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve current playback and transport controls
    Player,
    /// Serve the user's playlists
    Playlist,
    /// Serve user profiles
    User,
    /// Serve all three services on one port (default)
    All,
}

impl From<Commands> for Service {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Player => Service::Player,
            Commands::Playlist => Service::Playlist,
            Commands::User => Service::User,
            Commands::All => Service::All,
        }
    }
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "music_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = cli.command.map(Service::from).unwrap_or(Service::All);
    run_server(service, &cli.host, cli.port, &cli.upstream_url).await;
}

async fn run_server(service: Service, host: &str, port: u16, upstream_url: &str) {
    let connector = match UpstreamConfig::new(upstream_url).connector() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to build upstream client: {}", e);
            std::process::exit(1);
        }
    };
    let app = create_router(service, connector);

    let addr = format!("{}:{}", host, port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            tracing::error!("Is another process already using port {}?", port);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(local) => tracing::info!(
            "{} service listening on {} (upstream {})",
            service.name(),
            local,
            upstream_url
        ),
        Err(_) => tracing::info!("{} service listening on {}", service.name(), addr),
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
