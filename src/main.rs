//! bgdict server entry point

use std::sync::Arc;

use anyhow::Context;
use bgdict::{create_rest_router, create_store, Config, RestApiConfig, WordResolver};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// bgdict: dictionary lookup service
#[derive(Parser, Debug)]
#[command(name = "bgdict")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default behavior)
    Serve {
        /// Bind address. Overrides config and HOSTNAME.
        #[arg(long)]
        host: Option<String>,
        /// Bind port. Overrides config and PORT.
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable JSON logging format
        #[arg(long)]
        json_logs: bool,
    },
    /// Search a word or inflected form
    Search {
        /// Query text
        query: String,
    },
    /// List derivative forms matching a surface string
    Find {
        /// Surface form
        query: String,
    },
    /// Get a word by id
    Get {
        /// Word id
        id: i32,
    },
    /// List the derivative forms of a word
    Derived {
        /// Base word id
        id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let is_serve = matches!(args.command, Some(Command::Serve { .. }) | None);
    if !is_serve {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }

    match args.command {
        Some(Command::Serve {
            host,
            port,
            json_logs,
        }) => run_server(&args.config, host, port, json_logs).await,
        None => run_server(&args.config, None, None, false).await,
        Some(Command::Search { query }) => {
            let resolver = build_resolver(&load_config(&args.config)?)?;
            print_json(&resolver.resolve_by_query(&query).await?)
        }
        Some(Command::Find { query }) => {
            let resolver = build_resolver(&load_config(&args.config)?)?;
            print_json(&resolver.find_derivative_matches(&query).await?)
        }
        Some(Command::Get { id }) => {
            let resolver = build_resolver(&load_config(&args.config)?)?;
            print_json(&resolver.resolve_by_id(id).await?)
        }
        Some(Command::Derived { id }) => {
            let resolver = build_resolver(&load_config(&args.config)?)?;
            print_json(&resolver.resolve_derived_forms_of(id).await?)
        }
    }
}

fn load_config(config_path: &Option<String>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => {
            let mut config = Config::from_file(path)
                .with_context(|| format!("loading config from {}", path))?;
            config.apply_env_overrides();
            config.validate()?;
            config
        }
        None => Config::load()?,
    };
    Ok(config)
}

fn build_resolver(config: &Config) -> anyhow::Result<WordResolver> {
    let store = create_store(config)?;
    Ok(WordResolver::with_config(store, &config.resolver))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_server(
    config_path: &Option<String>,
    host: Option<String>,
    port: Option<u16>,
    json_logs: bool,
) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting bgdict v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        storage_backend = ?config.storage.backend,
        batch_concurrency = config.resolver.batch_concurrency,
        "Configuration loaded"
    );

    let resolver = Arc::new(build_resolver(&config)?);
    let app = create_rest_router(resolver, &RestApiConfig::from(&config.server));

    let bind_addr = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {}:{}", bind_addr.0, bind_addr.1))?;
    tracing::info!("bgdict listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    tracing::info!("bgdict shutting down");
    Ok(())
}
