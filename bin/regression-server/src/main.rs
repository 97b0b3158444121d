use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use clap::Parser;
use log::{debug, error, info};
use thiserror::Error;
use tokio::signal;

use api::layers::cors_layer;
use api::ServiceController;
use config::{Config, ConfigError};
use regression::LinearRegressionService;

mod fit;

#[derive(Parser, Debug)]
struct Args {
    /// Run the HTTP server (default)
    #[arg(short, long, conflicts_with = "fit")]
    server: bool,

    /// Fit the data points in a file ("-" reads stdin) and print the result
    #[arg(short, long)]
    fit: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("Failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenv::dotenv().ok();
    simple_logger::SimpleLogger::new().env().init()?;

    let args = Args::parse();
    debug!("Args: {:?}", args);

    if let Some(path) = args.fit {
        let succeeded = fit::run_fit(&path)?;
        if !succeeded {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Load configuration from yaml
    let config = Config::from_file(&args.config)?;
    run_server(config).await
}

async fn run_server(config: Config) -> Result<(), StartupError> {
    info!("Starting Regression Server");

    let (app_host, app_port) = (config.server.host.clone(), config.server.port);

    // API service controller
    let service_controller = ServiceController::new(Arc::new(LinearRegressionService::new()));

    let app = service_controller
        .router()
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(cors_layer(&config.cors));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", app_host, app_port)).await?;
    info!("Listening on {}:{}", app_host, app_port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Unable to handle ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("signal received, starting graceful shutdown");
}
