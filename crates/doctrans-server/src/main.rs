//! doctrans-server - HTTP service binary.

use std::net::SocketAddr;

use doctrans_llm::TranslatorFactory;
use doctrans_server::{create_server, AppState};
use tokio::signal;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("doctrans_server=debug".parse()?),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("DOCTRANS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("DOCTRANS_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    // Resolve the provider credential once; the relay never re-reads the
    // environment per request.
    let translator = TranslatorFactory::from_env()?;
    match &translator {
        Some(t) => info!(model = %t.model_name(), "Translation relay configured"),
        None => warn!("OPENAI_API_KEY not set; /translate will report a configuration error"),
    }

    let state = AppState::new(translator);
    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting doctrans-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
