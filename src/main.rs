/**
 * Personabot Server Entry Point
 *
 * Initializes tracing, loads configuration from the environment, and starts
 * the Axum HTTP server on port 8080.
 */

use personabot::server::config::Config;
use personabot::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env();
    let app = create_app(config).await?;

    // Port is fixed; the service is fronted by whatever proxies the deployment uses.
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("App running on http://localhost:{}", addr.port());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
