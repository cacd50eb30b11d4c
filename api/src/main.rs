use api::{
    Config, build,
    store::ListingStore,
    telemetry::{get_subscriber, init_subscriber},
};

/// Property listings API server
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// Required environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
///
/// Optional environment variables:
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or comma-separated list for production)
/// - MAX_UPLOAD_BYTES: Largest accepted upload body (defaults to 25 MiB)
/// - RUST_LOG: Log filter (defaults to "info")
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
///
/// Example production command:
/// IP_ADDRESS=0.0.0.0 PORT=8000 ALLOWED_ORIGINS=https://listings.example.com \
/// cargo run -p api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;
    let server = build(&mut config, ListingStore::new())?;
    tracing::info!("Listening on http://{}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
