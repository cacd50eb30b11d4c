pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;

use crate::routes::APIError;
use crate::store::ListingStore;

/// Uploads carry base64 images inline, so the JSON body limit is far above
/// actix's 2 MiB default.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: ListingStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();
    let max_upload_bytes = config.max_upload_bytes;

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Configure CORS based on allowed origins
        let cors = if allowed_origins.contains(&"*".to_string()) {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();

            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let json_config = web::JsonConfig::default()
            .limit(max_upload_bytes)
            .error_handler(|err, _req| {
                APIError::BadRequest(anyhow::anyhow!("{err}")).into()
            });

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(json_config)
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Largest accepted JSON body, in bytes.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Ok(bytes) => bytes
                .parse()
                .context("MAX_UPLOAD_BYTES must be a number of bytes")?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").context("IP_ADDRESS is not set")?,
            port: var("PORT")
                .context("PORT is not set")?
                .parse()
                .context("PORT must be a port number")?,
            allowed_origins,
            max_upload_bytes,
        })
    }
}
