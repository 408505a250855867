use crate::config::Config;
use crate::feeds::HttpFeedSource;
use crate::loader::PageLoader;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod feeds;
mod loader;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if cfg.tmdb_api_key.is_none() {
        warn!("TMDB_API_KEY is not set; anniversary lists will be empty");
    }

    // 2️⃣ Upstream client
    let source = match HttpFeedSource::new(&cfg) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "could not build HTTP client");
            std::process::exit(1);
        }
    };
    let loader = PageLoader::new(Box::new(source), cfg.tmdb_image_base_url.clone());

    // 3️⃣ Start the server
    info!(addr = %cfg.bind_addr, workers = cfg.max_workers, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &loader) {
            Ok(resp) => {
                info!(%method, %path, status = resp.status().as_u16(), "request");
                resp
            }
            Err(err) => {
                warn!(%method, %path, status = err.status(), error = %err, "request failed");
                error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
