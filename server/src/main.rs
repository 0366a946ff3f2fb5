#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; the environment may be set directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "cadence-site listening");
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!(error = %e, "server failed");
        ServerError::Serve(e)
    })
}
