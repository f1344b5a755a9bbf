use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, catalog::CatalogClient, config, error};

pub fn router(client: CatalogClient) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/analyze/{playlist_id}",
            get(api::analyze).layer(Extension(client)),
        )
}

pub async fn start_api_server(client: CatalogClient) {
    let app = router(client);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
