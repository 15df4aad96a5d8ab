// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};

use tracing_subscriber::EnvFilter;

use taskdesk_server::{
    api::router,
    auth::TokenCodec,
    config::{
        AUTH_SECRET_ENV, DATA_DIR_ENV, DEFAULT_AUTH_SECRET, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV,
        LOG_FORMAT_ENV, PORT_ENV,
    },
    state::AppState,
    storage::{paths::DATA_ROOT, JsonStorage, StoragePaths},
};

#[tokio::main]
async fn main() {
    init_tracing();

    let data_dir = env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DATA_ROOT));

    let mut storage = JsonStorage::new(StoragePaths::new(&data_dir));
    if let Err(e) = storage.initialize() {
        tracing::error!(error = %e, path = %data_dir.display(), "failed to initialize storage");
        std::process::exit(1);
    }
    tracing::info!(path = %data_dir.display(), "storage initialized");

    let secret = env::var(AUTH_SECRET_ENV).unwrap_or_else(|_| {
        tracing::warn!("AUTH_SECRET not set, using the insecure development fallback");
        DEFAULT_AUTH_SECRET.to_string()
    });

    let state = AppState::new(Arc::new(storage), Arc::new(TokenCodec::new(secret)));
    let app = router(state);

    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!("Taskdesk server listening on http://{addr} (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if env::var(LOG_FORMAT_ENV).as_deref() == Ok("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
