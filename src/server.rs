use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    cli_args::CliArgs,
    error::ErrorVerbosity,
    middleware::{
        method_not_allowed::method_not_allowed, not_found::not_found,
        require_api_key::require_api_key, trace_response_body::trace_response_body,
    },
    route,
    state::ApiState,
    store::BookStore,
};

pub struct ServerConfig {
    socket_address: SocketAddr,
    error_verbosity: ErrorVerbosity,
    api_key_header_name: String,
    api_keys: Vec<String>,
}

impl ServerConfig {
    pub fn new(
        socket_address: SocketAddr,
        error_verbosity: ErrorVerbosity,
        api_key_header_name: String,
        api_keys: Vec<String>,
    ) -> Self {
        Self {
            socket_address,
            error_verbosity,
            api_key_header_name,
            api_keys,
        }
    }

    pub fn from_cli_args(args: &CliArgs) -> Self {
        Self::new(
            args.socket_address,
            args.error_verbosity,
            args.api_key_header_name.clone(),
            args.api_keys.clone(),
        )
    }
}

pub struct Server {
    config: ServerConfig,
    store: Arc<dyn BookStore>,
}

impl Server {
    pub fn new(config: ServerConfig, store: Arc<dyn BookStore>) -> Self {
        Self { config, store }
    }

    /// Builds the complete application, routes and layers.
    pub fn app(&self) -> Router {
        let state = ApiState::new(
            self.config.error_verbosity,
            self.config.api_key_header_name.clone(),
            self.config.api_keys.clone(),
            self.store.clone(),
        );

        if self.config.api_keys.is_empty() {
            tracing::warn!("No API keys configured, requests are not authenticated");
        }

        let api = Router::<ApiState>::new()
            .merge(route::help::app())
            .merge(route::books::app::app())
            .layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_key,
            ));

        let mut app = Router::<ApiState>::new()
            .nest("/api", api)
            .merge(route::openapi::app())
            .fallback(not_found)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                method_not_allowed,
            ));

        if tracing::enabled!(tracing::Level::TRACE) {
            app = app.layer(middleware::from_fn_with_state(
                state.clone(),
                trace_response_body,
            ));
        }

        app.with_state(state).layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.app();

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for CTRL+C");

            std::future::pending::<()>().await;
        }

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;

                tracing::info!("SIGTERM received");
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM signal handler");

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

    tracing::info!("Shutting down");
}
