use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use libera_books::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
    store::{MongoBookStore, MongoBookStoreConfig},
};

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,libera_books=trace,tower_http=trace");
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!("Starting ...");

    let store = MongoBookStore::connect(MongoBookStoreConfig::new(
        args.mongodb_uri.clone(),
        args.database_name.clone(),
        args.collection_name.clone(),
    ))
    .await?;

    if let Err(err) = store.ping().await {
        tracing::warn!(%err, "MongoDB is not reachable yet, requests will fail until it is");
    }

    let server = Server::new(ServerConfig::from_cli_args(&args), Arc::new(store));

    server.run().await?;

    Ok(())
}
