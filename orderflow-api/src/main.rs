use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use orderflow_api::{app, AppState};
use orderflow_core::OrderRepository;
use orderflow_order::{HandlerSelector, OrderProcessor, PriorityRule};
use orderflow_store::app_config::{Config, StorageBackend};
use orderflow_store::{CsvExportSink, DbClient, HttpClassificationClient, InMemoryOrderRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderflow_api=debug,orderflow_order=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Orderflow API on port {}", config.server.port);

    let repository = build_repository(&config).await?;

    tokio::fs::create_dir_all(&config.export.directory)
        .await
        .with_context(|| format!("Failed to create export directory {}", config.export.directory))?;
    let exporter = Arc::new(CsvExportSink::new(&config.export.directory));

    let classifier = Arc::new(
        HttpClassificationClient::new(
            config.classification.base_url.clone(),
            Duration::from_secs(config.classification.timeout_seconds),
        )
        .context("Failed to create classification client")?,
    );

    let selector = HandlerSelector::new(
        repository,
        classifier,
        exporter,
        PriorityRule::new(config.rules.high_priority_threshold),
    );

    let app_state = AppState {
        processor: Arc::new(OrderProcessor::new(Arc::new(selector))),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn OrderRepository>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let url = config
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;
            let db = DbClient::new(url).await.context("Failed to connect to Postgres")?;
            db.migrate().await?;
            Ok(Arc::new(db.order_repository()))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory order storage; updates are not durable");
            match &config.storage.seed_file {
                Some(path) => Ok(Arc::new(
                    InMemoryOrderRepository::from_seed_file(path)
                        .await
                        .context("Failed to seed in-memory order storage")?,
                )),
                None => {
                    tracing::warn!("No storage.seed_file configured; the order store starts empty");
                    Ok(Arc::new(InMemoryOrderRepository::default()))
                }
            }
        }
    }
}
