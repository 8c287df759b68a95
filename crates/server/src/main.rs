use animedb_core::catalog::CatalogCache;
use animedb_core::config;
use animedb_server::api::create_router;
use animedb_server::api::handlers::AppState;
use animedb_server::api::metrics;
use animedb_server::loader::{CatalogLoader, JsonFileLoader};
use clap::Parser;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "animedb", about = "In-memory anime/manga catalog server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Path to the catalog JSON file
    #[arg(short, long, default_value = config::DEFAULT_CATALOG_PATH)]
    catalog_path: String,

    /// Interval in seconds between automatic catalog refreshes (0 = disabled)
    #[arg(long, default_value_t = config::DEFAULT_REFRESH_INTERVAL_SECS)]
    refresh_interval: u64,

    /// Fail startup if the initial catalog load fails (strict mode)
    #[arg(long, default_value_t = false)]
    strict_load: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "animedb_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "animedb_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let catalog = CatalogCache::new();
    let loader: Arc<dyn CatalogLoader> = Arc::new(JsonFileLoader::new(&args.catalog_path));

    // Initial load. In the default mode the server starts not-ready on
    // failure and readers get 503 until a refresh succeeds.
    match loader.load() {
        Ok(items) => {
            let snapshot = catalog.install(items);
            tracing::info!(
                items = snapshot.len(),
                path = %args.catalog_path,
                "catalog loaded"
            );
            metrics::record_refresh(true);
        }
        Err(e) => {
            metrics::record_refresh(false);
            if args.strict_load {
                eprintln!("Error: initial catalog load failed: {e}");
                std::process::exit(1);
            }
            tracing::warn!("initial catalog load failed, starting not-ready: {e}");
        }
    }
    metrics::update_catalog_metrics(&catalog);

    // Background refresh: rebuild the snapshot wholesale and swap it in,
    // never blocking concurrent readers of the previous snapshot.
    if args.refresh_interval > 0 {
        let catalog = catalog.clone();
        let loader = Arc::clone(&loader);
        let interval = Duration::from_secs(args.refresh_interval);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            ticker.tick().await; // first tick is immediate, skip it
            loop {
                ticker.tick().await;
                let loader = Arc::clone(&loader);
                let loaded = tokio::task::spawn_blocking(move || loader.load()).await;
                match loaded {
                    Ok(Ok(items)) => {
                        let snapshot = catalog.install(items);
                        metrics::record_refresh(true);
                        metrics::update_catalog_metrics(&catalog);
                        tracing::info!(items = snapshot.len(), "catalog refreshed");
                    }
                    Ok(Err(e)) => {
                        metrics::record_refresh(false);
                        tracing::warn!("catalog refresh failed, keeping previous snapshot: {e}");
                    }
                    Err(e) => {
                        metrics::record_refresh(false);
                        tracing::warn!("catalog refresh task panicked: {e}");
                    }
                }
            }
        });
    }

    let state = AppState {
        catalog,
        loader,
        prometheus_handle,
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("animedb listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
