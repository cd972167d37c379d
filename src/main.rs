use articles_api::api::{self, AppState};
use articles_api::config::AppConfig;
use articles_api::gateway::ExternalReviewClient;
use articles_api::storage::{Store, UserStore};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Articles API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}", config.listen_addr());
    info!("   - External reviews: {}", config.external_reviews.base_url);
    info!("   - External timeout: {}s", config.external_reviews.timeout_secs);
    info!("   - Seed catalog: {}", config.store.seed);

    // Initialize stores
    let (store, users) = if config.store.seed {
        (Store::seeded(), UserStore::seeded())
    } else {
        (Store::new(), UserStore::new())
    };
    info!(
        "💾 Store ready ({} articles, {} reviews)",
        store.article_count(),
        store.review_count()
    );

    // External review client
    let external_reviews = ExternalReviewClient::from_config(&config.external_reviews)?;
    info!("🔗 External review client ready ({})", external_reviews.base_url());

    let state = AppState::new(store, users, external_reviews);
    let app = api::router(state);

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /health                                 - Health check");
    info!("   GET    /api/articles?skip&limit                - List articles");
    info!("   POST   /api/articles                           - Create article");
    info!("   GET    /api/articles/search                    - Search articles");
    info!("   GET    /api/articles/{{id}}                      - Article with reviews");
    info!("   PUT    /api/articles/{{id}}                      - Update article");
    info!("   DELETE /api/articles/{{id}}                      - Delete article");
    info!("   GET    /api/articles/{{id}}/avis                 - List reviews");
    info!("   POST   /api/articles/{{id}}/avis                 - Add review");
    info!("   GET    /api/articles/{{id}}/avis/statistiques    - Review stats");
    info!("   GET    /api/articles/{{id}}/avis-externes        - External reviews");
    info!("   *      /api/utilisateurs[/{{id}}]                - Users");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("🛑 Shutdown signal received");
}
