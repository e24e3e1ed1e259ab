use item_browser_api::config::AppConfig;
use item_browser_api::routes::create_router;
use item_browser_api::server::Server;
use item_browser_api::state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; variables may come from the environment.
    let _ = dotenvy::dotenv();

    init_tracing();

    tracing::info!("Item Browser - Starting Server");

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let state = AppState::from_config(&config);
    let router = create_router(state, config.static_dir.as_deref());

    Server::new(config.server).run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("item_browser_api=debug,item_browser_domain=debug,tower_http=debug,info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}
