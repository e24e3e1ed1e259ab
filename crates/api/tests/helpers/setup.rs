use item_browser_api::config::PagingConfig;
use item_browser_api::routes::create_router;
use item_browser_api::state::AppState;
use item_browser_domain::{Catalog, Item, ItemId, ItemStore};
use tokio::net::TcpListener;

/// Serves the router over the given items on an ephemeral local port and
/// returns its base URL.
pub async fn spawn_server(values: &[&str]) -> String {
    let items = values
        .iter()
        .zip(1..)
        .map(|(value, id)| Item::new(ItemId::new(id), *value, "", 0.0))
        .collect();
    let catalog = Catalog::new(ItemStore::from_items(items).expect("ids are ascending"));
    let router = create_router(AppState::new(catalog, PagingConfig::default()), None);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server failed");
    });

    format!("http://{address}")
}
