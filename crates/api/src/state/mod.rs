use std::sync::Arc;
use std::time::Instant;

use item_browser_domain::{Catalog, ItemStore};

use crate::config::{AppConfig, PagingConfig};

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state: the catalog plus the paging limits requests are
/// validated against.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,

    pub paging: PagingConfig,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, paging: PagingConfig) -> Self {
        Self::from_arc(Arc::new(catalog), paging)
    }

    #[must_use]
    pub const fn from_arc(catalog: Arc<Catalog>, paging: PagingConfig) -> Self {
        Self { catalog, paging }
    }

    /// Generates the configured dataset and wraps it in a fresh catalog.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let started = Instant::now();
        let store = ItemStore::generate(config.dataset.item_count, config.dataset.seed);

        tracing::info!(
            items = store.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "Generated item collection"
        );

        Self::new(Catalog::new(store), config.paging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetConfig;
    use rstest::rstest;

    #[rstest]
    fn from_config_generates_dataset() {
        let config = AppConfig {
            dataset: DatasetConfig {
                item_count: 25,
                seed: 1,
            },
            ..AppConfig::default()
        };

        let state = AppState::from_config(&config);

        assert_eq!(state.catalog.store().len(), 25);
        assert_eq!(state.paging, PagingConfig::default());
    }

    #[rstest]
    fn clones_share_the_catalog() {
        let state = AppState::from_config(&AppConfig {
            dataset: DatasetConfig {
                item_count: 3,
                seed: 1,
            },
            ..AppConfig::default()
        });
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.catalog, &cloned.catalog));
    }
}
