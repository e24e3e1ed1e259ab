use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

const DEFAULT_PAGE_SIZE: u64 = 20;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// ClientConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://localhost:5000`. A trailing slash is ignored.
    pub base_url: String,

    /// Items requested per page; also the length of the overlay sent after a
    /// reorder.
    pub page_size: u64,

    /// Per-request timeout applied by the HTTP transport.
    pub timeout: Duration,

    /// Distance from the bottom, in pixels, at which scrolling triggers the
    /// next page. Zero means the very bottom.
    pub scroll_threshold_px: f64,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            scroll_threshold_px: 0.0,
        }
    }

    /// Sets the page size; zero is raised to one.
    #[must_use]
    pub fn with_page_size(self, page_size: u64) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self
        }
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    #[must_use]
    pub fn with_scroll_threshold(self, scroll_threshold_px: f64) -> Self {
        Self {
            scroll_threshold_px: scroll_threshold_px.max(0.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_uses_defaults() {
        let config = ClientConfig::new("http://localhost:5000");

        assert_eq!(config.page_size, 20);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.scroll_threshold_px.abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("http://localhost:5000/", "http://localhost:5000")]
    #[case("http://localhost:5000///", "http://localhost:5000")]
    #[case("http://example.test", "http://example.test")]
    fn trailing_slashes_are_dropped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(ClientConfig::new(input).base_url, expected);
    }

    #[rstest]
    fn builders_normalize_values() {
        let config = ClientConfig::new("http://localhost")
            .with_page_size(0)
            .with_scroll_threshold(-5.0)
            .with_timeout(Duration::from_millis(250));

        assert_eq!(config.page_size, 1);
        assert!(config.scroll_threshold_px.abs() < f64::EPSILON);
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
