// =============================================================================
// ScrollMetrics
// =============================================================================

/// Scroll position of the list container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,

    pub viewport_height: f64,

    pub content_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn new(scroll_top: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    /// True once the bottom of the viewport is within `threshold` pixels of
    /// the end of the content.
    #[must_use]
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.scroll_top + self.viewport_height + threshold >= self.content_height
    }
}
