use std::path::PathBuf;
use std::time::Duration;

use crate::constants::*;

/// Carousel configuration. Immutable once the carousel is constructed.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Directory holding the positional slide images (`0.webp`, `1.webp`, ...)
    pub image_dir: PathBuf,
    /// Number of slides (and indicators) to build
    pub image_count: usize,
    /// Autoplay interval
    pub interval: Duration,
    /// When true, the random reload picks a themed remote image per slide
    pub random_mode: bool,
    /// Theme labels for random mode
    pub themes: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("img"),
            image_count: DEFAULT_IMAGE_COUNT,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            random_mode: true,
            themes: DEFAULT_THEMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
