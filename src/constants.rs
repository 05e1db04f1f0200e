pub const BANNER_WIDTH: i32 = 1200;           // Banner width (matches the 1200x400 image template)
pub const BANNER_HEIGHT: i32 = 400;           // Banner height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_IMAGE_COUNT: usize = 3;     // Number of slides when not overridden
pub const DEFAULT_INTERVAL_MS: u64 = 3000;    // Autoplay interval (milliseconds)

// Themes used to pick a random remote image in random mode
pub const DEFAULT_THEMES: [&str; 5] = ["pinduoduo", "shopping", "ecommerce", "promotion", "sale"];

// Fixed fallback list used by the random reload when random mode is off
pub const FIXED_IMAGE_URLS: [&str; 5] = [
    "https://cdn.pinduoduo.com/upload/2020-12-14/7531b9a5-e242-4124-89df-254df0862ab5.jpg",
    "https://cdn.pinduoduo.com/upload/2021-01-15/1a2b3c4d5e6f.jpg",
    "https://cdn.pinduoduo.com/upload/2021-02-20/9a8b7c6d5e4f.jpg",
    "https://cdn.pinduoduo.com/upload/2021-03-10/5a4b3c2d1e0f.jpg",
    "https://cdn.pinduoduo.com/upload/2021-04-05/10a9b8c7d6e5f.jpg",
];

pub const NAV_BUTTON_WIDTH: f32 = 50.0;       // Clickable width of the prev/next chevrons
pub const NAV_BUTTON_HEIGHT: f32 = 80.0;
pub const INDICATOR_RADIUS: f32 = 6.0;        // Indicator dot radius
pub const INDICATOR_SPACING: f32 = 24.0;      // Center-to-center distance between dots
pub const INDICATOR_MARGIN_BOTTOM: f32 = 20.0;
