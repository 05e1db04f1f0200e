use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod carousel;
mod config;
mod constants;
mod image_source;
mod indicator;
mod slide;
mod texture_loader;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::constants::*;
use crate::texture_loader::load_texture_oriented;

#[derive(Parser)]
#[command(name = "carousel", about = "Storefront banner carousel demo")]
struct Cli {
    /// Directory containing positional slide images (0.webp, 1.webp, ...)
    #[arg(default_value = "img")]
    image_dir: PathBuf,

    /// Number of slides
    #[arg(long, default_value_t = DEFAULT_IMAGE_COUNT)]
    images: usize,

    /// Autoplay interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Reload (R key) from the fixed image list instead of themed random images
    #[arg(long)]
    fixed: bool,

    /// Theme label for random mode (repeatable)
    #[arg(long = "theme")]
    themes: Vec<String>,
}

// Used when a slide has no loadable texture (remote source or missing file)
const PLACEHOLDER_COLORS: [Color; 5] = [
    Color::DARKBLUE,
    Color::DARKPURPLE,
    Color::DARKGREEN,
    Color::MAROON,
    Color::DARKBROWN,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = CarouselConfig {
        image_dir: cli.image_dir,
        image_count: cli.images,
        interval: Duration::from_millis(cli.interval_ms),
        random_mode: !cli.fixed,
        themes: if cli.themes.is_empty() {
            DEFAULT_THEMES.iter().map(|s| s.to_string()).collect()
        } else {
            cli.themes
        },
    };
    info!(
        images = config.image_count,
        interval_ms = config.interval.as_millis() as u64,
        random_mode = config.random_mode,
        "starting carousel"
    );

    let mut carousel = Carousel::new(config)?;

    let (mut rl, thread) = raylib::init()
        .size(BANNER_WIDTH, BANNER_HEIGHT)
        .title("Banner Carousel")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut textures = load_slide_textures(&mut rl, &thread, &carousel);
    let mut rng = rand::rng();
    let mut hovering = false;

    let prev_rect = Rectangle::new(
        10.0,
        (BANNER_HEIGHT as f32 - NAV_BUTTON_HEIGHT) / 2.0,
        NAV_BUTTON_WIDTH,
        NAV_BUTTON_HEIGHT,
    );
    let next_rect = Rectangle::new(
        BANNER_WIDTH as f32 - NAV_BUTTON_WIDTH - 10.0,
        (BANNER_HEIGHT as f32 - NAV_BUTTON_HEIGHT) / 2.0,
        NAV_BUTTON_WIDTH,
        NAV_BUTTON_HEIGHT,
    );

    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());
        let mouse = rl.get_mouse_position();

        // Pointer entering the banner pauses autoplay, leaving resumes it
        let now_hovering = rl.is_cursor_on_screen();
        if now_hovering && !hovering {
            carousel.on_hover_enter();
        } else if !now_hovering && hovering {
            carousel.on_hover_leave();
        }
        hovering = now_hovering;

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.next_slide();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.prev_slide();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            carousel.reload_random_images(&mut rng);
            textures = load_slide_textures(&mut rl, &thread, &carousel);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if prev_rect.check_collision_point_rec(mouse) {
                carousel.prev_slide();
            } else if next_rect.check_collision_point_rec(mouse) {
                carousel.next_slide();
            } else if let Some(i) = indicator_hit(mouse, carousel.indicators().len()) {
                carousel.show_slide(i)?;
            }
        }

        carousel.tick(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_active_slide(&mut d, &carousel, &textures);
        draw_nav_button(&mut d, prev_rect, "<");
        draw_nav_button(&mut d, next_rect, ">");
        draw_indicators(&mut d, &carousel);
    }

    carousel.shutdown();
    Ok(())
}

fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    carousel: &Carousel,
) -> Vec<Option<Texture2D>> {
    carousel
        .slides()
        .iter()
        .map(|slide| {
            let Some(path) = slide.source.as_local() else {
                return None;
            };
            match load_texture_oriented(rl, thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(error = %e, "failed to load slide image");
                    None
                }
            }
        })
        .collect()
}

fn draw_active_slide(d: &mut RaylibDrawHandle, carousel: &Carousel, textures: &[Option<Texture2D>]) {
    let index = carousel.current_index();
    match &textures[index] {
        Some(texture) => {
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(0.0, 0.0, BANNER_WIDTH as f32, BANNER_HEIGHT as f32),
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
        None => {
            let color = PLACEHOLDER_COLORS[index % PLACEHOLDER_COLORS.len()];
            d.draw_rectangle(0, 0, BANNER_WIDTH, BANNER_HEIGHT, color);
            let caption = match &carousel.slides()[index].source {
                crate::image_source::ImageSource::Remote(url) => url.clone(),
                crate::image_source::ImageSource::Local(path) => {
                    format!("missing {}", path.display())
                }
            };
            d.draw_text(&caption, 20, BANNER_HEIGHT / 2 - 10, 20, Color::RAYWHITE);
        }
    }
}

fn draw_nav_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str) {
    d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 120));
    d.draw_text(
        label,
        (rect.x + rect.width / 2.0 - 8.0) as i32,
        (rect.y + rect.height / 2.0 - 20.0) as i32,
        40,
        Color::RAYWHITE,
    );
}

fn draw_indicators(d: &mut RaylibDrawHandle, carousel: &Carousel) {
    let count = carousel.indicators().len();
    for (i, indicator) in carousel.indicators().iter().enumerate() {
        let center = indicator_center(i, count);
        let color = if indicator.active {
            Color::RAYWHITE
        } else {
            Color::GRAY
        };
        d.draw_circle_v(center, INDICATOR_RADIUS, color);
    }
}

fn indicator_center(index: usize, count: usize) -> Vector2 {
    let total = (count.saturating_sub(1)) as f32 * INDICATOR_SPACING;
    Vector2::new(
        BANNER_WIDTH as f32 / 2.0 - total / 2.0 + index as f32 * INDICATOR_SPACING,
        BANNER_HEIGHT as f32 - INDICATOR_MARGIN_BOTTOM,
    )
}

fn indicator_hit(mouse: Vector2, count: usize) -> Option<usize> {
    (0..count).find(|&i| mouse.distance_to(indicator_center(i, count)) <= INDICATOR_RADIUS * 2.0)
}
