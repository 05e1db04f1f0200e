use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::CarouselConfig;
use crate::image_source;
use crate::indicator::Indicator;
use crate::slide::Slide;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptyConfiguration,

    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("random mode requires at least one theme")]
    NoThemes,

    #[error("slide index {index} out of range ({count} slides)")]
    InvalidIndex { index: usize, count: usize },
}

/// Banner carousel: a fixed set of slides and indicators, a current-index
/// pointer and an autoplay accumulator. The host drives it with `tick(dt)`
/// every frame and translates clicks and hover edges into the navigation
/// calls below.
///
/// Invariant: exactly one slide and its same-numbered indicator are active
/// between any two calls.
pub struct Carousel {
    config: CarouselConfig,
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    current_index: usize,
    // Time since the last automatic advance; None while autoplay is stopped
    autoplay: Option<Duration>,
}

impl Carousel {
    /// Builds the slides and indicators in index order, activates slide 0
    /// and starts autoplay.
    pub fn new(config: CarouselConfig) -> Result<Self, CarouselError> {
        if config.image_count < 1 {
            return Err(CarouselError::EmptyConfiguration);
        }
        if config.interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        if config.random_mode && config.themes.is_empty() {
            return Err(CarouselError::NoThemes);
        }

        let slides = (0..config.image_count)
            .map(|i| Slide::new(image_source::positional(&config.image_dir, i)))
            .collect::<Vec<_>>();
        let indicators = vec![Indicator::default(); config.image_count];

        let mut carousel = Self {
            config,
            slides,
            indicators,
            current_index: 0,
            autoplay: None,
        };
        carousel.activate(0);
        carousel.start_autoplay();
        Ok(carousel)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Jump to `index`. Rejects out-of-range targets instead of corrupting
    /// the active-slide invariant.
    pub fn show_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::InvalidIndex {
                index,
                count: self.slides.len(),
            });
        }
        self.activate(index);
        Ok(())
    }

    pub fn next_slide(&mut self) {
        let index = (self.current_index + 1) % self.slides.len();
        self.activate(index);
    }

    pub fn prev_slide(&mut self) {
        let index = (self.current_index + self.slides.len() - 1) % self.slides.len();
        self.activate(index);
    }

    /// Starts the autoplay accumulator. No-op while already running, so a
    /// second start cannot double the rotation speed.
    pub fn start_autoplay(&mut self) {
        if self.autoplay.is_none() {
            self.autoplay = Some(Duration::ZERO);
            debug!("autoplay started");
        }
    }

    /// Stops autoplay and drops the accumulated time, so no pending tick
    /// fires after cancellation. Safe to call while stopped.
    pub fn stop_autoplay(&mut self) {
        if self.autoplay.take().is_some() {
            debug!("autoplay stopped");
        }
    }

    pub fn on_hover_enter(&mut self) {
        self.stop_autoplay();
    }

    pub fn on_hover_leave(&mut self) {
        self.start_autoplay();
    }

    /// Advances the autoplay clock by `dt`. Each full interval crossed
    /// fires one automatic `next_slide`.
    pub fn tick(&mut self, dt: Duration) {
        let Some(elapsed) = self.autoplay.as_mut() else {
            return;
        };
        *elapsed += dt;
        while self.autoplay.is_some_and(|e| e >= self.config.interval) {
            if let Some(elapsed) = self.autoplay.as_mut() {
                *elapsed -= self.config.interval;
            }
            self.next_slide();
        }
    }

    /// Replaces every slide's image reference with a freshly picked one.
    /// Does not touch the current index or the active flags.
    pub fn reload_random_images<R: Rng>(&mut self, rng: &mut R) {
        for slide in self.slides.iter_mut() {
            slide.source =
                image_source::random_reload(rng, self.config.random_mode, &self.config.themes);
        }
        debug!(random_mode = self.config.random_mode, "slide images reloaded");
    }

    /// Explicit disposal: cancels autoplay so the host can tear the view
    /// down without a live timer behind it.
    pub fn shutdown(&mut self) {
        self.stop_autoplay();
    }

    // Internal, trusted setter. All public entry points validate the index
    // (or derive it modularly) before calling this.
    fn activate(&mut self, index: usize) {
        self.slides[self.current_index].active = false;
        self.indicators[self.current_index].active = false;
        self.current_index = index;
        self.slides[self.current_index].active = true;
        self.indicators[self.current_index].active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIXED_IMAGE_URLS;
    use crate::image_source::ImageSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn carousel(image_count: usize) -> Carousel {
        let config = CarouselConfig {
            image_count,
            ..CarouselConfig::default()
        };
        Carousel::new(config).unwrap()
    }

    fn assert_single_active(c: &Carousel) {
        for (i, slide) in c.slides().iter().enumerate() {
            assert_eq!(slide.active, i == c.current_index(), "slide {i}");
            assert_eq!(c.indicators()[i].active, i == c.current_index(), "indicator {i}");
        }
    }

    #[test]
    fn starts_at_zero_with_autoplay_running() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_autoplay_running());
        assert_single_active(&c);
    }

    #[test]
    fn rejects_empty_configuration() {
        let config = CarouselConfig {
            image_count: 0,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            Carousel::new(config),
            Err(CarouselError::EmptyConfiguration)
        ));
    }

    #[test]
    fn rejects_zero_interval() {
        let config = CarouselConfig {
            interval: Duration::ZERO,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            Carousel::new(config),
            Err(CarouselError::ZeroInterval)
        ));
    }

    #[test]
    fn rejects_random_mode_without_themes() {
        let config = CarouselConfig {
            random_mode: true,
            themes: Vec::new(),
            ..CarouselConfig::default()
        };
        assert!(matches!(Carousel::new(config), Err(CarouselError::NoThemes)));
    }

    #[test]
    fn next_wraps_through_all_indices() {
        let mut c = carousel(3);
        c.next_slide();
        assert_eq!(c.current_index(), 1);
        c.next_slide();
        assert_eq!(c.current_index(), 2);
        c.next_slide();
        assert_eq!(c.current_index(), 0);
        assert_single_active(&c);
    }

    #[test]
    fn prev_wraps_backwards_from_zero() {
        let mut c = carousel(3);
        c.prev_slide();
        assert_eq!(c.current_index(), 2);
        assert_single_active(&c);
    }

    #[test]
    fn next_applied_count_times_is_identity() {
        for start in 0..5 {
            let mut c = carousel(5);
            c.show_slide(start).unwrap();
            for _ in 0..5 {
                c.next_slide();
            }
            assert_eq!(c.current_index(), start);
            assert_single_active(&c);
        }
    }

    #[test]
    fn prev_is_the_inverse_of_next() {
        for start in 0..4 {
            let mut c = carousel(4);
            c.show_slide(start).unwrap();
            c.next_slide();
            c.prev_slide();
            assert_eq!(c.current_index(), start);
        }
    }

    #[test]
    fn show_slide_jumps_and_keeps_the_invariant() {
        let mut c = carousel(4);
        c.show_slide(2).unwrap();
        assert_eq!(c.current_index(), 2);
        assert_single_active(&c);
        c.show_slide(2).unwrap();
        assert_eq!(c.current_index(), 2);
        assert_single_active(&c);
    }

    #[test]
    fn show_slide_rejects_out_of_range() {
        let mut c = carousel(3);
        let err = c.show_slide(3).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidIndex { index: 3, count: 3 }));
        assert_eq!(c.current_index(), 0);
        assert_single_active(&c);
    }

    #[test]
    fn single_slide_carousel_stays_put() {
        let mut c = carousel(1);
        c.next_slide();
        assert_eq!(c.current_index(), 0);
        c.prev_slide();
        assert_eq!(c.current_index(), 0);
        assert_single_active(&c);
    }

    #[test]
    fn tick_advances_once_per_interval() {
        let mut c = carousel(3);
        let interval = c.config().interval;
        c.tick(interval - Duration::from_millis(1));
        assert_eq!(c.current_index(), 0);
        c.tick(Duration::from_millis(1));
        assert_eq!(c.current_index(), 1);
        assert_single_active(&c);
    }

    #[test]
    fn tick_catches_up_over_a_large_dt() {
        let mut c = carousel(3);
        c.tick(c.config().interval * 2);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn stopped_autoplay_never_advances() {
        let mut c = carousel(3);
        c.stop_autoplay();
        c.tick(Duration::from_secs(3600));
        assert_eq!(c.current_index(), 0);
        c.start_autoplay();
        c.tick(c.config().interval);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn stop_autoplay_is_safe_when_stopped() {
        let mut c = carousel(3);
        c.stop_autoplay();
        c.stop_autoplay();
        assert!(!c.is_autoplay_running());
    }

    #[test]
    fn double_start_does_not_double_the_speed() {
        let mut c = carousel(3);
        c.start_autoplay();
        c.start_autoplay();
        c.tick(c.config().interval);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn restart_resets_the_interval_clock() {
        let mut c = carousel(3);
        c.tick(c.config().interval - Duration::from_millis(1));
        c.stop_autoplay();
        c.start_autoplay();
        c.tick(Duration::from_millis(1));
        assert_eq!(c.current_index(), 0);
        c.tick(c.config().interval);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn hover_pause_and_resume_leave_the_index_alone() {
        let mut c = carousel(3);
        c.on_hover_enter();
        assert!(!c.is_autoplay_running());
        c.tick(Duration::from_secs(60));
        c.on_hover_leave();
        assert!(c.is_autoplay_running());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn manual_navigation_does_not_touch_autoplay_state() {
        let mut c = carousel(3);
        c.next_slide();
        assert!(c.is_autoplay_running());
        c.on_hover_enter();
        c.prev_slide();
        assert!(!c.is_autoplay_running());
    }

    #[test]
    fn reload_in_fixed_mode_draws_from_the_fixed_list() {
        let config = CarouselConfig {
            image_count: 5,
            random_mode: false,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        c.reload_random_images(&mut rng);
        for slide in c.slides() {
            let ImageSource::Remote(url) = &slide.source else {
                panic!("reload must yield remote sources");
            };
            assert!(FIXED_IMAGE_URLS.contains(&url.as_str()));
        }
    }

    #[test]
    fn reload_keeps_index_and_active_flags() {
        let mut c = carousel(3);
        c.show_slide(1).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        c.reload_random_images(&mut rng);
        assert_eq!(c.current_index(), 1);
        assert_single_active(&c);
    }

    #[test]
    fn shutdown_cancels_autoplay() {
        let mut c = carousel(3);
        c.shutdown();
        assert!(!c.is_autoplay_running());
        c.tick(Duration::from_secs(3600));
        assert_eq!(c.current_index(), 0);
    }
}
