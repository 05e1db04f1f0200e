use std::path::Path;
use std::path::PathBuf;

use rand::Rng;

use crate::constants::FIXED_IMAGE_URLS;

/// Where a slide's image comes from. Resolution is a pure function of
/// index, mode and theme list; nothing here is validated or fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Positional file under the configured image directory
    Local(PathBuf),
    /// Remote URL, drawn as a placeholder card by the host
    Remote(String),
}

impl ImageSource {
    pub fn as_local(&self) -> Option<&Path> {
        match self {
            ImageSource::Local(path) => Some(path),
            ImageSource::Remote(_) => None,
        }
    }
}

/// Initial reference for slide `index`: `{image_dir}/{index}.webp`.
pub fn positional(image_dir: &Path, index: usize) -> ImageSource {
    ImageSource::Local(image_dir.join(format!("{index}.webp")))
}

/// Reference used by the random reload. In random mode this is an
/// Unsplash URL templated with a theme picked uniformly from `themes`;
/// otherwise a uniform pick from the fixed literal list.
pub fn random_reload<R: Rng>(rng: &mut R, random_mode: bool, themes: &[String]) -> ImageSource {
    if random_mode {
        let theme = &themes[rng.random_range(0..themes.len())];
        ImageSource::Remote(format!(
            "https://source.unsplash.com/random/1200x400/?{theme}"
        ))
    } else {
        let url = FIXED_IMAGE_URLS[rng.random_range(0..FIXED_IMAGE_URLS.len())];
        ImageSource::Remote(url.to_string())
    }
}
