use crate::image_source::ImageSource;

/// One rotation frame. The carousel keeps exactly one slide active.
#[derive(Debug, Clone)]
pub struct Slide {
    pub source: ImageSource,
    pub active: bool,
}

impl Slide {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            active: false,
        }
    }
}
