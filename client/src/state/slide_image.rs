//! Carousel image sources with load-failure fallback.

#[cfg(test)]
#[path = "slide_image_test.rs"]
mod slide_image_test;

/// Shown in place of any carousel image that fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/seed/fallback/800/450";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideImage {
    pub src: String,
    pub alt: String,
}

impl SlideImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.src == PLACEHOLDER_IMAGE
    }

    /// Swap in the placeholder. Returns `false` when it was already showing,
    /// so a failing placeholder does not retrigger a load.
    pub fn on_load_error(&mut self) -> bool {
        if self.is_placeholder() {
            return false;
        }
        PLACEHOLDER_IMAGE.clone_into(&mut self.src);
        true
    }
}

/// Apply a load failure to the image at `index`. Other images are untouched.
pub fn apply_load_error(images: &mut [SlideImage], index: usize) -> bool {
    images.get_mut(index).is_some_and(SlideImage::on_load_error)
}
