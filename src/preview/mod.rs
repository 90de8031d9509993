// pixie-edit/src/preview/mod.rs
#[cfg(feature = "window")]
mod window;

#[cfg(feature = "window")]
pub use window::WindowPreview;

use crate::core::{Image, Result};

/// Shows an image and blocks until the user acknowledges it. Whatever
/// surface an implementation opens must be released before `show` returns.
pub trait Preview {
    fn show(&mut self, title: &str, image: &Image) -> Result<()>;
}

/// Used when no display is wanted or available: reports the image instead
/// of drawing it.
#[derive(Debug, Default)]
pub struct HeadlessPreview;

impl Preview for HeadlessPreview {
    fn show(&mut self, title: &str, image: &Image) -> Result<()> {
        log::info!("{}: {}", title, image);
        Ok(())
    }
}

/// Picks the window preview when it is compiled in and not disabled.
pub fn preview_for(headless: bool) -> Box<dyn Preview> {
    #[cfg(feature = "window")]
    {
        if !headless {
            return Box::new(WindowPreview::new());
        }
    }

    #[cfg(not(feature = "window"))]
    {
        if !headless {
            log::warn!("Built without window support, previews are logged only");
        }
    }

    Box::new(HeadlessPreview)
}

impl<P: Preview + ?Sized> Preview for Box<P> {
    fn show(&mut self, title: &str, image: &Image) -> Result<()> {
        (**self).show(title, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn test_headless_preview_returns_immediately() {
        let mut preview = preview_for(true);
        let image = Image::Gray(GrayImage::new(3, 3));
        assert!(preview.show("Blurred Image", &image).is_ok());
    }
}
