// pixie-edit/src/core/mod.rs
pub mod editor;
pub mod session;

use image::{DynamicImage, GrayImage, RgbImage};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Number of intensity planes carried by an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelDepth {
    Gray,
    Color,
}

impl ChannelDepth {
    pub fn channels(self) -> u8 {
        match self {
            ChannelDepth::Gray => 1,
            ChannelDepth::Color => 3,
        }
    }
}

impl fmt::Display for ChannelDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelDepth::Gray => write!(f, "single-channel"),
            ChannelDepth::Color => write!(f, "3-channel"),
        }
    }
}

/// An 8-bit image tagged with its channel depth.
///
/// Operations match on the variant, so a single-channel result can never be
/// mistaken for a colour one further down the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    Gray(GrayImage),
    Color(RgbImage),
}

impl Image {
    /// Converts whatever the decoder produced into one of the two supported
    /// depths. Grey-only sources stay grey, everything else becomes RGB.
    pub fn from_decoded(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(buf) => Image::Gray(buf),
            DynamicImage::ImageRgb8(buf) => Image::Color(buf),
            other if !other.color().has_color() => Image::Gray(other.to_luma8()),
            other => Image::Color(other.to_rgb8()),
        }
    }

    pub fn depth(&self) -> ChannelDepth {
        match self {
            Image::Gray(_) => ChannelDepth::Gray,
            Image::Color(_) => ChannelDepth::Color,
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Image::Gray(buf) => buf.dimensions(),
            Image::Color(buf) => buf.dimensions(),
        }
    }

    /// Applies one of two depth-specific transforms, keeping the tag.
    pub fn map<G, C>(&self, gray: G, color: C) -> Image
    where
        G: FnOnce(&GrayImage) -> GrayImage,
        C: FnOnce(&RgbImage) -> RgbImage,
    {
        match self {
            Image::Gray(buf) => Image::Gray(gray(buf)),
            Image::Color(buf) => Image::Color(color(buf)),
        }
    }

    /// Raw interleaved samples, row-major.
    pub fn samples(&self) -> &[u8] {
        match self {
            Image::Gray(buf) => buf.as_raw(),
            Image::Color(buf) => buf.as_raw(),
        }
    }

    pub fn to_rgb8(&self) -> RgbImage {
        match self {
            Image::Gray(buf) => DynamicImage::ImageLuma8(buf.clone()).to_rgb8(),
            Image::Color(buf) => buf.clone(),
        }
    }
}

impl TryFrom<DynamicImage> for Image {
    type Error = EditorError;

    fn try_from(image: DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(buf) => Ok(Image::Gray(buf)),
            DynamicImage::ImageRgb8(buf) => Ok(Image::Color(buf)),
            other => Err(EditorError::UnsupportedChannelDepth {
                operation: "import".to_string(),
                depth: format!("{:?}", other.color()),
            }),
        }
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{}x{} {}", width, height, self.depth())
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid {name}: expected {expected}, got {input:?}")]
    Parse {
        name: String,
        input: String,
        expected: &'static str,
    },

    #[error("{operation} does not support {depth} images")]
    UnsupportedChannelDepth { operation: String, depth: String },

    #[error("Input closed")]
    InputClosed,

    #[error("Preview error: {0}")]
    Preview(String),
}

impl EditorError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        EditorError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbaImage};

    #[test]
    fn test_from_decoded_keeps_gray_sources_gray() {
        let gray = GrayImage::from_pixel(4, 3, Luma([7]));
        let image = Image::from_decoded(DynamicImage::ImageLuma8(gray));
        assert_eq!(image.depth(), ChannelDepth::Gray);
        assert_eq!(image.dimensions(), (4, 3));

        let gray16 = DynamicImage::new_luma16(2, 2);
        assert_eq!(Image::from_decoded(gray16).depth(), ChannelDepth::Gray);
    }

    #[test]
    fn test_from_decoded_drops_alpha() {
        let rgba = RgbaImage::new(5, 5);
        let image = Image::from_decoded(DynamicImage::ImageRgba8(rgba));
        assert_eq!(image.depth(), ChannelDepth::Color);
        assert_eq!(image.samples().len(), 5 * 5 * 3);
    }

    #[test]
    fn test_try_from_rejects_rgba() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let err = Image::try_from(rgba).unwrap_err();
        assert!(matches!(err, EditorError::UnsupportedChannelDepth { .. }));

        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        assert!(Image::try_from(rgb).is_ok());
    }

    #[test]
    fn test_display_summary() {
        let image = Image::Color(RgbImage::new(10, 20));
        assert_eq!(image.to_string(), "10x20 3-channel");
        assert_eq!(image.depth().channels(), 3);
    }
}
