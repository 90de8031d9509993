// pixie-edit/src/processors/filters.rs
use crate::core::{EditorError, Image, Result};
use crate::utils::{gaussian_kernel, gaussian_sigma, validate_odd_kernel};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::separable_filter_equal;
use imageproc::morphology;

/// Largest structuring element the closing accepts (radius must fit a `u8`).
pub const MAX_MORPH_KERNEL: i64 = 2 * u8::MAX as i64 + 1;

/// Largest Gaussian kernel the blur accepts.
pub const MAX_BLUR_KERNEL: i64 = MAX_MORPH_KERNEL;

/// Canny edge map. Colour input is reduced to luma first; the result is
/// always single-channel with the input's spatial size.
///
/// An inverted threshold pair is swapped rather than rejected.
pub fn detect_edges(image: &Image, lower: i64, upper: i64) -> Image {
    let (low, high) = if lower > upper {
        log::warn!("Lower threshold {} exceeds upper {}, swapping", lower, upper);
        (upper, lower)
    } else {
        (lower, upper)
    };

    let gray = match image {
        Image::Gray(buf) => buf.clone(),
        Image::Color(buf) => image::imageops::grayscale(buf),
    };

    log::debug!("Canny with thresholds {}..{}", low, high);
    Image::Gray(canny(&gray, low as f32, high as f32))
}

/// Gaussian smoothing with a square `kernel_size` x `kernel_size` kernel,
/// applied as two separable passes. The kernel must be odd and positive.
pub fn blur(image: &Image, kernel_size: i64) -> Result<Image> {
    let kernel_size = validate_odd_kernel("kernel size", kernel_size, MAX_BLUR_KERNEL)?;
    if kernel_size == 1 {
        return Ok(image.clone());
    }

    let kernel = gaussian_kernel(kernel_size);
    log::debug!(
        "Gaussian blur, kernel {} (sigma {:.3})",
        kernel_size,
        gaussian_sigma(kernel_size)
    );

    Ok(image.map(
        |buf| separable_filter_equal(buf, &kernel),
        |buf| separable_filter_equal(buf, &kernel),
    ))
}

/// Morphological closing (dilate, then erode) with a square all-ones
/// element, applied to each channel independently.
///
/// Even sizes have no centre pixel; they are rounded up to the next odd size.
pub fn close(image: &Image, kernel_size: i64) -> Result<Image> {
    if kernel_size <= 0 {
        return Err(EditorError::invalid_parameter(
            "kernel size",
            format!("must be positive, got {}", kernel_size),
        ));
    }
    if kernel_size > MAX_MORPH_KERNEL {
        return Err(EditorError::invalid_parameter(
            "kernel size",
            format!("must be at most {}, got {}", MAX_MORPH_KERNEL, kernel_size),
        ));
    }

    if kernel_size % 2 == 0 {
        log::warn!(
            "Kernel size {} is even, using {} instead",
            kernel_size,
            kernel_size + 1
        );
    }
    let radius = (kernel_size / 2) as u8;
    if radius == 0 {
        return Ok(image.clone());
    }

    log::debug!("Closing with {}x{} square", 2 * radius as u32 + 1, 2 * radius as u32 + 1);

    Ok(image.map(
        |buf| morphology::close(buf, Norm::LInf, radius),
        |buf| close_per_channel(buf, radius),
    ))
}

fn close_per_channel(buf: &RgbImage, radius: u8) -> RgbImage {
    let (width, height) = buf.dimensions();
    let planes: Vec<GrayImage> = (0..3)
        .map(|c| {
            let plane = GrayImage::from_fn(width, height, |x, y| Luma([buf.get_pixel(x, y)[c]]));
            morphology::close(&plane, Norm::LInf, radius)
        })
        .collect();

    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            planes[0].get_pixel(x, y)[0],
            planes[1].get_pixel(x, y)[0],
            planes[2].get_pixel(x, y)[0],
        ])
    })
}
