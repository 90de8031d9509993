// pixie-edit/src/processors/geometry.rs
use crate::core::{Image, Result};
use crate::utils::{validate_buffer_size, validate_dimensions};
use image::{imageops::FilterType, Luma, Rgb};
use imageproc::geometric_transformations::{rotate as rotate_about, warp, Interpolation, Projection};

/// Bilinear, the usual default for interactive resizing.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Scales `image` to exactly `width` x `height`, ignoring aspect ratio.
pub fn resize(image: &Image, width: i64, height: i64) -> Result<Image> {
    let (width, height) = validate_dimensions(width, height)?;
    validate_buffer_size(width, height, image.depth().channels())?;

    if (width, height) == image.dimensions() {
        log::debug!("Image dimensions unchanged, skipping resize");
        return Ok(image.clone());
    }

    log::debug!(
        "Resizing image from {}x{} to {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );

    Ok(image.map(
        |buf| image::imageops::resize(buf, width, height, RESIZE_FILTER),
        |buf| image::imageops::resize(buf, width, height, RESIZE_FILTER),
    ))
}

/// Rotates counter-clockwise by `degrees` about `(w / 2, h / 2)`. The canvas
/// keeps its size, so corners may be clipped; uncovered areas are black.
pub fn rotate(image: &Image, degrees: f64) -> Image {
    if degrees.rem_euclid(360.0) == 0.0 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let center = ((width / 2) as f32, (height / 2) as f32);
    // imageproc turns clockwise in image coordinates
    let theta = -(degrees.to_radians() as f32);

    log::debug!("Rotating by {} degrees about {:?}", degrees, center);

    image.map(
        |buf| rotate_about(buf, center, theta, Interpolation::Bilinear, Luma([0])),
        |buf| rotate_about(buf, center, theta, Interpolation::Bilinear, Rgb([0, 0, 0])),
    )
}

/// Shifts content right by `tx` and down by `ty`; vacated areas are black.
pub fn translate(image: &Image, tx: i64, ty: i64) -> Image {
    if tx == 0 && ty == 0 {
        return image.clone();
    }

    log::debug!("Translating by ({}, {})", tx, ty);

    let projection = Projection::translate(tx as f32, ty as f32);
    image.map(
        |buf| warp(buf, &projection, Interpolation::Nearest, Luma([0])),
        |buf| warp(buf, &projection, Interpolation::Nearest, Rgb([0, 0, 0])),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditorError;
    use image::{GrayImage, RgbImage};

    fn gradient(width: u32, height: u32) -> Image {
        Image::Color(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn test_resize_to_exact_dimensions() {
        let image = gradient(100, 100);
        let resized = resize(&image, 50, 50).unwrap();
        assert_eq!(resized.dimensions(), (50, 50));

        let stretched = resize(&image, 30, 70).unwrap();
        assert_eq!(stretched.dimensions(), (30, 70));
    }

    #[test]
    fn test_resize_rejects_non_positive() {
        let image = gradient(10, 10);
        for (w, h) in [(0, 10), (10, 0), (-5, 10), (10, -1)] {
            assert!(matches!(
                resize(&image, w, h),
                Err(EditorError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_resize_rejects_oversized_buffer() {
        let image = gradient(4, 4);
        let result = resize(&image, 100_000, 100_000);
        assert!(matches!(result, Err(EditorError::InvalidParameter { .. })));

        let gray = Image::Gray(GrayImage::new(4, 4));
        assert!(resize(&gray, 100_000, 3_000).is_err());
        assert_eq!(resize(&gray, 2_000, 1_000).unwrap().dimensions(), (2_000, 1_000));
    }

    #[test]
    fn test_resize_keeps_channel_depth() {
        let image = Image::Gray(GrayImage::new(8, 8));
        let resized = resize(&image, 4, 2).unwrap();
        assert!(matches!(resized, Image::Gray(_)));
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let image = gradient(31, 17);
        assert_eq!(rotate(&image, 0.0), image);
        assert_eq!(rotate(&image, 360.0), image);
        assert_eq!(rotate(&image, -720.0), image);
    }

    #[test]
    fn test_rotate_keeps_canvas_size() {
        let image = gradient(40, 20);
        for angle in [45.0, -30.0, 90.0, 400.0] {
            assert_eq!(rotate(&image, angle).dimensions(), (40, 20));
        }
    }

    #[test]
    fn test_rotate_clips_corners_to_black() {
        let image = Image::Gray(GrayImage::from_pixel(20, 20, Luma([200])));
        let Image::Gray(rotated) = rotate(&image, 45.0) else {
            panic!("rotation changed channel depth");
        };
        assert_eq!(rotated.get_pixel(0, 0)[0], 0);
        assert_eq!(rotated.get_pixel(10, 10)[0], 200);
    }

    #[test]
    fn test_rotate_turns_counter_clockwise() {
        let mut buf = GrayImage::new(21, 21);
        buf.put_pixel(15, 10, Luma([255]));
        let image = Image::Gray(buf);

        let Image::Gray(quarter) = rotate(&image, 90.0) else {
            panic!("rotation changed channel depth");
        };
        assert!(quarter.get_pixel(10, 5)[0] > 200);
        assert_eq!(quarter.get_pixel(10, 15)[0], 0);
        assert_eq!(quarter.get_pixel(15, 10)[0], 0);

        let Image::Gray(back) = rotate(&image, -90.0) else {
            panic!("rotation changed channel depth");
        };
        assert!(back.get_pixel(10, 15)[0] > 200);
        assert_eq!(back.get_pixel(10, 5)[0], 0);
    }

    #[test]
    fn test_translate_shifts_and_fills_black() {
        let image = gradient(10, 10);
        let Image::Color(shifted) = translate(&image, 3, 2) else {
            panic!("translation changed channel depth");
        };
        let Image::Color(original) = &image else {
            unreachable!()
        };

        assert_eq!(shifted.dimensions(), (10, 10));
        assert_eq!(shifted.get_pixel(3, 2), original.get_pixel(0, 0));
        assert_eq!(shifted.get_pixel(9, 9), original.get_pixel(6, 7));
        assert_eq!(*shifted.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*shifted.get_pixel(2, 9), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_translate_round_trip_restores_unclipped_region() {
        let image = gradient(24, 18);
        let (tx, ty) = (5, 3);
        let back = translate(&translate(&image, tx, ty), -tx, -ty);

        let (Image::Color(original), Image::Color(restored)) = (&image, &back) else {
            panic!("translation changed channel depth");
        };
        for y in 0..(18 - ty as u32) {
            for x in 0..(24 - tx as u32) {
                assert_eq!(original.get_pixel(x, y), restored.get_pixel(x, y));
            }
        }
    }
}
