// pixie-edit/src/processors/intensity.rs
use crate::core::Image;

pub const NORMALIZE_MIN: u8 = 0;
pub const NORMALIZE_MAX: u8 = 255;

/// Min-max stretch over every sample of every channel, mapping the darkest
/// sample to 0 and the brightest to 255. Constant images come back as-is.
pub fn normalize(image: &Image) -> Image {
    let Some((low, high)) = sample_range(image.samples()) else {
        return image.clone();
    };

    if low == high {
        log::debug!("Image is constant ({}), nothing to normalize", low);
        return image.clone();
    }

    if low == NORMALIZE_MIN && high == NORMALIZE_MAX {
        return image.clone();
    }

    log::debug!("Stretching intensity range {}..={}", low, high);

    let scale = f32::from(NORMALIZE_MAX - NORMALIZE_MIN) / f32::from(high - low);
    let stretch = |sample: &mut u8| {
        let value = f32::from(*sample - low) * scale + f32::from(NORMALIZE_MIN);
        *sample = value.round().clamp(0.0, 255.0) as u8;
    };

    image.map(
        |buf| {
            let mut out = buf.clone();
            out.iter_mut().for_each(stretch);
            out
        },
        |buf| {
            let mut out = buf.clone();
            out.iter_mut().for_each(stretch);
            out
        },
    )
}

fn sample_range(samples: &[u8]) -> Option<(u8, u8)> {
    let low = samples.iter().copied().min()?;
    let high = samples.iter().copied().max()?;
    Some((low, high))
}
