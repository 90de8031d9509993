// pixie-edit/src/utils/mod.rs
use crate::core::{EditorError, Result};

/// Largest width or height the editor will produce or load.
pub const MAX_DIMENSION: u32 = 100_000;

/// Largest pixel buffer an operation may allocate (256 MiB).
pub const MAX_BUFFER_BYTES: u64 = 1 << 28;

pub fn validate_dimensions(width: i64, height: i64) -> Result<(u32, u32)> {
    Ok((
        validate_dimension("width", width)?,
        validate_dimension("height", height)?,
    ))
}

fn validate_dimension(name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(EditorError::invalid_parameter(
            name,
            format!("must be positive, got {}", value),
        ));
    }

    if value > i64::from(MAX_DIMENSION) {
        return Err(EditorError::invalid_parameter(
            name,
            format!("too large (max {} pixels)", MAX_DIMENSION),
        ));
    }

    Ok(value as u32)
}

/// Rejects output buffers that would not fit the allocation budget.
pub fn validate_buffer_size(width: u32, height: u32, channels: u8) -> Result<()> {
    let bytes = u64::from(width) * u64::from(height) * u64::from(channels);
    if bytes > MAX_BUFFER_BYTES {
        return Err(EditorError::invalid_parameter(
            "size",
            format!(
                "{}x{} needs {} bytes, limit is {}",
                width, height, bytes, MAX_BUFFER_BYTES
            ),
        ));
    }

    Ok(())
}

pub fn validate_odd_kernel(name: &str, size: i64, max: i64) -> Result<u32> {
    if size <= 0 || size % 2 == 0 {
        return Err(EditorError::invalid_parameter(
            name,
            format!("must be an odd positive integer, got {}", size),
        ));
    }

    if size > max {
        return Err(EditorError::invalid_parameter(
            name,
            format!("must be at most {}, got {}", max, size),
        ));
    }

    Ok(size as u32)
}

/// Standard deviation used for a Gaussian kernel of the given size when no
/// sigma is supplied.
pub fn gaussian_sigma(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian with exactly `size` taps, centred on the middle tap.
pub fn gaussian_kernel(size: u32) -> Vec<f32> {
    let sigma = gaussian_sigma(size);
    let center = (size / 2) as f32;
    let weights: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(640, 480).unwrap(), (640, 480));
        assert!(validate_dimensions(0, 480).is_err());
        assert!(validate_dimensions(640, -1).is_err());
        assert!(validate_dimensions(i64::from(MAX_DIMENSION) + 1, 10).is_err());
    }

    #[test]
    fn test_validate_odd_kernel() {
        assert_eq!(validate_odd_kernel("k", 1, 11).unwrap(), 1);
        assert_eq!(validate_odd_kernel("k", 11, 11).unwrap(), 11);
        assert!(validate_odd_kernel("k", 0, 11).is_err());
        assert!(validate_odd_kernel("k", 4, 11).is_err());
        assert!(validate_odd_kernel("k", -3, 11).is_err());
        assert!(validate_odd_kernel("k", 13, 11).is_err());
        assert!(validate_odd_kernel("k", 2_000_000_001, 11).is_err());
    }

    #[test]
    fn test_validate_buffer_size() {
        assert!(validate_buffer_size(4096, 4096, 3).is_ok());
        assert!(validate_buffer_size(100_000, 100_000, 3).is_err());
        assert!(validate_buffer_size(100_000, 100_000, 1).is_err());
        assert!(validate_buffer_size(16_384, 16_384, 1).is_ok());
    }

    #[test]
    fn test_gaussian_kernel_has_requested_taps() {
        for size in [1, 3, 5, 101] {
            let kernel = gaussian_kernel(size);
            assert_eq!(kernel.len(), size as usize);
            assert!((kernel.iter().sum::<f32>() - 1.0).abs() < 1e-4);
            assert_eq!(kernel.first(), kernel.last());
        }
        assert_eq!(gaussian_kernel(1), vec![1.0]);
    }

    #[test]
    fn test_gaussian_sigma() {
        assert!((gaussian_sigma(1) - 0.5).abs() < 1e-6);
        assert!((gaussian_sigma(3) - 0.8).abs() < 1e-6);
        assert!((gaussian_sigma(5) - 1.1).abs() < 1e-6);
    }
}
