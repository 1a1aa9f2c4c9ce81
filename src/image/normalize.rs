//! Rescaling of numeric samples to 8-bit intensity

use crate::error::{DisplayError, Result};
use crate::image::{ByteImage, PixelBuffer};

/// Bounds mapped to 0 and 255
///
/// Missing bounds default to the smallest and largest sample of the array.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizeRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NormalizeRange {
    /// Fixed bounds on both ends
    pub fn new(min: f64, max: f64) -> Self {
        NormalizeRange {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Resolve missing bounds against the data
    fn resolve(&self, data: &[f64]) -> Result<(f64, f64)> {
        let min = self
            .min
            .or_else(|| data.iter().copied().reduce(f64::min))
            .unwrap_or(f64::NAN);
        let max = self
            .max
            .or_else(|| data.iter().copied().reduce(f64::max))
            .unwrap_or(f64::NAN);

        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(DisplayError::DegenerateRange { min, max });
        }
        Ok((min, max))
    }
}

/// Rescale every sample to `round((v - min) * 255 / (max - min))`
///
/// Results outside `0..=255` saturate, so explicit bounds narrower than the
/// data clip instead of wrapping. NaN samples become 0. The output keeps the
/// input's shape.
///
/// # Errors
///
/// [`DisplayError::DegenerateRange`] if the bounds are equal or not finite,
/// including the case of an empty array without explicit bounds.
///
/// # Examples
///
/// ```
/// use display_client::image::{normalize, NormalizeRange, PixelBuffer};
///
/// let buf = PixelBuffer::new(vec![1, 3], vec![-1.0, 0.0, 1.0])?;
/// let bytes = normalize(&buf, NormalizeRange::default())?;
/// assert_eq!(bytes.data(), &[0, 128, 255]);
/// # Ok::<(), display_client::DisplayError>(())
/// ```
pub fn normalize(pixels: &PixelBuffer, range: NormalizeRange) -> Result<ByteImage> {
    let (min, max) = range.resolve(pixels.data())?;
    let scale = 255.0 / (max - min);

    let data = pixels
        .data()
        .iter()
        .map(|&v| ((v - min) * scale).round() as u8)
        .collect();

    ByteImage::with_shape(pixels.shape(), data)
}
