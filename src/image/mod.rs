//! Pixel arrays and the image preparation pipeline
//!
//! An [`Array`] is a dense row-major array shaped `(H, W)` or `(H, W, C)`.
//! Display calls run it through [`normalize`] (any numeric range → `u8`) and
//! [`to_rgb`] (grayscale → three identical channels) before PNG encoding.
//!
//! ```
//! use display_client::image::{normalize, to_rgb, NormalizeRange, PixelBuffer};
//!
//! let gray = PixelBuffer::new(vec![2, 2], vec![0.0, 0.5, 1.0, 0.25])?;
//! let rgb = to_rgb(normalize(&gray, NormalizeRange::default())?)?;
//! assert_eq!(rgb.shape().channels(), 3);
//! assert_eq!(&rgb.data()[..6], &[0, 0, 0, 128, 128, 128]);
//! # Ok::<(), display_client::DisplayError>(())
//! ```

pub mod channels;
pub mod normalize;

pub use channels::to_rgb;
pub use normalize::{normalize, NormalizeRange};

use crate::error::{DisplayError, Result};

/// Dimensions of a pixel array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
    /// Size of the channel axis; `None` for 2-D arrays
    pub channel_axis: Option<usize>,
}

impl Shape {
    /// Build a shape from a list of 2 or 3 dimensions
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        match *dims {
            [height, width] => Ok(Shape {
                height,
                width,
                channel_axis: None,
            }),
            [height, width, channels] => Ok(Shape {
                height,
                width,
                channel_axis: Some(channels),
            }),
            _ => Err(DisplayError::InvalidShape(format!(
                "expected 2 or 3 dimensions, got {}",
                dims.len()
            ))),
        }
    }

    /// Number of samples per pixel (1 for 2-D arrays)
    pub fn channels(&self) -> usize {
        self.channel_axis.unwrap_or(1)
    }

    /// Total number of samples, or `None` if it overflows `usize`
    pub fn checked_len(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)?
            .checked_mul(self.channels())
    }

    /// Total number of samples, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape as a dimension list, e.g. `[480, 640, 3]`
    pub fn dims(&self) -> Vec<usize> {
        match self.channel_axis {
            Some(channels) => vec![self.height, self.width, channels],
            None => vec![self.height, self.width],
        }
    }
}

/// Dense row-major array of samples
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    shape: Shape,
    data: Vec<T>,
}

/// Numeric input to the display pipeline
pub type PixelBuffer = Array<f64>;

/// 8-bit samples, as produced by [`normalize`]
pub type ByteImage = Array<u8>;

impl<T> Array<T> {
    /// Create an array from its dimensions and row-major data
    ///
    /// # Errors
    ///
    /// [`DisplayError::InvalidShape`] if `dims` has fewer than 2 or more than
    /// 3 entries, or if the data length doesn't match.
    pub fn new(dims: Vec<usize>, data: Vec<T>) -> Result<Self> {
        let shape = Shape::from_dims(&dims)?;
        Self::with_shape(shape, data)
    }

    /// Create an array from a shape and row-major data
    pub fn with_shape(shape: Shape, data: Vec<T>) -> Result<Self> {
        let len = shape.checked_len().ok_or_else(|| {
            DisplayError::InvalidShape(format!("shape {:?} is too large", shape.dims()))
        })?;
        if data.len() != len {
            return Err(DisplayError::InvalidShape(format!(
                "shape {:?} needs {} samples, got {}",
                shape.dims(),
                len,
                data.len()
            )));
        }
        Ok(Array { shape, data })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl PixelBuffer {
    /// Build a single-channel `(height, width)` array from a function of `(row, col)`
    ///
    /// ```
    /// use display_client::image::PixelBuffer;
    ///
    /// let ramp = PixelBuffer::from_fn(2, 3, |_, x| x as f64);
    /// assert_eq!(ramp.data(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
    /// ```
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for y in 0..height {
            for x in 0..width {
                data.push(f(y, x));
            }
        }
        Array {
            shape: Shape {
                height,
                width,
                channel_axis: None,
            },
            data,
        }
    }

    /// Convert any numeric samples losslessly into a pixel buffer
    pub fn from_samples<S: Copy + Into<f64>>(dims: Vec<usize>, samples: &[S]) -> Result<Self> {
        Self::new(dims, samples.iter().map(|&s| s.into()).collect())
    }
}
