//! Channel expansion to RGB

use crate::error::{DisplayError, Result};
use crate::image::{Array, Shape};

/// Turn a grayscale or RGB array into an `(H, W, 3)` array
///
/// - 3 channels: returned unchanged
/// - 1 channel, `(H, W)` or `(H, W, 1)`: each sample is repeated three times
/// - anything else: [`DisplayError::UnsupportedShape`]
///
/// # Examples
///
/// ```
/// use display_client::image::{to_rgb, ByteImage};
///
/// let gray = ByteImage::new(vec![1, 2], vec![10, 20])?;
/// let rgb = to_rgb(gray)?;
/// assert_eq!(rgb.data(), &[10, 10, 10, 20, 20, 20]);
/// # Ok::<(), display_client::DisplayError>(())
/// ```
pub fn to_rgb<T: Copy>(array: Array<T>) -> Result<Array<T>> {
    let shape = array.shape();
    match shape.channels() {
        3 => Ok(array),
        1 => {
            let data = array
                .into_data()
                .into_iter()
                .flat_map(|sample| [sample; 3])
                .collect();
            Array::with_shape(
                Shape {
                    channel_axis: Some(3),
                    ..shape
                },
                data,
            )
        }
        channels => Err(DisplayError::UnsupportedShape { channels }),
    }
}
