//! Display client for remote visualization panes
//!
//! This library sends images and line plots to a display server over HTTP.
//! The server forwards each command to connected browser viewers, which draw
//! it into a named pane.
//!
//! # Features
//!
//! - **Image display** - Any 2-D grayscale or 3-channel numeric array, normalized to 8 bits
//! - **Built-in PNG encoder** - zlib-compressed truecolor PNG with CRC-checked chunk framing
//! - **Line charts** - Rows of numbers plus arbitrary chart renderer options
//! - **Pane reuse** - Every call returns a pane id that later calls can draw into
//! - **Synchronous** - One blocking HTTP request per call, no background threads of its own
//!
//! # Quick Start
//!
//! ## Showing an Image
//!
//! ```no_run
//! use display_client::image::PixelBuffer;
//! use display_client::io::ClientBuilder;
//! use display_client::options::ImageOptions;
//!
//! let client = ClientBuilder::new()
//!     .host_port("localhost", 8000)
//!     .build()?;
//!
//! let gradient = PixelBuffer::from_fn(512, 512, |y, x| {
//!     let (fx, fy) = (x as f64 / 511.0 * std::f64::consts::PI, y as f64 / 511.0 * 2.0);
//!     (fx.sin() + fy.cos()).powi(2) + 0.5
//! });
//!
//! let pane = client.image(&gradient, &ImageOptions::new().title("gradient"))?;
//! println!("Drawn into {}", pane);
//! # Ok::<(), display_client::DisplayError>(())
//! ```
//!
//! ## Updating a Plot
//!
//! ```no_run
//! use display_client::io::DisplayClient;
//! use display_client::options::PlotOptions;
//!
//! let client = DisplayClient::from_env()?;
//!
//! let mut rows: Vec<Vec<f64>> = (0..15).map(|i| vec![i as f64, 0.5, 1.0]).collect();
//! let win = client.plot(
//!     &rows,
//!     &PlotOptions::new().labels(["position", "a", "b"]).title("progress"),
//! )?;
//!
//! for i in 15..25 {
//!     rows.push(vec![i as f64, 0.4, 1.1]);
//!     client.plot(&rows, &PlotOptions::new().win(win.clone()))?;
//! }
//! # Ok::<(), display_client::DisplayError>(())
//! ```
//!
//! ## Encoding PNG Without a Server
//!
//! ```
//! use display_client::protocol::{encode_png, read_chunks};
//!
//! let black = vec![0u8; 2 * 2 * 3];
//! let png = encode_png(&black, 2, 2)?;
//! assert_eq!(read_chunks(&png)?.len(), 3);
//! # Ok::<(), display_client::DisplayError>(())
//! ```
//!
//! # Architecture
//!
//! ## Module Structure
//!
//! - **`image`** - Pixel arrays and preparation
//!   - `normalize` - Rescale numeric samples to `u8`
//!   - `channels` - Expand grayscale to RGB
//!
//! - **`protocol`** - Wire formats
//!   - `png` - RGB PNG encoder
//!   - `chunk`, `crc`, `types` - PNG chunk framing with CRC-32
//!   - `data_uri` - Base64 data URIs
//!   - `command` - JSON `image` / `plot` commands
//!
//! - **`io`** - HTTP layer
//!   - `ClientBuilder` / `ClientConfig` - Endpoint and response handling
//!   - `DisplayClient` - `image`, `plot`, `images`
//!   - `HttpTransport` - One JSON POST per command
//!
//! - **`options`**, **`pane`** - Typed command options and pane ids
//!
//! The image data flow is:
//! array → normalize → to_rgb → PNG → data URI → `image` command → HTTP POST.
//!
//! # Error Handling
//!
//! All operations return `Result<T, DisplayError>`. Common error types:
//!
//! - **UnsupportedShape** - Array is neither grayscale nor RGB
//! - **DegenerateRange** - Normalization bounds are equal
//! - **Http** - Server unreachable
//! - **Status** - Server answered with a non-2xx status
//!
//! ```no_run
//! use display_client::io::ClientBuilder;
//! use display_client::image::PixelBuffer;
//! use display_client::options::ImageOptions;
//! use display_client::DisplayError;
//!
//! let client = ClientBuilder::new().build()?;
//! let flat = PixelBuffer::from_fn(8, 8, |_, _| 1.0);
//!
//! match client.image(&flat, &ImageOptions::new()) {
//!     Ok(pane) => println!("Shown in {}", pane),
//!     Err(DisplayError::DegenerateRange { min, max }) => {
//!         eprintln!("Nothing to show: all values in [{}, {}]", min, max)
//!     }
//!     Err(e) => eprintln!("Display failed: {}", e),
//! }
//! # Ok::<(), DisplayError>(())
//! ```

pub mod compression;
pub mod error;
pub mod image;
pub mod io;
pub mod options;
pub mod pane;
pub mod protocol;

// Re-export commonly used types
pub use error::{DisplayError, Result};
pub use io::{ClientBuilder, DisplayClient};
pub use options::{ImageOptions, PlotOptions};
pub use pane::PaneId;
