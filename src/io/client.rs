//! Display client
//!
//! High-level operations that turn arrays and data rows into display commands
//! and send them to the server.

use crate::error::{DisplayError, Result};
use crate::image::{normalize, to_rgb, PixelBuffer};
use crate::io::config::ClientConfig;
use crate::io::transport::HttpTransport;
use crate::options::{ImageOptions, PlotOptions};
use crate::pane::{self, PaneId};
use crate::protocol::command::{Command, ImageCommand, PlotCommand};
use crate::protocol::data_uri::png_data_uri;
use crate::protocol::png::PngEncoder;
use serde_json::Value;
use tracing::{debug, info};

/// Blocking client for a display server
///
/// Every operation performs at most one HTTP request and returns the pane id
/// it drew into. The client holds no mutable state and can be shared between
/// threads.
///
/// **Recommended**: Use [`ClientBuilder`](crate::io::builder::ClientBuilder) to configure it:
/// ```no_run
/// use display_client::io::ClientBuilder;
/// use display_client::image::PixelBuffer;
/// use display_client::options::ImageOptions;
///
/// let client = ClientBuilder::new().host_port("localhost", 8000).build()?;
///
/// let gradient = PixelBuffer::from_fn(64, 64, |y, x| (x + y) as f64);
/// let pane = client.image(&gradient, &ImageOptions::new().title("gradient"))?;
///
/// // Draw into the same pane again
/// client.image(&gradient, &ImageOptions::new().win(pane))?;
/// # Ok::<(), display_client::DisplayError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisplayClient {
    transport: HttpTransport,
    config: ClientConfig,
}

impl DisplayClient {
    /// Create a client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        info!(url = %transport.url(), "Display client ready");
        Ok(DisplayClient { transport, config })
    }

    /// Create a client for the default URL, or `DISPLAY_URL` when set
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a prepared command
    ///
    /// See [`HttpTransport::send`] for the meaning of the returned flag.
    pub fn send(&self, command: &Command) -> Result<bool> {
        self.transport.send(command)
    }

    /// Show an array as an image
    ///
    /// The array is normalized to 8 bits, expanded to RGB, PNG-encoded and
    /// sent inline as a data URI. Shape and range errors abort the call
    /// before anything is sent.
    pub fn image(&self, pixels: &PixelBuffer, opts: &ImageOptions) -> Result<PaneId> {
        let command = image_command(pixels, opts)?;
        self.dispatch(command)
    }

    /// Show rows of numbers as a line chart
    ///
    /// Each row is one data point: the X value followed by one value per
    /// series.
    ///
    /// ```no_run
    /// use display_client::io::DisplayClient;
    /// use display_client::options::PlotOptions;
    ///
    /// let client = DisplayClient::from_env()?;
    /// let mut rows = vec![vec![0.0, 0.5, 1.2]];
    /// let win = client.plot(&rows, &PlotOptions::new().labels(["step", "a", "b"]))?;
    ///
    /// rows.push(vec![1.0, 0.4, 1.1]);
    /// client.plot(&rows, &PlotOptions::new().win(win))?;
    /// # Ok::<(), display_client::DisplayError>(())
    /// ```
    pub fn plot<R: AsRef<[f64]>>(&self, rows: &[R], opts: &PlotOptions) -> Result<PaneId> {
        let command = plot_command(rows, opts)?;
        self.dispatch(command)
    }

    /// Show several images in one pane
    ///
    /// Composing images into a single canvas is not supported; this always
    /// returns [`DisplayError::NotImplemented`].
    pub fn images(&self, _images: &[PixelBuffer], _opts: &ImageOptions) -> Result<PaneId> {
        Err(DisplayError::NotImplemented("composing multiple images"))
    }

    fn dispatch(&self, command: Command) -> Result<PaneId> {
        self.transport.send(&command)?;
        let pane = command.pane().clone();
        debug!(command = command.name(), pane = %pane, "Pane updated");
        Ok(pane)
    }
}

/// Build the `image` command for an array without sending it
pub fn image_command(pixels: &PixelBuffer, opts: &ImageOptions) -> Result<Command> {
    let id = pane::resolve(opts.win.as_ref());

    let rgb = to_rgb(normalize(pixels, opts.range)?)?;
    let width = dimension(rgb.width())?;
    let height = dimension(rgb.height())?;
    let png = PngEncoder::new()
        .row_order(opts.row_order)
        .encode(rgb.data(), width, height)?;

    Ok(Command::Image(ImageCommand {
        id,
        src: png_data_uri(&png),
        labels: opts.labels.clone(),
        width: opts.width,
        title: opts.title.clone(),
    }))
}

/// Build the `plot` command for data rows without sending it
///
/// Non-finite values become `null`, which chart renderers draw as gaps.
pub fn plot_command<R: AsRef<[f64]>>(rows: &[R], opts: &PlotOptions) -> Result<Command> {
    let id = pane::resolve(opts.win.as_ref());

    let file = Value::Array(
        rows.iter()
            .map(|row| Value::Array(row.as_ref().iter().map(|&v| Value::from(v)).collect()))
            .collect(),
    );

    Ok(Command::Plot(PlotCommand {
        id,
        title: opts.title.clone(),
        options: opts.chart_options(file)?,
    }))
}

fn dimension(size: usize) -> Result<u32> {
    u32::try_from(size)
        .map_err(|_| DisplayError::InvalidShape(format!("dimension {} exceeds u32", size)))
}
