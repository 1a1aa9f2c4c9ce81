//! Options for image and plot commands
//!
//! Both option sets share `win` (reuse an existing pane), `title`, `labels`
//! and `width`. Plots can also carry extra chart options, which go to the
//! viewer's chart renderer untouched.
//!
//! ```
//! use display_client::options::{ImageOptions, PlotOptions};
//!
//! let image = ImageOptions::new().title("gradient").width(256).range(0.0, 2.0);
//!
//! let plot = PlotOptions::new()
//!     .title("progress")
//!     .labels(["position", "a", "b"])
//!     .option("drawPoints", true)
//!     .option("strokeWidth", 2);
//! ```

use crate::error::{DisplayError, Result};
use crate::image::NormalizeRange;
use crate::pane::PaneId;
use crate::protocol::png::RowOrder;
use serde_json::{Map, Value};

/// Chart option keys the client fills in itself
pub const RESERVED_PLOT_KEYS: [&str; 2] = ["file", "win"];

/// Options for [`DisplayClient::image`](crate::io::DisplayClient::image)
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Pane to update; a new pane is created when absent
    pub win: Option<PaneId>,
    pub title: Option<String>,
    pub labels: Option<Vec<String>>,
    /// Display width in pixels
    pub width: Option<u32>,
    /// Normalization bounds
    pub range: NormalizeRange,
    /// Vertical order of rows in the encoded PNG
    pub row_order: RowOrder,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn win(mut self, win: impl Into<PaneId>) -> Self {
        self.win = Some(win.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Lower normalization bound (default: array minimum)
    pub fn min(mut self, min: f64) -> Self {
        self.range.min = Some(min);
        self
    }

    /// Upper normalization bound (default: array maximum)
    pub fn max(mut self, max: f64) -> Self {
        self.range.max = Some(max);
        self
    }

    /// Both normalization bounds
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = NormalizeRange::new(min, max);
        self
    }

    pub fn row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }
}

/// Options for [`DisplayClient::plot`](crate::io::DisplayClient::plot)
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Pane to update; a new pane is created when absent
    pub win: Option<PaneId>,
    pub title: Option<String>,
    /// Series names; the first one names the X axis
    pub labels: Option<Vec<String>>,
    pub width: Option<u32>,
    /// Extra chart renderer options, forwarded verbatim
    pub extra: Map<String, Value>,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn win(mut self, win: impl Into<PaneId>) -> Self {
        self.win = Some(win.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Add a passthrough chart option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build the `options` object of a plot command
    ///
    /// Contains every option except `win`, plus `file` (the rows) and, when
    /// labels are present, `xlabel` set to the first label.
    ///
    /// # Errors
    ///
    /// [`DisplayError::InvalidOption`] if `extra` uses a reserved key.
    pub fn chart_options(&self, file: Value) -> Result<Map<String, Value>> {
        if let Some(key) = RESERVED_PLOT_KEYS
            .iter()
            .find(|key| self.extra.contains_key(**key))
        {
            return Err(DisplayError::InvalidOption(format!(
                "'{}' is set by the client and cannot be passed through",
                key
            )));
        }

        let mut options = self.extra.clone();
        if let Some(title) = &self.title {
            options.insert("title".to_string(), Value::from(title.as_str()));
        }
        if let Some(width) = self.width {
            options.insert("width".to_string(), Value::from(width));
        }
        if let Some(labels) = &self.labels {
            options.insert("labels".to_string(), Value::from(labels.clone()));
            if let Some(xlabel) = labels.first() {
                options.insert("xlabel".to_string(), Value::from(xlabel.as_str()));
            }
        }
        options.insert("file".to_string(), file);

        Ok(options)
    }
}
