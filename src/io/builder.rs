//! Builder for display clients
//!
//! # Examples
//!
//! ```no_run
//! use display_client::io::builder::ClientBuilder;
//!
//! // Local server on the default port
//! let client = ClientBuilder::new().build()?;
//!
//! // Remote server, tolerate error statuses
//! let client = ClientBuilder::new()
//!     .host_port("display.lab", 8080)
//!     .require_success(false)
//!     .build()?;
//! # Ok::<(), display_client::error::DisplayError>(())
//! ```

use crate::error::Result;
use crate::io::client::DisplayClient;
use crate::io::config::ClientConfig;

/// Fluent builder for [`DisplayClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Start from the default configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use display_client::io::builder::ClientBuilder;
    ///
    /// let builder = ClientBuilder::new();
    /// assert_eq!(builder.config().url, "http://localhost:8000/events");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the environment (`DISPLAY_URL`)
    pub fn from_env() -> Self {
        ClientBuilder {
            config: ClientConfig::from_env(),
        }
    }

    /// Set the full events URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Point at `http://<host>:<port>/events`
    pub fn host_port(mut self, host: &str, port: u16) -> Self {
        self.config.url = ClientConfig::events_url(host, port);
        self
    }

    /// Fail on non-2xx responses (default) or report them as `false`
    pub fn require_success(mut self, require: bool) -> Self {
        self.config.require_success = require;
        self
    }

    /// Set the request body limit; `None` disables it
    pub fn max_body_size(mut self, max: Option<usize>) -> Self {
        self.config.max_body_size = max;
        self
    }

    /// Configuration built so far
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Fails if the URL is not a valid http(s) URL.
    pub fn build(self) -> Result<DisplayClient> {
        DisplayClient::new(self.config)
    }
}
