//! Blocking HTTP transport
//!
//! Serializes a [`Command`] to JSON and POSTs it to the events URL. One call
//! is one request; nothing is retried.

use crate::error::{DisplayError, Result};
use crate::io::config::ClientConfig;
use crate::protocol::command::Command;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::{debug, trace, warn};

/// HTTP transport to a display server
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: Url,
    require_success: bool,
    max_body_size: Option<usize>,
}

impl HttpTransport {
    /// Create a transport for the configured URL
    ///
    /// # Errors
    ///
    /// [`DisplayError::InvalidOption`] if the URL doesn't parse or isn't
    /// http(s), [`DisplayError::Http`] if the HTTP client can't be created.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            DisplayError::InvalidOption(format!("Invalid URL {:?}: {}", config.url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DisplayError::InvalidOption(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        // Display servers are reached directly, never through HTTP_PROXY.
        let client = Client::builder().no_proxy().build()?;

        Ok(HttpTransport {
            client,
            url,
            require_success: config.require_success,
            max_body_size: config.max_body_size,
        })
    }

    /// Events URL commands are sent to
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send a command
    ///
    /// Returns `Ok(true)` on a 2xx response. Other statuses return
    /// `Err(DisplayError::Status)`, or `Ok(false)` when `require_success` is
    /// off. Connection failures surface as [`DisplayError::Http`].
    pub fn send(&self, command: &Command) -> Result<bool> {
        let body = serde_json::to_vec(command)?;
        if let Some(max) = self.max_body_size {
            if body.len() > max {
                return Err(DisplayError::BodyTooLarge {
                    size: body.len(),
                    max,
                });
            }
        }

        trace!(
            command = command.name(),
            pane = %command.pane(),
            size = body.len(),
            "Sending command"
        );

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        debug!(
            command = command.name(),
            pane = %command.pane(),
            status = status.as_u16(),
            "Command delivered"
        );

        if status.is_success() {
            Ok(true)
        } else if self.require_success {
            Err(DisplayError::Status {
                status: status.as_u16(),
            })
        } else {
            warn!(status = status.as_u16(), "Display server rejected command");
            Ok(false)
        }
    }
}
