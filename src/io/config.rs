//! Client configuration
//!
//! The display server is reached at a single events URL. The configuration
//! is fixed when the client is built and never changes afterwards.

/// Events endpoint of a display server running locally with default settings
pub const DEFAULT_URL: &str = "http://localhost:8000/events";

/// Request body limit of the reference display server (4 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

/// Environment variable that overrides the events URL
pub const DISPLAY_URL_ENV: &str = "DISPLAY_URL";

/// Display client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Events endpoint commands are POSTed to
    pub url: String,
    /// Treat non-2xx responses as errors instead of returning `false`
    pub require_success: bool,
    /// Refuse to send bodies larger than this; `None` disables the check
    pub max_body_size: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: DEFAULT_URL.to_string(),
            require_success: true,
            max_body_size: Some(DEFAULT_MAX_BODY_SIZE),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the URL taken from `DISPLAY_URL` if set
    pub fn from_env() -> Self {
        Self::from_url_var(std::env::var(DISPLAY_URL_ENV).ok())
    }

    fn from_url_var(url: Option<String>) -> Self {
        match url.filter(|url| !url.trim().is_empty()) {
            Some(url) => ClientConfig {
                url: url.trim().to_string(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Events URL for a server at `host:port`
    ///
    /// ```
    /// use display_client::io::config::ClientConfig;
    ///
    /// assert_eq!(ClientConfig::events_url("10.0.0.5", 8000), "http://10.0.0.5:8000/events");
    /// ```
    pub fn events_url(host: &str, port: u16) -> String {
        format!("http://{}:{}/events", host, port)
    }
}
