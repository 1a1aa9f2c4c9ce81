//! HTTP I/O module for display server communication
//!
//! Provides the blocking transport, its configuration and the high-level client.

pub mod builder;
pub mod client;
pub mod config;
pub mod transport;

pub use builder::ClientBuilder;
pub use client::{image_command, plot_command, DisplayClient};
pub use config::ClientConfig;
pub use transport::HttpTransport;
