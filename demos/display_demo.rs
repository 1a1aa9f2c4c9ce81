//! Demonstration of image and plot display
//!
//! Draws a gradient image, then a line chart that keeps growing in the same pane.
//! Start a display server first, then:
//!
//! ```bash
//! cargo run --example display_demo
//!
//! # Different server, with request logging
//! DISPLAY_URL=http://10.0.0.5:8000/events RUST_LOG=display_client=debug cargo run --example display_demo
//! ```

use display_client::image::PixelBuffer;
use display_client::io::DisplayClient;
use display_client::options::{ImageOptions, PlotOptions};
use std::f64::consts::PI;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SIZE: usize = 512;

/// `(sin(x) + cos(y))^2 + 0.5` over x in [0, pi], y in [0, 2]
fn generate_image() -> PixelBuffer {
    let step = |i: usize, end: f64| i as f64 * end / (SIZE - 1) as f64;
    PixelBuffer::from_fn(SIZE, SIZE, |row, col| {
        let (x, y) = (step(col, PI), step(row, 2.0));
        (x.sin() + y.cos()).powi(2) + 0.5
    })
}

/// Deterministic stand-in for random samples
fn sample(i: usize, seed: f64) -> f64 {
    ((i as f64 * 12.9898 + seed * 78.233).sin() * 43758.5453).fract().abs()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let client = DisplayClient::from_env()?;
    info!("Sending to {}", client.config().url);

    let pane = client.image(&generate_image(), &ImageOptions::new().title("gradient"))?;
    info!("Gradient shown in {}", pane);

    let mut data: Vec<Vec<f64>> = (0..15)
        .map(|i| vec![i as f64, sample(i, 1.0), sample(i, 2.0) * 2.0])
        .collect();

    let win = client.plot(
        &data,
        &PlotOptions::new()
            .labels(["position", "a", "b"])
            .title("progress"),
    )?;
    info!("Plot shown in {}", win);

    for i in 15..25 {
        thread::sleep(Duration::from_millis(200));
        data.push(vec![i as f64, sample(i, 1.0), sample(i, 2.0) * 2.0]);
        client.plot(&data, &PlotOptions::new().win(win.clone()))?;
    }

    info!("Done");
    Ok(())
}
