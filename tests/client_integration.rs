//! Integration tests for DisplayClient over real HTTP
//!
//! A minimal HTTP listener runs in a background thread, records each request
//! and answers with a fixed status.

use display_client::image::PixelBuffer;
use display_client::io::ClientBuilder;
use display_client::options::{ImageOptions, PlotOptions};
use display_client::protocol::command::{Command, ImageCommand};
use display_client::protocol::data_uri::decode_png_data_uri;
use display_client::{DisplayError, PaneId};
use serde_json::json;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// One request as seen by the test server
struct Recorded {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn command(&self) -> Command {
        serde_json::from_slice(&self.body).expect("body should be a command")
    }
}

/// Accept `count` requests, answering each with `status`
fn serve(count: usize, status: u16) -> (String, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/events", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        (0..count)
            .map(|_| {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();

                let mut headers = Vec::new();
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((key, value)) = line.split_once(':') {
                        headers.push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
                    }
                }

                let length = headers
                    .iter()
                    .find(|(k, _)| k == "content-length")
                    .map(|(_, v)| v.parse().unwrap())
                    .unwrap_or(0);
                let mut body = vec![0u8; length];
                reader.read_exact(&mut body).unwrap();

                write!(
                    stream,
                    "HTTP/1.1 {} Test\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status
                )
                .unwrap();
                stream.flush().unwrap();

                Recorded {
                    request_line: request_line.trim_end().to_string(),
                    headers,
                    body,
                }
            })
            .collect()
    });

    (url, handle)
}

/// Test the image command as it arrives at the server
#[test]
fn test_image_request() {
    let (url, server) = serve(1, 200);
    let client = ClientBuilder::new().url(url).build().unwrap();

    // 2 rows x 3 columns ramp: 0..=5
    let ramp = PixelBuffer::from_fn(2, 3, |y, x| (y * 3 + x) as f64);
    let pane = client
        .image(&ramp, &ImageOptions::new().title("ramp").width(300))
        .unwrap();

    let requests = server.join().unwrap();
    let request = &requests[0];
    assert_eq!(request.request_line, "POST /events HTTP/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));

    let Command::Image(cmd) = request.command() else {
        panic!("expected image command");
    };
    assert_eq!(cmd.id, pane);
    assert_eq!(cmd.title.as_deref(), Some("ramp"));
    assert_eq!(cmd.width, Some(300));
    assert_eq!(cmd.labels, None);

    let png = decode_png_data_uri(&cmd.src).unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (3, 2));
    let gray: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
    assert_eq!(gray, [0, 51, 102, 153, 204, 255]);
    assert!(img.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
}

/// Test that absent image options are sent as JSON nulls
#[test]
fn test_image_nulls_on_wire() {
    let (url, server) = serve(1, 200);
    let client = ClientBuilder::new().url(url).build().unwrap();

    let ramp = PixelBuffer::from_fn(1, 2, |_, x| x as f64);
    client.image(&ramp, &ImageOptions::new()).unwrap();

    let requests = server.join().unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["command"], "image");
    assert_eq!(body["labels"], serde_json::Value::Null);
    assert_eq!(body["width"], serde_json::Value::Null);
    assert_eq!(body["title"], serde_json::Value::Null);
}

/// Test fresh pane ids across calls without `win`
#[test]
fn test_fresh_pane_ids() {
    let (url, server) = serve(2, 200);
    let client = ClientBuilder::new().url(url).build().unwrap();

    let ramp = PixelBuffer::from_fn(2, 2, |y, x| (y + x) as f64);
    let first = client.image(&ramp, &ImageOptions::new()).unwrap();
    let second = client.image(&ramp, &ImageOptions::new()).unwrap();

    assert!(!first.as_str().is_empty());
    assert_ne!(first, second);

    let sent: Vec<PaneId> = server
        .join()
        .unwrap()
        .iter()
        .map(|r| r.command().pane().clone())
        .collect();
    assert_eq!(sent, [first, second]);
}

/// Test a plot followed by an update of the same pane
#[test]
fn test_plot_update_same_pane() {
    let (url, server) = serve(2, 200);
    let client = ClientBuilder::new().url(url).build().unwrap();

    let mut rows = vec![vec![0.0, 0.1, 0.2]];
    let win = client
        .plot(
            &rows,
            &PlotOptions::new()
                .labels(["position", "a", "b"])
                .title("progress"),
        )
        .unwrap();

    rows.push(vec![1.0, 0.3, 0.4]);
    let again = client.plot(&rows, &PlotOptions::new().win(win.clone())).unwrap();
    assert_eq!(again, win);

    let requests = server.join().unwrap();
    let first: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        first,
        json!({
            "command": "plot",
            "id": win.as_str(),
            "title": "progress",
            "options": {
                "file": [[0.0, 0.1, 0.2]],
                "labels": ["position", "a", "b"],
                "xlabel": "position",
                "title": "progress",
            },
        })
    );

    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(second["id"], win.as_str());
    assert_eq!(second["title"], serde_json::Value::Null);
    assert_eq!(second["options"], json!({"file": [[0.0, 0.1, 0.2], [1.0, 0.3, 0.4]]}));
}

/// Test that error statuses fail the call by default
#[test]
fn test_error_status_required_success() {
    let (url, server) = serve(1, 500);
    let client = ClientBuilder::new().url(url).build().unwrap();

    let result = client.plot(&[[0.0, 1.0]], &PlotOptions::new());
    assert!(matches!(result, Err(DisplayError::Status { status: 500 })));
    server.join().unwrap();
}

/// Test that error statuses are reported as `false` when tolerated
#[test]
fn test_error_status_tolerated() {
    let (url, server) = serve(2, 404);
    let client = ClientBuilder::new()
        .url(url)
        .require_success(false)
        .build()
        .unwrap();

    let command = Command::Image(ImageCommand {
        id: PaneId::from("pane_raw"),
        src: "data:image/png;base64,".to_string(),
        labels: Some(vec!["a".to_string()]),
        width: None,
        title: None,
    });
    assert!(!client.send(&command).unwrap());

    // High-level calls still hand back the pane id
    let pane = client
        .plot(&[[0.0]], &PlotOptions::new().win("pane_kept"))
        .unwrap();
    assert_eq!(pane.as_str(), "pane_kept");

    let requests = server.join().unwrap();
    assert_eq!(requests[0].command(), command);
}

/// Test that a successful raw send returns `true`
#[test]
fn test_send_success() {
    let (url, server) = serve(1, 204);
    let client = ClientBuilder::new().url(url).build().unwrap();

    let command = Command::Image(ImageCommand {
        id: PaneId::from("pane_ok"),
        src: "data:image/png;base64,".to_string(),
        labels: None,
        width: Some(10),
        title: Some("ok".to_string()),
    });
    assert!(client.send(&command).unwrap());
    server.join().unwrap();
}

/// Test that connection failures surface as HTTP errors
#[test]
fn test_connection_refused() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = ClientBuilder::new()
        .url(format!("http://{}/events", addr))
        .build()
        .unwrap();

    let result = client.plot(&[[0.0, 1.0]], &PlotOptions::new());
    assert!(matches!(result, Err(DisplayError::Http(_))));
}
