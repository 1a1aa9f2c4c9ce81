//! Display commands sent to the server
//!
//! Each command is one JSON object tagged by its `command` field:
//!
//! ```json
//! {"command": "image", "id": "pane_...", "src": "data:image/png;base64,...",
//!  "labels": null, "width": null, "title": "gradient"}
//!
//! {"command": "plot", "id": "pane_...", "title": "progress",
//!  "options": {"file": [[0, 0.5, 1.0]], "labels": ["x", "a", "b"], "xlabel": "x"}}
//! ```
//!
//! The server forwards the object to every connected viewer. Viewers pick the
//! pane by `id` and create it on first use.

use crate::pane::PaneId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A command for the display server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Show a PNG image in a pane
    Image(ImageCommand),
    /// Draw a line chart in a pane
    Plot(PlotCommand),
}

impl Command {
    /// Wire name of the command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Image(_) => "image",
            Command::Plot(_) => "plot",
        }
    }

    /// Pane the command targets
    pub fn pane(&self) -> &PaneId {
        match self {
            Command::Image(cmd) => &cmd.id,
            Command::Plot(cmd) => &cmd.id,
        }
    }
}

/// Body of an `image` command
///
/// Absent options are sent as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCommand {
    /// Target pane
    pub id: PaneId,
    /// PNG as a data URI
    pub src: String,
    /// Annotation labels
    pub labels: Option<Vec<String>>,
    /// Display width in pixels
    pub width: Option<u32>,
    /// Pane title
    pub title: Option<String>,
}

/// Body of a `plot` command
///
/// `options` goes verbatim to the viewer's chart renderer; its `file` entry
/// holds the data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotCommand {
    /// Target pane
    pub id: PaneId,
    /// Pane title
    pub title: Option<String>,
    /// Chart options including the data rows
    pub options: Map<String, Value>,
}

impl From<ImageCommand> for Command {
    fn from(cmd: ImageCommand) -> Self {
        Command::Image(cmd)
    }
}

impl From<PlotCommand> for Command {
    fn from(cmd: PlotCommand) -> Self {
        Command::Plot(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_wire_format() {
        let cmd = Command::from(ImageCommand {
            id: PaneId::from("pane_1"),
            src: "data:image/png;base64,AA==".to_string(),
            labels: None,
            width: Some(200),
            title: Some("gradient".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({
                "command": "image",
                "id": "pane_1",
                "src": "data:image/png;base64,AA==",
                "labels": null,
                "width": 200,
                "title": "gradient",
            })
        );
    }

    #[test]
    fn test_plot_wire_format() {
        let mut options = Map::new();
        options.insert("file".to_string(), json!([[0.0, 1.0]]));
        let cmd = Command::from(PlotCommand {
            id: PaneId::from("pane_2"),
            title: None,
            options,
        });

        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({
                "command": "plot",
                "id": "pane_2",
                "title": null,
                "options": {"file": [[0.0, 1.0]]},
            })
        );
    }

    #[test]
    fn test_deserialize_by_tag() {
        let value = json!({
            "command": "plot",
            "id": "pane_3",
            "title": "loss",
            "options": {"file": []},
        });
        let cmd: Command = serde_json::from_value(value).unwrap();
        assert_eq!(cmd.name(), "plot");
        assert_eq!(cmd.pane().as_str(), "pane_3");
    }

    #[test]
    fn test_unknown_command_rejected() {
        let value = json!({"command": "text", "id": "pane_4"});
        assert!(serde_json::from_value::<Command>(value).is_err());
    }
}
