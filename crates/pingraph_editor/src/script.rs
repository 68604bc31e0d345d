// SPDX-License-Identifier: MIT OR Apache-2.0
//! Replayable editing sessions.
//!
//! A script is a RON list of steps fed to a [`GraphController`] as if they
//! came from a host window, one frame per `EndFrame` step.

use crate::controller::GraphController;
use crate::input::{GraphInputListener, InputEvent};
use egui::pos2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Script errors
#[derive(Debug, Error)]
pub enum ScriptError {
    /// File could not be read
    #[error("Script I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid script
    #[error("Script parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// One step of a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Palette action: add a node for a registered function
    Spawn {
        /// Function ID, e.g. `"Math.Add"`
        function: String,
        /// Canvas position; omitted means the default spawn cascade
        #[serde(default)]
        position: Option<[f32; 2]>,
    },
    /// Host input event
    Input(InputEvent),
    /// Flush events (and autosave) as at the end of a UI frame
    EndFrame,
}

/// Counters collected while replaying
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps executed
    pub steps: usize,
    /// Frames ended
    pub frames: usize,
    /// Spawn steps that failed
    pub failed_spawns: usize,
    /// Events flushed
    pub events: usize,
    /// Autosaves performed
    pub saves: usize,
}

/// Parse a script from RON
pub fn parse(s: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    Ok(ron::from_str(s)?)
}

/// Load a script file
pub fn load(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Feed every step to the controller, ending with a final frame
pub fn replay(controller: &mut GraphController, steps: &[ScriptStep]) -> ReplayReport {
    let mut report = ReplayReport::default();

    for step in steps {
        report.steps += 1;
        match step {
            ScriptStep::Spawn { function, position } => {
                let position = position.map(|[x, y]| pos2(x, y));
                if controller.spawn(function, position).is_none() {
                    report.failed_spawns += 1;
                }
            }
            ScriptStep::Input(event) => controller.handle_event(event),
            ScriptStep::EndFrame => end_frame(controller, &mut report),
        }
    }
    end_frame(controller, &mut report);

    report
}

fn end_frame(controller: &mut GraphController, report: &mut ReplayReport) {
    let summary = controller.end_frame();
    report.frames += 1;
    report.events += summary.events.len();
    if summary.saved {
        report.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use pingraph_graph::library::default_registry;
    use pingraph_graph::Graph;

    const SCRIPT: &str = r#"[
        Spawn(function: "Math.Sin", position: Some((0.0, 0.0))),
        Spawn(function: "Math.Add", position: Some((300.0, 0.0))),
        Spawn(function: "Math.Missing"),
        EndFrame,
        // Sin output pin centre to Add input A
        Input(PointerDown(button: Primary, position: (133.0, 41.0))),
        Input(PointerMove(position: (315.0, 41.0))),
        Input(PointerUp(button: Primary, position: (315.0, 41.0))),
        EndFrame,
    ]"#;

    #[test]
    fn test_parse() {
        let steps = parse(SCRIPT).unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(
            steps[2],
            ScriptStep::Spawn {
                function: "Math.Missing".to_string(),
                position: None
            }
        );
    }

    #[test]
    fn test_replay_links_nodes() {
        let steps = parse(SCRIPT).unwrap();
        let mut controller =
            GraphController::new(Graph::new("Script"), default_registry(), EditorConfig::default());

        let report = replay(&mut controller, &steps);

        assert_eq!(report.steps, 8);
        assert_eq!(report.frames, 3);
        assert_eq!(report.failed_spawns, 1);
        assert_eq!(controller.graph().node_count(), 2);
        assert_eq!(controller.graph().link_count(), 1);
        // No asset path configured
        assert_eq!(report.saves, 0);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load(Path::new("/definitely/not/here.ron")),
            Err(ScriptError::Io(_))
        ));
    }
}
