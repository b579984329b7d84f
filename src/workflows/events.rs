// src/workflows/events.rs
use bevy::prelude::Event;
use std::path::PathBuf;

use super::definitions::{Record, ResultPayload, WorkflowKind};
use super::gateway::ProcessingError;

/// Sent when the user clicks an upload control. Opens the native file
/// dialog for that workflow, filtered by the capture instance's extension
/// allow-list. Handled by `systems::io`.
#[derive(Event, Debug, Clone)]
pub struct RequestFileDialog {
    pub workflow: WorkflowKind,
    pub extensions: &'static [&'static str],
}

/// Sent after the user picked a file (a cancelled dialog sends nothing).
/// Handled by `systems::process`.
#[derive(Event, Debug, Clone)]
pub struct FileChosen {
    pub workflow: WorkflowKind,
    pub path: PathBuf,
}

/// Sent by the text panel after local validation passed. Submitting the
/// same text twice sends two of these; there is no deduplication.
#[derive(Event, Debug, Clone)]
pub struct TextSubmitted {
    pub text: String,
}

/// Sent by the row picker for a validated in-range selection.
#[derive(Event, Debug, Clone)]
pub struct RowChosen {
    pub index: usize,
}

/// Completion of a background gateway call. The ticket identifies which
/// dispatch this answers; stale tickets are discarded by `systems::logic`.
#[derive(Event, Debug, Clone)]
pub struct ProcessingOutcome {
    pub workflow: WorkflowKind,
    pub ticket: u64,
    pub result: Result<ResultPayload, ProcessingError>,
}

/// Completion of the row-workflow parse call.
#[derive(Event, Debug, Clone)]
pub struct ParseOutcome {
    pub ticket: u64,
    pub result: Result<Vec<Record>, ProcessingError>,
}

/// Transient user-facing notice for an input submission or completion.
/// Collected into `UiFeedbackState` by the UI plugin.
#[derive(Event, Debug, Clone)]
pub struct WorkflowFeedback {
    pub message: String,
    pub is_error: bool,
}

impl WorkflowFeedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}
