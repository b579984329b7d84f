// src/workflows/systems/process.rs
//
// Dispatch systems: turn completed input captures into background gateway
// calls. Each dispatch issues a slice ticket; the task reports back on the
// main thread as a ProcessingOutcome / ParseOutcome event.

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use std::path::Path;

use crate::workflows::definitions::{ResultPayload, WorkflowKind};
use crate::workflows::events::{FileChosen, ParseOutcome, ProcessingOutcome, RowChosen, TextSubmitted};
use crate::workflows::gateway::ProcessingBackend;
use crate::workflows::resources::DashboardState;

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A chosen file starts the file workflow's processing cycle, or the row
/// workflow's parse cycle. The text workflow never picks files.
pub(crate) fn dispatch_file_processing(
    mut events: EventReader<FileChosen>,
    mut state: ResMut<DashboardState>,
    backend: Res<ProcessingBackend>,
    runtime: Res<TokioTasksRuntime>,
) {
    for event in events.read() {
        match event.workflow {
            WorkflowKind::FileAnalysis => {
                let ticket = state.file.begin(file_label(&event.path));
                let gateway = backend.gateway.clone();
                let path = event.path.clone();
                runtime.spawn_background_task(move |mut ctx| async move {
                    let result = gateway
                        .process_tabular_file(&path)
                        .await
                        .map(ResultPayload::from);
                    ctx.run_on_main_thread(move |ctx| {
                        ctx.world.send_event(ProcessingOutcome {
                            workflow: WorkflowKind::FileAnalysis,
                            ticket,
                            result,
                        });
                    })
                    .await;
                });
            }
            WorkflowKind::RowInspection => {
                let ticket = state.begin_parse();
                let parser = backend.parser.clone();
                let path = event.path.clone();
                runtime.spawn_background_task(move |mut ctx| async move {
                    let result = parser.parse(&path).await;
                    ctx.run_on_main_thread(move |ctx| {
                        ctx.world.send_event(ParseOutcome { ticket, result });
                    })
                    .await;
                });
            }
            WorkflowKind::TextAnalysis => {
                warn!("Ignoring file chosen for the text workflow.");
            }
        }
    }
}

/// A validated text submission starts the text workflow's processing cycle.
pub(crate) fn dispatch_text_processing(
    mut events: EventReader<TextSubmitted>,
    mut state: ResMut<DashboardState>,
    backend: Res<ProcessingBackend>,
    runtime: Res<TokioTasksRuntime>,
) {
    for event in events.read() {
        let preview: String = event.text.chars().take(40).collect();
        let ticket = state.text.begin(preview);
        let gateway = backend.gateway.clone();
        let text = event.text.clone();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = gateway
                .process_free_text(&text)
                .await
                .map(ResultPayload::from);
            ctx.run_on_main_thread(move |ctx| {
                ctx.world.send_event(ProcessingOutcome {
                    workflow: WorkflowKind::TextAnalysis,
                    ticket,
                    result,
                });
            })
            .await;
        });
    }
}

/// A row selection starts the row workflow's nested processing cycle. The
/// index was validated by the picker; an index that no longer resolves
/// (rows replaced underneath the event) is dropped silently.
pub(crate) fn dispatch_row_processing(
    mut events: EventReader<RowChosen>,
    mut state: ResMut<DashboardState>,
    backend: Res<ProcessingBackend>,
    runtime: Res<TokioTasksRuntime>,
) {
    for event in events.read() {
        let Some(record) = state
            .uploaded_rows
            .as_ref()
            .and_then(|rows| rows.get(event.index))
            .cloned()
        else {
            debug!("Row selection {} no longer resolves; ignoring.", event.index);
            continue;
        };

        state.selected_row = Some(event.index);
        let ticket = state.row.begin(format!("Row {}", event.index + 1));
        let gateway = backend.gateway.clone();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = gateway
                .process_selected_row(&record)
                .await
                .map(ResultPayload::from);
            ctx.run_on_main_thread(move |ctx| {
                ctx.world.send_event(ProcessingOutcome {
                    workflow: WorkflowKind::RowInspection,
                    ticket,
                    result,
                });
            })
            .await;
        });
    }
}
