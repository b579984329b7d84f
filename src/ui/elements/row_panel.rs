// src/ui/elements/row_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::ui::images::ImageTextureCache;
use crate::workflows::definitions::{WorkflowKind, ACCEPTED_EXTENSIONS};
use crate::workflows::events::{RequestFileDialog, RowChosen, WorkflowFeedback};
use crate::workflows::resources::DashboardState;

use super::file_panel::show_file_capture;
use super::results_view::{show_workflow_results, ResultsPanelState};
use super::row_picker::show_row_picker;

/// Workflow 3: upload a file, pick one parsed row, display the row-scoped
/// result image. The upload feeds the picker only; processing starts at
/// row selection.
#[allow(clippy::too_many_arguments)]
pub fn show_row_panel(
    ui: &mut egui::Ui,
    state: &DashboardState,
    panel: &mut ResultsPanelState,
    textures: &mut ImageTextureCache,
    runtime: &TokioTasksRuntime,
    dialog_writer: &mut EventWriter<RequestFileDialog>,
    row_writer: &mut EventWriter<RowChosen>,
    feedback_writer: &mut EventWriter<WorkflowFeedback>,
) {
    show_file_capture(
        ui,
        WorkflowKind::RowInspection,
        ACCEPTED_EXTENSIONS,
        state.parsing,
        None,
        dialog_writer,
    );

    ui.add_space(8.0);

    let Some(rows) = &state.uploaded_rows else {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Upload a file to select rows").weak());
        });
        return;
    };

    show_row_picker(ui, rows, state.selected_row, |index, _record| {
        row_writer.write(RowChosen { index });
        feedback_writer.write(WorkflowFeedback::info(format!(
            "Row selected: processing row {}",
            index + 1
        )));
    });

    ui.add_space(8.0);
    show_workflow_results(
        ui,
        &state.row,
        "row_results",
        panel,
        Some("Processing Result"),
        None,
        textures,
        runtime,
        feedback_writer,
    );
}
