// src/ui/elements/file_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::ui::images::ImageTextureCache;
use crate::workflows::definitions::{WorkflowKind, ACCEPTED_EXTENSIONS};
use crate::workflows::events::{RequestFileDialog, WorkflowFeedback};
use crate::workflows::resources::DashboardState;

use super::results_view::{show_workflow_results, ResultsPanelState};

/// The file-capture control shared by the file and row workflows: a
/// drop-zone styled frame plus the trigger button. Only the click path
/// opens the picker; the zone styling is the visual affordance.
pub(super) fn show_file_capture(
    ui: &mut egui::Ui,
    workflow: WorkflowKind,
    extensions: &'static [&'static str],
    busy: bool,
    chosen: Option<&str>,
    dialog_writer: &mut EventWriter<RequestFileDialog>,
) {
    let formats = extensions
        .iter()
        .map(|ext| ext.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    let zone = ui
        .push_id((workflow.title(), "upload_zone"), |ui| {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(18))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("⬆").size(26.0).weak());
                        ui.strong("Click to upload or drag and drop");
                        ui.label(
                            egui::RichText::new(format!("Supported formats: {formats}")).weak(),
                        );
                        if let Some(name) = chosen {
                            ui.add_space(4.0);
                            ui.label(egui::RichText::new(format!("📄 {name}")).monospace());
                        }
                    });
                })
                .response
        })
        .inner;

    let zone_clicked = zone.interact(egui::Sense::click()).clicked();

    let button_label = if busy { "Processing..." } else { "Upload File" };
    let button_clicked = ui
        .add_enabled(
            !busy,
            egui::Button::new(button_label).min_size(egui::vec2(ui.available_width(), 0.0)),
        )
        .clicked();

    if (zone_clicked || button_clicked) && !busy {
        dialog_writer.write(RequestFileDialog {
            workflow,
            extensions,
        });
    }
}

/// Workflow 1: upload a tabular file, display the returned images + table.
#[allow(clippy::too_many_arguments)]
pub fn show_file_panel(
    ui: &mut egui::Ui,
    state: &DashboardState,
    panel: &mut ResultsPanelState,
    textures: &mut ImageTextureCache,
    runtime: &TokioTasksRuntime,
    dialog_writer: &mut EventWriter<RequestFileDialog>,
    feedback_writer: &mut EventWriter<WorkflowFeedback>,
) {
    show_file_capture(
        ui,
        WorkflowKind::FileAnalysis,
        ACCEPTED_EXTENSIONS,
        state.file.is_processing(),
        state.file.last_input.as_deref(),
        dialog_writer,
    );

    ui.add_space(8.0);
    show_workflow_results(
        ui,
        &state.file,
        "file_results",
        panel,
        Some("Processing Results"),
        Some("Results will appear here after processing"),
        textures,
        runtime,
        feedback_writer,
    );
}
