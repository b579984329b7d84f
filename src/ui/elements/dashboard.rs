// src/ui/elements/dashboard.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::ui::images::ImageTextureCache;
use crate::ui::UiFeedbackState;
use crate::workflows::definitions::WorkflowKind;
use crate::workflows::events::{RequestFileDialog, RowChosen, TextSubmitted, WorkflowFeedback};
use crate::workflows::resources::DashboardState;

use super::file_panel::show_file_panel;
use super::results_view::ResultsPanelState;
use super::row_panel::show_row_panel;
use super::text_panel::show_text_panel;

const WORKFLOW_TABS: [WorkflowKind; 3] = [
    WorkflowKind::FileAnalysis,
    WorkflowKind::TextAnalysis,
    WorkflowKind::RowInspection,
];

/// View-only state of the dashboard window: which tab is open, the text
/// draft, and each tab's result-view selection.
#[derive(Resource, Debug)]
pub struct DashboardUiState {
    pub active_workflow: WorkflowKind,
    pub text_input: String,
    pub file_results: ResultsPanelState,
    pub text_results: ResultsPanelState,
    pub row_results: ResultsPanelState,
}

impl Default for DashboardUiState {
    fn default() -> Self {
        Self {
            active_workflow: WorkflowKind::FileAnalysis,
            text_input: String::new(),
            file_results: ResultsPanelState::default(),
            text_results: ResultsPanelState::default(),
            row_results: ResultsPanelState::default(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<DashboardUiState>,
    state: Res<DashboardState>,
    ui_feedback: Res<UiFeedbackState>,
    mut textures: ResMut<ImageTextureCache>,
    runtime: Res<TokioTasksRuntime>,
    mut dialog_writer: EventWriter<RequestFileDialog>,
    mut text_writer: EventWriter<TextSubmitted>,
    mut row_writer: EventWriter<RowChosen>,
    mut feedback_writer: EventWriter<WorkflowFeedback>,
) {
    let ctx = contexts.ctx_mut();
    textures.upload_decoded(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Data Processing Dashboard");
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            for workflow in WORKFLOW_TABS {
                let selected = ui_state.active_workflow == workflow;
                if ui.selectable_label(selected, workflow.title()).clicked() {
                    ui_state.active_workflow = workflow;
                }
            }
        });

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        let active = ui_state.active_workflow;
        ui.strong(active.title());
        ui.label(egui::RichText::new(active.description()).weak());
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_salt("dashboard_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| match active {
                WorkflowKind::FileAnalysis => show_file_panel(
                    ui,
                    &state,
                    &mut ui_state.file_results,
                    &mut textures,
                    &runtime,
                    &mut dialog_writer,
                    &mut feedback_writer,
                ),
                WorkflowKind::TextAnalysis => {
                    let DashboardUiState {
                        text_input,
                        text_results,
                        ..
                    } = &mut *ui_state;
                    show_text_panel(
                        ui,
                        text_input,
                        &state,
                        text_results,
                        &mut textures,
                        &runtime,
                        &mut text_writer,
                        &mut feedback_writer,
                    )
                }
                WorkflowKind::RowInspection => show_row_panel(
                    ui,
                    &state,
                    &mut ui_state.row_results,
                    &mut textures,
                    &runtime,
                    &mut dialog_writer,
                    &mut row_writer,
                    &mut feedback_writer,
                ),
            });
    });
}
