// src/ui/elements/text_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::ui::images::ImageTextureCache;
use crate::workflows::events::{TextSubmitted, WorkflowFeedback};
use crate::workflows::resources::DashboardState;

use super::results_view::{show_workflow_results, ResultsPanelState};

/// Local validation applied before anything is dispatched: empty or
/// whitespace-only text never reaches the backend.
pub(crate) fn validate_text(input: &str) -> Result<&str, &'static str> {
    if input.trim().is_empty() {
        Err("Please enter text to analyze.")
    } else {
        Ok(input)
    }
}

/// Workflow 2: submit a free-text phrase, display the returned matrix.
#[allow(clippy::too_many_arguments)]
pub fn show_text_panel(
    ui: &mut egui::Ui,
    text_input: &mut String,
    state: &DashboardState,
    panel: &mut ResultsPanelState,
    textures: &mut ImageTextureCache,
    runtime: &TokioTasksRuntime,
    text_writer: &mut EventWriter<TextSubmitted>,
    feedback_writer: &mut EventWriter<WorkflowFeedback>,
) {
    let busy = state.text.is_processing();

    ui.add_enabled_ui(!busy, |ui| {
        ui.add(
            egui::TextEdit::multiline(text_input)
                .hint_text("Enter your text here...")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
    });

    let button_label = if busy { "Processing..." } else { "Analyze Text" };
    if ui
        .add_enabled(
            !busy,
            egui::Button::new(button_label).min_size(egui::vec2(ui.available_width(), 0.0)),
        )
        .clicked()
    {
        match validate_text(text_input) {
            Ok(text) => {
                // Same text twice means two submissions; nothing is
                // deduplicated here.
                text_writer.write(TextSubmitted {
                    text: text.to_string(),
                });
            }
            Err(notice) => {
                feedback_writer.write(WorkflowFeedback::error(notice));
            }
        }
    }

    ui.add_space(8.0);
    show_workflow_results(
        ui,
        &state.text,
        "text_results",
        panel,
        Some("Matrix Results"),
        Some("Matrix results will appear here after processing"),
        textures,
        runtime,
        feedback_writer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_text_is_rejected() {
        assert!(validate_text("").is_err());
        assert!(validate_text("   \n\t ").is_err());
    }

    #[test]
    fn valid_text_passes_through_untrimmed() {
        assert_eq!(validate_text("  hello  "), Ok("  hello  "));
    }

    #[test]
    fn validation_is_stateless_across_repeat_submissions() {
        let input = "cluster these terms";
        assert_eq!(validate_text(input), Ok(input));
        assert_eq!(validate_text(input), Ok(input));
    }
}
