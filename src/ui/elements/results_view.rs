// src/ui/elements/results_view.rs
//
// The result renderer: given whatever shape a processing call returned,
// offer the views that shape supports and draw the selected one.

use bevy::prelude::*;
use bevy_egui::egui;
use bevy_tokio_tasks::TokioTasksRuntime;
use egui_extras::{Column, TableBuilder};

use crate::ui::images::{ImageSlot, ImageTextureCache};
use crate::workflows::definitions::{
    display_value, DisplayMode, Matrix, ResultPayload, TableData, WorkflowPhase,
};
use crate::workflows::events::WorkflowFeedback;
use crate::workflows::resources::WorkflowSlice;

/// Per-panel view selection, persisted across frames. Each workflow tab
/// owns one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultsPanelState {
    pub active_mode: Option<DisplayMode>,
}

/// Renders a workflow slice's result area: a placeholder while empty, a
/// busy indicator while processing, the error view after an unmasked
/// failure, and the result renderer once ready. A `None` placeholder
/// renders nothing in the Empty phase.
#[allow(clippy::too_many_arguments)]
pub fn show_workflow_results(
    ui: &mut egui::Ui,
    slice: &WorkflowSlice,
    id_salt: &str,
    panel: &mut ResultsPanelState,
    title: Option<&str>,
    placeholder: Option<&str>,
    textures: &mut ImageTextureCache,
    runtime: &TokioTasksRuntime,
    feedback_writer: &mut EventWriter<WorkflowFeedback>,
) {
    match slice.phase {
        WorkflowPhase::Empty => {
            if let Some(placeholder) = placeholder {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(placeholder).weak());
                });
            }
        }
        WorkflowPhase::Processing => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Processing…").weak());
            });
        }
        WorkflowPhase::Failed => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, "Processing failed");
                if let Some(error) = &slice.last_error {
                    ui.label(error);
                }
                ui.label(egui::RichText::new("Submit again to retry.").weak());
            });
        }
        WorkflowPhase::Ready => {
            if let Some(payload) = &slice.last_result {
                show_results_panel(
                    ui,
                    id_salt,
                    panel,
                    payload,
                    title,
                    textures,
                    runtime,
                    feedback_writer,
                );
            }
        }
    }
}

/// Renders a result payload, or nothing at all (not even a container) when
/// the payload has no content.
#[allow(clippy::too_many_arguments)]
pub fn show_results_panel(
    ui: &mut egui::Ui,
    id_salt: &str,
    panel: &mut ResultsPanelState,
    payload: &ResultPayload,
    title: Option<&str>,
    textures: &mut ImageTextureCache,
    runtime: &TokioTasksRuntime,
    feedback_writer: &mut EventWriter<WorkflowFeedback>,
) {
    if !payload.has_content() {
        return;
    }

    // Clamp the stored selection to what this payload actually offers;
    // fall back to the fixed priority order.
    let Some(active) = panel
        .active_mode
        .filter(|mode| payload.mode_available(*mode))
        .or_else(|| payload.default_mode())
    else {
        return;
    };
    panel.active_mode = Some(active);

    ui.push_id(id_salt, |ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            if let Some(title) = title {
                ui.horizontal(|ui| {
                    ui.strong(title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("⬇ Download").clicked() {
                            // Extension point: no export target is wired up.
                            info!("Download requested for '{title}'; no export configured.");
                            feedback_writer
                                .write(WorkflowFeedback::info("Download is not available yet."));
                        }
                    });
                });
                ui.separator();
            }

            ui.horizontal(|ui| {
                for mode in payload.available_modes() {
                    if ui.selectable_label(mode == active, mode.label()).clicked() {
                        panel.active_mode = Some(mode);
                    }
                }
            });
            ui.separator();

            match active {
                DisplayMode::Images => show_images(ui, &payload.images, textures, runtime),
                DisplayMode::Table => {
                    if let Some(table) = &payload.table {
                        show_table(ui, table);
                    }
                }
                DisplayMode::Matrix => {
                    if let Some(matrix) = &payload.matrix {
                        show_matrix(ui, matrix);
                    }
                }
            }
        });
    });
}

fn show_images(
    ui: &mut egui::Ui,
    images: &[String],
    textures: &mut ImageTextureCache,
    runtime: &TokioTasksRuntime,
) {
    for url in images {
        textures.ensure(url, runtime);
    }

    let column_width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
    for pair in images.chunks(2) {
        ui.columns(2, |columns| {
            for (column_ui, url) in columns.iter_mut().zip(pair) {
                render_image_cell(column_ui, url, textures, column_width);
            }
        });
    }
}

fn render_image_cell(ui: &mut egui::Ui, url: &str, textures: &ImageTextureCache, width: f32) {
    match textures.slot(url) {
        Some(ImageSlot::Ready(texture)) => {
            let size = texture.size_vec2();
            let scale = if size.x > 0.0 { (width / size.x).min(1.0) } else { 1.0 };
            ui.image(egui::load::SizedTexture::new(texture.id(), size * scale));
        }
        Some(ImageSlot::Failed(error)) => {
            ui.label(egui::RichText::new(url).weak())
                .on_hover_text(error);
        }
        _ => {
            ui.spinner();
        }
    }
}

fn show_table(ui: &mut egui::Ui, table: &TableData) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y;

    egui::ScrollArea::both()
        .id_salt("results_table_scroll")
        .auto_shrink([false, true])
        .max_height(420.0)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0);

            if table.columns.is_empty() {
                // An empty dataset still activates table mode: a table with
                // no header and no body.
                builder = builder.column(Column::remainder().resizable(false));
                builder.body(|_body| {});
                return;
            }

            for _ in &table.columns {
                builder = builder.column(Column::initial(120.0).at_least(40.0).clip(true));
            }

            builder
                .header(20.0, |mut header_row| {
                    for column in &table.columns {
                        header_row.col(|ui| {
                            ui.strong(column);
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, table.rows.len(), |mut row| {
                        let record = &table.rows[row.index()];
                        for column in &table.columns {
                            row.col(|ui| {
                                // Probe by declared column: blank when the
                                // row lacks the field.
                                let text = record
                                    .get(column)
                                    .map(display_value)
                                    .unwrap_or_default();
                                ui.label(text);
                            });
                        }
                    });
                });
        });
}

fn show_matrix(ui: &mut egui::Ui, matrix: &Matrix) {
    egui::ScrollArea::both()
        .id_salt("results_matrix_scroll")
        .auto_shrink([false, true])
        .max_height(420.0)
        .show(ui, |ui| {
            egui::Grid::new("results_matrix_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    // Positional rendering, no header, ragged rows stay
                    // exactly as long as they are.
                    for row in matrix {
                        for cell in row {
                            ui.label(display_value(cell));
                        }
                        ui.end_row();
                    }
                });
        });
}
