// src/ui/elements/row_picker.rs
use bevy_egui::egui;
use serde_json::Value;

use crate::workflows::definitions::{display_value, Record};

/// Human-readable option label: the first field whose name contains "name"
/// or "title" (case-insensitive), plus the 1-based position; position alone
/// when no such field exists.
pub fn row_label(record: &Record, index: usize) -> String {
    let name_field = record.keys().find(|key| {
        let lowered = key.to_lowercase();
        lowered.contains("name") || lowered.contains("title")
    });
    match name_field.and_then(|field| record.get(field)) {
        Some(value) => format!("{} (Row {})", display_value(value), index + 1),
        None => format!("Row {}", index + 1),
    }
}

/// The selection guard: yields the addressed row only for an in-range
/// index. Anything else selects nothing.
pub fn select_row(rows: &[Record], index: usize) -> Option<&Record> {
    rows.get(index)
}

/// Formatted field dump of the selected record, in declared field order.
pub fn record_dump(record: &Record) -> String {
    let mut out = String::from("{\n");
    let fields = record.fields();
    for (position, (name, value)) in fields.iter().enumerate() {
        let comma = if position + 1 == fields.len() { "" } else { "," };
        out.push_str(&format!(
            "  {}: {}{}\n",
            Value::String(name.clone()),
            value,
            comma
        ));
    }
    out.push('}');
    out
}

/// Renders the picker. `on_select` fires exactly once per click on an
/// option — including a click on the already-selected one; selection is by
/// value, not identity.
pub fn show_row_picker(
    ui: &mut egui::Ui,
    rows: &[Record],
    selected: Option<usize>,
    mut on_select: impl FnMut(usize, &Record),
) {
    if rows.is_empty() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No data available for selection").weak());
            });
        });
        return;
    }

    let selected_text = selected
        .and_then(|index| rows.get(index).map(|record| row_label(record, index)))
        .unwrap_or_else(|| "Select a row to process".to_string());

    egui::ComboBox::from_id_salt("row_picker")
        .width(ui.available_width().min(420.0))
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for (index, record) in rows.iter().enumerate() {
                let is_selected = selected == Some(index);
                if ui
                    .selectable_label(is_selected, row_label(record, index))
                    .clicked()
                {
                    if let Some(row) = select_row(rows, index) {
                        on_select(index, row);
                    }
                }
            }
        });

    if let Some(record) = selected.and_then(|index| rows.get(index)) {
        ui.add_space(4.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("row_dump_scroll")
                .max_height(200.0)
                .show(ui, |ui| {
                    ui.monospace(record_dump(record));
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Record {
        Record::from_pairs(&[("id", json!(1)), ("name", json!("Product A"))])
    }

    #[test]
    fn label_uses_name_field_and_one_based_position() {
        assert_eq!(row_label(&product(), 0), "Product A (Row 1)");
    }

    #[test]
    fn label_matches_title_case_insensitively() {
        let record = Record::from_pairs(&[("DocTitle", json!("Quarterly Report"))]);
        assert_eq!(row_label(&record, 2), "Quarterly Report (Row 3)");
    }

    #[test]
    fn label_falls_back_to_position() {
        let record = Record::from_pairs(&[("id", json!(7)), ("price", json!(9.99))]);
        assert_eq!(row_label(&record, 4), "Row 5");
    }

    #[test]
    fn selection_guard_only_accepts_in_range_indices() {
        let rows = vec![product()];
        assert_eq!(select_row(&rows, 0), Some(&rows[0]));
        assert_eq!(select_row(&rows, 1), None);
        assert_eq!(select_row(&rows, usize::MAX), None);
        assert_eq!(select_row(&[], 0), None);
    }

    #[test]
    fn dump_keeps_declared_field_order() {
        let dump = record_dump(&product());
        assert_eq!(dump, "{\n  \"id\": 1,\n  \"name\": \"Product A\"\n}");
    }
}
