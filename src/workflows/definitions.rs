// src/workflows/definitions.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File extensions offered by the upload dialogs. Filter only; file content
/// is never validated against the extension.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx"];

/// One row of a tabular dataset: an ordered list of named fields.
///
/// Field order is part of the data (it drives column derivation and the
/// record dump), which is why this is a vector of pairs and not a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Convenience constructor for fixtures and tests.
    pub fn from_pairs(pairs: &[(&str, Value)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

/// A tabular dataset with its column set declared up front.
///
/// Rows are probed by the declared columns at render time: a row missing a
/// column renders a blank cell, a row carrying extra fields renders no
/// column for them. That probing rule is deliberate, not an accident of
/// render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl TableData {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    /// Derives the column set from the first record, in declared field
    /// order. An empty record list yields an empty (but still present)
    /// table.
    pub fn from_records(rows: Vec<Record>) -> Self {
        let columns = rows
            .first()
            .map(|record| record.keys().map(str::to_string).collect())
            .unwrap_or_default();
        Self::new(columns, rows)
    }
}

/// A positional grid. The first row is data like any other; callers wanting
/// a header row include it themselves as `matrix[0]`. Rows may be ragged and
/// render exactly as long as they are.
pub type Matrix = Vec<Vec<Value>>;

/// The union of everything a processing call can return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub images: Vec<String>,
    pub table: Option<TableData>,
    pub matrix: Option<Matrix>,
}

impl ResultPayload {
    pub fn from_images(images: Vec<String>) -> Self {
        Self {
            images,
            ..Default::default()
        }
    }

    /// A payload with no images, no table and no matrix renders nothing at
    /// all. A present-but-empty table still counts as content.
    pub fn has_content(&self) -> bool {
        !self.images.is_empty() || self.table.is_some() || self.matrix.is_some()
    }

    pub fn mode_available(&self, mode: DisplayMode) -> bool {
        match mode {
            DisplayMode::Images => !self.images.is_empty(),
            DisplayMode::Table => self.table.is_some(),
            DisplayMode::Matrix => self.matrix.is_some(),
        }
    }

    /// Available modes, in priority order.
    pub fn available_modes(&self) -> Vec<DisplayMode> {
        MODE_PRIORITY
            .iter()
            .copied()
            .filter(|mode| self.mode_available(*mode))
            .collect()
    }

    /// First available mode per `MODE_PRIORITY`, or None for an empty
    /// payload.
    pub fn default_mode(&self) -> Option<DisplayMode> {
        MODE_PRIORITY
            .iter()
            .copied()
            .find(|mode| self.mode_available(*mode))
    }
}

/// The three result views. Which ones a payload offers depends entirely on
/// its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Images,
    Table,
    Matrix,
}

/// Fixed default-view priority: images win over a table, a table wins over
/// a matrix.
pub const MODE_PRIORITY: [DisplayMode; 3] =
    [DisplayMode::Images, DisplayMode::Table, DisplayMode::Matrix];

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Images => "🖼 Images",
            DisplayMode::Table => "☰ Table",
            DisplayMode::Matrix => "☰ Matrix",
        }
    }
}

/// Lifecycle of one workflow slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPhase {
    #[default]
    Empty,
    Processing,
    Ready,
    Failed,
}

/// The three independent upload → process → display pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    FileAnalysis,
    TextAnalysis,
    RowInspection,
}

impl WorkflowKind {
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowKind::FileAnalysis => "File Processing",
            WorkflowKind::TextAnalysis => "Text Analysis",
            WorkflowKind::RowInspection => "Row Selection",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WorkflowKind::FileAnalysis => {
                "Upload a CSV or XLSX file to analyze and visualize the results."
            }
            WorkflowKind::TextAnalysis => {
                "Enter a text phrase to analyze and see the resulting matrix."
            }
            WorkflowKind::RowInspection => {
                "Upload a CSV or XLSX file, select a row, and view the result."
            }
        }
    }
}

/// Stringification applied to every cell before display. Strings render
/// bare, numbers and bools via their JSON text, null as an empty cell,
/// nested values as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Record {
        Record::from_pairs(&[
            ("id", json!(1)),
            ("category", json!("A")),
            ("value", json!(42)),
            ("score", json!(0.95)),
        ])
    }

    #[test]
    fn empty_payload_has_no_content() {
        let payload = ResultPayload::default();
        assert!(!payload.has_content());
        assert!(payload.available_modes().is_empty());
        assert_eq!(payload.default_mode(), None);
    }

    #[test]
    fn empty_table_still_counts_as_content() {
        let payload = ResultPayload {
            table: Some(TableData::from_records(Vec::new())),
            ..Default::default()
        };
        assert!(payload.has_content());
        assert_eq!(payload.available_modes(), vec![DisplayMode::Table]);
    }

    #[test]
    fn default_mode_follows_priority_order() {
        let full = ResultPayload {
            images: vec!["a.png".into()],
            table: Some(TableData::from_records(vec![sample_record()])),
            matrix: Some(vec![vec![json!(1)]]),
        };
        assert_eq!(full.default_mode(), Some(DisplayMode::Images));

        let no_images = ResultPayload {
            images: Vec::new(),
            ..full.clone()
        };
        assert_eq!(no_images.default_mode(), Some(DisplayMode::Table));

        let matrix_only = ResultPayload {
            matrix: full.matrix.clone(),
            ..Default::default()
        };
        assert_eq!(matrix_only.default_mode(), Some(DisplayMode::Matrix));
    }

    #[test]
    fn columns_derive_from_first_record_in_order() {
        let table = TableData::from_records(vec![sample_record()]);
        assert_eq!(table.columns, vec!["id", "category", "value", "score"]);
    }

    #[test]
    fn first_row_stringifies_per_display_rule() {
        let table = TableData::from_records(vec![sample_record()]);
        let row = &table.rows[0];
        let cells: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).map(display_value).unwrap_or_default())
            .collect();
        assert_eq!(cells, vec!["1", "A", "42", "0.95"]);
    }

    #[test]
    fn rows_missing_declared_columns_render_blank() {
        let table = TableData::new(
            vec!["id".into(), "name".into()],
            vec![Record::from_pairs(&[("id", json!(2)), ("extra", json!(true))])],
        );
        let row = &table.rows[0];
        assert_eq!(row.get("name"), None);
        assert!(table.columns.iter().all(|column| column != "extra"));
    }

    #[test]
    fn matrix_rows_keep_their_own_lengths() {
        let matrix: Matrix = vec![
            vec![json!("Term"), json!("Frequency")],
            vec![json!("data"), json!(12)],
            vec![json!("short")],
        ];
        let payload = ResultPayload {
            matrix: Some(matrix),
            ..Default::default()
        };
        let rows = payload.matrix.as_ref().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[2].len(), 1);
        // No header inference anywhere: the first row is plain data.
        assert_eq!(display_value(&rows[0][0]), "Term");
    }

    #[test]
    fn display_value_rules() {
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!("plain")), "plain");
        assert_eq!(display_value(&json!(0.95)), "0.95");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }
}
