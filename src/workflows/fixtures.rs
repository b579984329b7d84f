// src/workflows/fixtures.rs
//
// Static demo data. The mock backend answers with it, and in demo mode it
// doubles as the fallback substituted when a processing call fails.

use serde_json::json;

use super::definitions::{Matrix, Record, ResultPayload, TableData, WorkflowKind};

pub fn demo_images() -> Vec<String> {
    vec![
        "https://source.unsplash.com/random/800x600/?chart".to_string(),
        "https://source.unsplash.com/random/800x600/?graph".to_string(),
    ]
}

pub fn demo_row_image() -> String {
    "https://source.unsplash.com/random/800x600/?visualization".to_string()
}

/// Clustered-measurement rows shown by the file workflow.
pub fn demo_measurements() -> Vec<Record> {
    vec![
        Record::from_pairs(&[
            ("id", json!(1)),
            ("category", json!("A")),
            ("value", json!(42)),
            ("score", json!(0.95)),
        ]),
        Record::from_pairs(&[
            ("id", json!(2)),
            ("category", json!("B")),
            ("value", json!(27)),
            ("score", json!(0.87)),
        ]),
        Record::from_pairs(&[
            ("id", json!(3)),
            ("category", json!("C")),
            ("value", json!(53)),
            ("score", json!(0.92)),
        ]),
        Record::from_pairs(&[
            ("id", json!(4)),
            ("category", json!("A")),
            ("value", json!(18)),
            ("score", json!(0.72)),
        ]),
        Record::from_pairs(&[
            ("id", json!(5)),
            ("category", json!("B")),
            ("value", json!(35)),
            ("score", json!(0.84)),
        ]),
    ]
}

/// Term-frequency grid shown by the text workflow. The first row is a
/// caller-supplied header row; the renderer treats it as plain data.
pub fn demo_matrix() -> Matrix {
    vec![
        vec![
            json!("Term"),
            json!("Frequency"),
            json!("Weight"),
            json!("Significance"),
        ],
        vec![json!("data"), json!(12), json!(0.87), json!("High")],
        vec![json!("analysis"), json!(8), json!(0.76), json!("Medium")],
        vec![json!("processing"), json!(15), json!(0.92), json!("High")],
        vec![json!("algorithm"), json!(5), json!(0.65), json!("Low")],
        vec![json!("clustering"), json!(10), json!(0.81), json!("Medium")],
    ]
}

/// Product rows returned by the mock file parser for the row workflow.
pub fn demo_products() -> Vec<Record> {
    vec![
        Record::from_pairs(&[
            ("id", json!(1)),
            ("name", json!("Product A")),
            ("category", json!("Electronics")),
            ("price", json!(299.99)),
        ]),
        Record::from_pairs(&[
            ("id", json!(2)),
            ("name", json!("Product B")),
            ("category", json!("Furniture")),
            ("price", json!(599.99)),
        ]),
        Record::from_pairs(&[
            ("id", json!(3)),
            ("name", json!("Product C")),
            ("category", json!("Clothing")),
            ("price", json!(49.99)),
        ]),
        Record::from_pairs(&[
            ("id", json!(4)),
            ("name", json!("Product D")),
            ("category", json!("Food")),
            ("price", json!(9.99)),
        ]),
        Record::from_pairs(&[
            ("id", json!(5)),
            ("name", json!("Product E")),
            ("category", json!("Electronics")),
            ("price", json!(399.99)),
        ]),
    ]
}

/// The canned payload substituted for a failed call when demo mode is on.
pub fn fallback_for(workflow: WorkflowKind) -> ResultPayload {
    match workflow {
        WorkflowKind::FileAnalysis => ResultPayload {
            images: demo_images(),
            table: Some(TableData::from_records(demo_measurements())),
            matrix: None,
        },
        WorkflowKind::TextAnalysis => ResultPayload {
            images: Vec::new(),
            table: None,
            matrix: Some(demo_matrix()),
        },
        WorkflowKind::RowInspection => ResultPayload::from_images(vec![demo_row_image()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::definitions::DisplayMode;

    #[test]
    fn every_fallback_has_content() {
        for workflow in [
            WorkflowKind::FileAnalysis,
            WorkflowKind::TextAnalysis,
            WorkflowKind::RowInspection,
        ] {
            assert!(fallback_for(workflow).has_content(), "{workflow:?}");
        }
    }

    #[test]
    fn file_fallback_defaults_to_images_mode() {
        assert_eq!(
            fallback_for(WorkflowKind::FileAnalysis).default_mode(),
            Some(DisplayMode::Images)
        );
    }

    #[test]
    fn demo_matrix_first_row_is_data_not_schema() {
        let matrix = demo_matrix();
        assert_eq!(matrix[0].len(), matrix[1].len());
        assert_eq!(matrix[0][0], serde_json::json!("Term"));
    }
}
