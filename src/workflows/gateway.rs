// src/workflows/gateway.rs
//
// Boundary to the external processing backend. The real parsing and
// analysis engines live behind these traits; this repository ships a mock
// that answers with canned data after a simulated delay.

use async_trait::async_trait;
use bevy::prelude::*;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use super::definitions::{Record, ResultPayload, TableData};
use super::fixtures;
use super::resources::DashboardConfig;

/// Failure surfaced by a gateway or parser call. Carries no structure
/// beyond the message; the backend contract does not promise one.
#[derive(Error, Debug, Clone)]
pub enum ProcessingError {
    #[error("processing backend error: {0}")]
    Backend(String),
    #[error("failed to parse uploaded file: {0}")]
    Parse(String),
}

/// Result of processing an uploaded tabular file.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub images: Vec<String>,
    pub table: TableData,
}

impl From<FileAnalysis> for ResultPayload {
    fn from(analysis: FileAnalysis) -> Self {
        ResultPayload {
            images: analysis.images,
            table: Some(analysis.table),
            matrix: None,
        }
    }
}

/// Result of processing a free-text submission.
#[derive(Debug, Clone)]
pub struct TextAnalysis {
    pub matrix: Vec<Vec<serde_json::Value>>,
}

impl From<TextAnalysis> for ResultPayload {
    fn from(analysis: TextAnalysis) -> Self {
        ResultPayload {
            images: Vec::new(),
            table: None,
            matrix: Some(analysis.matrix),
        }
    }
}

/// Result of processing one selected row.
#[derive(Debug, Clone)]
pub struct RowAnalysis {
    pub image: String,
}

impl From<RowAnalysis> for ResultPayload {
    fn from(analysis: RowAnalysis) -> Self {
        ResultPayload::from_images(vec![analysis.image])
    }
}

#[async_trait]
pub trait ProcessingGateway: Send + Sync {
    async fn process_tabular_file(&self, path: &Path) -> Result<FileAnalysis, ProcessingError>;
    async fn process_free_text(&self, text: &str) -> Result<TextAnalysis, ProcessingError>;
    async fn process_selected_row(&self, row: &Record) -> Result<RowAnalysis, ProcessingError>;
}

#[async_trait]
pub trait FileParser: Send + Sync {
    async fn parse(&self, path: &Path) -> Result<Vec<Record>, ProcessingError>;
}

/// The gateway and parser handles used by the dispatch systems. Swapping in
/// a real backend means replacing these two Arcs and nothing else.
#[derive(Resource, Clone)]
pub struct ProcessingBackend {
    pub gateway: Arc<dyn ProcessingGateway>,
    pub parser: Arc<dyn FileParser>,
}

impl FromWorld for ProcessingBackend {
    fn from_world(world: &mut World) -> Self {
        let config = world.resource::<DashboardConfig>();
        let mock = Arc::new(MockBackend::new(config.fail_backend));
        Self {
            gateway: mock.clone(),
            parser: mock,
        }
    }
}

/// In-repo stand-in for the processing service. Answers with the demo
/// fixtures after a short sleep; with `fail` set, every call rejects so the
/// failure policy can be exercised end to end.
pub struct MockBackend {
    fail: bool,
    latency: Duration,
}

impl MockBackend {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            latency: Duration::from_millis(1000),
        }
    }

    async fn simulate_call(&self, operation: &str) -> Result<(), ProcessingError> {
        tokio::time::sleep(self.latency).await;
        if self.fail {
            return Err(ProcessingError::Backend(format!(
                "{operation} rejected (mock backend failure mode)"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProcessingGateway for MockBackend {
    async fn process_tabular_file(&self, path: &Path) -> Result<FileAnalysis, ProcessingError> {
        info!("Mock backend: processing file '{}'", path.display());
        self.simulate_call("file processing").await?;
        Ok(FileAnalysis {
            images: fixtures::demo_images(),
            table: TableData::from_records(fixtures::demo_measurements()),
        })
    }

    async fn process_free_text(&self, text: &str) -> Result<TextAnalysis, ProcessingError> {
        let preview: String = text.chars().take(30).collect();
        info!("Mock backend: processing text '{preview}…'");
        self.simulate_call("text processing").await?;
        Ok(TextAnalysis {
            matrix: fixtures::demo_matrix(),
        })
    }

    async fn process_selected_row(&self, row: &Record) -> Result<RowAnalysis, ProcessingError> {
        info!(
            "Mock backend: processing selected row with {} field(s)",
            row.fields().len()
        );
        self.simulate_call("row processing").await?;
        Ok(RowAnalysis {
            image: fixtures::demo_row_image(),
        })
    }
}

#[async_trait]
impl FileParser for MockBackend {
    async fn parse(&self, path: &Path) -> Result<Vec<Record>, ProcessingError> {
        info!("Mock backend: reading file '{}'", path.display());
        tokio::time::sleep(Duration::from_millis(500)).await;
        if self.fail {
            return Err(ProcessingError::Parse(
                "file reading rejected (mock backend failure mode)".to_string(),
            ));
        }
        Ok(fixtures::demo_products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn mock_file_processing_yields_images_and_table() {
        let backend = MockBackend {
            fail: false,
            latency: Duration::from_millis(1),
        };
        let analysis = backend
            .process_tabular_file(&PathBuf::from("input.csv"))
            .await
            .unwrap();
        assert!(!analysis.images.is_empty());
        assert_eq!(
            analysis.table.columns,
            vec!["id", "category", "value", "score"]
        );
    }

    #[tokio::test]
    async fn failure_mode_rejects_every_operation() {
        let backend = MockBackend {
            fail: true,
            latency: Duration::from_millis(1),
        };
        assert!(backend.process_free_text("hello").await.is_err());
        assert!(backend.parse(&PathBuf::from("input.csv")).await.is_err());
    }
}
