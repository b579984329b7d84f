// src/workflows/resources.rs
use bevy::prelude::*;
use clap::Parser;

use super::definitions::{Record, ResultPayload, WorkflowKind, WorkflowPhase};

/// Command-line configuration, parsed once in `main` and inserted as a
/// resource before the plugins build.
#[derive(Parser, Resource, Debug, Clone)]
#[command(name = "datadeck", about = "Data processing dashboard", version)]
pub struct DashboardConfig {
    /// Substitute canned demo payloads when a processing call fails, so the
    /// dashboard always shows a result. Off by default: failures surface as
    /// an error view.
    #[arg(long)]
    pub demo: bool,

    /// Force every mock backend call to fail. Useful together with --demo
    /// to watch the fallback path, or alone to watch the error views.
    #[arg(long)]
    pub fail_backend: bool,

    /// Extra tracing filter directives for the log subscriber.
    #[arg(long, default_value = "wgpu=error,naga=warn,bevy_tokio_tasks=warn")]
    pub log_filter: String,
}

/// One workflow's private state machine. Requests are numbered per slice;
/// only an outcome carrying the newest issued ticket may touch the slice,
/// which gives deterministic last-write-wins when the user re-submits while
/// an earlier request is still in flight.
#[derive(Debug, Clone, Default)]
pub struct WorkflowSlice {
    pub phase: WorkflowPhase,
    pub last_input: Option<String>,
    pub last_result: Option<ResultPayload>,
    pub last_error: Option<String>,
    issued: u64,
}

impl WorkflowSlice {
    /// Moves the slice to Processing and issues the ticket the eventual
    /// outcome must present.
    pub fn begin(&mut self, input: impl Into<String>) -> u64 {
        self.issued += 1;
        self.phase = WorkflowPhase::Processing;
        self.last_input = Some(input.into());
        self.issued
    }

    /// True iff `ticket` is the newest one issued for this slice.
    pub fn accepts(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    pub fn complete(&mut self, payload: ResultPayload) {
        self.phase = WorkflowPhase::Ready;
        self.last_result = Some(payload);
        self.last_error = None;
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.phase = WorkflowPhase::Failed;
        self.last_error = Some(error.into());
    }

    pub fn is_processing(&self) -> bool {
        self.phase == WorkflowPhase::Processing
    }
}

/// All dashboard state, one exclusive slice per workflow plus the row
/// workflow's upload side-channel. Nothing here is shared across slices.
#[derive(Resource, Debug, Default)]
pub struct DashboardState {
    pub file: WorkflowSlice,
    pub text: WorkflowSlice,
    pub row: WorkflowSlice,
    /// Rows delivered by the parse path of the row workflow, independent of
    /// any Processing phase.
    pub uploaded_rows: Option<Vec<Record>>,
    pub selected_row: Option<usize>,
    /// True while a parse call is in flight (the row tab's Busy state).
    pub parsing: bool,
    parse_issued: u64,
}

impl DashboardState {
    pub fn slice_mut(&mut self, workflow: WorkflowKind) -> &mut WorkflowSlice {
        match workflow {
            WorkflowKind::FileAnalysis => &mut self.file,
            WorkflowKind::TextAnalysis => &mut self.text,
            WorkflowKind::RowInspection => &mut self.row,
        }
    }

    pub fn begin_parse(&mut self) -> u64 {
        self.parse_issued += 1;
        self.parsing = true;
        self.parse_issued
    }

    pub fn accepts_parse(&self, ticket: u64) -> bool {
        ticket == self.parse_issued
    }

    pub fn finish_parse(&mut self, rows: Option<Vec<Record>>) {
        self.parsing = false;
        if let Some(rows) = rows {
            self.uploaded_rows = Some(rows);
            self.selected_row = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::fixtures;

    #[test]
    fn slice_walks_empty_processing_ready() {
        let mut slice = WorkflowSlice::default();
        assert_eq!(slice.phase, WorkflowPhase::Empty);

        let ticket = slice.begin("input.csv");
        assert_eq!(slice.phase, WorkflowPhase::Processing);
        assert!(slice.accepts(ticket));

        slice.complete(fixtures::fallback_for(WorkflowKind::FileAnalysis));
        assert_eq!(slice.phase, WorkflowPhase::Ready);
        assert!(slice.last_result.is_some());
        assert!(slice.last_error.is_none());
    }

    #[test]
    fn failure_lands_in_failed_with_error_text() {
        let mut slice = WorkflowSlice::default();
        slice.begin("phrase");
        slice.fail("backend down");
        assert_eq!(slice.phase, WorkflowPhase::Failed);
        assert_eq!(slice.last_error.as_deref(), Some("backend down"));
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut slice = WorkflowSlice::default();
        let first = slice.begin("first");
        let second = slice.begin("second");
        assert!(!slice.accepts(first));
        assert!(slice.accepts(second));
    }

    #[test]
    fn resubmitting_reissues_tickets_monotonically() {
        let mut slice = WorkflowSlice::default();
        let a = slice.begin("same text");
        let b = slice.begin("same text");
        assert!(b > a);
        assert_eq!(slice.last_input.as_deref(), Some("same text"));
    }

    #[test]
    fn parse_tickets_follow_the_same_rule() {
        let mut state = DashboardState::default();
        let first = state.begin_parse();
        let second = state.begin_parse();
        assert!(!state.accepts_parse(first));
        assert!(state.accepts_parse(second));

        state.finish_parse(Some(fixtures::demo_products()));
        assert!(!state.parsing);
        assert_eq!(state.uploaded_rows.as_ref().map(Vec::len), Some(5));
        assert_eq!(state.selected_row, None);
    }
}
