// src/workflows/plugin.rs
use bevy::prelude::*;

use super::events::{
    FileChosen, ParseOutcome, ProcessingOutcome, RequestFileDialog, RowChosen, TextSubmitted,
    WorkflowFeedback,
};
use super::gateway::ProcessingBackend;
use super::resources::DashboardState;
use super::systems;

/// System sets for ordering within one frame: service the dialog first,
/// dispatch new work next, then apply whatever outcomes arrived.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum WorkflowSystemSet {
    UserInput,
    Dispatch,
    ApplyOutcomes,
}

/// Plugin owning the three workflow state machines and the gateway seam.
pub struct WorkflowsPlugin;

impl Plugin for WorkflowsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                WorkflowSystemSet::UserInput,
                WorkflowSystemSet::Dispatch.after(WorkflowSystemSet::UserInput),
                WorkflowSystemSet::ApplyOutcomes.after(WorkflowSystemSet::Dispatch),
            ),
        );

        app.init_resource::<DashboardState>()
            .init_resource::<ProcessingBackend>();

        app.add_event::<RequestFileDialog>()
            .add_event::<FileChosen>()
            .add_event::<TextSubmitted>()
            .add_event::<RowChosen>()
            .add_event::<ProcessingOutcome>()
            .add_event::<ParseOutcome>()
            .add_event::<WorkflowFeedback>();

        app.add_systems(
            Update,
            (systems::io::handle_file_dialog_request,).in_set(WorkflowSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::process::dispatch_file_processing,
                systems::process::dispatch_text_processing,
                systems::process::dispatch_row_processing,
            )
                .chain()
                .in_set(WorkflowSystemSet::Dispatch),
        );
        app.add_systems(
            Update,
            (
                systems::logic::apply_processing_outcomes,
                systems::logic::apply_parse_outcomes,
            )
                .chain()
                .in_set(WorkflowSystemSet::ApplyOutcomes),
        );

        info!("WorkflowsPlugin initialized.");
    }
}
