// src/ui/systems.rs
use bevy::prelude::*;

use super::UiFeedbackState;
use crate::workflows::events::WorkflowFeedback;

/// Folds this frame's feedback events into the notification line. Errors
/// win over successes within one batch so a failure is never hidden by a
/// simultaneous success notice.
pub fn handle_workflow_feedback(
    mut feedback_events: EventReader<WorkflowFeedback>,
    mut ui_feedback: ResMut<UiFeedbackState>,
) {
    let mut chosen: Option<(String, bool)> = None;
    for event in feedback_events.read() {
        if event.is_error {
            warn!("UI Feedback (Error): {}", event.message);
        } else {
            info!("UI Feedback: {}", event.message);
        }
        let replace = match &chosen {
            Some((_, was_error)) => event.is_error || !*was_error,
            None => true,
        };
        if replace {
            chosen = Some((event.message.clone(), event.is_error));
        }
    }
    if let Some((message, is_error)) = chosen {
        ui_feedback.show(message, is_error);
    }
}

/// Ticks the notification timer so notices stay transient.
pub fn expire_ui_feedback(time: Res<Time>, mut ui_feedback: ResMut<UiFeedbackState>) {
    ui_feedback.tick(time.delta());
}
