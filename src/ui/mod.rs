// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod images;
pub mod systems;

use elements::dashboard::{dashboard_ui, DashboardUiState};
use images::{ImageFetched, ImageTextureCache};
use systems::{expire_ui_feedback, handle_workflow_feedback};

/// The transient notification line. Feedback events land here and the
/// message fades after a few seconds.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
    ttl: Option<Timer>,
}

impl UiFeedbackState {
    const VISIBLE_SECONDS: f32 = 4.0;

    pub fn show(&mut self, message: String, is_error: bool) {
        self.last_message = message;
        self.is_error = is_error;
        self.ttl = Some(Timer::from_seconds(Self::VISIBLE_SECONDS, TimerMode::Once));
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        if let Some(timer) = self.ttl.as_mut() {
            if timer.tick(delta).finished() {
                self.last_message.clear();
                self.is_error = false;
                self.ttl = None;
            }
        }
    }
}

/// Plugin for the dashboard window.
pub struct DashboardUiPlugin;

impl Plugin for DashboardUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<DashboardUiState>()
            .init_resource::<ImageTextureCache>()
            .add_event::<ImageFetched>()
            .add_systems(
                Update,
                (
                    handle_workflow_feedback,
                    expire_ui_feedback,
                    images::apply_fetched_images,
                ),
            )
            .add_systems(EguiContextPass, dashboard_ui);

        info!("DashboardUiPlugin initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn feedback_fades_after_its_ttl() {
        let mut feedback = UiFeedbackState::default();
        feedback.show("File uploaded successfully.".to_string(), false);
        assert!(!feedback.last_message.is_empty());

        feedback.tick(Duration::from_secs_f32(1.0));
        assert!(!feedback.last_message.is_empty());

        feedback.tick(Duration::from_secs_f32(4.0));
        assert!(feedback.last_message.is_empty());
        assert!(!feedback.is_error);
    }

    #[test]
    fn a_new_notice_restarts_the_ttl() {
        let mut feedback = UiFeedbackState::default();
        feedback.show("first".to_string(), false);
        feedback.tick(Duration::from_secs_f32(3.9));
        feedback.show("second".to_string(), true);
        feedback.tick(Duration::from_secs_f32(1.0));
        assert_eq!(feedback.last_message, "second");
        assert!(feedback.is_error);
    }
}
