// src/workflows/systems/io.rs
use bevy::prelude::*;
use rfd::FileDialog;

use crate::workflows::events::{FileChosen, RequestFileDialog};

/// Shows the native file picker for the requesting workflow. The dialog is
/// modal, so at most one request is serviced per frame; a cancelled dialog
/// produces no event at all.
pub(crate) fn handle_file_dialog_request(
    mut events: EventReader<RequestFileDialog>,
    mut chosen_writer: EventWriter<FileChosen>,
) {
    if let Some(event) = events.read().next() {
        let picked = FileDialog::new()
            .set_title("Select a file to upload")
            .add_filter("Tabular data", event.extensions)
            .pick_file();

        match picked {
            Some(path) => {
                info!(
                    "File chosen for {:?}: '{}'",
                    event.workflow,
                    path.display()
                );
                chosen_writer.write(FileChosen {
                    workflow: event.workflow,
                    path,
                });
            }
            None => info!("File dialog cancelled for {:?}.", event.workflow),
        }
    }
}
