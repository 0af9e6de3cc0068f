//! Native folder dialog
//!
//! Wraps tauri-plugin-dialog behind the registry's `DirectoryPicker` capability.

use std::path::PathBuf;

use styr_registry::DirectoryPicker;
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::DialogExt;
use tracing::warn;

const DIALOG_TITLE: &str = "Select Directory";

/// Blocking folder picker. Must not run on the main thread.
pub struct DialogPicker<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogPicker<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> DirectoryPicker for DialogPicker<R> {
    fn pick(&mut self) -> Option<PathBuf> {
        let selected = self
            .app
            .dialog()
            .file()
            .set_title(DIALOG_TITLE)
            .blocking_pick_folder()?;

        match selected.into_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Dialog returned a non-filesystem path: {}", e);
                None
            }
        }
    }
}
