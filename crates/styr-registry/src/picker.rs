//! Directory Picker
//!
//! Capability interface for the host's "choose a folder" facility. The
//! registry never sees a picker; hosts hold one and pass the chosen path to
//! [`BaseDirRegistry::add`](crate::BaseDirRegistry::add) themselves.

use std::path::PathBuf;

/// Something that can ask the user for a directory.
pub trait DirectoryPicker {
    /// `None` when the user cancelled.
    fn pick(&mut self) -> Option<PathBuf>;
}

impl<F> DirectoryPicker for F
where
    F: FnMut() -> Option<PathBuf>,
{
    fn pick(&mut self) -> Option<PathBuf> {
        self()
    }
}

/// Run the picker and flatten the answer for the host boundary.
///
/// Returns the chosen path, or an empty string if nothing was selected.
pub fn pick_directory(picker: &mut dyn DirectoryPicker) -> String {
    match picker.pick() {
        Some(path) => path.to_string_lossy().into_owned(),
        None => String::new(),
    }
}
