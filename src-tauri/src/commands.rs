//! Base directory commands
//!
//! IPC surface for the frontend. Every call goes through the single
//! [`RegistryState`] mutex, which serializes access to the registry.

use std::sync::{Mutex, MutexGuard, PoisonError};

use styr_registry::{pick_directory, AddResult, BaseDirRegistry, RemoveResult};
use tauri::{AppHandle, State};

use crate::picker::DialogPicker;

/// Managed state holding the process-wide registry
pub struct RegistryState(Mutex<BaseDirRegistry>);

impl RegistryState {
    pub fn new(registry: BaseDirRegistry) -> Self {
        Self(Mutex::new(registry))
    }

    /// A panic mid-call leaves the registry itself consistent, so a poisoned
    /// lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, BaseDirRegistry> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[tauri::command]
pub fn get_base_dirs(state: State<'_, RegistryState>) -> Vec<String> {
    state.lock().list().to_vec()
}

#[tauri::command]
pub fn add_base_dir(dir: String, state: State<'_, RegistryState>) -> AddResult {
    state.lock().add(&dir)
}

#[tauri::command]
pub fn remove_base_dir(dir: String, state: State<'_, RegistryState>) -> RemoveResult {
    state.lock().remove(&dir)
}

/// Open the native folder dialog. Empty string when cancelled.
#[tauri::command]
pub async fn browse_directory(app: AppHandle) -> Result<String, String> {
    tauri::async_runtime::spawn_blocking(move || {
        let mut picker = DialogPicker::new(app);
        pick_directory(&mut picker)
    })
    .await
    .map_err(|e| format!("Directory dialog failed: {}", e))
}

/// Where the registry lives and how many entries it holds
#[tauri::command]
pub fn get_registry_info(state: State<'_, RegistryState>) -> serde_json::Value {
    let registry = state.lock();
    serde_json::json!({
        "storage_path": registry.storage_path().display().to_string(),
        "count": registry.len(),
    })
}
