mod commands;
mod picker;

use styr_registry::BaseDirRegistry;
use tauri::Manager;
use tracing_subscriber::EnvFilter;

use commands::RegistryState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            commands::get_base_dirs,
            commands::add_base_dir,
            commands::remove_base_dir,
            commands::browse_directory,
            commands::get_registry_info,
        ])
        .setup(|app| {
            let storage_path = styr_registry::ensure_storage_path();
            tracing::info!("Base directory registry at {:?}", storage_path);
            app.manage(RegistryState::new(BaseDirRegistry::initialize(storage_path)));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
