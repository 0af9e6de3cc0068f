//! Base directory registry
//!
//! A small, deduplicated, order-preserving list of user-selected directories,
//! mirrored to a JSON file so it survives restarts. Host shells (CLI, desktop)
//! construct one [`BaseDirRegistry`] at startup and route every call through it.

pub mod error;
pub mod paths;
pub mod picker;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use paths::{ensure_storage_path, styr_dir, storage_path, CONFIG_DIR_ENV, STORAGE_FILE_NAME};
pub use picker::{pick_directory, DirectoryPicker};
pub use registry::{AddResult, BaseDirRegistry, RemoveResult};
