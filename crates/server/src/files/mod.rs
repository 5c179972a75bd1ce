//! File Operations Service
//!
//! Upload, list, download, open and delete over the single storage
//! directory.

pub mod handlers;
pub mod locks;
pub mod name;
pub mod store;

pub use handlers::{delete_file, download_file, list_files, open_file, upload_file};
pub use locks::KeyedLocks;
pub use name::validate_filename;
pub use store::FileStore;
