//! Infrastructure layer: path resolution, persistence, secrets, export,
//! and clipboard access.

pub mod clipboard;
pub mod config_service;
pub mod export;
pub mod file_history_repository;
pub mod paths;
pub mod secret_service;

pub use clipboard::SystemClipboard;
pub use export::XlsxHistoryExporter;
pub use file_history_repository::FileHistoryRepository;
pub use paths::ViralVibePaths;
pub use secret_service::FileSecretService;
