//! Application layer: prompt composition and the generation/history
//! services.

pub mod generation_service;
pub mod history_service;
pub mod prompt;

pub use generation_service::GenerationService;
pub use history_service::{HistoryService, HISTORY_LIMIT};
