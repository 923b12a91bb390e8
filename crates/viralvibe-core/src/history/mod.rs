//! History domain module.

mod model;
mod repository;

pub use model::HistoryRecord;
pub use repository::HistoryRepository;
