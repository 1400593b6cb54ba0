pub mod mappers;
pub mod repositories;

pub use repositories::scan_history_repository::PostgresScanHistoryRepository;
