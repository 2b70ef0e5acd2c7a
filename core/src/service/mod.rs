pub mod dto;
pub mod entry_service;
pub mod progress;
pub mod stats_service;
