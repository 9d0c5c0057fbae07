pub mod config;
pub mod copilot;
pub mod fixtures;
pub mod store;
pub mod types;
