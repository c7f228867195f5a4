pub mod config;
pub mod error;

// Session and access types
pub mod models;

// Mock analytics shown on the dashboard page
pub mod dashboard;

pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use models::*;
