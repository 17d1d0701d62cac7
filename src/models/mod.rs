/// Data models for the verification-email relay
pub mod config;
pub mod messages;
pub mod payload;

// Re-export commonly used types
pub use config::*;
pub use messages::*;
pub use payload::*;
