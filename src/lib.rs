// Library root - exports public API

pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{ErrorDetail, RelayError};
pub use handlers::{handler, send_verification_email};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
