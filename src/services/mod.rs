/// Service layer - configuration loading and the EmailJS delivery client
pub mod config;
pub mod delivery;

pub use config::EnvConfigProvider;
pub use delivery::{DeliveryService, EmailJsDeliveryService};
