/// Application constants
///
/// Default EmailJS account identifiers live here. They are public-facing
/// configuration values of the provider account, not secrets; each can be
/// overridden through the environment (see `services::config`).
// ============================================================================
// EmailJS Provider Constants
// ============================================================================

/// EmailJS send endpoint
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default EmailJS service identifier
pub const DEFAULT_SERVICE_ID: &str = "service_kgfxsas";

/// Default EmailJS template identifier
pub const DEFAULT_TEMPLATE_ID: &str = "template_9zfpx1c";

/// Default EmailJS public account key
pub const DEFAULT_PUBLIC_KEY: &str = "XP8HqIq2y8uqktNlc";

// ============================================================================
// Template Constants
// ============================================================================

/// Human-readable validity window substituted into the email template
pub const CODE_VALIDITY_WINDOW: &str = "5 minutes";

// ============================================================================
// Messages
// ============================================================================

/// Caller-facing message on a successful relay
pub const SUCCESS_MESSAGE: &str = "Verification email sent successfully";

// ============================================================================
// Logging & Monitoring
// ============================================================================

/// Log target for delivery events
pub const LOG_TARGET_DELIVERY: &str = "delivery";
