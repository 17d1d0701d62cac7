/// EmailJS delivery payload
use crate::constants::CODE_VALIDITY_WINDOW;
use crate::models::RelayConfig;
use serde::Serialize;

/// Body of the outbound POST to the EmailJS send endpoint.
///
/// The wire shape is owned by EmailJS and must serialize exactly as its API
/// expects, including every key alias in `TemplateParams`.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Variable bindings substituted into the provider-side email template.
///
/// The email address and code are republished under several aliases because
/// the downstream template may have been authored against any of them. This
/// redundancy is a compatibility contract, not a mistake.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateParams {
    pub user_email: String,
    pub to_email: String,
    pub email: String,
    pub code: String,
    pub passcode: String,
    pub verification_code: String,
    pub time: String,
}

impl DeliveryPayload {
    pub fn new(config: &RelayConfig, email: &str, code: &str) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                user_email: email.to_string(),
                to_email: email.to_string(),
                email: email.to_string(),
                code: code.to_string(),
                passcode: code.to_string(),
                verification_code: code.to_string(),
                time: CODE_VALIDITY_WINDOW.to_string(),
            },
        }
    }
}
