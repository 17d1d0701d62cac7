/// Lambda event handler for the verification-email relay
use crate::constants::SUCCESS_MESSAGE;
use crate::error::RelayError;
use crate::models::{
    DeliveryPayload, RelayConfig, SendVerificationRequest, SendVerificationResponse,
};
use crate::services::{DeliveryService, EmailJsDeliveryService, EnvConfigProvider};
use crate::utils::logging::redact_email;
use lambda_runtime::{Error, LambdaEvent as RuntimeEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Relay handler context
pub struct RelayContext {
    config: RelayConfig,
    delivery: Arc<dyn DeliveryService>,
}

impl RelayContext {
    pub fn new() -> Result<Self, RelayError> {
        let config = EnvConfigProvider::load()?;
        let delivery = Arc::new(EmailJsDeliveryService::new(&config.api_url));
        Ok(Self { config, delivery })
    }
}

/// Main Lambda handler - parses the call payload and runs the relay
pub async fn handler(event: RuntimeEvent<Value>) -> Result<Value, Error> {
    info!("Received verification-email request");

    // Any non-conforming payload degrades to empty fields and is rejected
    // by validation rather than surfacing as a parse error.
    let request: SendVerificationRequest =
        serde_json::from_value(event.payload).unwrap_or_default();

    let ctx = RelayContext::new().map_err(|e| Error::from(e.to_body().to_string()))?;

    match send_verification_email(&request, &ctx.config, ctx.delivery.as_ref()).await {
        Ok(response) => Ok(serde_json::to_value(response)?),
        Err(e) => {
            error!(kind = e.kind(), body = %e.to_body(), "Relay failed");
            // The caller gets the full structured body so it can branch on
            // kind and read the provider status/body or transport message.
            Err(Error::from(e.to_body().to_string()))
        }
    }
}

/// Validates the request, builds the delivery payload, and issues the one
/// outbound send.
///
/// Every failure is terminal for the invocation; retry policy belongs to
/// the mobile client.
pub async fn send_verification_email(
    request: &SendVerificationRequest,
    config: &RelayConfig,
    delivery: &dyn DeliveryService,
) -> Result<SendVerificationResponse, RelayError> {
    if !request.is_complete() {
        return Err(RelayError::InvalidArgument);
    }

    info!(
        "Relaying verification email for {}",
        redact_email(&request.email)
    );

    let payload = DeliveryPayload::new(config, &request.email, &request.code);
    delivery.send(&payload).await?;

    Ok(SendVerificationResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
    })
}
