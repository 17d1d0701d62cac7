/// EmailJS delivery client
use crate::constants::LOG_TARGET_DELIVERY;
use crate::error::{ErrorDetail, RelayError};
use crate::models::DeliveryPayload;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

#[cfg(test)]
use mockall::automock;

/// Seam for the outbound send, mockable in handler tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeliveryService: Send + Sync {
    /// Issues exactly one send attempt. No retry happens at this layer or
    /// above; the caller owns any retry policy.
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), RelayError>;
}

/// Production client for the EmailJS REST API.
pub struct EmailJsDeliveryService {
    client: Client,
    api_url: String,
}

impl EmailJsDeliveryService {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl DeliveryService for EmailJsDeliveryService {
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(target: LOG_TARGET_DELIVERY, error = %e, "EmailJS call failed in transport");
                RelayError::Internal(ErrorDetail::Message(e.to_string()))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if status.as_u16() == 200 {
            info!(
                target: LOG_TARGET_DELIVERY,
                status = status.as_u16(),
                body = %body,
                "EmailJS accepted the send"
            );
            Ok(())
        } else {
            error!(
                target: LOG_TARGET_DELIVERY,
                status = status.as_u16(),
                body = %body,
                "EmailJS rejected the send"
            );
            Err(RelayError::Internal(ErrorDetail::Response {
                status: status.as_u16(),
                body,
            }))
        }
    }
}
