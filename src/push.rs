use reqwest::Client;

use crate::config::PushTestConfig;
use crate::error::AppError;
use crate::models::{DeliveryStatus, NotificationResult, PushApiResponse, PushMessage};

#[derive(Clone)]
pub struct PushService {
    client: Client,
    config: PushTestConfig,
}

impl PushService {
    pub async fn new(config: &PushTestConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
        })
    }

    pub async fn send_push_notification(
        &self,
        token: &str,
        title: &str,
        body: &str,
    ) -> Result<NotificationResult, AppError> {
        let message = PushMessage::new(token, title, body);

        tracing::info!("Sending push notification to {}", token);

        let response = self
            .client
            .post(&self.config.push_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&message)
            .send()
            .await?;

        let http_status = response.status().as_u16();
        let raw_response: serde_json::Value = serde_json::from_str(&response.text().await?)?;

        // Non-200 responses are reported as-is; the `data` field is not consulted.
        if http_status != 200 {
            tracing::warn!("Expo push API returned HTTP {}", http_status);
            return Ok(NotificationResult {
                http_status,
                delivery_status: DeliveryStatus::Unknown,
                raw_response,
            });
        }

        let parsed: PushApiResponse = serde_json::from_value(raw_response.clone())?;
        let delivery_status = match parsed.data.as_deref() {
            Some([first, ..]) if first.is_ok() => DeliveryStatus::Ok,
            Some([_, ..]) => DeliveryStatus::Error,
            Some([]) | None => DeliveryStatus::Unknown,
        };

        match delivery_status {
            DeliveryStatus::Ok => tracing::info!("Push notification accepted by Expo"),
            _ => tracing::warn!("Push notification rejected by Expo"),
        }

        Ok(NotificationResult {
            http_status,
            delivery_status,
            raw_response,
        })
    }
}
