use crate::error::AppError;
use crate::models::{DeliveryStatus, NotificationResult};
use crate::push::PushService;

// Outcome of one end-to-end delivery check: either a classified API
// response, or the transport/parse error that prevented one.
#[derive(Debug)]
pub enum DeliveryReport {
    Completed(NotificationResult),
    Failed(AppError),
}

impl DeliveryReport {
    pub fn succeeded(&self) -> bool {
        match self {
            DeliveryReport::Completed(result) => result.delivered(),
            DeliveryReport::Failed(_) => false,
        }
    }

    pub fn render(&self) -> String {
        match self {
            DeliveryReport::Completed(result) => {
                let mut out = String::new();
                out.push_str(&format!("✅ Response Status: {}\n", result.http_status));
                out.push_str("📋 Response Body:\n");
                out.push_str(
                    &serde_json::to_string_pretty(&result.raw_response)
                        .unwrap_or_else(|_| result.raw_response.to_string()),
                );
                out.push('\n');

                match result.delivery_status {
                    DeliveryStatus::Ok => {
                        out.push_str("\n🎉 SUCCESS! Notification sent!\n");
                        out.push_str("📱 Check your Android phone!\n");
                    }
                    DeliveryStatus::Error => {
                        let ticket = result
                            .first_ticket()
                            .cloned()
                            .unwrap_or(serde_json::Value::Null);
                        out.push_str(&format!("\n❌ Error: {}\n", ticket));
                    }
                    DeliveryStatus::Unknown if result.http_status != 200 => {
                        out.push_str(&format!("\n❌ HTTP Error: {}\n", result.http_status));
                    }
                    DeliveryStatus::Unknown => {
                        out.push_str("\n❌ No delivery ticket in response\n");
                    }
                }
                out
            }
            DeliveryReport::Failed(err) => format!("❌ Exception: {}\n", err),
        }
    }
}

pub async fn run_delivery_check(
    service: &PushService,
    token: &str,
    title: &str,
    body: &str,
) -> DeliveryReport {
    match service.send_push_notification(token, title, body).await {
        Ok(result) => DeliveryReport::Completed(result),
        Err(err) => {
            tracing::error!("Push delivery check failed: {}", err);
            DeliveryReport::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completed(http_status: u16, delivery_status: DeliveryStatus, body: serde_json::Value) -> DeliveryReport {
        DeliveryReport::Completed(NotificationResult {
            http_status,
            delivery_status,
            raw_response: body,
        })
    }

    #[test]
    fn ok_delivery_succeeds() {
        let report = completed(
            200,
            DeliveryStatus::Ok,
            json!({"data": [{"status": "ok", "id": "0000-1111"}]}),
        );
        assert!(report.succeeded());
        assert!(report.render().contains("SUCCESS"));
    }

    #[test]
    fn rejected_delivery_surfaces_ticket() {
        let report = completed(
            200,
            DeliveryStatus::Error,
            json!({"data": [{"status": "error", "details": {"error": "DeviceNotRegistered"}}]}),
        );
        assert!(!report.succeeded());
        assert!(report.render().contains("DeviceNotRegistered"));
    }

    #[test]
    fn http_error_reports_status() {
        let report = completed(429, DeliveryStatus::Unknown, json!({"errors": []}));
        assert!(!report.succeeded());
        assert!(report.render().contains("HTTP Error: 429"));
    }

    #[test]
    fn failed_check_renders_exception() {
        let report = DeliveryReport::Failed(AppError::Internal("boom".to_string()));
        assert!(!report.succeeded());
        assert!(report.render().contains("Exception"));
    }
}
