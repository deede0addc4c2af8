use serde::{Deserialize, Serialize};

// Outbound message models

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    pub sound: PushSound,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub priority: PushPriority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PushSound {
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PushPriority {
    High,
    Normal,
}

impl PushMessage {
    pub fn new(to: &str, title: &str, body: &str) -> Self {
        Self {
            to: to.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            sound: PushSound::Default,
            channel_id: "default".to_string(),
            priority: PushPriority::High,
        }
    }
}

// Expo response models

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushApiResponse {
    pub data: Option<Vec<PushTicket>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushTicket {
    pub status: String,
    pub id: Option<String>,
    pub message: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl PushTicket {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

// Outcome models

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DeliveryStatus {
    Ok,
    Error,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    pub http_status: u16,
    pub delivery_status: DeliveryStatus,
    pub raw_response: serde_json::Value,
}

impl NotificationResult {
    pub fn delivered(&self) -> bool {
        self.delivery_status == DeliveryStatus::Ok
    }

    // First entry of the response `data` array, verbatim
    pub fn first_ticket(&self) -> Option<&serde_json::Value> {
        self.raw_response.get("data").and_then(|data| data.get(0))
    }
}
