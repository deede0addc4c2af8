use serde::{Deserialize, Serialize};

// Expo Push API endpoint
pub const EXPO_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

// Push token issued to the development test device
pub const DEFAULT_PUSH_TOKEN: &str = "ExponentPushToken[vcq3lMKQ1pJ2ROoTCQJT1R]";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushTestConfig {
    pub push_url: String,
    pub token: String,
    pub title: String,
    pub body: String,
}

impl PushTestConfig {
    pub fn from_env() -> Self {
        Self {
            push_url: std::env::var("EXPO_PUSH_URL")
                .unwrap_or_else(|_| EXPO_PUSH_URL.to_string()),
            token: std::env::var("EXPO_PUSH_TOKEN")
                .unwrap_or_else(|_| DEFAULT_PUSH_TOKEN.to_string()),
            title: std::env::var("PUSH_TEST_TITLE")
                .unwrap_or_else(|_| "🌱 Smart Agriculture Test".to_string()),
            body: std::env::var("PUSH_TEST_BODY")
                .unwrap_or_else(|_| "Push notification from backend working! 🎉".to_string()),
        }
    }
}
