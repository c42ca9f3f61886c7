//! Wire models for the chat-completion protocol

use serde::{Deserialize, Serialize};

/// Request sent to the chat-completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// A single conversational turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Message content: plain text or an ordered list of typed parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// Typed content part; order is significant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Successful reply from the chat-completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Model that actually served the request, as echoed by the provider
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage, passed through to the caller as reported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,

    /// Provider-specific fields (cost, reasoning tokens, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user(content: MessageContent) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Image part carrying a base64 payload as a data URI
    pub fn image(media_type: &str, data: &str) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: format!("data:{};base64,{}", media_type, data),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_request_wire_shape() {
        let request = ProviderChatRequest {
            model: "z-ai/glm-4.5v".to_string(),
            messages: vec![
                ChatMessage::system("be precise"),
                ChatMessage::user(MessageContent::Parts(vec![
                    ContentPart::text("solve this"),
                    ContentPart::image("image/png", "iVBORw0KGgo="),
                ])),
            ],
            temperature: 0.3,
            max_tokens: 4000,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "z-ai/glm-4.5v",
                "messages": [
                    {"role": "system", "content": "be precise"},
                    {"role": "user", "content": [
                        {"type": "text", "text": "solve this"},
                        {"type": "image_url", "image_url": {"url": "data:image/png;base64,iVBORw0KGgo="}}
                    ]}
                ],
                "temperature": 0.3,
                "max_tokens": 4000
            })
        );
    }

    #[test]
    fn test_usage_keeps_extra_fields() {
        let usage: Usage = serde_json::from_value(json!({
            "prompt_tokens": 10,
            "completion_tokens": 32,
            "total_tokens": 42,
            "cost": 0.0012
        }))
        .unwrap();

        assert_eq!(usage.total_tokens, Some(42));
        assert_eq!(
            serde_json::to_value(&usage).unwrap(),
            json!({"prompt_tokens": 10, "completion_tokens": 32, "total_tokens": 42, "cost": 0.0012})
        );
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: ProviderChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
        assert!(response.model.is_none());
        assert!(response.usage.is_none());
    }
}
