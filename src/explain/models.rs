//! Request and response bodies exchanged with callers

use crate::provider::Usage;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Raw body of a text explanation request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextExplanationBody {
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Raw body of an image explanation request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageExplanationBody {
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub additional_context: Option<String>,
}

/// Image payload extracted from a data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pub media_type: String,
    /// Base64 payload without any `data:` prefix
    pub data: String,
}

/// Validated explanation request
#[derive(Debug, Clone)]
pub enum ExplanationRequest {
    Text {
        problem: String,
    },
    Image {
        image: NormalizedImage,
        additional_context: Option<String>,
    },
}

/// Validated request together with the credential it will be sent with
#[derive(Debug)]
pub struct ResolvedRequest {
    pub request: ExplanationRequest,
    pub api_key: Secret<String>,
}

/// The only value returned to the caller on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationResult {
    pub explanation: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}
