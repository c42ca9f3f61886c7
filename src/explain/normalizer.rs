//! Input normalization: field presence, data-URI parsing and key resolution

use super::models::*;
use crate::error::{ExplainError, Result};
use secrecy::Secret;
use tracing::debug;

/// Media type assumed when an image carries no `data:image/...` prefix
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

const DATA_URI_PREFIX: &str = "data:image/";
const BASE64_MARKER: &str = ";base64,";

/// Validate a text request
pub fn normalize_text(body: &TextExplanationBody) -> Result<ExplanationRequest> {
    let problem = present(body.problem.as_deref())
        .ok_or_else(|| ExplainError::MissingInput("Problem text is required".to_string()))?;

    Ok(ExplanationRequest::Text {
        problem: problem.to_string(),
    })
}

/// Validate an image request and split its data URI
pub fn normalize_image(body: &ImageExplanationBody) -> Result<ExplanationRequest> {
    let raw = present(body.image_base64.as_deref())
        .ok_or_else(|| ExplainError::MissingInput("Image data is required".to_string()))?;

    let image = parse_data_uri(raw);
    let additional_context = present(body.additional_context.as_deref()).map(str::to_string);

    debug!(
        media_type = %image.media_type,
        payload_len = image.data.len(),
        has_context = additional_context.is_some(),
        "Normalized image input"
    );

    Ok(ExplanationRequest::Image {
        image,
        additional_context,
    })
}

/// Split `data:image/<subtype>;base64,<payload>` into media type and payload.
///
/// Input without a recognizable prefix is treated as a bare payload of
/// [`DEFAULT_MEDIA_TYPE`].
pub fn parse_data_uri(input: &str) -> NormalizedImage {
    match split_data_uri(input) {
        Some((subtype, payload)) => NormalizedImage {
            media_type: format!("image/{}", subtype),
            data: payload.to_string(),
        },
        None => NormalizedImage {
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            data: input.to_string(),
        },
    }
}

fn split_data_uri(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix(DATA_URI_PREFIX)?;
    let marker = rest.find(BASE64_MARKER)?;
    let subtype = &rest[..marker];

    // subtype may not span parameters
    if subtype.is_empty() || subtype.contains(';') {
        return None;
    }

    Some((subtype, &rest[marker + BASE64_MARKER.len()..]))
}

/// Pick the per-request key, else the configured default
pub fn resolve_api_key(
    request_key: Option<&str>,
    configured: Option<&Secret<String>>,
) -> Result<Secret<String>> {
    if let Some(key) = present(request_key) {
        return Ok(Secret::new(key.to_string()));
    }

    configured.cloned().ok_or(ExplainError::MissingCredential)
}

/// Empty strings count as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
