//! Translation of provider replies into the caller-facing contract

use super::models::ExplanationResult;
use crate::error::{ExplainError, Result, PROVIDER_FALLBACK_MESSAGE};
use crate::provider::ProviderChatResponse;

/// Map a successful provider reply to an [`ExplanationResult`].
///
/// The provider's echoed model wins; `configured_model` fills in when the
/// provider omits it.
pub fn translate_success(response: ProviderChatResponse, configured_model: &str) -> Result<ExplanationResult> {
    let explanation = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ExplainError::MalformedProviderResponse("No choices in response".to_string()))?
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| ExplainError::MalformedProviderResponse("No message content in first choice".to_string()))?;

    let model = response
        .model
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| configured_model.to_string());

    Ok(ExplanationResult {
        explanation,
        model,
        usage: response.usage,
    })
}

/// Map a non-2xx provider reply to a provider error.
///
/// The message comes from `error.message` in the body when present; the raw
/// body is attached as diagnostic data when it is JSON.
pub fn translate_failure(status: Option<u16>, body: &str) -> ExplainError {
    let data = serde_json::from_str::<serde_json::Value>(body).ok();

    let message = data
        .as_ref()
        .and_then(|value| value.pointer("/error/message"))
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
        .unwrap_or(PROVIDER_FALLBACK_MESSAGE)
        .to_string();

    ExplainError::Provider { status, message, data }
}

/// Failure with no provider reply at all (connection, TLS, body read)
pub fn transport_failure() -> ExplainError {
    ExplainError::Provider {
        status: None,
        message: PROVIDER_FALLBACK_MESSAGE.to_string(),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ProviderChatResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_passthrough() {
        let result = translate_success(
            response(json!({
                "choices": [{"message": {"content": "Step 1: ..."}}],
                "model": "m",
                "usage": {"total_tokens": 42}
            })),
            "configured",
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"explanation": "Step 1: ...", "model": "m", "usage": {"total_tokens": 42}})
        );
    }

    #[test]
    fn test_configured_model_fills_missing_echo() {
        let result = translate_success(
            response(json!({"choices": [{"message": {"content": "x = 2"}}]})),
            "z-ai/glm-4.5v",
        )
        .unwrap();

        assert_eq!(result.model, "z-ai/glm-4.5v");
        assert!(result.usage.is_none());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"explanation": "x = 2", "model": "z-ai/glm-4.5v"})
        );
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let err = translate_success(response(json!({"choices": [], "model": "m"})), "m").unwrap_err();
        assert!(matches!(err, ExplainError::MalformedProviderResponse(_)));
        assert_eq!(err.status_code().as_u16(), 500);
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let err = translate_success(response(json!({"choices": [{"message": {}}]})), "m").unwrap_err();
        assert!(matches!(err, ExplainError::MalformedProviderResponse(_)));

        let err = translate_success(response(json!({"choices": [{}]})), "m").unwrap_err();
        assert!(matches!(err, ExplainError::MalformedProviderResponse(_)));
    }

    #[test]
    fn test_failure_message_from_body() {
        let err = translate_failure(Some(429), r#"{"error":{"message":"rate limited"}}"#);
        let report = err.report();

        assert_eq!(report.status_code, 429);
        assert_eq!(report.status_message, "rate limited");
        assert_eq!(report.data, Some(json!({"error": {"message": "rate limited"}})));
    }

    #[test]
    fn test_failure_fallback_message() {
        let err = translate_failure(Some(502), "Bad Gateway");
        let report = err.report();

        assert_eq!(report.status_code, 502);
        assert_eq!(report.status_message, PROVIDER_FALLBACK_MESSAGE);
        assert!(report.data.is_none());

        let err = translate_failure(Some(400), r#"{"error":{"code":400}}"#);
        assert_eq!(err.report().status_message, PROVIDER_FALLBACK_MESSAGE);
        assert_eq!(err.report().data, Some(json!({"error": {"code": 400}})));
    }

    #[test]
    fn test_transport_failure_defaults_to_500() {
        let report = transport_failure().report();
        assert_eq!(report.status_code, 500);
        assert_eq!(report.status_message, PROVIDER_FALLBACK_MESSAGE);
    }
}
