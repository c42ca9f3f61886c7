//! Prompt construction for chat-completion requests

use super::models::{ExplanationRequest, NormalizedImage};
use crate::config::{GenerationConfig, GenerationParams};
use crate::provider::{ChatMessage, ContentPart, MessageContent, ProviderChatRequest};

/// System instruction for typed problems
pub const TEXT_SYSTEM_PROMPT: &str = "You are a mathematics expert and tutor. Your only job is to solve the math problem the user gives you and explain the solution clearly.

RULES:
- Solve exactly the problem given by the user. Do not substitute a different or generic problem.
- Do not introduce yourself or add small talk.
- Break the solution into clear, numbered steps and explain the reasoning behind each step.
- Write formulas in LaTeX: wrap inline math in $...$ and display math in $$...$$.
- Always state the final answer explicitly.
- Format the response as markdown.

RESPONSE FORMAT:
Step 1: [what we are doing] [equation/work]
Step 2: [next step] [equation/work]
...
**Final Answer:** [answer]";

/// System instruction for photographed or screenshotted problems
pub const IMAGE_SYSTEM_PROMPT: &str = "You are a mathematics expert and tutor. Your primary task is to read and solve the specific math problem shown in the provided image.

RULES:
1. First transcribe the exact problem you see in the image. Do not guess or invent a problem.
2. Solve only the problem shown in the image.
3. Break the solution into clear, numbered steps and explain the reasoning behind each step.
4. Write formulas in LaTeX: wrap inline math in $...$ and display math in $$...$$.
5. Always state the final answer explicitly.
6. If the image is unreadable, say so and ask for a clearer picture instead of guessing.
7. Format the response as markdown.

RESPONSE FORMAT:
**Problem from Image:** [what the image shows]
**Solution:**
Step 1: [what we are doing] [equation/work]
Step 2: [next step] [equation/work]
...
**Final Answer:** [answer]";

const IMAGE_INSTRUCTION: &str = "Analyze and solve the math problem shown in this image. Be very specific about what you see in the image.";

/// Build the provider request for a validated explanation request
pub fn build_request(
    request: &ExplanationRequest,
    model: &str,
    generation: &GenerationConfig,
) -> ProviderChatRequest {
    match request {
        ExplanationRequest::Text { problem } => build_text_request(problem, model, generation.text),
        ExplanationRequest::Image { image, additional_context } => {
            build_image_request(image, additional_context.as_deref(), model, generation.image)
        }
    }
}

/// The problem text is the entire user message
pub fn build_text_request(problem: &str, model: &str, params: GenerationParams) -> ProviderChatRequest {
    ProviderChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(TEXT_SYSTEM_PROMPT),
            ChatMessage::user(MessageContent::Text(problem.to_string())),
        ],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

/// Instruction part first, image part second
pub fn build_image_request(
    image: &NormalizedImage,
    additional_context: Option<&str>,
    model: &str,
    params: GenerationParams,
) -> ProviderChatRequest {
    let parts = vec![
        ContentPart::text(image_instruction(additional_context)),
        ContentPart::image(&image.media_type, &image.data),
    ];

    ProviderChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(IMAGE_SYSTEM_PROMPT),
            ChatMessage::user(MessageContent::Parts(parts)),
        ],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

/// Instruction text for an image request, with any caller context as a trailing clause
pub fn image_instruction(additional_context: Option<&str>) -> String {
    match additional_context {
        Some(context) => format!("{} Additional context: {}", IMAGE_INSTRUCTION, context),
        None => IMAGE_INSTRUCTION.to_string(),
    }
}
