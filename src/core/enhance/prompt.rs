use crate::core::providers::CompletionRequest;

use super::ENHANCE_MODEL;

const SYSTEM_PROMPT_HEAD: &str = "You are an expert writing assistant that enhances and improves text.
Your task is to take the user's rough, unpolished text and transform it into clear, professional, well-organized content.

Context for this text: ";

const SYSTEM_PROMPT_GUIDELINES: &str = "

Guidelines:
- Maintain the original intent and key points
- Improve clarity, grammar, and flow
- Make it more professional and polished
- Keep approximately the same length (don't make it much longer)
- Return ONLY the enhanced text, no explanations or preamble";

/// The context string is interpolated verbatim.
pub fn build_system_prompt(context: &str) -> String {
    let mut prompt =
        String::with_capacity(SYSTEM_PROMPT_HEAD.len() + context.len() + SYSTEM_PROMPT_GUIDELINES.len());
    prompt.push_str(SYSTEM_PROMPT_HEAD);
    prompt.push_str(context);
    prompt.push_str(SYSTEM_PROMPT_GUIDELINES);
    prompt
}

pub fn build_user_prompt(text: &str) -> String {
    format!("Please enhance and improve this text:\n\n{text}")
}

pub fn enhance_request(text: &str, context: &str, temperature: f64) -> CompletionRequest {
    CompletionRequest {
        system_prompt: Some(build_system_prompt(context)),
        prompt: build_user_prompt(text),
        model: ENHANCE_MODEL.to_string(),
        temperature,
    }
}
