//! Read fields out of messages API responses

use llmwrap_core::{FinishReason, ToolCall, Usage};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    ToolUse { id: String, name: String, input: Value },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

fn content_blocks(raw: &Value) -> Vec<ContentBlock> {
    raw.get("content")
        .and_then(Value::as_array)
        .map(|blocks| {
            blocks
                .iter()
                .filter_map(|block| ContentBlock::deserialize(block).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Concatenated text blocks, `None` when the response has none
pub(crate) fn text(raw: &Value) -> Option<String> {
    let texts: Vec<String> = content_blocks(raw)
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        })
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

/// Token counts; the API reports no total, so it is the sum of both sides
pub(crate) fn usage(raw: &Value) -> Option<Usage> {
    let usage = AnthropicUsage::deserialize(raw.get("usage")?).ok()?;
    Some(Usage {
        prompt_tokens: usage.input_tokens,
        completion_tokens: usage.output_tokens,
        total_tokens: usage.input_tokens.checked_add(usage.output_tokens)?,
    })
}

pub(crate) fn finish_reason(raw: &Value) -> Option<FinishReason> {
    raw.get("stop_reason")
        .and_then(Value::as_str)
        .map(FinishReason::parse)
}

pub(crate) fn tool_calls(raw: &Value) -> Vec<ToolCall> {
    content_blocks(raw)
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::ToolUse { id, name, input } => Some(ToolCall {
                id,
                name,
                arguments: input.to_string(),
            }),
            _ => None,
        })
        .collect()
}
