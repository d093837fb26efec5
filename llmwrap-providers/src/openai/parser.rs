//! Read fields out of chat-completions responses

use llmwrap_core::{FinishReason, ToolCall, Usage};
use serde::Deserialize;
use serde_json::Value;

pub(crate) fn text(raw: &Value) -> Option<String> {
    raw.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub(crate) fn usage(raw: &Value) -> Option<Usage> {
    let usage = UsageInfo::deserialize(raw.get("usage")?).ok()?;
    Some(Usage {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    })
}

pub(crate) fn finish_reason(raw: &Value) -> Option<FinishReason> {
    raw.pointer("/choices/0/finish_reason")
        .and_then(Value::as_str)
        .map(FinishReason::parse)
}

pub(crate) fn tool_calls(raw: &Value) -> Vec<ToolCall> {
    raw.pointer("/choices/0/message/tool_calls")
        .and_then(|calls| Vec::<ToolCallResponse>::deserialize(calls).ok())
        .unwrap_or_default()
        .into_iter()
        .map(|tc| ToolCall {
            id: tc.id,
            name: tc.function.name,
            arguments: tc.function.arguments,
        })
        .collect()
}

#[derive(Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ToolCallResponse {
    id: String,
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_tool_call_response() {
        let raw = json!({
            "id": "chatcmpl-1",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "get_weather", "arguments": "{\"location\":\"Paris\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 8, "total_tokens": 28}
        });

        assert_eq!(text(&raw), None);
        assert_eq!(finish_reason(&raw), Some(FinishReason::ToolCalls));
        assert_eq!(
            tool_calls(&raw),
            vec![ToolCall {
                id: "call_1".to_string(),
                name: "get_weather".to_string(),
                arguments: "{\"location\":\"Paris\"}".to_string(),
            }]
        );
        assert_eq!(usage(&raw).map(|u| u.total_tokens), Some(28));
    }

    #[test]
    fn test_malformed_fields_are_absent() {
        let raw = json!({"choices": [], "usage": {"prompt_tokens": "many"}});
        assert_eq!(text(&raw), None);
        assert_eq!(usage(&raw), None);
        assert_eq!(finish_reason(&raw), None);
        assert!(tool_calls(&raw).is_empty());
    }
}
