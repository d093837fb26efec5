//! Conversion from chat-completions style parameters to the messages API

use crate::constants::DEFAULT_MAX_TOKENS;
use crate::traits::RequestConverter;
use llmwrap_core::{Error, Parameters};
use serde_json::{json, Value};
use tracing::warn;

/// Converts call parameters to the Anthropic messages body
///
/// - `max_completion_tokens` becomes `max_tokens`, which is filled with a
///   default when absent because the API requires it
/// - `stop` becomes `stop_sequences` (a single string becomes a list)
/// - `system` role messages move to the top-level `system` field, appended
///   after any `system` text the caller already set
/// - chat-completions function tools are rewritten to `{name, description,
///   input_schema}`
/// - `tool_choice` strings and function selectors become the messages API
///   `{"type": "auto" | "any" | "none" | "tool"}` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagesConverter;

impl RequestConverter for MessagesConverter {
    fn convert_request(&self, mut params: Parameters) -> Result<Parameters, Error> {
        params.rename_key("max_completion_tokens", "max_tokens");
        if !params.contains_key("max_tokens") {
            params.insert("max_tokens", DEFAULT_MAX_TOKENS);
        }

        convert_stop(&mut params);
        hoist_system_messages(&mut params);
        convert_tools(&mut params);
        convert_tool_choice(&mut params);

        Ok(params)
    }
}

fn convert_stop(params: &mut Parameters) {
    let Some(stop) = params.remove("stop") else {
        return;
    };
    if params.contains_key("stop_sequences") {
        return;
    }

    match stop {
        Value::Null => {}
        Value::String(sequence) => {
            params.insert("stop_sequences", json!([sequence]));
        }
        sequences => {
            params.insert("stop_sequences", sequences);
        }
    }
}

fn hoist_system_messages(params: &mut Parameters) {
    let Some(Value::Array(messages)) = params.get_mut("messages") else {
        return;
    };

    let (system, rest): (Vec<Value>, Vec<Value>) = std::mem::take(messages)
        .into_iter()
        .partition(|message| message.get("role").and_then(Value::as_str) == Some("system"));
    *messages = rest;

    if system.is_empty() {
        return;
    }

    let text = system
        .iter()
        .map(|message| content_text(message.get("content")))
        .collect::<Vec<_>>()
        .join("\n");

    if !params.contains_key("system") {
        params.insert("system", text);
        return;
    }

    match params.get_mut("system") {
        Some(Value::String(existing)) => {
            existing.push('\n');
            existing.push_str(&text);
        }
        Some(Value::Array(blocks)) => {
            blocks.push(json!({"type": "text", "text": text}));
        }
        _ => {
            warn!(
                dropped = system.len(),
                "`system` is neither text nor blocks; dropping system-role messages"
            );
        }
    }
}

// Message content is either a string or a list of typed blocks
fn content_text(content: Option<&Value>) -> String {
    match content {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter_map(|block| block.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn convert_tools(params: &mut Parameters) {
    let Some(Value::Array(tools)) = params.get_mut("tools") else {
        return;
    };

    for tool in tools.iter_mut() {
        if tool.get("type").and_then(Value::as_str) != Some("function") {
            continue;
        }
        let Some(function) = tool.get_mut("function").map(Value::take) else {
            continue;
        };

        let mut converted = json!({
            "name": function.get("name").cloned().unwrap_or(Value::Null),
            "input_schema": function
                .get("parameters")
                .cloned()
                .unwrap_or_else(|| json!({"type": "object", "properties": {}})),
        });
        if let Some(description) = function.get("description") {
            converted["description"] = description.clone();
        }
        *tool = converted;
    }
}

fn convert_tool_choice(params: &mut Parameters) {
    let Some(choice) = params.get_mut("tool_choice") else {
        return;
    };

    let converted = match choice {
        Value::String(mode) => match mode.as_str() {
            "auto" => json!({"type": "auto"}),
            "required" => json!({"type": "any"}),
            "none" => json!({"type": "none"}),
            _ => return,
        },
        Value::Object(selector)
            if selector.get("type").and_then(Value::as_str) == Some("function") =>
        {
            let Some(name) = selector
                .get("function")
                .and_then(|function| function.get("name"))
            else {
                return;
            };
            json!({"type": "tool", "name": name})
        }
        _ => return,
    };
    *choice = converted;
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmwrap_core::ToolSchema;
    use pretty_assertions::assert_eq;

    fn convert(value: Value) -> Value {
        MessagesConverter
            .convert_request(Parameters::try_from(value).unwrap())
            .unwrap()
            .into_value()
    }

    #[test]
    fn test_max_tokens_default_and_rename() {
        assert_eq!(convert(json!({"model": "claude-3-5-haiku-latest"}))["max_tokens"], 4096);
        assert_eq!(
            convert(json!({"max_completion_tokens": 512})),
            json!({"max_tokens": 512})
        );
        assert_eq!(
            convert(json!({"max_tokens": 100, "max_completion_tokens": 512})),
            json!({"max_tokens": 100})
        );
    }

    #[test]
    fn test_stop_becomes_stop_sequences() {
        assert_eq!(
            convert(json!({"max_tokens": 1, "stop": "END"})),
            json!({"max_tokens": 1, "stop_sequences": ["END"]})
        );
        assert_eq!(
            convert(json!({"max_tokens": 1, "stop": ["a", "b"]})),
            json!({"max_tokens": 1, "stop_sequences": ["a", "b"]})
        );
        assert_eq!(
            convert(json!({"max_tokens": 1, "stop": "x", "stop_sequences": ["y"]})),
            json!({"max_tokens": 1, "stop_sequences": ["y"]})
        );
    }

    #[test]
    fn test_system_messages_hoisted() {
        let converted = convert(json!({
            "max_tokens": 1,
            "messages": [
                {"role": "system", "content": "You are terse."},
                {"role": "user", "content": "Hi"},
                {"role": "system", "content": [{"type": "text", "text": "Answer in French."}]}
            ]
        }));

        assert_eq!(converted["system"], "You are terse.\nAnswer in French.");
        assert_eq!(converted["messages"], json!([{"role": "user", "content": "Hi"}]));
    }

    #[test]
    fn test_system_messages_appended_to_explicit_system() {
        let converted = convert(json!({
            "max_tokens": 1,
            "system": "Be brief.",
            "messages": [
                {"role": "system", "content": "Answer in French."},
                {"role": "user", "content": "Hi"}
            ]
        }));
        assert_eq!(converted["system"], "Be brief.\nAnswer in French.");
        assert_eq!(converted["messages"], json!([{"role": "user", "content": "Hi"}]));

        let converted = convert(json!({
            "max_tokens": 1,
            "system": [{"type": "text", "text": "Be brief."}],
            "messages": [{"role": "system", "content": "Answer in French."}]
        }));
        assert_eq!(
            converted["system"],
            json!([
                {"type": "text", "text": "Be brief."},
                {"type": "text", "text": "Answer in French."}
            ])
        );
        assert_eq!(converted["messages"], json!([]));
    }

    #[test]
    fn test_explicit_system_without_system_messages_unchanged() {
        let input = json!({
            "max_tokens": 1,
            "system": "Be brief.",
            "messages": [{"role": "user", "content": "Hi"}]
        });
        assert_eq!(convert(input.clone()), input);
    }

    #[test]
    fn test_function_tools_rewritten() {
        let tool = ToolSchema::function("get_weather").param::<String>("location", "City");
        let converted = convert(json!({
            "max_tokens": 1,
            "tools": [tool.to_value(), {"name": "native", "input_schema": {"type": "object"}}]
        }));

        assert_eq!(converted["tools"][0], tool.to_anthropic());
        assert_eq!(converted["tools"][1]["name"], "native");
    }

    #[test]
    fn test_tool_choice_translated() {
        let choice =
            |value: Value| convert(json!({"max_tokens": 1, "tool_choice": value}))["tool_choice"].clone();

        assert_eq!(choice(json!("auto")), json!({"type": "auto"}));
        assert_eq!(choice(json!("required")), json!({"type": "any"}));
        assert_eq!(choice(json!("none")), json!({"type": "none"}));
        assert_eq!(
            choice(json!({"type": "function", "function": {"name": "get_weather"}})),
            json!({"type": "tool", "name": "get_weather"})
        );
        assert_eq!(
            choice(json!({"type": "tool", "name": "get_weather"})),
            json!({"type": "tool", "name": "get_weather"})
        );
    }
}
