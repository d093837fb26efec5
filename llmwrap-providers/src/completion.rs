//! Provider responses, passed through untouched

use crate::{anthropic, openai};
use llmwrap_core::{FinishReason, ToolCall, Usage};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The wire format family a response body follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiShape {
    /// OpenAI-style `chat/completions`
    ChatCompletions,
    /// Anthropic-style `messages`
    Messages,
}

/// A completion response as returned by the provider
///
/// The JSON body is kept exactly as received; the accessors are read-only
/// views over it and return `None` (or an empty list) when a field is missing
/// or has an unexpected shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    shape: ApiShape,
    raw: Value,
}

impl Completion {
    /// Wrap a raw response body
    pub fn new(shape: ApiShape, raw: Value) -> Self {
        Self { shape, raw }
    }

    /// Which wire format the body follows
    pub fn shape(&self) -> ApiShape {
        self.shape
    }

    /// The untouched response body
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Take the response body
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Response ID
    pub fn id(&self) -> Option<&str> {
        self.raw.get("id").and_then(Value::as_str)
    }

    /// Model that produced the response
    pub fn model(&self) -> Option<&str> {
        self.raw.get("model").and_then(Value::as_str)
    }

    /// Generated text of the first choice (or all text blocks)
    pub fn text(&self) -> Option<String> {
        match self.shape {
            ApiShape::ChatCompletions => openai::parser::text(&self.raw),
            ApiShape::Messages => anthropic::parser::text(&self.raw),
        }
    }

    /// Token usage
    pub fn usage(&self) -> Option<Usage> {
        match self.shape {
            ApiShape::ChatCompletions => openai::parser::usage(&self.raw),
            ApiShape::Messages => anthropic::parser::usage(&self.raw),
        }
    }

    /// Why generation stopped
    pub fn finish_reason(&self) -> Option<FinishReason> {
        match self.shape {
            ApiShape::ChatCompletions => openai::parser::finish_reason(&self.raw),
            ApiShape::Messages => anthropic::parser::finish_reason(&self.raw),
        }
    }

    /// Tool calls requested by the model
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        match self.shape {
            ApiShape::ChatCompletions => openai::parser::tool_calls(&self.raw),
            ApiShape::Messages => anthropic::parser::tool_calls(&self.raw),
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text().unwrap_or_default())
    }
}

impl From<Completion> for Value {
    fn from(completion: Completion) -> Self {
        completion.raw
    }
}
