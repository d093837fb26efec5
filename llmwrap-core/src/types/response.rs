//! Normalised views of provider responses

use std::fmt;

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural end of message
    Stop,
    /// Hit max_tokens limit
    Length,
    /// Hit a stop sequence
    StopSequence,
    /// Model decided to call a tool
    ToolCalls,
    /// Content was filtered
    ContentFilter,
    /// A reason this crate does not know about, kept verbatim
    Other(String),
}

impl FinishReason {
    /// Parse a provider's finish/stop reason string
    ///
    /// Covers both the chat-completions (`finish_reason`) and the messages
    /// (`stop_reason`) vocabularies.
    pub fn parse(reason: &str) -> Self {
        match reason {
            "stop" | "end_turn" => FinishReason::Stop,
            "length" | "max_tokens" => FinishReason::Length,
            "stop_sequence" => FinishReason::StopSequence,
            "tool_calls" | "function_call" | "tool_use" => FinishReason::ToolCalls,
            "content_filter" | "refusal" => FinishReason::ContentFilter,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// A tool call requested by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Unique ID for this call
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// JSON-encoded arguments
    pub arguments: String,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::Length => write!(f, "length"),
            FinishReason::StopSequence => write!(f, "stop_sequence"),
            FinishReason::ToolCalls => write!(f, "tool_calls"),
            FinishReason::ContentFilter => write!(f, "content_filter"),
            FinishReason::Other(reason) => write!(f, "{reason}"),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Usage(prompt: {}, completion: {}, total: {})",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}
