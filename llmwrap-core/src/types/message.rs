//! Message types for conversations

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// The role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Role {
    /// System message (instructions)
    System,
    /// Developer message (instructions for newer OpenAI models)
    Developer,
    /// User message
    User,
    /// Assistant message
    Assistant,
    /// Tool message (function result)
    Tool,
}

impl Role {
    /// The wire name of this role
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::Developer => "developer",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation, in the `{role, content}` shape every
/// supported provider accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
    /// Optional participant name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool call ID if this is a tool response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    /// Create a simple text message
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: text.into(),
            name: None,
            tool_call_id: None,
        }
    }

    /// Create a system message
    pub fn system(text: impl Into<String>) -> Self {
        Self::text(Role::System, text)
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::text(Role::Assistant, text)
    }

    /// Create a tool message
    pub fn tool(text: impl Into<String>, tool_call_id: impl Into<String>) -> Self {
        let mut msg = Self::text(Role::Tool, text);
        msg.tool_call_id = Some(tool_call_id.into());
        msg
    }

    /// Set the participant name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Render as a JSON object
    pub fn into_value(self) -> Value {
        let mut value = json!({
            "role": self.role.as_str(),
            "content": self.content,
        });
        if let Some(name) = self.name {
            value["name"] = json!(name);
        }
        if let Some(id) = self.tool_call_id {
            value["tool_call_id"] = json!(id);
        }
        value
    }
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        message.into_value()
    }
}
