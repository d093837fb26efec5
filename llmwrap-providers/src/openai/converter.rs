//! Request conversion for chat-completions providers

use crate::traits::RequestConverter;
use llmwrap_core::{Error, Parameters};

/// Converts call parameters to the chat-completions body
///
/// OpenAI deprecated `max_tokens` in favour of `max_completion_tokens`; the
/// hosted OpenAI and Azure APIs get the rename, generic compatible servers
/// (which often only know `max_tokens`) get the parameters as they are.
#[derive(Debug, Clone, Copy)]
pub struct ChatCompletionsConverter {
    rename_max_tokens: bool,
}

impl ChatCompletionsConverter {
    /// Converter for the hosted OpenAI and Azure OpenAI APIs
    pub fn openai() -> Self {
        Self {
            rename_max_tokens: true,
        }
    }

    /// Identity converter for OpenAI-compatible servers
    pub fn passthrough() -> Self {
        Self {
            rename_max_tokens: false,
        }
    }
}

impl RequestConverter for ChatCompletionsConverter {
    fn convert_request(&self, mut params: Parameters) -> Result<Parameters, Error> {
        if self.rename_max_tokens {
            // an explicit max_completion_tokens wins over the legacy name
            params.rename_key("max_tokens", "max_completion_tokens");
        }
        Ok(params)
    }
}
