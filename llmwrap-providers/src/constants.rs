//! Constants for provider implementations

use std::time::Duration;

/// Default OpenAI base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default Anthropic base URL
pub const ANTHROPIC_DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic API version sent in the `anthropic-version` header
pub const ANTHROPIC_DEFAULT_VERSION: &str = "2023-06-01";

/// Default Azure OpenAI REST API version
pub const AZURE_DEFAULT_API_VERSION: &str = "2024-10-21";

/// Default base URL for OpenAI-compatible servers (vLLM, LM Studio, ...)
pub const COMPATIBLE_DEFAULT_BASE_URL: &str = "http://localhost:8000/v1";

/// Max tokens filled in for the messages API, which requires the field
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
