//! Common traits for provider implementations

use llmwrap_core::{Error, Parameters};

/// Translate merged call parameters into a provider's native request body
///
/// Converters only rename and reshape keys the provider spells differently.
/// Everything they do not recognise is forwarded untouched.
pub trait RequestConverter: Send + Sync {
    /// Convert call parameters to the provider-specific parameter set
    fn convert_request(&self, params: Parameters) -> Result<Parameters, Error>;
}
