//! Named completion parameters and the default/override merge
//!
//! [`Parameters`] is the only data structure the wrapper keeps: a map from
//! parameter name to JSON value. The same type is used for the defaults stored
//! at construction, for the overrides a caller passes to `create`, and for the
//! merged set forwarded to the wrapped client.

use crate::error::{Error, Result};
use crate::types::message::Message;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A set of named completion parameters
///
/// Equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new parameters builder
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }

    /// Parse a parameter set from a JSON object string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Overlay `overrides` on top of these parameters
    ///
    /// The merge is shallow: every top-level key in `overrides` replaces the
    /// value stored under the same key here, nested objects included. `self`
    /// is left untouched and the result is a fresh parameter set.
    #[must_use]
    pub fn merged_with(&self, overrides: &Parameters) -> Parameters {
        let mut merged = self.0.clone();
        for (key, value) in &overrides.0 {
            merged.insert(key.clone(), value.clone());
        }
        Parameters(merged)
    }

    /// Insert a parameter, returning the previous value for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert a parameter and return `self`
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Mutable access to a parameter
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Look up a string parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Move the value stored under `from` to `to`
    ///
    /// Does nothing when `from` is absent. When `to` is already set, it wins
    /// and the value under `from` is dropped. Returns whether a rename took
    /// place.
    pub fn rename_key(&mut self, from: &str, to: &str) -> bool {
        match self.0.remove(from) {
            Some(value) if !self.0.contains_key(to) => {
                self.0.insert(to.to_string(), value);
                true
            }
            _ => false,
        }
    }

    /// Parameter names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over the parameters
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON object value, ready to be sent as a request body
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Parameters {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::Validation(format!(
                "Parameters must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Parameters> for Value {
    fn from(params: Parameters) -> Self {
        params.into_value()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for [`Parameters`] with setters for the common completion fields
#[derive(Debug, Default)]
pub struct ParametersBuilder {
    params: Parameters,
}

impl ParametersBuilder {
    /// Set the model name
    pub fn model(self, model: impl Into<String>) -> Self {
        let model: String = model.into();
        self.set("model", model)
    }

    /// Set the conversation messages
    pub fn messages(self, messages: impl IntoIterator<Item = Message>) -> Self {
        let messages: Vec<Value> = messages.into_iter().map(Message::into_value).collect();
        self.set("messages", messages)
    }

    /// Set maximum tokens
    pub fn max_tokens(self, tokens: u32) -> Self {
        self.set("max_tokens", tokens)
    }

    /// Set temperature
    pub fn temperature(self, temp: f64) -> Self {
        self.set("temperature", temp)
    }

    /// Set top-p
    pub fn top_p(self, p: f64) -> Self {
        self.set("top_p", p)
    }

    /// Set the number of completions
    pub fn n(self, n: u32) -> Self {
        self.set("n", n)
    }

    /// Set stop sequences
    pub fn stop(self, sequences: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let stop: Vec<String> = sequences.into_iter().map(Into::into).collect();
        self.set("stop", stop)
    }

    /// Set presence penalty
    pub fn presence_penalty(self, penalty: f64) -> Self {
        self.set("presence_penalty", penalty)
    }

    /// Set frequency penalty
    pub fn frequency_penalty(self, penalty: f64) -> Self {
        self.set("frequency_penalty", penalty)
    }

    /// Set the sampling seed
    pub fn seed(self, seed: u64) -> Self {
        self.set("seed", seed)
    }

    /// Set the tool definitions
    pub fn tools(self, tools: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        let tools: Vec<Value> = tools.into_iter().map(Into::into).collect();
        self.set("tools", tools)
    }

    /// Set an arbitrary parameter
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Build the parameters
    pub fn build(self) -> Parameters {
        self.params
    }
}

impl From<ParametersBuilder> for Parameters {
    fn from(builder: ParametersBuilder) -> Self {
        builder.build()
    }
}
