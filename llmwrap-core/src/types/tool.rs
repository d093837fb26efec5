//! Tool-calling schema builder
//!
//! Produces the function schema chat-completions providers expect in their
//! `tools` parameter, so tool definitions can live in a wrapper's defaults:
//!
//! ```
//! use llmwrap_core::{Parameters, ToolSchema};
//!
//! let weather = ToolSchema::function("get_weather")
//!     .description("Get the current weather for a location.")
//!     .param::<String>("location", "The location to look up.")
//!     .optional_param::<String>("unit", "'C' or 'F'.", "C");
//!
//! let defaults = Parameters::builder().model("gpt-4o").tools([weather]).build();
//! assert!(defaults.contains_key("tools"));
//! ```

use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};

const NO_DESCRIPTION: &str = "No description provided.";

/// Maps a Rust type to its JSON schema `type` name
pub trait JsonType {
    /// The JSON schema type name
    fn json_type() -> &'static str;
}

macro_rules! json_type {
    ($name:literal => $($ty:ty),+) => {
        $(impl JsonType for $ty {
            fn json_type() -> &'static str {
                $name
            }
        })+
    };
}

json_type!("string" => String, &str, char);
json_type!("integer" => i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
json_type!("number" => f32, f64);
json_type!("boolean" => bool);

impl<T> JsonType for Vec<T> {
    fn json_type() -> &'static str {
        "array"
    }
}

impl<T> JsonType for &[T] {
    fn json_type() -> &'static str {
        "array"
    }
}

impl<K, V, S> JsonType for HashMap<K, V, S> {
    fn json_type() -> &'static str {
        "object"
    }
}

impl<K, V> JsonType for BTreeMap<K, V> {
    fn json_type() -> &'static str {
        "object"
    }
}

impl JsonType for Map<String, Value> {
    fn json_type() -> &'static str {
        "object"
    }
}

/// A function tool definition
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSchema {
    name: String,
    description: Option<String>,
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl ToolSchema {
    /// Start a schema for the function `name`
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            properties: Map::new(),
            required: Vec::new(),
        }
    }

    /// Set the function description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a required parameter typed after `T`
    #[must_use]
    pub fn param<T: JsonType>(mut self, name: impl Into<String>, description: &str) -> Self {
        let name = name.into();
        self.properties
            .insert(name.clone(), property(T::json_type(), description));
        self.required.push(name);
        self
    }

    /// Add an optional parameter typed after `T`, without a default
    #[must_use]
    pub fn optional<T: JsonType>(mut self, name: impl Into<String>, description: &str) -> Self {
        self.properties
            .insert(name.into(), property(T::json_type(), description));
        self
    }

    /// Add an optional parameter typed after `T`, with a default value
    #[must_use]
    pub fn optional_param<T: JsonType>(
        mut self,
        name: impl Into<String>,
        description: &str,
        default: impl Into<Value>,
    ) -> Self {
        let mut prop = property(T::json_type(), description);
        prop["default"] = default.into();
        self.properties.insert(name.into(), prop);
        self
    }

    /// The function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the required parameters, in declaration order
    pub fn required(&self) -> &[String] {
        &self.required
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }

    fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// Render in the chat-completions `tools` shape
    pub fn to_value(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description_or_default(),
                "parameters": self.parameters_schema(),
            }
        })
    }

    /// Render in the messages API `tools` shape
    pub fn to_anthropic(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description_or_default(),
            "input_schema": self.parameters_schema(),
        })
    }
}

impl From<ToolSchema> for Value {
    fn from(schema: ToolSchema) -> Self {
        schema.to_value()
    }
}

fn property(json_type: &str, description: &str) -> Value {
    let mut prop = json!({ "type": json_type });
    if !description.is_empty() {
        prop["description"] = json!(description);
    }
    prop
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weather_schema() {
        let schema = ToolSchema::function("get_weather")
            .description("Get the current weather information for a specific location.")
            .param::<String>("location", "The location for which to get the weather.")
            .optional_param::<String>(
                "unit",
                "The unit of temperature ('C' for Celsius, 'F' for Fahrenheit).",
                "C",
            );

        assert_eq!(
            schema.to_value(),
            json!({
                "type": "function",
                "function": {
                    "name": "get_weather",
                    "description": "Get the current weather information for a specific location.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "location": {
                                "type": "string",
                                "description": "The location for which to get the weather."
                            },
                            "unit": {
                                "type": "string",
                                "description": "The unit of temperature ('C' for Celsius, 'F' for Fahrenheit).",
                                "default": "C"
                            }
                        },
                        "required": ["location"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_missing_description_uses_placeholder() {
        let schema = ToolSchema::function("add")
            .param::<i64>("a", "")
            .param::<i64>("b", "");

        let value = schema.to_value();
        assert_eq!(value["function"]["description"], "No description provided.");
        assert_eq!(value["function"]["parameters"]["properties"]["a"], json!({"type": "integer"}));
        assert_eq!(value["function"]["parameters"]["required"], json!(["a", "b"]));
    }

    #[test]
    fn test_optional_without_default() {
        let schema = ToolSchema::function("search")
            .param::<String>("query", "")
            .optional::<u32>("limit", "Maximum hits");

        let parameters = &schema.to_value()["function"]["parameters"];
        assert_eq!(
            parameters["properties"]["limit"],
            json!({"type": "integer", "description": "Maximum hits"})
        );
        assert_eq!(schema.required(), ["query".to_string()]);
    }

    #[test]
    fn test_type_mapping() {
        assert_eq!(<f64 as JsonType>::json_type(), "number");
        assert_eq!(<bool as JsonType>::json_type(), "boolean");
        assert_eq!(<Vec<String> as JsonType>::json_type(), "array");
        assert_eq!(<HashMap<String, i32> as JsonType>::json_type(), "object");
        assert_eq!(<&str as JsonType>::json_type(), "string");
    }

    #[test]
    fn test_anthropic_shape() {
        let schema = ToolSchema::function("lookup").param::<String>("query", "Search text");
        assert_eq!(
            schema.to_anthropic(),
            json!({
                "name": "lookup",
                "description": "No description provided.",
                "input_schema": {
                    "type": "object",
                    "properties": {"query": {"type": "string", "description": "Search text"}},
                    "required": ["query"]
                }
            })
        );
    }
}
