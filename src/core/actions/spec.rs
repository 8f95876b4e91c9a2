use serde::Serialize;
use serde_json::{Map, Value, json};

/// Declared parameter type, spelled the way the assistant runtime expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum ParamType {
    #[serde(rename = "string")]
    #[strum(serialize = "string")]
    String,
    #[serde(rename = "number")]
    #[strum(serialize = "number")]
    Number,
    #[serde(rename = "boolean")]
    #[strum(serialize = "boolean")]
    Boolean,
    #[serde(rename = "string[]")]
    #[strum(serialize = "string[]")]
    StringArray,
    #[serde(rename = "object")]
    #[strum(serialize = "object")]
    Object,
    #[serde(rename = "object[]")]
    #[strum(serialize = "object[]")]
    ObjectArray,
}

impl ParamType {
    /// JSON Schema fragment for this type.
    pub fn schema(self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            Self::Object => json!({ "type": "object" }),
            Self::ObjectArray => json!({ "type": "array", "items": { "type": "object" } }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: &'static str,
    pub required: bool,
}

impl ActionParameter {
    pub const fn required(
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            param_type,
            description,
            required: true,
        }
    }

    pub const fn optional(
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            param_type,
            description,
            required: false,
        }
    }
}

/// Declaration of an action the assistant runtime may call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ActionParameter>,
}

impl ActionSpec {
    pub fn parameter(&self, name: &str) -> Option<&ActionParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// JSON Schema `object` for the parameter list.
    pub fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        for parameter in &self.parameters {
            let mut property = parameter.param_type.schema();
            property["description"] = Value::from(parameter.description);
            properties.insert(parameter.name.to_string(), property);
        }
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Function-calling declaration in the chat-completions `tools` shape.
    pub fn function_schema(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema(),
            }
        })
    }
}
