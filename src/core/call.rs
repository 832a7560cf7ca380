// call.rs - Description of a single external library call

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// One call into an external analysis library: `module.function(*args, **kwargs)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryCall {
    pub module: String,
    pub function: String,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

impl LibraryCall {
    pub fn new(module: &str, function: &str) -> Self {
        Self {
            module: module.to_string(),
            function: function.to_string(),
            args: Vec::new(),
            kwargs: Map::new(),
        }
    }

    /// Append a positional argument
    pub fn arg<V: Into<Value>>(mut self, value: V) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a keyword argument
    pub fn kwarg<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.kwargs.insert(name.to_string(), value.into());
        self
    }

    /// Keyword argument from an optional value, `None` when absent
    pub fn kwarg_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.kwarg(name, v),
            None => self.kwarg(name, Value::Null),
        }
    }

    /// Dotted name of the called function
    pub fn target(&self) -> String {
        format!("{}.{}", self.module, self.function)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to encode call {}: {}", self.target(), e))
    }

    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to encode call {}: {}", self.target(), e))
    }
}

impl fmt::Display for LibraryCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.target())?;
        let positional = self.args.iter().map(Value::to_string);
        let keywords = self.kwargs.iter().map(|(k, v)| format!("{}={}", k, v));
        let rendered: Vec<String> = positional.chain(keywords).collect();
        write!(f, "{})", rendered.join(", "))
    }
}

/// Paths travel to the backend as plain strings
pub fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}
