use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// A single client record from the registry
///
/// Records are opaque: every field is passed to the templates unchanged and
/// only `name` is ever inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Client(Map<String, Value>);

impl Client {
    /// The client name, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for Client {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// What the generator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One pipeline definition for all clients, printed to stdout
    #[default]
    Ci,
    /// One helm values file per client
    ChartValues,
}

impl From<bool> for Mode {
    fn from(gen_chart_values: bool) -> Self {
        if gen_chart_values {
            Mode::ChartValues
        } else {
            Mode::Ci
        }
    }
}

/// Outcome of a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// The pipeline was printed with this many clients in context
    Ci { clients: usize },
    /// Values files written, in order
    ChartValues { written: Vec<PathBuf> },
}
