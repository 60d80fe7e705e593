use super::kind::NodeKind;
use super::pin::{DataType, Pin};
use super::registry;
use super::value::Value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

pub type NodeId = String;

/// A typed operation in the graph.
///
/// `properties` is an untyped JSON map: literal values, variable
/// names and loop bounds live here exactly as the editor stored them.
/// `title`, `comment` and the position are presentation only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub title: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub inputs: Vec<Pin>,
    #[serde(default)]
    pub outputs: Vec<Pin>,
    #[serde(default)]
    pub properties: Map<String, JsonValue>,
    #[serde(default)]
    pub comment: String,
}

impl Node {
    /// Instantiates a node from its kind's template.
    pub fn from_template(kind: NodeKind, id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        let id = id.into();
        let template = registry::template(kind);
        let inputs = template
            .inputs
            .iter()
            .enumerate()
            .map(|(index, pin)| pin.instantiate(&id, index))
            .collect();
        let outputs = template
            .outputs
            .iter()
            .enumerate()
            .map(|(index, pin)| pin.instantiate(&id, index))
            .collect();
        Self {
            id,
            kind,
            title: template.title.to_string(),
            x,
            y,
            inputs,
            outputs,
            properties: template.properties,
            comment: String::new(),
        }
    }

    /// Reads a property as a runtime value; missing keys are absent.
    pub fn property(&self, key: &str) -> Value {
        self.properties.get(key).map(Value::from).unwrap_or_default()
    }

    /// Reads a property as a variable name. Non-string names are stringified.
    pub fn property_name(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// First data input with the given label.
    pub fn data_input(&self, label: &str) -> Option<&Pin> {
        self.inputs
            .iter()
            .find(|pin| !pin.is_exec() && pin.label == label)
    }

    /// First input (of any type) with the given label.
    pub fn input(&self, label: &str) -> Option<&Pin> {
        self.inputs.iter().find(|pin| pin.label == label)
    }

    /// First output (of any type) with the given label.
    pub fn output(&self, label: &str) -> Option<&Pin> {
        self.outputs.iter().find(|pin| pin.label == label)
    }

    pub fn output_by_id(&self, pin_id: &str) -> Option<&Pin> {
        self.outputs.iter().find(|pin| pin.id == pin_id)
    }

    /// Exec outputs carrying the given label, in declared order.
    pub fn exec_outputs_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Pin> {
        self.outputs
            .iter()
            .filter(move |pin| pin.data_type == DataType::Exec && pin.label == label)
    }

    /// All exec outputs, in declared order.
    pub fn exec_outputs(&self) -> impl Iterator<Item = &Pin> {
        self.outputs.iter().filter(|pin| pin.is_exec())
    }
}
