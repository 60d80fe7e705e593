use serde::{Deserialize, Serialize};
use std::fmt;

pub type PinId = String;

/// The type tag carried by a pin. `Exec` pins carry control flow; every other
/// tag is a data pin resolved on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Exec,
    String,
    Integer,
    Float,
    Boolean,
    Any,
}

impl DataType {
    pub fn is_exec(self) -> bool {
        matches!(self, DataType::Exec)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Exec => "EXEC",
            DataType::String => "STRING",
            DataType::Integer => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::Boolean => "BOOLEAN",
            DataType::Any => "ANY",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PinDirection {
    Input,
    Output,
}

impl PinDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            PinDirection::Input => "INPUT",
            PinDirection::Output => "OUTPUT",
        }
    }
}

/// A connection point on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: PinId,
    pub node_id: String,
    pub label: String,
    pub data_type: DataType,
    pub direction: PinDirection,
}

impl Pin {
    pub fn is_exec(&self) -> bool {
        self.data_type.is_exec()
    }
}

/// Pin shape as declared by a node kind, before ids are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinTemplate {
    pub label: &'static str,
    pub data_type: DataType,
    pub direction: PinDirection,
}

impl PinTemplate {
    pub const fn input(label: &'static str, data_type: DataType) -> Self {
        Self {
            label,
            data_type,
            direction: PinDirection::Input,
        }
    }

    pub const fn output(label: &'static str, data_type: DataType) -> Self {
        Self {
            label,
            data_type,
            direction: PinDirection::Output,
        }
    }

    /// Builds the concrete pin, using the editor's id scheme
    /// `<nodeId>_<DIRECTION>_<label or DATATYPE>_<index>`.
    pub fn instantiate(&self, node_id: &str, index: usize) -> Pin {
        let name = if self.label.is_empty() {
            self.data_type.as_str()
        } else {
            self.label
        };
        Pin {
            id: format!("{}_{}_{}_{}", node_id, self.direction.as_str(), name, index),
            node_id: node_id.to_string(),
            label: self.label.to_string(),
            data_type: self.data_type,
            direction: self.direction,
        }
    }
}
