use super::node::NodeId;
use super::pin::{DataType, PinId};
use serde::{Deserialize, Serialize};

pub type WireId = String;

/// A directed connection from an output pin to an input pin.
///
/// Type compatibility is established when the wire is created and is not
/// checked again at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    pub id: WireId,
    pub from_node_id: NodeId,
    pub from_pin_id: PinId,
    pub to_node_id: NodeId,
    pub to_pin_id: PinId,
    pub data_type: DataType,
}
