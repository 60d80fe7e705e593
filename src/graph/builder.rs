use super::document::Blueprint;
use super::kind::NodeKind;
use super::node::{Node, NodeId};
use super::pin::DataType;
use super::wire::{Wire, WireId};
use crate::error::GraphError;
use serde_json::Value as JsonValue;

/// Offset applied to a duplicated node so it does not cover the original.
const DUPLICATE_OFFSET: f64 = 40.0;

/// Assembles a [`Blueprint`] the way the editor does: nodes come from kind
/// templates, wires are connected by pin label, and a data input accepts at
/// most one incoming wire. Exec inputs may be reached from several outputs.
///
/// # Example
///
/// ```rust
/// use kairo::prelude::*;
///
/// let mut builder = BlueprintBuilder::new();
/// let begin = builder.add_node(FlowKind::BeginPlay);
/// let print = builder.add_node(FlowKind::PrintString);
/// builder.set_property(&print, "text", "hi").unwrap();
/// builder.connect(&begin, "", &print, "").unwrap();
///
/// let lines = execute_blueprint(&builder.build());
/// assert_eq!(lines[0], "hi");
/// ```
#[derive(Debug, Default)]
pub struct BlueprintBuilder {
    blueprint: Blueprint,
    next_id: u64,
}

impl BlueprintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues editing an existing blueprint.
    pub fn from_blueprint(blueprint: Blueprint) -> Self {
        let next_id = (blueprint.nodes.len() + blueprint.wires.len()) as u64;
        Self { blueprint, next_id }
    }

    fn generate_id(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{}_{}", prefix, self.next_id);
            self.next_id += 1;
            let taken = self.blueprint.nodes.iter().any(|n| n.id == candidate)
                || self.blueprint.wires.iter().any(|w| w.id == candidate);
            if !taken {
                return candidate;
            }
        }
    }

    pub fn add_node(&mut self, kind: impl Into<NodeKind>) -> NodeId {
        self.add_node_at(kind, 0.0, 0.0)
    }

    pub fn add_node_at(&mut self, kind: impl Into<NodeKind>, x: f64, y: f64) -> NodeId {
        let id = self.generate_id("node");
        self.blueprint
            .nodes
            .push(Node::from_template(kind.into(), id.clone(), x, y));
        id
    }

    /// Adds a node by its serialized kind name, e.g. `"ForLoop"`.
    pub fn add_node_by_name(&mut self, name: &str) -> Result<NodeId, GraphError> {
        let kind = NodeKind::from_name(name).ok_or_else(|| GraphError::UnknownKind(name.to_string()))?;
        Ok(self.add_node(kind))
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut Node, GraphError> {
        self.blueprint
            .node_mut(node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))
    }

    pub fn set_property(
        &mut self,
        node_id: &str,
        key: &str,
        value: impl Into<JsonValue>,
    ) -> Result<(), GraphError> {
        self.node_mut(node_id)?
            .properties
            .insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn set_title(&mut self, node_id: &str, title: &str) -> Result<(), GraphError> {
        self.node_mut(node_id)?.title = title.to_string();
        Ok(())
    }

    pub fn set_comment(&mut self, node_id: &str, comment: &str) -> Result<(), GraphError> {
        self.node_mut(node_id)?.comment = comment.to_string();
        Ok(())
    }

    /// Connects the output labelled `from_label` to the input labelled
    /// `to_label`. Exec pins without a label are addressed with `""`.
    pub fn connect(
        &mut self,
        from_node: &str,
        from_label: &str,
        to_node: &str,
        to_label: &str,
    ) -> Result<WireId, GraphError> {
        let source = self
            .blueprint
            .node(from_node)
            .ok_or_else(|| GraphError::NodeNotFound(from_node.to_string()))?;
        let from_pin = source.output(from_label).ok_or_else(|| GraphError::PinNotFound {
            node_id: from_node.to_string(),
            direction: "output",
            label: from_label.to_string(),
        })?;
        let target = self
            .blueprint
            .node(to_node)
            .ok_or_else(|| GraphError::NodeNotFound(to_node.to_string()))?;
        let to_pin = target.input(to_label).ok_or_else(|| GraphError::PinNotFound {
            node_id: to_node.to_string(),
            direction: "input",
            label: to_label.to_string(),
        })?;

        if !to_pin.is_exec()
            && self
                .blueprint
                .wires
                .iter()
                .any(|w| w.to_node_id == to_node && w.to_pin_id == to_pin.id)
        {
            return Err(GraphError::InputAlreadyConnected {
                node_id: to_node.to_string(),
                pin_id: to_pin.id.clone(),
            });
        }

        let data_type = match from_pin.data_type {
            DataType::Any => to_pin.data_type,
            other => other,
        };
        let (from_pin_id, to_pin_id) = (from_pin.id.clone(), to_pin.id.clone());
        let id = self.generate_id("wire");
        self.blueprint.wires.push(Wire {
            id: id.clone(),
            from_node_id: from_node.to_string(),
            from_pin_id,
            to_node_id: to_node.to_string(),
            to_pin_id,
            data_type,
        });
        Ok(id)
    }

    /// Removes a wire; returns whether it existed.
    pub fn remove_wire(&mut self, wire_id: &str) -> bool {
        let before = self.blueprint.wires.len();
        self.blueprint.wires.retain(|w| w.id != wire_id);
        self.blueprint.wires.len() != before
    }

    /// Removes a node together with every wire attached to it.
    pub fn remove_node(&mut self, node_id: &str) -> Result<(), GraphError> {
        let before = self.blueprint.nodes.len();
        self.blueprint.nodes.retain(|n| n.id != node_id);
        if self.blueprint.nodes.len() == before {
            return Err(GraphError::NodeNotFound(node_id.to_string()));
        }
        self.blueprint
            .wires
            .retain(|w| w.from_node_id != node_id && w.to_node_id != node_id);
        Ok(())
    }

    /// Copies a node with fresh pin ids, keeping its properties and comment.
    /// Wires are not copied.
    pub fn duplicate_node(&mut self, node_id: &str) -> Result<NodeId, GraphError> {
        let original = self
            .blueprint
            .node(node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))?
            .clone();
        let id = self.add_node_at(
            original.kind,
            original.x + DUPLICATE_OFFSET,
            original.y + DUPLICATE_OFFSET,
        );
        let copy = self.node_mut(&id)?;
        copy.properties = original.properties;
        copy.comment = original.comment;
        Ok(id)
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn build(self) -> Blueprint {
        self.blueprint
    }
}
