use crate::graph::{Node, Wire};
use ahash::AHashMap;

/// Read-only lookup tables over one run's nodes and wires.
///
/// Wires are indexed by pin id; pin ids are unique across the graph because
/// they embed the owning node's id.
pub struct GraphIndex<'a> {
    by_id: AHashMap<&'a str, &'a Node>,
    wires_to_pin: AHashMap<&'a str, &'a Wire>,
    wires_from_pin: AHashMap<&'a str, Vec<&'a Wire>>,
}

impl<'a> GraphIndex<'a> {
    pub fn new(nodes: &'a [Node], wires: &'a [Wire]) -> Self {
        let by_id = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

        let mut wires_to_pin = AHashMap::new();
        let mut wires_from_pin: AHashMap<&'a str, Vec<&'a Wire>> = AHashMap::new();
        for wire in wires {
            // Data inputs never merge; a document with two wires into one data pin keeps the last
            wires_to_pin.insert(wire.to_pin_id.as_str(), wire);
            wires_from_pin
                .entry(wire.from_pin_id.as_str())
                .or_default()
                .push(wire);
        }

        Self {
            by_id,
            wires_to_pin,
            wires_from_pin,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).copied()
    }

    /// The wire feeding an input pin of `node_id`, if any.
    pub fn wire_into(&self, node_id: &str, pin_id: &str) -> Option<&'a Wire> {
        self.wires_to_pin
            .get(pin_id)
            .copied()
            .filter(|wire| wire.to_node_id == node_id)
    }

    /// Destination nodes of every wire leaving an output pin, in wire order.
    pub fn successors(&self, pin_id: &str) -> Vec<&'a Node> {
        self.wires_from_pin
            .get(pin_id)
            .into_iter()
            .flatten()
            .filter_map(|wire| self.node(&wire.to_node_id))
            .collect()
    }
}
