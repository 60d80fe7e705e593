//! Graph model: nodes, pins, wires and the registry of node kinds.

pub mod builder;
pub mod document;
pub mod kind;
pub mod node;
pub mod pin;
pub mod registry;
pub mod value;
pub mod wire;

pub use builder::*;
pub use document::*;
pub use kind::*;
pub use node::*;
pub use pin::*;
pub use value::*;
pub use wire::*;
