use thiserror::Error;

/// Errors raised while assembling a graph through the builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node '{0}' not found in the blueprint")]
    NodeNotFound(String),

    #[error("Node '{node_id}' has no {direction} pin labelled '{label}'")]
    PinNotFound {
        node_id: String,
        direction: &'static str,
        label: String,
    },

    #[error("Input pin '{pin_id}' on node '{node_id}' is already connected")]
    InputAlreadyConnected { node_id: String, pin_id: String },

    #[error("Unregistered node kind: '{0}'")]
    UnknownKind(String),
}

/// Errors that can occur when loading a blueprint document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not read blueprint file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse blueprint JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
