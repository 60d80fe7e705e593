//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the kairo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let blueprint = Blueprint::from_file("path/to/blueprint.json")?;
//! let interpreter = Interpreter::builder().with_seed(7).build();
//! for line in interpreter.run_blueprint(&blueprint).lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{
    Blueprint, BlueprintBuilder, DataKind, DataType, FlowKind, Node, NodeKind, Pin, PinDirection,
    Value, Wire,
};

// Execution
pub use crate::interpreter::{
    Interpreter, InterpreterBuilder, RunConfig, RunOutcome, RunReport, execute_blueprint,
};

// Trace output
pub use crate::trace::{TraceEntry, TraceFormatter, TraceLevel};

// Error types
pub use crate::error::{DocumentError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
