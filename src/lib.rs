//! # Kairo - Blueprint Execution Engine
//!
//! **Kairo** runs visual-scripting graphs: typed nodes connected by wires into
//! a control/data-flow program. Exec wires say "do this next"; data wires carry
//! values that are resolved lazily, on demand, when a node needs them.
//!
//! ## Core Workflow
//!
//! 1.  **Build or Load a Graph**: Assemble a [`graph::Blueprint`] with the
//!     [`graph::BlueprintBuilder`], or deserialize the editor's JSON with
//!     `Blueprint::from_json`.
//! 2.  **Configure**: Use `Interpreter::builder()` to set the step cap, the
//!     per-loop iteration cap and an optional random seed.
//! 3.  **Run**: `Interpreter::run_blueprint` walks the exec graph from the
//!     single "Begin Play" node and returns a [`interpreter::RunReport`]: the
//!     printed lines, warnings and errors in execution order, followed by a
//!     `---` separator and a dump of the final variables.
//!
//! Runs never fail with an error value. Bad operands, division by zero,
//! invalid loop bounds and runaway loops all degrade to a trace line plus a
//! documented fallback.
//!
//! ## Quick Start
//!
//! ```rust
//! use kairo::prelude::*;
//!
//! fn main() -> std::result::Result<(), GraphError> {
//!     let mut builder = BlueprintBuilder::new();
//!     let begin = builder.add_node(FlowKind::BeginPlay);
//!     let each = builder.add_node(FlowKind::ForLoop);
//!     let print = builder.add_node(FlowKind::PrintString);
//!
//!     builder.set_property(&each, "start", 1)?;
//!     builder.set_property(&each, "end", 3)?;
//!     builder.connect(&begin, "", &each, "")?;
//!     builder.connect(&each, "Loop Body", &print, "")?;
//!     builder.connect(&each, "Index", &print, "In String")?;
//!
//!     let interpreter = Interpreter::builder().with_max_steps(500).build();
//!     let report = interpreter.run_blueprint(&builder.build());
//!
//!     assert_eq!(report.printed(), vec!["1", "2", "3"]);
//!     assert_eq!(report.outcome, RunOutcome::Completed);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod interpreter;
pub mod prelude;
pub mod trace;
