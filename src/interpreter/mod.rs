//! Control-Flow Interpreter.
//!
//! A run seeds a FIFO queue with the entry node and dispatches one node per
//! step. Exec-bearing kinds decide which exec outputs to follow; data inputs
//! are pulled on demand through the [`PinEvaluator`]. Loops re-enqueue
//! themselves behind their body, so the next iteration happens after the
//! work already queued, never through recursion.

use crate::graph::{Blueprint, FlowKind, Node, NodeKind, Wire};
use crate::trace::{TraceEntry, TraceLevel, TraceSink};
use ahash::AHashSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

pub mod coercion;
pub mod evaluator;
pub mod index;
pub mod loops;
pub mod variables;

pub use evaluator::{MemoCache, PinEvaluator};
pub use index::GraphIndex;
pub use loops::{CountingLoop, LoopState, LoopStep, LoopTracker};
pub use variables::VariableStore;

use coercion::to_integer;

/// Title of the entry kind as it appears in the structural error line.
const ENTRY_TITLE: &str = "Begin Play";

/// Limits and seeding for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Total node dispatches allowed before the run is aborted.
    pub max_steps: usize,
    /// Iterations a single loop node may perform before it is abandoned.
    pub max_loop_iterations: u32,
    /// Seed for `RandomInteger`; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            max_loop_iterations: 1000,
            seed: None,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The queue drained.
    Completed,
    /// The global step cap tripped with work still queued.
    StepLimitReached,
    /// No entry node exists; nothing was executed.
    MissingEntry,
}

/// The ordered output of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub steps: usize,
    entries: Vec<TraceEntry>,
}

impl RunReport {
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.entries.into_iter().map(|e| e.text).collect()
    }

    /// Lines produced by print nodes only.
    pub fn printed(&self) -> Vec<&str> {
        self.lines_at(TraceLevel::Print)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.lines_at(TraceLevel::Warning)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.lines_at(TraceLevel::Error)
    }

    fn lines_at(&self, level: TraceLevel) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.text.as_str())
            .collect()
    }
}

pub struct InterpreterBuilder {
    config: RunConfig,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = max_steps;
        self
    }

    pub fn with_max_loop_iterations(mut self, max_loop_iterations: u32) -> Self {
        self.config.max_loop_iterations = max_loop_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            config: self.config,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes blueprints. Holds configuration only; every run gets fresh state.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: RunConfig,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run_blueprint(&self, blueprint: &Blueprint) -> RunReport {
        self.run(&blueprint.nodes, &blueprint.wires)
    }

    /// Runs the graph to completion or until a guard trips.
    pub fn run(&self, nodes: &[Node], wires: &[Wire]) -> RunReport {
        let mut entries = nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Flow(FlowKind::BeginPlay));
        let Some(entry) = entries.next() else {
            let mut trace = TraceSink::new();
            trace.error(format!("\"{}\" entry node not found.", ENTRY_TITLE));
            return RunReport {
                outcome: RunOutcome::MissingEntry,
                steps: 0,
                entries: trace.into_entries(),
            };
        };
        let extra_entries = entries.count();

        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut run = Run {
            config: self.config,
            graph: GraphIndex::new(nodes, wires),
            variables: VariableStore::new(),
            loops: LoopTracker::new(self.config.max_loop_iterations),
            cache: MemoCache::new(),
            trace: TraceSink::new(),
            rng,
            queue: VecDeque::new(),
            steps: 0,
        };
        if extra_entries > 0 {
            run.trace.warning(format!(
                "Found {} \"{}\" nodes; starting from '{}'.",
                extra_entries + 1,
                ENTRY_TITLE,
                entry.title
            ));
        }
        run.execute(entry)
    }
}

/// Runs a blueprint with the default configuration and returns its lines.
pub fn execute_blueprint(blueprint: &Blueprint) -> Vec<String> {
    Interpreter::new().run_blueprint(blueprint).into_lines()
}

/// State owned by a single run.
struct Run<'a> {
    config: RunConfig,
    graph: GraphIndex<'a>,
    variables: VariableStore,
    loops: LoopTracker,
    cache: MemoCache,
    trace: TraceSink,
    rng: StdRng,
    queue: VecDeque<&'a Node>,
    steps: usize,
}

impl<'a> Run<'a> {
    fn evaluator(&mut self) -> PinEvaluator<'_, 'a> {
        PinEvaluator {
            graph: &self.graph,
            cache: &mut self.cache,
            variables: &self.variables,
            loops: &self.loops,
            trace: &mut self.trace,
            rng: &mut self.rng,
            evaluating: AHashSet::new(),
        }
    }

    fn execute(mut self, entry: &'a Node) -> RunReport {
        self.queue.push_back(entry);
        let outcome = loop {
            let Some(node) = self.queue.pop_front() else {
                break RunOutcome::Completed;
            };
            if self.steps >= self.config.max_steps {
                self.trace
                    .error("Maximum execution limit reached. Possible infinite loop.");
                break RunOutcome::StepLimitReached;
            }
            self.steps += 1;
            // Cached data results only live for one exec step
            self.cache.bump();
            debug!(step = self.steps, node = %node.id, kind = %node.kind, "dispatch");
            self.dispatch(node);
        };
        debug!(
            ?outcome,
            steps = self.steps,
            variables = self.variables.len(),
            "run finished"
        );

        self.trace.append_trailer(self.variables.iter());
        RunReport {
            outcome,
            steps: self.steps,
            entries: self.trace.into_entries(),
        }
    }

    fn dispatch(&mut self, node: &'a Node) {
        match node.kind {
            NodeKind::Flow(flow) => match flow {
                FlowKind::BeginPlay => self.follow_labelled(node, ""),
                FlowKind::Sequence => {
                    for pin in node.exec_outputs() {
                        self.enqueue_from(&pin.id);
                    }
                }
                FlowKind::PrintString => {
                    if let Some(pin) = node.inputs.iter().find(|p| !p.is_exec()) {
                        let value = self.evaluator().evaluate(node, pin);
                        self.trace.print(value.to_text());
                    }
                    self.follow_labelled(node, "");
                }
                FlowKind::SetVariable => {
                    let value = self.evaluator().input(node, "Value");
                    match node.property_name("name") {
                        Some(name) => {
                            self.variables.set(name, value);
                            self.cache.bump();
                        }
                        None => self.trace.warning(format!(
                            "{} ({}) has no variable name. Skipping.",
                            node.title, node.kind
                        )),
                    }
                    self.follow_labelled(node, "");
                }
                FlowKind::ClearVariable => {
                    if let Some(name) = node.property_name("name") {
                        self.variables.clear(&name);
                        self.cache.bump();
                    }
                    self.follow_labelled(node, "");
                }
                FlowKind::Branch => {
                    let condition = self.evaluator().input(node, "Condition").is_truthy();
                    self.follow_labelled(node, if condition { "True" } else { "False" });
                }
                FlowKind::ForLoop => self.for_loop(node),
                FlowKind::WhileLoop => self.while_loop(node),
            },
            // Pure kinds have no exec outputs, so this enqueues nothing
            NodeKind::Data(_) => self.follow_labelled(node, ""),
        }
    }

    fn enqueue_from(&mut self, pin_id: &str) {
        let successors = self.graph.successors(pin_id);
        self.queue.extend(successors);
    }

    /// Enqueues the destinations of every exec output carrying `label`.
    fn follow_labelled(&mut self, node: &'a Node, label: &str) {
        for pin in node.exec_outputs_labelled(label) {
            self.enqueue_from(&pin.id);
        }
    }

    fn for_loop(&mut self, node: &'a Node) {
        if !self.loops.is_active(&node.id) && !self.start_counting_loop(node) {
            self.follow_labelled(node, "Completed");
            return;
        }
        let step = self.loops.advance_counting(&node.id);
        self.after_loop_step(node, step);
    }

    /// Reads the bounds of a counting loop and registers its state. Returns
    /// false if the bounds are unusable.
    fn start_counting_loop(&mut self, node: &'a Node) -> bool {
        let (start_raw, end_raw, step_raw) = {
            let mut evaluator = self.evaluator();
            (
                evaluator.input(node, "Start"),
                evaluator.input(node, "End"),
                evaluator.input(node, "Step"),
            )
        };
        let (Some(start), Some(end)) = (to_integer(&start_raw), to_integer(&end_raw)) else {
            self.trace.warning(format!(
                "{} ({}) received invalid bounds {} and {}. Skipping loop.",
                node.title, node.kind, start_raw, end_raw
            ));
            return false;
        };
        let step = to_integer(&step_raw).map(|s| s as i64);
        let (state, substituted) = CountingLoop::new(start as i64, end as i64, step);
        if substituted {
            self.trace.warning(format!(
                "{} ({}) cannot use a step of {}. Using {} instead.",
                node.title, node.kind, step_raw, state.step
            ));
        }
        self.loops.begin_counting(&node.id, state);
        true
    }

    fn while_loop(&mut self, node: &'a Node) {
        let condition = self.evaluator().input(node, "Condition").is_truthy();
        let step = self.loops.advance_conditional(&node.id, condition);
        self.after_loop_step(node, step);
    }

    fn after_loop_step(&mut self, node: &'a Node, step: LoopStep) {
        self.cache.bump();
        match step {
            LoopStep::Iterate => {
                self.follow_labelled(node, "Loop Body");
                self.queue.push_back(node);
            }
            LoopStep::Completed => self.follow_labelled(node, "Completed"),
            LoopStep::GuardTripped => {
                self.trace.error(format!(
                    "{} ({}) exceeded the maximum of {} iterations. Breaking out of loop.",
                    node.title, node.kind, self.config.max_loop_iterations
                ));
                self.follow_labelled(node, "Completed");
            }
        }
    }
}
