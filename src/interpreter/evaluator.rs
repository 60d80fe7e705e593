//! Pin Evaluator: resolves data pins by walking wires backward through pure
//! nodes, memoizing results per cache generation.

use super::coercion::{
    all_numbers, clamp_swapped, normalized_modulo, pick_valid, round_half_up, to_number, truncate,
};
use super::index::GraphIndex;
use super::loops::LoopTracker;
use super::variables::VariableStore;
use crate::graph::registry::property_fallback;
use crate::graph::{DataKind, FlowKind, Node, NodeKind, Pin, Value};
use crate::trace::{TraceFormatter, TraceSink};
use ahash::{AHashMap, AHashSet};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::trace;

type OutputKey = (String, String);

/// Memoized node outputs stamped with the generation they were computed in.
///
/// The interpreter bumps the generation whenever mutable run state changes,
/// which invalidates every entry at once.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: AHashMap<OutputKey, (u64, Value)>,
    generation: u64,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self) {
        self.generation += 1;
    }

    fn get(&self, key: &OutputKey) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|(stamp, _)| *stamp == self.generation)
            .map(|(_, value)| value)
    }

    fn insert(&mut self, key: OutputKey, value: Value) {
        self.entries.insert(key, (self.generation, value));
    }
}

/// Kinds whose outputs depend on mutable state or randomness are recomputed
/// on every read.
fn is_memoizable(kind: NodeKind) -> bool {
    !matches!(
        kind,
        NodeKind::Data(DataKind::GetVariable)
            | NodeKind::Data(DataKind::RandomInteger)
            | NodeKind::Flow(FlowKind::ForLoop)
    )
}

fn zero() -> Value {
    Value::Number(0.0)
}

/// Borrowed view of one run's state used to resolve data pins.
pub struct PinEvaluator<'r, 'a> {
    pub(super) graph: &'r GraphIndex<'a>,
    pub(super) cache: &'r mut MemoCache,
    pub(super) variables: &'r VariableStore,
    pub(super) loops: &'r LoopTracker,
    pub(super) trace: &'r mut TraceSink,
    pub(super) rng: &'r mut StdRng,
    pub(super) evaluating: AHashSet<OutputKey>,
}

impl<'r, 'a> PinEvaluator<'r, 'a> {
    /// Evaluates the data input labelled `label`; absent if there is none.
    pub fn input(&mut self, node: &Node, label: &str) -> Value {
        match node.data_input(label) {
            Some(pin) => self.evaluate(node, pin),
            None => Value::Null,
        }
    }

    /// Resolves an input pin: follow its wire if connected, otherwise use the
    /// kind's property fallback.
    pub fn evaluate(&mut self, node: &Node, pin: &Pin) -> Value {
        if let Some(wire) = self.graph.wire_into(&node.id, &pin.id) {
            return match self.graph.node(&wire.from_node_id) {
                Some(source) => self.output(source, &wire.from_pin_id),
                None => Value::Null,
            };
        }
        match property_fallback(node.kind, &pin.label) {
            Some(key) => node.property(key),
            None => Value::Null,
        }
    }

    fn output(&mut self, source: &'a Node, pin_id: &str) -> Value {
        let key = (source.id.clone(), pin_id.to_string());
        let memoizable = is_memoizable(source.kind);
        if memoizable {
            if let Some(value) = self.cache.get(&key) {
                trace!(node = %source.id, pin = pin_id, "memo hit");
                return value.clone();
            }
        }
        if !self.evaluating.insert(key.clone()) {
            self.trace.warning(format!(
                "{} ({}) is part of a data wire cycle. Returning null.",
                source.title, source.kind
            ));
            return Value::Null;
        }
        let value = self.compute(source, pin_id);
        self.evaluating.remove(&key);
        if memoizable {
            self.cache.insert(key, value.clone());
        }
        value
    }

    fn compute(&mut self, source: &'a Node, pin_id: &str) -> Value {
        match source.kind {
            NodeKind::Flow(FlowKind::ForLoop) => {
                let is_index = source
                    .output_by_id(pin_id)
                    .is_some_and(|pin| pin.label == "Index");
                if is_index {
                    Value::from(self.loops.current_index(&source.id))
                } else {
                    Value::Null
                }
            }
            NodeKind::Flow(
                FlowKind::BeginPlay
                | FlowKind::Branch
                | FlowKind::Sequence
                | FlowKind::WhileLoop
                | FlowKind::PrintString
                | FlowKind::SetVariable
                | FlowKind::ClearVariable,
            ) => Value::Null,
            NodeKind::Data(kind) => self.compute_data(source, kind),
        }
    }

    fn compute_data(&mut self, node: &'a Node, kind: DataKind) -> Value {
        match kind {
            DataKind::GetVariable => node
                .property_name("name")
                .and_then(|name| self.variables.get(&name).cloned())
                .unwrap_or_default(),

            DataKind::StringLiteral
            | DataKind::IntegerLiteral
            | DataKind::FloatLiteral
            | DataKind::BooleanLiteral => node.property("value"),

            // --- Integer arithmetic ---
            DataKind::AddInteger => self.arithmetic(node, true, |a, b| a + b),
            DataKind::SubtractInteger => self.arithmetic(node, true, |a, b| a - b),
            DataKind::MultiplyInteger => self.arithmetic(node, true, |a, b| a * b),
            DataKind::DivideInteger => self.division(node, true, |a, b| a / b),
            DataKind::ModuloInteger => self.division(node, true, normalized_modulo),

            // --- Integer utilities ---
            DataKind::ClampInteger => self.clamp(node, true),
            DataKind::RandomInteger => self.random_integer(node),
            DataKind::AbsoluteInteger => self.unary(node, "Value", |v| truncate(v.abs())),
            DataKind::MinInteger => self.min_max(node, true, f64::min),
            DataKind::MaxInteger => self.min_max(node, true, f64::max),

            // --- Float arithmetic and utilities ---
            DataKind::AddFloat => self.arithmetic(node, false, |a, b| a + b),
            DataKind::SubtractFloat => self.arithmetic(node, false, |a, b| a - b),
            DataKind::MultiplyFloat => self.arithmetic(node, false, |a, b| a * b),
            DataKind::DivideFloat => self.division(node, false, |a, b| a / b),
            DataKind::PowerFloat => match self.numbers(node, &["Base", "Exponent"]) {
                Some(n) => Value::Number(n[0].powf(n[1])),
                None => zero(),
            },
            DataKind::SquareRoot => self.unary(node, "Value", |v| {
                if v < 0.0 { f64::NAN } else { v.sqrt() }
            }),
            DataKind::FloorFloat => self.unary(node, "Value", |v| truncate(v.floor())),
            DataKind::CeilFloat => self.unary(node, "Value", |v| truncate(v.ceil())),
            DataKind::RoundFloat => self.unary(node, "Value", round_half_up),
            DataKind::LerpFloat => self.lerp(node),
            DataKind::ClampFloat => self.clamp(node, false),
            DataKind::AbsoluteFloat => self.unary(node, "Value", f64::abs),
            DataKind::MinFloat => self.min_max(node, false, f64::min),
            DataKind::MaxFloat => self.min_max(node, false, f64::max),

            // --- Comparisons ---
            DataKind::GreaterThanInteger | DataKind::GreaterThanFloat => {
                self.comparison(node, |a, b| a > b)
            }
            DataKind::LessThanInteger | DataKind::LessThanFloat => {
                self.comparison(node, |a, b| a < b)
            }
            DataKind::EqualsInteger | DataKind::EqualsFloat => self.comparison(node, |a, b| a == b),

            // --- Strings ---
            DataKind::ConcatString => {
                let a = self.input(node, "A");
                let b = self.input(node, "B");
                Value::String(a.to_text() + &b.to_text())
            }
            DataKind::StringLength => {
                let text = self.input(node, "String").to_text();
                Value::from(text.chars().count() as i64)
            }
            DataKind::ToString => Value::String(self.input(node, "Value").to_text()),

            DataKind::BooleanNot => Value::Bool(!self.input(node, "Value").is_truthy()),

            // --- Conversions ---
            DataKind::IntToFloat => self.unary(node, "Value", |v| v),
            DataKind::FloatToInt => self.unary(node, "Value", truncate),
        }
    }

    /// Evaluates the labelled inputs and coerces them all to numbers,
    /// emitting a warning with the raw values if any of them is not numeric.
    fn numbers(&mut self, node: &Node, labels: &[&str]) -> Option<Vec<f64>> {
        let raw: Vec<Value> = labels.iter().map(|label| self.input(node, label)).collect();
        let numbers = all_numbers(&raw);
        if numbers.is_none() {
            self.warn_non_numeric(node, &raw);
        }
        numbers
    }

    fn warn_non_numeric(&mut self, node: &Node, raw: &[Value]) {
        self.trace.warning(format!(
            "{} ({}) expected numeric inputs but received {}.",
            node.title,
            node.kind,
            TraceFormatter::format_operands(raw)
        ));
    }

    fn arithmetic(&mut self, node: &Node, integer: bool, op: impl Fn(f64, f64) -> f64) -> Value {
        match self.numbers(node, &["A", "B"]) {
            Some(n) => Value::Number(Self::finish(op(n[0], n[1]), integer)),
            None => zero(),
        }
    }

    fn division(&mut self, node: &Node, integer: bool, op: impl Fn(f64, f64) -> f64) -> Value {
        match self.numbers(node, &["A", "B"]) {
            Some(n) if n[1] == 0.0 => {
                self.trace.warning(format!(
                    "{} ({}) attempted to divide by zero. Returning 0.",
                    node.title, node.kind
                ));
                zero()
            }
            Some(n) => Value::Number(Self::finish(op(n[0], n[1]), integer)),
            None => zero(),
        }
    }

    fn comparison(&mut self, node: &Node, op: impl Fn(f64, f64) -> bool) -> Value {
        match self.numbers(node, &["A", "B"]) {
            Some(n) => Value::Bool(op(n[0], n[1])),
            None => Value::Bool(false),
        }
    }

    fn unary(&mut self, node: &Node, label: &str, op: impl Fn(f64) -> f64) -> Value {
        match self.numbers(node, &[label]) {
            Some(n) => Value::Number(op(n[0])),
            None => zero(),
        }
    }

    fn clamp(&mut self, node: &Node, integer: bool) -> Value {
        match self.numbers(node, &["Value", "Min", "Max"]) {
            Some(n) => Value::Number(Self::finish(clamp_swapped(n[0], n[1], n[2]), integer)),
            None => zero(),
        }
    }

    fn min_max(&mut self, node: &Node, integer: bool, pick: fn(f64, f64) -> f64) -> Value {
        let raw = [self.input(node, "A"), self.input(node, "B")];
        match pick_valid(to_number(&raw[0]), to_number(&raw[1]), pick) {
            Some(v) => Value::Number(Self::finish(v, integer)),
            None => {
                self.warn_non_numeric(node, &raw);
                zero()
            }
        }
    }

    fn lerp(&mut self, node: &Node) -> Value {
        let raw_a = self.input(node, "A");
        let Some(a) = to_number(&raw_a) else {
            self.warn_non_numeric(node, &[raw_a]);
            return zero();
        };
        let b = to_number(&self.input(node, "B")).unwrap_or(a);
        let alpha = to_number(&self.input(node, "Alpha")).unwrap_or(0.0);
        Value::Number(a + (b - a) * alpha)
    }

    fn random_integer(&mut self, node: &Node) -> Value {
        let Some(n) = self.numbers(node, &["Min", "Max"]) else {
            return zero();
        };
        let (mut low, mut high) = (truncate(n[0]), truncate(n[1]));
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        let in_range = |v: f64| v >= i64::MIN as f64 && v <= i64::MAX as f64;
        if !in_range(low) || !in_range(high) {
            return Value::Number(low);
        }
        Value::from(self.rng.random_range(low as i64..=high as i64))
    }

    fn finish(value: f64, integer: bool) -> f64 {
        if integer && value.is_finite() {
            truncate(value)
        } else {
            value
        }
    }
}
