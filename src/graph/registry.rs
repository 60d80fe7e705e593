//! Node Kind Registry: the pin shape, default title and default properties of
//! every kind, plus the property each unwired input falls back to.

use super::kind::{DataKind, FlowKind, NodeKind};
use super::pin::{DataType, PinTemplate};
use serde_json::{Map, Value as JsonValue, json};

const EXEC_IN: PinTemplate = PinTemplate::input("", DataType::Exec);
const EXEC_OUT: PinTemplate = PinTemplate::output("", DataType::Exec);

/// Everything needed to instantiate a fresh node of a kind.
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    pub kind: NodeKind,
    pub title: &'static str,
    pub inputs: Vec<PinTemplate>,
    pub outputs: Vec<PinTemplate>,
    pub properties: Map<String, JsonValue>,
}

fn properties(value: JsonValue) -> Map<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    }
}

fn binary(operand: DataType, result: DataType) -> (Vec<PinTemplate>, Vec<PinTemplate>) {
    (
        vec![
            PinTemplate::input("A", operand),
            PinTemplate::input("B", operand),
        ],
        vec![PinTemplate::output("Result", result)],
    )
}

fn unary(input: &'static str, operand: DataType, result: DataType) -> (Vec<PinTemplate>, Vec<PinTemplate>) {
    (
        vec![PinTemplate::input(input, operand)],
        vec![PinTemplate::output("Result", result)],
    )
}

fn clamp(operand: DataType) -> (Vec<PinTemplate>, Vec<PinTemplate>) {
    (
        vec![
            PinTemplate::input("Value", operand),
            PinTemplate::input("Min", operand),
            PinTemplate::input("Max", operand),
        ],
        vec![PinTemplate::output("Result", operand)],
    )
}

fn literal(data_type: DataType) -> (Vec<PinTemplate>, Vec<PinTemplate>) {
    (vec![], vec![PinTemplate::output("Value", data_type)])
}

/// Returns the template for a kind.
pub fn template(kind: NodeKind) -> NodeTemplate {
    let (inputs, outputs, props) = match kind {
        NodeKind::Flow(flow) => flow_shape(flow),
        NodeKind::Data(data) => {
            let (inputs, outputs) = data_shape(data);
            (inputs, outputs, data_properties(data))
        }
    };
    NodeTemplate {
        kind,
        title: kind.default_title(),
        inputs,
        outputs,
        properties: properties(props),
    }
}

fn flow_shape(kind: FlowKind) -> (Vec<PinTemplate>, Vec<PinTemplate>, JsonValue) {
    match kind {
        FlowKind::BeginPlay => (vec![], vec![EXEC_OUT], json!({})),
        FlowKind::Branch => (
            vec![EXEC_IN, PinTemplate::input("Condition", DataType::Boolean)],
            vec![
                PinTemplate::output("True", DataType::Exec),
                PinTemplate::output("False", DataType::Exec),
            ],
            json!({}),
        ),
        FlowKind::Sequence => (
            vec![EXEC_IN],
            vec![
                PinTemplate::output("Then 0", DataType::Exec),
                PinTemplate::output("Then 1", DataType::Exec),
            ],
            json!({}),
        ),
        FlowKind::ForLoop => (
            vec![
                EXEC_IN,
                PinTemplate::input("Start", DataType::Integer),
                PinTemplate::input("End", DataType::Integer),
                PinTemplate::input("Step", DataType::Integer),
            ],
            vec![
                PinTemplate::output("Loop Body", DataType::Exec),
                PinTemplate::output("Index", DataType::Integer),
                PinTemplate::output("Completed", DataType::Exec),
            ],
            json!({ "start": 0, "end": 10, "step": 1 }),
        ),
        FlowKind::WhileLoop => (
            vec![EXEC_IN, PinTemplate::input("Condition", DataType::Boolean)],
            vec![
                PinTemplate::output("Loop Body", DataType::Exec),
                PinTemplate::output("Completed", DataType::Exec),
            ],
            json!({}),
        ),
        FlowKind::PrintString => (
            vec![EXEC_IN, PinTemplate::input("In String", DataType::String)],
            vec![EXEC_OUT],
            json!({ "text": "Hello World" }),
        ),
        FlowKind::SetVariable => (
            vec![EXEC_IN, PinTemplate::input("Value", DataType::Any)],
            vec![EXEC_OUT],
            json!({ "name": "myVar" }),
        ),
        FlowKind::ClearVariable => (vec![EXEC_IN], vec![EXEC_OUT], json!({ "name": "myVar" })),
    }
}

fn data_shape(kind: DataKind) -> (Vec<PinTemplate>, Vec<PinTemplate>) {
    use DataType::{Any, Boolean, Float, Integer, String};
    match kind {
        DataKind::GetVariable => (vec![], vec![PinTemplate::output("Value", Any)]),

        DataKind::StringLiteral => literal(String),
        DataKind::IntegerLiteral => literal(Integer),
        DataKind::FloatLiteral => literal(Float),
        DataKind::BooleanLiteral => literal(Boolean),

        DataKind::AddInteger
        | DataKind::SubtractInteger
        | DataKind::MultiplyInteger
        | DataKind::DivideInteger
        | DataKind::ModuloInteger
        | DataKind::MinInteger
        | DataKind::MaxInteger => binary(Integer, Integer),
        DataKind::ClampInteger => clamp(Integer),
        DataKind::RandomInteger => (
            vec![
                PinTemplate::input("Min", Integer),
                PinTemplate::input("Max", Integer),
            ],
            vec![PinTemplate::output("Result", Integer)],
        ),
        DataKind::AbsoluteInteger => unary("Value", Integer, Integer),

        DataKind::AddFloat
        | DataKind::SubtractFloat
        | DataKind::MultiplyFloat
        | DataKind::DivideFloat
        | DataKind::MinFloat
        | DataKind::MaxFloat => binary(Float, Float),
        DataKind::PowerFloat => (
            vec![
                PinTemplate::input("Base", Float),
                PinTemplate::input("Exponent", Float),
            ],
            vec![PinTemplate::output("Result", Float)],
        ),
        DataKind::SquareRoot | DataKind::AbsoluteFloat => unary("Value", Float, Float),
        DataKind::FloorFloat | DataKind::CeilFloat | DataKind::RoundFloat => {
            unary("Value", Float, Integer)
        }
        DataKind::LerpFloat => (
            vec![
                PinTemplate::input("A", Float),
                PinTemplate::input("B", Float),
                PinTemplate::input("Alpha", Float),
            ],
            vec![PinTemplate::output("Result", Float)],
        ),
        DataKind::ClampFloat => clamp(Float),

        DataKind::GreaterThanInteger | DataKind::LessThanInteger | DataKind::EqualsInteger => {
            binary(Integer, Boolean)
        }
        DataKind::GreaterThanFloat | DataKind::LessThanFloat | DataKind::EqualsFloat => {
            binary(Float, Boolean)
        }

        DataKind::ConcatString => binary(String, String),
        DataKind::StringLength => (
            vec![PinTemplate::input("String", String)],
            vec![PinTemplate::output("Length", Integer)],
        ),
        DataKind::ToString => unary("Value", Any, String),

        DataKind::BooleanNot => unary("Value", Boolean, Boolean),

        DataKind::IntToFloat => unary("Value", Integer, Float),
        DataKind::FloatToInt => unary("Value", Float, Integer),
    }
}

fn data_properties(kind: DataKind) -> JsonValue {
    match kind {
        DataKind::GetVariable => json!({ "name": "myVar" }),
        DataKind::StringLiteral => json!({ "value": "" }),
        DataKind::IntegerLiteral => json!({ "value": 0 }),
        DataKind::FloatLiteral => json!({ "value": 0.0 }),
        DataKind::BooleanLiteral => json!({ "value": false }),
        _ => json!({}),
    }
}

/// The property an unwired input pin reads instead of a wire.
///
/// Only print and loop-bound inputs fall back to properties; literals read
/// their `value` property directly and every other unwired input is absent.
pub fn property_fallback(kind: NodeKind, input_label: &str) -> Option<&'static str> {
    match (kind, input_label) {
        (NodeKind::Flow(FlowKind::PrintString), "In String") => Some("text"),
        (NodeKind::Flow(FlowKind::ForLoop), "Start") => Some("start"),
        (NodeKind::Flow(FlowKind::ForLoop), "End") => Some("end"),
        (NodeKind::Flow(FlowKind::ForLoop), "Step") => Some("step"),
        _ => None,
    }
}
