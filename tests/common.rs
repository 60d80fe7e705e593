//! Common test utilities for assembling blueprints.
use kairo::graph::registry;
use kairo::prelude::*;
use serde_json::Value as JsonValue;

/// A blueprint under construction that already holds its Begin Play node.
#[allow(dead_code)]
pub struct Fixture {
    pub builder: BlueprintBuilder,
    pub begin: String,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let mut builder = BlueprintBuilder::new();
        let begin = builder.add_node(FlowKind::BeginPlay);
        Self { builder, begin }
    }

    pub fn add(&mut self, kind: impl Into<NodeKind>) -> String {
        self.builder.add_node(kind)
    }

    pub fn set(&mut self, node: &str, key: &str, value: impl Into<JsonValue>) {
        self.builder
            .set_property(node, key, value)
            .expect("Failed to set property");
    }

    pub fn wire(&mut self, from: &str, from_label: &str, to: &str, to_label: &str) {
        self.builder
            .connect(from, from_label, to, to_label)
            .expect("Failed to connect pins");
    }

    /// Adds a literal node whose kind matches the JSON value.
    pub fn literal(&mut self, value: impl Into<JsonValue>) -> String {
        let value = value.into();
        let kind = match &value {
            JsonValue::Bool(_) => DataKind::BooleanLiteral,
            JsonValue::Number(n) if n.is_i64() => DataKind::IntegerLiteral,
            JsonValue::Number(_) => DataKind::FloatLiteral,
            _ => DataKind::StringLiteral,
        };
        let id = self.add(kind);
        self.set(&id, "value", value);
        id
    }

    pub fn get_variable(&mut self, name: &str) -> String {
        let id = self.add(DataKind::GetVariable);
        self.set(&id, "name", name);
        id
    }

    /// Print node following `prev`'s exec output `prev_label`, printing the
    /// data output `source_label` of `source`.
    pub fn print_after(
        &mut self,
        prev: &str,
        prev_label: &str,
        source: &str,
        source_label: &str,
    ) -> String {
        let print = self.add(FlowKind::PrintString);
        self.wire(prev, prev_label, &print, "");
        self.wire(source, source_label, &print, "In String");
        print
    }

    /// Print node with a fixed `text` property following `prev`.
    pub fn print_text_after(&mut self, prev: &str, prev_label: &str, text: &str) -> String {
        let print = self.add(FlowKind::PrintString);
        self.set(&print, "text", text);
        self.wire(prev, prev_label, &print, "");
        print
    }

    /// SetVariable node following `prev`, fed by the `Value` output of
    /// `source` when one is given.
    pub fn set_variable_after(
        &mut self,
        prev: &str,
        prev_label: &str,
        name: &str,
        source: Option<(&str, &str)>,
    ) -> String {
        let set = self.add(FlowKind::SetVariable);
        self.set(&set, "name", name);
        self.wire(prev, prev_label, &set, "");
        if let Some((node, label)) = source {
            self.wire(node, label, &set, "Value");
        }
        set
    }

    pub fn run(self) -> RunReport {
        self.run_with(&seeded())
    }

    pub fn run_with(self, interpreter: &Interpreter) -> RunReport {
        interpreter.run_blueprint(&self.builder.build())
    }
}

/// Interpreter with default limits and a fixed seed.
#[allow(dead_code)]
pub fn seeded() -> Interpreter {
    Interpreter::builder().with_seed(7).build()
}

/// Label of the single output of a pure kind.
#[allow(dead_code)]
pub fn result_label(kind: DataKind) -> &'static str {
    registry::template(kind.into()).outputs[0].label
}

/// Runs one pure node with literal operands wired into the named inputs and
/// prints its result.
#[allow(dead_code)]
pub fn evaluate_kind(kind: DataKind, operands: &[(&str, JsonValue)]) -> RunReport {
    let mut fx = Fixture::new();
    let node = fx.add(kind);
    for (label, value) in operands {
        let literal = fx.literal(value.clone());
        fx.wire(&literal, "Value", &node, label);
    }
    let begin = fx.begin.clone();
    fx.print_after(&begin, "", &node, result_label(kind));
    fx.run()
}

/// The printed result of [`evaluate_kind`].
#[allow(dead_code)]
pub fn printed_result(kind: DataKind, operands: &[(&str, JsonValue)]) -> String {
    let report = evaluate_kind(kind, operands);
    report.printed()[0].to_string()
}

/// A document in the editor's camelCase shape.
///
/// Logic: `counter = 2`, then `for i in 1..=counter { print(i + 10) }`,
/// then print "done".
#[allow(dead_code)]
pub const EDITOR_BLUEPRINT_JSON: &str = r#"{
  "nodes": [
    {
      "id": "n1", "type": "BeginPlay", "title": "Begin Play", "x": 0, "y": 0,
      "inputs": [],
      "outputs": [
        { "id": "n1_OUTPUT_EXEC_0", "nodeId": "n1", "label": "", "dataType": "EXEC", "direction": "OUTPUT" }
      ],
      "properties": {}
    },
    {
      "id": "n2", "type": "IntegerLiteral", "title": "Integer", "x": 0, "y": 120,
      "inputs": [],
      "outputs": [
        { "id": "n2_OUTPUT_Value_0", "nodeId": "n2", "label": "Value", "dataType": "INTEGER", "direction": "OUTPUT" }
      ],
      "properties": { "value": 2 }
    },
    {
      "id": "n3", "type": "SetVariable", "title": "Set", "x": 200, "y": 0,
      "inputs": [
        { "id": "n3_INPUT_EXEC_0", "nodeId": "n3", "label": "", "dataType": "EXEC", "direction": "INPUT" },
        { "id": "n3_INPUT_Value_1", "nodeId": "n3", "label": "Value", "dataType": "ANY", "direction": "INPUT" }
      ],
      "outputs": [
        { "id": "n3_OUTPUT_EXEC_0", "nodeId": "n3", "label": "", "dataType": "EXEC", "direction": "OUTPUT" }
      ],
      "properties": { "name": "counter" },
      "comment": "loop bound"
    },
    {
      "id": "n4", "type": "GetVariable", "title": "Get", "x": 200, "y": 120,
      "inputs": [],
      "outputs": [
        { "id": "n4_OUTPUT_Value_0", "nodeId": "n4", "label": "Value", "dataType": "ANY", "direction": "OUTPUT" }
      ],
      "properties": { "name": "counter" }
    },
    {
      "id": "n5", "type": "ForLoop", "title": "For Loop", "x": 400, "y": 0,
      "inputs": [
        { "id": "n5_INPUT_EXEC_0", "nodeId": "n5", "label": "", "dataType": "EXEC", "direction": "INPUT" },
        { "id": "n5_INPUT_Start_1", "nodeId": "n5", "label": "Start", "dataType": "INTEGER", "direction": "INPUT" },
        { "id": "n5_INPUT_End_2", "nodeId": "n5", "label": "End", "dataType": "INTEGER", "direction": "INPUT" },
        { "id": "n5_INPUT_Step_3", "nodeId": "n5", "label": "Step", "dataType": "INTEGER", "direction": "INPUT" }
      ],
      "outputs": [
        { "id": "n5_OUTPUT_Loop Body_0", "nodeId": "n5", "label": "Loop Body", "dataType": "EXEC", "direction": "OUTPUT" },
        { "id": "n5_OUTPUT_Index_1", "nodeId": "n5", "label": "Index", "dataType": "INTEGER", "direction": "OUTPUT" },
        { "id": "n5_OUTPUT_Completed_2", "nodeId": "n5", "label": "Completed", "dataType": "EXEC", "direction": "OUTPUT" }
      ],
      "properties": { "start": 1, "end": 10, "step": 1 }
    },
    {
      "id": "n6", "type": "IntegerLiteral", "title": "Integer", "x": 400, "y": 200,
      "inputs": [],
      "outputs": [
        { "id": "n6_OUTPUT_Value_0", "nodeId": "n6", "label": "Value", "dataType": "INTEGER", "direction": "OUTPUT" }
      ],
      "properties": { "value": 10 }
    },
    {
      "id": "n7", "type": "AddInteger", "title": "Add", "x": 600, "y": 120,
      "inputs": [
        { "id": "n7_INPUT_A_0", "nodeId": "n7", "label": "A", "dataType": "INTEGER", "direction": "INPUT" },
        { "id": "n7_INPUT_B_1", "nodeId": "n7", "label": "B", "dataType": "INTEGER", "direction": "INPUT" }
      ],
      "outputs": [
        { "id": "n7_OUTPUT_Result_0", "nodeId": "n7", "label": "Result", "dataType": "INTEGER", "direction": "OUTPUT" }
      ],
      "properties": {}
    },
    {
      "id": "n8", "type": "PrintString", "title": "Print String", "x": 800, "y": 0,
      "inputs": [
        { "id": "n8_INPUT_EXEC_0", "nodeId": "n8", "label": "", "dataType": "EXEC", "direction": "INPUT" },
        { "id": "n8_INPUT_In String_1", "nodeId": "n8", "label": "In String", "dataType": "STRING", "direction": "INPUT" }
      ],
      "outputs": [
        { "id": "n8_OUTPUT_EXEC_0", "nodeId": "n8", "label": "", "dataType": "EXEC", "direction": "OUTPUT" }
      ],
      "properties": { "text": "unused" }
    },
    {
      "id": "n9", "type": "PrintString", "title": "Print String", "x": 800, "y": 200,
      "inputs": [
        { "id": "n9_INPUT_EXEC_0", "nodeId": "n9", "label": "", "dataType": "EXEC", "direction": "INPUT" },
        { "id": "n9_INPUT_In String_1", "nodeId": "n9", "label": "In String", "dataType": "STRING", "direction": "INPUT" }
      ],
      "outputs": [
        { "id": "n9_OUTPUT_EXEC_0", "nodeId": "n9", "label": "", "dataType": "EXEC", "direction": "OUTPUT" }
      ],
      "properties": { "text": "done" }
    }
  ],
  "wires": [
    { "id": "w1", "fromNodeId": "n1", "fromPinId": "n1_OUTPUT_EXEC_0", "toNodeId": "n3", "toPinId": "n3_INPUT_EXEC_0", "dataType": "EXEC" },
    { "id": "w2", "fromNodeId": "n2", "fromPinId": "n2_OUTPUT_Value_0", "toNodeId": "n3", "toPinId": "n3_INPUT_Value_1", "dataType": "INTEGER" },
    { "id": "w3", "fromNodeId": "n3", "fromPinId": "n3_OUTPUT_EXEC_0", "toNodeId": "n5", "toPinId": "n5_INPUT_EXEC_0", "dataType": "EXEC" },
    { "id": "w4", "fromNodeId": "n4", "fromPinId": "n4_OUTPUT_Value_0", "toNodeId": "n5", "toPinId": "n5_INPUT_End_2", "dataType": "INTEGER" },
    { "id": "w5", "fromNodeId": "n5", "fromPinId": "n5_OUTPUT_Loop Body_0", "toNodeId": "n8", "toPinId": "n8_INPUT_EXEC_0", "dataType": "EXEC" },
    { "id": "w6", "fromNodeId": "n5", "fromPinId": "n5_OUTPUT_Index_1", "toNodeId": "n7", "toPinId": "n7_INPUT_A_0", "dataType": "INTEGER" },
    { "id": "w7", "fromNodeId": "n6", "fromPinId": "n6_OUTPUT_Value_0", "toNodeId": "n7", "toPinId": "n7_INPUT_B_1", "dataType": "INTEGER" },
    { "id": "w8", "fromNodeId": "n7", "fromPinId": "n7_OUTPUT_Result_0", "toNodeId": "n8", "toPinId": "n8_INPUT_In String_1", "dataType": "INTEGER" },
    { "id": "w9", "fromNodeId": "n5", "fromPinId": "n5_OUTPUT_Completed_2", "toNodeId": "n9", "toPinId": "n9_INPUT_EXEC_0", "dataType": "EXEC" }
  ]
}"#;

/// A document with no entry node.
#[allow(dead_code)]
pub const NO_ENTRY_JSON: &str = r#"{
  "nodes": [
    {
      "id": "p1", "type": "PrintString", "title": "Print String",
      "inputs": [
        { "id": "p1_INPUT_EXEC_0", "nodeId": "p1", "label": "", "dataType": "EXEC", "direction": "INPUT" }
      ],
      "outputs": [],
      "properties": { "text": "never" }
    }
  ],
  "wires": []
}"#;
