use crate::graph::{Value, format_number};

/// Formats values for the final variable dump.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a value as a JSON-like literal: strings quoted and escaped,
    /// non-finite numbers and absent values as `null`.
    pub fn format_literal(value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("{}", b),
            Value::Number(n) if n.is_finite() => format_number(*n),
            Value::Number(_) => "null".to_string(),
            Value::String(s) => {
                serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
            }
        }
    }

    /// One line of the variable dump.
    pub fn format_variable(name: &str, value: &Value) -> String {
        format!("  {}: {}", name, Self::format_literal(value))
    }

    /// Renders raw operand values for warning lines, e.g. `abc and 3`.
    pub fn format_operands(values: &[Value]) -> String {
        itertools::join(values.iter(), " and ")
    }
}
