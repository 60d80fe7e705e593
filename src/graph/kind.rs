//! The closed set of node kinds.
//!
//! Kinds are split by the responsibility that handles them: [`FlowKind`]s are
//! dispatched by the control-flow interpreter, [`DataKind`]s are computed by
//! the pin evaluator. Each responsibility matches exhaustively on its own half,
//! so a new kind cannot be added without deciding how both sides treat it.
//! `ForLoop` is the one flow kind that also produces data (its `Index` pin).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Master macro declaring every kind, its serialized name and default title.
macro_rules! define_node_kinds {
    (
        flow { $( ($flow:ident, $flow_title:expr) ),* $(,)? }
        data { $( ($data:ident, $data_title:expr) ),* $(,)? }
    ) => {
        /// Exec-bearing kinds handled by the control-flow interpreter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum FlowKind {
            $( $flow ),*
        }

        /// Pure data kinds handled by the pin evaluator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum DataKind {
            $( $data ),*
        }

        impl FlowKind {
            pub const ALL: &'static [FlowKind] = &[ $( FlowKind::$flow ),* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( FlowKind::$flow => stringify!($flow) ),*
                }
            }

            pub fn default_title(self) -> &'static str {
                match self {
                    $( FlowKind::$flow => $flow_title ),*
                }
            }
        }

        impl DataKind {
            pub const ALL: &'static [DataKind] = &[ $( DataKind::$data ),* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( DataKind::$data => stringify!($data) ),*
                }
            }

            pub fn default_title(self) -> &'static str {
                match self {
                    $( DataKind::$data => $data_title ),*
                }
            }
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[
                $( NodeKind::Flow(FlowKind::$flow), )*
                $( NodeKind::Data(DataKind::$data), )*
            ];
        }
    };
}

define_node_kinds! {
    flow {
        (BeginPlay, "Begin Play"),
        (Branch, "Branch"),
        (Sequence, "Sequence"),
        (ForLoop, "For Loop"),
        (WhileLoop, "While Loop"),
        (PrintString, "Print String"),
        (SetVariable, "Set Variable"),
        (ClearVariable, "Clear Variable"),
    }
    data {
        (GetVariable, "Get Variable"),

        (StringLiteral, "String Literal"),
        (IntegerLiteral, "Integer Literal"),
        (FloatLiteral, "Float Literal"),
        (BooleanLiteral, "Boolean Literal"),

        (AddInteger, "Add Integer (+)"),
        (SubtractInteger, "Subtract Integer (-)"),
        (MultiplyInteger, "Multiply Integer (*)"),
        (DivideInteger, "Divide Integer (/)"),
        (ModuloInteger, "Modulo Integer (%)"),
        (ClampInteger, "Clamp Integer"),
        (RandomInteger, "Random Integer in Range"),
        (AbsoluteInteger, "Absolute Integer"),
        (MinInteger, "Min Integer"),
        (MaxInteger, "Max Integer"),

        (AddFloat, "Add Float (+)"),
        (SubtractFloat, "Subtract Float (-)"),
        (MultiplyFloat, "Multiply Float (*)"),
        (DivideFloat, "Divide Float (/)"),
        (PowerFloat, "Power (^)"),
        (SquareRoot, "Square Root"),
        (FloorFloat, "Floor"),
        (CeilFloat, "Ceil"),
        (RoundFloat, "Round"),
        (LerpFloat, "Lerp"),
        (ClampFloat, "Clamp Float"),
        (AbsoluteFloat, "Absolute Float"),
        (MinFloat, "Min Float"),
        (MaxFloat, "Max Float"),

        (GreaterThanInteger, "Greater Than (>)"),
        (LessThanInteger, "Less Than (<)"),
        (EqualsInteger, "Equals (==)"),
        (GreaterThanFloat, "Greater Than Float (>)"),
        (LessThanFloat, "Less Than Float (<)"),
        (EqualsFloat, "Equals Float (==)"),

        (ConcatString, "Concatenate Strings"),
        (StringLength, "String Length"),
        (ToString, "To String"),

        (BooleanNot, "NOT"),

        (IntToFloat, "Integer to Float"),
        (FloatToInt, "Float to Integer"),
    }
}

/// A node's behavior tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKind {
    Flow(FlowKind),
    Data(DataKind),
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Flow(kind) => kind.name(),
            NodeKind::Data(kind) => kind.name(),
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            NodeKind::Flow(kind) => kind.default_title(),
            NodeKind::Data(kind) => kind.default_title(),
        }
    }

    /// Looks a kind up by its serialized name, e.g. `"AddInteger"`.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Whether the control-flow interpreter dispatches this kind.
    pub fn is_exec_bearing(self) -> bool {
        matches!(self, NodeKind::Flow(_))
    }

    /// Whether the pin evaluator can compute an output of this kind.
    pub fn produces_data(self) -> bool {
        matches!(self, NodeKind::Data(_) | NodeKind::Flow(FlowKind::ForLoop))
    }
}

impl From<FlowKind> for NodeKind {
    fn from(kind: FlowKind) -> Self {
        NodeKind::Flow(kind)
    }
}

impl From<DataKind> for NodeKind {
    fn from(kind: DataKind) -> Self {
        NodeKind::Data(kind)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
