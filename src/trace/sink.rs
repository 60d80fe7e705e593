use super::formatter::TraceFormatter;
use crate::graph::Value;
use tracing::debug;

/// Separator between the run's output and the variable dump.
pub const SEPARATOR: &str = "---";
/// Dump line used when the variable store is empty.
pub const NO_VARIABLES: &str = "  (No variables in memory)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    Print,
    Warning,
    Error,
    Trailer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    pub level: TraceLevel,
    pub text: String,
}

/// Ordered textual output of a run.
#[derive(Debug, Default)]
pub struct TraceSink {
    entries: Vec<TraceEntry>,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, level: TraceLevel, text: String) {
        self.entries.push(TraceEntry { level, text });
    }

    pub fn print(&mut self, text: impl Into<String>) {
        self.push(TraceLevel::Print, text.into());
    }

    pub fn warning(&mut self, message: impl AsRef<str>) {
        let text = format!("Warning: {}", message.as_ref());
        debug!(target: "kairo::trace", "{}", text);
        self.push(TraceLevel::Warning, text);
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        let text = format!("Error: {}", message.as_ref());
        debug!(target: "kairo::trace", "{}", text);
        self.push(TraceLevel::Error, text);
    }

    /// Appends the `---` separator followed by the variable dump.
    pub fn append_trailer<'a>(&mut self, variables: impl IntoIterator<Item = (&'a String, &'a Value)>) {
        self.push(TraceLevel::Trailer, SEPARATOR.to_string());
        let mut empty = true;
        for (name, value) in variables {
            empty = false;
            self.push(TraceLevel::Trailer, TraceFormatter::format_variable(name, value));
        }
        if empty {
            self.push(TraceLevel::Trailer, NO_VARIABLES.to_string());
        }
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}
