//! Trace Sink and the formatting of its lines.

pub mod formatter;
pub mod sink;

pub use formatter::TraceFormatter;
pub use sink::*;
