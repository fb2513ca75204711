//! Console output rendering

pub mod formatter;

pub use formatter::ConsoleFormatter;
