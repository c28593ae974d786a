//! Report formatters and the registry that selects them by id.
//!
//! A formatter turns per-file lint results into report fragments. The host
//! calls `start_format` once, then `format_results` (or `read_error` for files
//! that could not be loaded) per file, then `end_format`, and concatenates the
//! returned strings in that order.

pub mod checkstyle;

use crate::models::FileResult;
use std::collections::BTreeMap;

pub use checkstyle::CheckstyleXml;

/// Capabilities every report formatter provides. All methods are pure.
pub trait Formatter: Send + Sync {
    /// Stable identifier used for lookup, e.g. `checkstyle-xml`.
    fn id(&self) -> &'static str;
    /// Human-readable display name.
    fn name(&self) -> &'static str;
    /// Text emitted before any per-file output.
    fn start_format(&self) -> String;
    /// Text emitted after all per-file output.
    fn end_format(&self) -> String;
    /// Fragment for a file that could not be read or parsed.
    fn read_error(&self, filename: &str, message: &str) -> String;
    /// Fragment for the lint results of one file.
    fn format_results(&self, results: &FileResult, filename: &str) -> String;
}

/// Explicit id -> formatter mapping, populated at startup.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in formatter.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(CheckstyleXml));
        reg
    }

    /// Add a formatter, returning the one previously registered under the
    /// same id.
    pub fn register(&mut self, formatter: Box<dyn Formatter>) -> Option<Box<dyn Formatter>> {
        self.formatters.insert(formatter.id(), formatter)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Formatter> {
        self.formatters.get(id).map(|f| -> &dyn Formatter { f.as_ref() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.formatters.contains_key(id)
    }

    /// Registered formatters ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(|f| -> &dyn Formatter { f.as_ref() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Formatter for Plain {
        fn id(&self) -> &'static str {
            "checkstyle-xml"
        }
        fn name(&self) -> &'static str {
            "Plain override"
        }
        fn start_format(&self) -> String {
            String::new()
        }
        fn end_format(&self) -> String {
            String::new()
        }
        fn read_error(&self, filename: &str, message: &str) -> String {
            format!("{filename}: {message}\n")
        }
        fn format_results(&self, results: &FileResult, filename: &str) -> String {
            format!("{filename}: {}\n", results.messages.len())
        }
    }

    #[test]
    fn test_defaults_register_checkstyle() {
        let reg = FormatterRegistry::with_defaults();
        let f = reg.get("checkstyle-xml").expect("checkstyle registered");
        assert_eq!(f.name(), "Checkstyle XML format");
        assert!(reg.get("compact").is_none());
        assert_eq!(reg.iter().count(), 1);
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut reg = FormatterRegistry::with_defaults();
        let previous = reg.register(Box::new(Plain));
        assert_eq!(previous.map(|p| p.name()), Some("Checkstyle XML format"));
        assert_eq!(reg.get("checkstyle-xml").map(|f| f.name()), Some("Plain override"));
        assert!(reg.contains("checkstyle-xml"));
    }
}
