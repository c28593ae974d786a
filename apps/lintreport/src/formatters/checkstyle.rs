//! Checkstyle XML output.
//!
//! Produces the de facto Checkstyle report shape understood by CI dashboards:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?><checkstyle>
//!   <file name="a.css"><error line=".." column=".." severity=".." message=".." source=".." identifier=".."/></file>
//! </checkstyle>
//! ```
//!
//! Output is unindented. Attribute order is fixed and consumers match on it,
//! so it must not change. The `<file name>` of regular results is written
//! verbatim while read errors escape it; existing consumers rely on both.

use super::Formatter;
use crate::models::{FileResult, RuleRef};
use crate::xml::xml_escape;

const SOURCE_PREFIX: &str = "net.csslint.";

/// The `checkstyle-xml` formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckstyleXml;

impl CheckstyleXml {
    pub const ID: &'static str = "checkstyle-xml";
    pub const NAME: &'static str = "Checkstyle XML format";
}

/// Checkstyle sources resemble Java class names, e.g. `net.csslint.SomeRuleName`.
fn generate_source(rule: Option<&RuleRef>) -> String {
    match rule.and_then(|r| r.name.as_deref()) {
        Some(name) => {
            let mut s = String::with_capacity(SOURCE_PREFIX.len() + name.len());
            s.push_str(SOURCE_PREFIX);
            s.extend(name.chars().filter(|c| !c.is_whitespace()));
            s
        }
        None => format!("{SOURCE_PREFIX}generic"),
    }
}

fn generate_identifier(rule: Option<&RuleRef>) -> &str {
    rule.and_then(|r| r.id.as_deref()).unwrap_or("generic")
}

impl Formatter for CheckstyleXml {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn start_format(&self) -> String {
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><checkstyle>".to_string()
    }

    fn end_format(&self) -> String {
        "</checkstyle>".to_string()
    }

    fn read_error(&self, filename: &str, message: &str) -> String {
        format!(
            "<file name=\"{}\"><error line=\"0\" column=\"0\" severity=\"error\" source=\"net.csslint.readerror\" identifier=\"read-error\" message=\"{}\"></error></file>",
            xml_escape(filename),
            xml_escape(message)
        )
    }

    fn format_results(&self, results: &FileResult, filename: &str) -> String {
        if results.messages.is_empty() {
            return String::new();
        }
        let mut out = format!("<file name=\"{}\">", filename);
        for m in &results.messages {
            if m.rollup {
                tracing::trace!(file = filename, message = %m.message, "skipping rollup");
                continue;
            }
            let rule = m.rule.as_ref();
            out.push_str(&format!(
                "<error line=\"{}\" column=\"{}\" severity=\"{}\" message=\"{}\" source=\"{}\" identifier=\"{}\"/>",
                m.line,
                m.col,
                m.severity,
                xml_escape(&m.message),
                generate_source(rule),
                generate_identifier(rule)
            ));
        }
        out.push_str("</file>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diagnostic;

    fn results(messages: Vec<Diagnostic>) -> FileResult {
        FileResult {
            filename: "f.css".into(),
            messages,
        }
    }

    #[test]
    fn test_start_and_end_are_constant() {
        let f = CheckstyleXml;
        assert_eq!(
            f.start_format(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><checkstyle>"
        );
        assert_eq!(f.end_format(), "</checkstyle>");
        assert_eq!(f.start_format(), CheckstyleXml.start_format());
    }

    #[test]
    fn test_empty_messages_emit_nothing() {
        assert_eq!(CheckstyleXml.format_results(&results(vec![]), "f.css"), "");
    }

    #[test]
    fn test_single_error_exact_output() {
        let d = Diagnostic::error(1, 2, "bad & ugly").with_rule(RuleRef::new("r1", "My Rule"));
        assert_eq!(
            CheckstyleXml.format_results(&results(vec![d]), "f.css"),
            "<file name=\"f.css\"><error line=\"1\" column=\"2\" severity=\"error\" message=\"bad &amp; ugly\" source=\"net.csslint.MyRule\" identifier=\"r1\"/></file>"
        );
    }

    #[test]
    fn test_rollups_are_dropped() {
        let msgs = vec![
            Diagnostic::warning(0, 0, "Too many floats (11)")
                .with_rule(RuleRef::new("floats", "Disallow too many floats"))
                .as_rollup(),
            Diagnostic::warning(4, 1, "Use of !important").with_rule(RuleRef::new("important", "Disallow !important")),
        ];
        let out = CheckstyleXml.format_results(&results(msgs), "f.css");
        assert!(!out.contains("floats"));
        assert_eq!(out.matches("<error ").count(), 1);
        assert!(out.contains("identifier=\"important\""));
    }

    #[test]
    fn test_only_rollups_still_emit_file_element() {
        let msgs = vec![Diagnostic::warning(0, 0, "summary").as_rollup()];
        assert_eq!(
            CheckstyleXml.format_results(&results(msgs), "f.css"),
            "<file name=\"f.css\"></file>"
        );
    }

    #[test]
    fn test_missing_rule_metadata_falls_back_to_generic() {
        let no_rule = Diagnostic::error(1, 1, "x");
        let empty_rule = Diagnostic::error(2, 1, "y").with_rule(RuleRef::default());
        let out = CheckstyleXml.format_results(&results(vec![no_rule, empty_rule]), "f.css");
        assert_eq!(out.matches("source=\"net.csslint.generic\"").count(), 2);
        assert_eq!(out.matches("identifier=\"generic\"").count(), 2);

        let id_only = RuleRef {
            id: Some("known".into()),
            name: None,
        };
        let out = CheckstyleXml.format_results(
            &results(vec![Diagnostic::error(1, 1, "z").with_rule(id_only)]),
            "f.css",
        );
        assert!(out.contains("source=\"net.csslint.generic\" identifier=\"known\""));
    }

    #[test]
    fn test_non_string_message_renders_empty() {
        let r: FileResult = serde_json::from_str(
            r#"{"filename":"f.css","messages":[
                {"line":1,"col":1,"type":"error","message":null},
                {"line":2,"col":1,"type":"error","message":12},
                {"line":3,"col":1,"type":"error","message":{"text":"<b>"}},
                {"line":4,"col":1,"type":"error","message":["<"]},
                {"line":5,"col":1,"type":"error"}
            ]}"#,
        )
        .unwrap();
        let out = CheckstyleXml.format_results(&r, "f.css");
        assert_eq!(out.matches("message=\"\"").count(), 5);
        assert!(!out.contains("&lt;"));
    }

    #[test]
    fn test_source_strips_all_whitespace() {
        let rule = RuleRef::new("zi", "Disallow\tzero  units\n");
        assert_eq!(generate_source(Some(&rule)), "net.csslint.Disallowzerounits");
    }

    #[test]
    fn test_messages_keep_input_order() {
        let msgs = vec![
            Diagnostic::warning(9, 1, "third-line"),
            Diagnostic::error(1, 1, "first-line"),
        ];
        let out = CheckstyleXml.format_results(&results(msgs), "f.css");
        let a = out.find("third-line").unwrap();
        let b = out.find("first-line").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_results_filename_is_not_escaped() {
        let d = Diagnostic::error(1, 1, "x");
        let out = CheckstyleXml.format_results(&results(vec![d]), "a&b.css");
        assert!(out.starts_with("<file name=\"a&b.css\">"));
        let err = CheckstyleXml.read_error("a&b.css", "x");
        assert!(err.starts_with("<file name=\"a&amp;b.css\">"));
    }

    #[test]
    fn test_read_error_exact_output() {
        assert_eq!(
            CheckstyleXml.read_error("bad.css", "parse <error>"),
            "<file name=\"bad.css\"><error line=\"0\" column=\"0\" severity=\"error\" source=\"net.csslint.readerror\" identifier=\"read-error\" message=\"parse &lt;error&gt;\"></error></file>"
        );
    }

    #[test]
    fn test_document_is_balanced() {
        let f = CheckstyleXml;
        let mut doc = f.start_format();
        doc.push_str(&f.format_results(&results(vec![Diagnostic::error(1, 1, "x")]), "a.css"));
        doc.push_str(&f.read_error("b.css", "gone"));
        doc.push_str(&f.end_format());
        assert_eq!(doc.matches("<checkstyle>").count(), 1);
        assert!(doc.ends_with("</checkstyle>"));
        assert_eq!(doc.matches("<file ").count(), doc.matches("</file>").count());
    }
}
