//! Colored message prefixes shared by the binary.

use owo_colors::OwoColorize;

/// Colors are on unless the output mode is `json` or `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, output: &str, paint: fn(&str) -> String) -> String {
    if use_colors(output) {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix(output: &str) -> String {
    prefix("error:", output, |s| s.red().bold().to_string())
}

pub fn note_prefix(output: &str) -> String {
    prefix("note:", output, |s| s.yellow().bold().to_string())
}

pub fn info_prefix(output: &str) -> String {
    prefix("info:", output, |s| s.blue().bold().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_keep_label_text() {
        assert!(error_prefix("human").contains("error:"));
        assert!(note_prefix("human").contains("note:"));
        assert!(info_prefix("human").contains("info:"));
    }

    #[test]
    fn test_json_output_disables_colors() {
        assert!(!use_colors("json"));
        assert_eq!(error_prefix("json"), "error:");
        assert_eq!(note_prefix("json"), "note:");
        assert_eq!(info_prefix("json"), "info:");
    }
}
