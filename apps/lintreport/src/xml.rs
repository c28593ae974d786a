//! XML attribute escaping.

/// Escape `"`, `&`, `<` and `>` for use inside a double-quoted attribute.
///
/// Single pass, so entities produced here are never escaped again. Single
/// quotes and all other characters are left as-is.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
