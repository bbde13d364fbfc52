//! String escaping for generated HCL
//!
//! Two independent rules apply to user data. Quotes, backslashes and control
//! characters are JSON-escaped so literals stay closed, and every `$` and
//! `%{` is doubled so Terraform does not read it as the start of an
//! interpolation or a template directive. Generated references
//! (`${data...}`) must bypass both.

use crate::config::terraform;

/// Double every `$` so Terraform treats it literally
pub fn escape_dollars(raw: &str) -> String {
    raw.replace('$', "$$")
}

/// Double the `%` of every `%{` so Terraform does not open a directive
pub fn escape_directives(raw: &str) -> String {
    raw.replace("%{", "%%{")
}

/// Quoted HCL string literal for arbitrary user data
pub fn hcl_literal(raw: &str) -> String {
    serde_json::Value::String(escape_directives(&escape_dollars(raw))).to_string()
}

/// Quote each string verbatim and join with `separator`.
///
/// Only for trusted, generated values such as interpolation references.
pub fn quote_join<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Escape each string with [`hcl_literal`] and join with `separator`
pub fn literal_join<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items
        .iter()
        .map(|item| hcl_literal(item.as_ref()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Label template to emit, or `None` when it is unset or the server default
pub fn effective_label_template(label_template: &str) -> Option<&str> {
    if label_template.is_empty() || label_template == terraform::DEFAULT_LABEL_TEMPLATE {
        None
    } else {
        Some(label_template)
    }
}

/// Check if a name is a valid Terraform identifier
///
/// Starts with a letter or `_`, then letters, digits, `_` or `-`.
pub fn is_identifier_safe(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_join() {
        let cases: &[(&[&str], &str)] = &[
            (&[], ""),
            (&["hello", "world"], "\"hello\",\n\"world\""),
            (&["$hello", "$world"], "\"$$hello\",\n\"$$world\""),
        ];
        for (raw, expected) in cases {
            assert_eq!(literal_join(raw, ",\n"), *expected);
        }
    }

    #[test]
    fn test_literal_join_escapes_quotes() {
        assert_eq!(
            literal_join(&["say \"hi\""], ", "),
            r#""say \"hi\"""#
        );
    }

    #[test]
    fn test_quote_join_is_verbatim() {
        let refs = ["${data.a.json}", "${data.b.json}"];
        assert_eq!(
            quote_join(&refs, ", "),
            "\"${data.a.json}\", \"${data.b.json}\""
        );
    }

    #[test]
    fn test_quote_join_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(quote_join(&empty, ","), "");
    }

    #[test]
    fn test_escape_dollars() {
        assert_eq!(escape_dollars("a$b"), "a$$b");
        assert_eq!(escape_dollars("${COUNT}-${env}"), "$${COUNT}-$${env}");
        assert_eq!(escape_dollars("plain"), "plain");
    }

    #[test]
    fn test_hcl_literal() {
        assert_eq!(hcl_literal("ls"), "\"ls\"");
        assert_eq!(hcl_literal("a$b"), "\"a$$b\"");
        assert_eq!(hcl_literal("C:\\build"), "\"C:\\\\build\"");
        assert_eq!(hcl_literal("line1\nline2"), "\"line1\\nline2\"");
        assert_eq!(hcl_literal("-w %{http_code}"), "\"-w %%{http_code}\"");
        assert_eq!(hcl_literal("%{$x}"), "\"%%{$$x}\"");
    }

    #[test]
    fn test_escape_directives() {
        assert_eq!(escape_directives("%{if x}y%{endif}"), "%%{if x}y%%{endif}");
        assert_eq!(escape_directives("100%"), "100%");
        assert_eq!(escape_directives("%s {x}"), "%s {x}");
    }

    #[test]
    fn test_effective_label_template() {
        assert_eq!(effective_label_template("${COUNT}"), None);
        assert_eq!(effective_label_template(""), None);
        assert_eq!(effective_label_template("foo"), Some("foo"));
        assert_eq!(
            effective_label_template("1.0.${COUNT}"),
            Some("1.0.${COUNT}")
        );
    }

    #[test]
    fn test_is_identifier_safe() {
        assert!(is_identifier_safe("up42"));
        assert!(is_identifier_safe("build-and_test"));
        assert!(!is_identifier_safe(""));
        assert!(!is_identifier_safe("has space"));
        assert!(!is_identifier_safe("quote\"d"));
        assert!(is_identifier_safe("_x"));
        assert!(!is_identifier_safe("1build"));
        assert!(!is_identifier_safe("-x"));
    }
}
