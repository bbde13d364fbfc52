//! Ordered HCL attribute bodies with zero-value suppression
//!
//! Every setter except [`Attributes::required`] skips its value when it is
//! empty, zero or false, so callers list fields in output order and never
//! test for presence themselves.

use std::fmt::{self, Write};

use crate::error::{GocdError, Result};

use super::escape::{hcl_literal, literal_join, quote_join};

/// Indentation step of generated bodies
const INDENT: usize = 2;

#[derive(Debug, Clone)]
enum Value {
    /// Pre-rendered scalar (`"text"`, `true`, `30`)
    Scalar(String),
    /// List of strings, escaped or verbatim
    List {
        items: Vec<String>,
        escape: bool,
        multiline: bool,
    },
    /// List of object literals
    Objects(Vec<Attributes>),
    /// Single object literal (`key = { ... }`)
    Object(Attributes),
}

/// Ordered list of `key = value` entries
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(&'static str, Value)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// String attribute emitted even when empty
    pub fn required(mut self, key: &'static str, value: &str) -> Self {
        self.entries.push((key, Value::Scalar(hcl_literal(value))));
        self
    }

    /// String attribute, skipped when empty
    pub fn string(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.required(key, value)
    }

    /// Boolean attribute, emitted only when true
    pub fn flag(mut self, key: &'static str, value: bool) -> Self {
        if value {
            self.entries.push((key, Value::Scalar("true".to_string())));
        }
        self
    }

    /// Numeric attribute, skipped when absent or zero
    pub fn number(mut self, key: &'static str, value: Option<u32>) -> Self {
        if let Some(n) = value.filter(|n| *n > 0) {
            self.entries.push((key, Value::Scalar(n.to_string())));
        }
        self
    }

    /// Inline list of escaped strings, skipped when empty
    pub fn strings(self, key: &'static str, values: &[String]) -> Self {
        self.list(key, values, true, false)
    }

    /// One-per-line list of escaped strings, skipped when empty
    pub fn string_lines(self, key: &'static str, values: &[String]) -> Self {
        self.list(key, values, true, true)
    }

    /// One-per-line list of interpolation references, skipped when empty
    pub fn references(self, key: &'static str, values: &[String]) -> Self {
        self.list(key, values, false, true)
    }

    fn list(mut self, key: &'static str, values: &[String], escape: bool, multiline: bool) -> Self {
        if !values.is_empty() {
            self.entries.push((
                key,
                Value::List {
                    items: values.to_vec(),
                    escape,
                    multiline,
                },
            ));
        }
        self
    }

    /// List of object literals, skipped when empty
    pub fn objects(mut self, key: &'static str, items: Vec<Attributes>) -> Self {
        if !items.is_empty() {
            self.entries.push((key, Value::Objects(items)));
        }
        self
    }

    /// Object attribute, emitted even when its body is empty
    pub fn object(mut self, key: &'static str, body: Attributes) -> Self {
        self.entries.push((key, Value::Object(body)));
        self
    }

    /// Write all entries, one per line, at `indent` spaces
    pub fn write_to(&self, out: &mut String, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        for (key, value) in &self.entries {
            match value {
                Value::Scalar(rendered) => writeln!(out, "{}{} = {}", pad, key, rendered)?,
                Value::List {
                    items,
                    escape,
                    multiline,
                } => {
                    let inner_pad = " ".repeat(indent + INDENT);
                    let separator = if *multiline {
                        format!(",\n{}", inner_pad)
                    } else {
                        ", ".to_string()
                    };
                    let joined = if *escape {
                        literal_join(items, &separator)
                    } else {
                        quote_join(items, &separator)
                    };
                    if *multiline {
                        writeln!(out, "{}{} = [\n{}{}\n{}]", pad, key, inner_pad, joined, pad)?;
                    } else {
                        writeln!(out, "{}{} = [{}]", pad, key, joined)?;
                    }
                }
                Value::Objects(items) => {
                    let item_pad = " ".repeat(indent + INDENT);
                    writeln!(out, "{}{} = [", pad, key)?;
                    for item in items {
                        writeln!(out, "{}{{", item_pad)?;
                        item.write_to(out, indent + 2 * INDENT)?;
                        writeln!(out, "{}}},", item_pad)?;
                    }
                    writeln!(out, "{}]", pad)?;
                }
                Value::Object(body) => {
                    writeln!(out, "{}{} = {{", pad, key)?;
                    body.write_to(out, indent + INDENT)?;
                    writeln!(out, "{}}}", pad)?;
                }
            }
        }
        Ok(())
    }
}

/// Write a top-level block: `header {`, the body, `}`
pub fn write_block(out: &mut String, header: &str, body: &Attributes) -> fmt::Result {
    writeln!(out, "{} {{", header)?;
    body.write_to(out, INDENT)?;
    writeln!(out, "}}")
}

/// Reject a finished document that does not parse as HCL
pub(crate) fn validate(name: &str, document: &str) -> Result<()> {
    hcl::parse(document).map(|_| ()).map_err(|e| {
        GocdError::Render(format!("generated HCL for '{}' does not parse: {}", name, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(attrs: &Attributes) -> String {
        let mut out = String::new();
        attrs.write_to(&mut out, 2).unwrap();
        out
    }

    #[test]
    fn test_zero_values_are_suppressed() {
        let attrs = Attributes::new()
            .string("command", "")
            .flag("secure", false)
            .number("timeout", None)
            .number("timeout", Some(0))
            .strings("run_if", &[])
            .references("tasks", &[])
            .objects("tabs", vec![]);
        assert_eq!(render(&attrs), "");
    }

    #[test]
    fn test_required_emits_empty_string() {
        let attrs = Attributes::new().required("group", "");
        assert_eq!(render(&attrs), "  group = \"\"\n");
    }

    #[test]
    fn test_scalars() {
        let attrs = Attributes::new()
            .string("command", "ls")
            .flag("fetch_materials", true)
            .number("timeout", Some(30));
        assert_eq!(
            render(&attrs),
            "  command = \"ls\"\n  fetch_materials = true\n  timeout = 30\n"
        );
    }

    #[test]
    fn test_inline_list_is_escaped() {
        let attrs = Attributes::new().strings(
            "resources",
            &["linux".to_string(), "$docker".to_string()],
        );
        assert_eq!(render(&attrs), "  resources = [\"linux\", \"$$docker\"]\n");
    }

    #[test]
    fn test_multiline_references_are_verbatim() {
        let attrs = Attributes::new().references(
            "jobs",
            &[
                "${data.gocd_job_definition.a.json}".to_string(),
                "${data.gocd_job_definition.b.json}".to_string(),
            ],
        );
        assert_eq!(
            render(&attrs),
            "  jobs = [\n    \"${data.gocd_job_definition.a.json}\",\n    \"${data.gocd_job_definition.b.json}\"\n  ]\n"
        );
    }

    #[test]
    fn test_objects() {
        let attrs = Attributes::new().objects(
            "tabs",
            vec![Attributes::new()
                .required("name", "coverage")
                .required("path", "target/cov/index.html")],
        );
        assert_eq!(
            render(&attrs),
            "  tabs = [\n    {\n      name = \"coverage\"\n      path = \"target/cov/index.html\"\n    },\n  ]\n"
        );
    }

    #[test]
    fn test_nested_object() {
        let attrs = Attributes::new().object("attributes", Attributes::new().string("url", "u"));
        assert_eq!(render(&attrs), "  attributes = {\n    url = \"u\"\n  }\n");
    }

    #[test]
    fn test_empty_nested_object() {
        let attrs = Attributes::new().object("attributes", Attributes::new());
        assert_eq!(render(&attrs), "  attributes = {\n  }\n");
    }

    #[test]
    fn test_objects_with_nested_object_parse() {
        let mut out = String::new();
        write_block(
            &mut out,
            "resource \"gocd_pipeline\" \"p\"",
            &Attributes::new().objects(
                "materials",
                vec![Attributes::new()
                    .required("type", "git")
                    .object("attributes", Attributes::new().string("url", "u"))],
            ),
        )
        .unwrap();
        assert!(hcl::parse(&out).is_ok(), "{}", out);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let attrs = Attributes::new()
            .required("name", "x")
            .string("b", "1")
            .string("a", "2");
        assert_eq!(render(&attrs), "  name = \"x\"\n  b = \"1\"\n  a = \"2\"\n");
    }

    #[test]
    fn test_write_block() {
        let mut out = String::new();
        write_block(
            &mut out,
            "resource \"gocd_pipeline_template\" \"t\"",
            &Attributes::new().required("name", "t"),
        )
        .unwrap();
        assert_eq!(
            out,
            "resource \"gocd_pipeline_template\" \"t\" {\n  name = \"t\"\n}\n"
        );
    }

    #[test]
    fn test_validate_accepts_generated_document() {
        let mut out = String::from("## START pipeline.p\n# CMD terraform import gocd_pipeline.p \"p\"\n");
        write_block(&mut out, "resource \"gocd_pipeline\" \"p\"", &Attributes::new().required("name", "p"))
            .unwrap();
        out.push_str("## END\n");
        assert!(validate("p", &out).is_ok());
    }

    #[test]
    fn test_validate_rejects_block_inside_object() {
        let out = "resource \"gocd_pipeline\" \"p\" {\n  materials = [\n    {\n      attributes {\n      }\n    },\n  ]\n}\n";
        match validate("p", out) {
            Err(GocdError::Render(msg)) => assert!(msg.contains("'p' does not parse")),
            other => panic!("Expected GocdError::Render, got {:?}", other),
        }
    }
}
