//! Canonical schema text for a parsed tree.
//!
//! Printing a tree produced by the parser and parsing the output again yields
//! an equal tree.

use std::fmt::Write;

use crate::ast::Field;

const INDENT: &str = "    ";

/// Render fields as a schema object literal.
pub fn to_source(fields: &[Field]) -> String {
    let mut out = String::new();
    write_object(&mut out, fields, 0);
    out.push('\n');
    out
}

fn write_object(out: &mut String, fields: &[Field], depth: usize) {
    if fields.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    for field in fields {
        write_field(out, field, depth + 1);
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}

fn write_field(out: &mut String, field: &Field, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&field.name);
    if field.optional {
        out.push('?');
    }
    if !field.field_type.is_object() {
        let _ = write!(out, ": {}", field.field_type);
    }
    for decorator in &field.decorators {
        let _ = write!(out, " @{}", decorator.name);
        for argument in &decorator.arguments {
            let _ = write!(out, " {argument}");
        }
    }
    if field.field_type.is_object() {
        out.push(' ');
        write_object(out, &field.children, depth);
    }
    out.push('\n');
}
