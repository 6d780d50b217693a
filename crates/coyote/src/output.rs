use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use coyote::syntax::{Field, Token};
use coyote::ValidationError;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    schema: &'a str,
    valid: bool,
    errors: &'a [ValidationError],
}

pub fn print_report(schema: &str, errors: &[ValidationError], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ReportOutput {
                schema,
                valid: errors.is_empty(),
                errors,
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            if errors.is_empty() {
                println!("{schema}: valid");
                return;
            }
            let mut table = new_table(vec!["FIELD", "MESSAGE"]);
            for error in errors {
                table.add_row(vec![error.name.clone(), error.message.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if errors.is_empty() {
                println!("{schema}: valid");
                return;
            }
            println!("{schema}: {} error(s)", errors.len());
            for error in errors {
                println!("  {}: {}", error.name, error.message);
            }
        }
    }
}

pub fn print_tokens(tokens: &[Token], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&tokens),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KIND", "LEXEME", "POSITION", "LENGTH"]);
            for token in tokens {
                table.add_row(vec![
                    token.kind.to_string(),
                    token.lexeme.clone(),
                    token.position.to_string(),
                    token.length.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for token in tokens {
                println!("{:<15} {:?} @{}", token.kind, token.lexeme, token.position);
            }
        }
    }
}

pub fn print_ast(fields: &[Field], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&fields),
        OutputFormat::Table => {
            let mut table = new_table(vec!["PATH", "TYPE", "OPTIONAL", "DECORATORS"]);
            let mut rows = Vec::new();
            flatten(fields, "", &mut rows);
            for (path, field) in rows {
                table.add_row(vec![
                    path,
                    field.field_type.to_string(),
                    field.optional.to_string(),
                    decorator_list(field),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => print_tree(fields, 0),
    }
}

fn print_tree(fields: &[Field], depth: usize) {
    for field in fields {
        let marker = if field.optional { "?" } else { "" };
        let decorators = decorator_list(field);
        let indent = "  ".repeat(depth);
        if decorators.is_empty() {
            println!("{indent}{}{marker} <{}>", field.name, field.field_type);
        } else {
            println!(
                "{indent}{}{marker} <{}> {decorators}",
                field.name, field.field_type
            );
        }
        print_tree(&field.children, depth + 1);
    }
}

fn flatten<'a>(fields: &'a [Field], path: &str, rows: &mut Vec<(String, &'a Field)>) {
    for field in fields {
        let full_name = format!("{path}{}", field.name);
        rows.push((full_name.clone(), field));
        flatten(&field.children, &format!("{full_name}."), rows);
    }
}

fn decorator_list(field: &Field) -> String {
    field
        .decorators
        .iter()
        .map(|decorator| {
            let mut text = format!("@{}", decorator.name);
            for argument in &decorator.arguments {
                text.push(' ');
                text.push_str(&argument.to_string());
            }
            text
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}
