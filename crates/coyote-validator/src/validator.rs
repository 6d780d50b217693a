use coyote_syntax::Field;
use tracing::{debug, trace};

use crate::decorator::DecoratorKind;
use crate::error::{Result, ValidationError, ValidationFailed, Violation};
use crate::value::Value;

/// Checks data against a field tree.
///
/// Holds no state between calls; one instance can serve any number of
/// validations, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

/// Validate `data` against `schema`, failing with every violation found.
pub fn validate(data: &Value, schema: &[Field]) -> Result<()> {
    Validator::new().validate(data, schema)
}

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Walk the whole tree and fail once with all errors if any field failed.
    pub fn validate(&self, data: &Value, schema: &[Field]) -> Result<()> {
        let errors = self.errors(data, schema);
        if errors.is_empty() {
            return Ok(());
        }
        Err(ValidationFailed { errors })
    }

    /// Every violation in walk order; empty means the data is valid.
    pub fn errors(&self, data: &Value, schema: &[Field]) -> Vec<ValidationError> {
        let mut walk = Walk::default();
        walk.object(data, schema, "");
        debug!(
            fields = schema.len(),
            errors = walk.errors.len(),
            "validated data against schema"
        );
        walk.errors
    }
}

/// Scratch state for one validation run.
#[derive(Default)]
struct Walk {
    errors: Vec<ValidationError>,
}

impl Walk {
    fn record(&mut self, name: String, violation: Violation<'_>) {
        let message = violation.to_string();
        trace!(field = %name, %message, "validation error");
        self.errors.push(ValidationError { name, message });
    }

    fn object(&mut self, data: &Value, schema: &[Field], path: &str) {
        let mut unmatched: Vec<&str> = data.keys().collect();

        for field in schema {
            let full_name = format!("{path}{}", field.name);
            let value = data.get(&field.name);

            if let Err(violation) = assert_field(&full_name, field, value) {
                self.record(full_name.clone(), violation);
            }
            // Children are checked even when the object itself failed.
            if field.field_type.is_object() && !field.children.is_empty() {
                self.object(value, &field.children, &format!("{full_name}."));
            }

            unmatched.retain(|key| *key != field.name);
        }

        for key in unmatched {
            let name = format!("{path}{key}");
            self.record(name.clone(), Violation::Undefined { name: &name });
        }
    }
}

fn assert_field<'a>(
    full_name: &'a str,
    field: &'a Field,
    value: &Value,
) -> std::result::Result<(), Violation<'a>> {
    let conforms = value.conforms_to(field.field_type);
    if conforms && field.field_type.is_scalar() {
        decorated(full_name, field, value)?;
    }

    if value.is_absent() {
        if field.optional {
            return Ok(());
        }
        return Err(Violation::NotPassed {
            name: full_name,
            optional: field.optional,
        });
    }

    if !conforms {
        return Err(Violation::TypeMismatch {
            name: full_name,
            optional: field.optional,
            passed: value.type_name(),
            expected: field.field_type.as_str(),
        });
    }
    Ok(())
}

/// Run the field's decorators in declaration order; the first failure wins.
fn decorated<'a>(
    full_name: &'a str,
    field: &'a Field,
    value: &Value,
) -> std::result::Result<(), Violation<'a>> {
    for decorator in &field.decorators {
        let passed =
            DecoratorKind::resolve_and_invoke(&decorator.name, value, &decorator.arguments)
                .map_err(|err| {
                    trace!(decorator = %decorator.name, error = %err, "decorator invocation failed");
                    Violation::DecoratorInvocation {
                        decorator: &decorator.name,
                    }
                })?;
        if !passed {
            return Err(Violation::DecoratorRejected {
                name: full_name,
                optional: field.optional,
                decorator: &decorator.name,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use coyote_syntax::parse_source;
    use serde_json::json;

    use super::*;

    fn errors(schema: &str, data: serde_json::Value) -> Vec<ValidationError> {
        let ast = parse_source(schema).unwrap();
        Validator::new().errors(&Value::from(data), &ast)
    }

    fn names(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.name.as_str()).collect()
    }

    const PERSON: &str = "{ name: string age?: number @min 0 @max 120 }";

    #[test]
    fn valid_data_passes() {
        let ast = parse_source(PERSON).unwrap();
        let data = Value::from(json!({ "name": "Ann", "age": 31 }));
        assert!(validate(&data, &ast).is_ok());
    }

    #[test]
    fn decorator_rejection_names_decorator() {
        let errs = errors(PERSON, json!({ "name": "Ann", "age": 150 }));
        assert_eq!(names(&errs), vec!["age"]);
        assert_eq!(
            errs[0].message,
            "Field age (optional: true, decorator: max) could not be validated."
        );
    }

    #[test]
    fn first_failing_decorator_wins() {
        let errs = errors(PERSON, json!({ "name": "Ann", "age": -1 }));
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("decorator: min"));
    }

    #[test]
    fn absent_optional_field_is_accepted() {
        assert!(errors(PERSON, json!({ "name": "Ann" })).is_empty());
        assert!(errors(PERSON, json!({ "name": "Ann", "age": null })).is_empty());
    }

    #[test]
    fn missing_required_field() {
        let errs = errors(PERSON, json!({}));
        assert_eq!(names(&errs), vec!["name"]);
        assert_eq!(
            errs[0].message,
            "Field name (optional: false) was not passed. Consider marking it optional."
        );
    }

    #[test]
    fn type_mismatch_reports_runtime_type() {
        let errs = errors(PERSON, json!({ "name": ["Ann"], "age": "31" }));
        assert_eq!(names(&errs), vec!["name", "age"]);
        assert_eq!(
            errs[0].message,
            "Field name (optional: false, type: array) does not match the defined type string."
        );
        assert_eq!(
            errs[1].message,
            "Field age (optional: true, type: string) does not match the defined type number."
        );
    }

    #[test]
    fn unknown_keys_are_rejected_in_input_order() {
        let errs = errors(PERSON, json!({ "zed": 1, "name": "Ann", "extra": true }));
        assert_eq!(names(&errs), vec!["zed", "extra"]);
        assert_eq!(
            errs[1].message,
            "Field 'extra' is not defined within the provided schema."
        );
    }

    #[test]
    fn nested_paths_are_dotted() {
        let schema = "{ contact { email: string @format email } }";
        let errs = errors(schema, json!({ "contact": { "email": "not-an-email" } }));
        assert_eq!(names(&errs), vec!["contact.email"]);
        assert!(errs[0].message.contains("decorator: format"));

        let errs = errors(schema, json!({ "contact": { "email": "a@b.io", "x": 1 } }));
        assert_eq!(names(&errs), vec!["contact.x"]);
        assert!(errs[0].message.contains("'contact.x'"));
    }

    #[test]
    fn missing_object_still_checks_children() {
        let schema = "{ contact { email: string phone?: string } }";
        let errs = errors(schema, json!({}));
        assert_eq!(names(&errs), vec!["contact", "contact.email"]);
    }

    #[test]
    fn non_object_value_for_object_field() {
        let schema = "{ contact { email: string } }";
        let errs = errors(schema, json!({ "contact": "ann@example.com" }));
        assert_eq!(names(&errs), vec!["contact", "contact.email"]);
        assert!(errs[0].message.contains("type: string"));
    }

    #[test]
    fn array_value_for_object_field_has_no_keys() {
        let schema = "{ contact { email?: string } }";
        let errs = errors(schema, json!({ "contact": ["a", "b"] }));
        assert_eq!(names(&errs), vec!["contact"]);
        assert!(errs[0].message.contains("type: array"));
    }

    #[test]
    fn array_root_reports_only_declared_fields() {
        let errs = errors("{ name: string tag?: string }", json!(["x", "y"]));
        assert_eq!(names(&errs), vec!["name"]);
        assert!(errors("{ tag?: string }", json!(["x", "y"])).is_empty());
    }

    #[test]
    fn empty_nested_object_accepts_any_object() {
        let errs = errors("{ meta {} }", json!({ "meta": { "anything": 1 } }));
        assert!(errs.is_empty());
    }

    #[test]
    fn arrays_check_every_element() {
        let schema = "{ tags: string[] scores?: number[] }";
        assert!(errors(schema, json!({ "tags": [] })).is_empty());
        assert!(errors(schema, json!({ "tags": ["a", "b"], "scores": [1, 2] })).is_empty());

        let errs = errors(schema, json!({ "tags": ["a", 1] }));
        assert_eq!(names(&errs), vec!["tags"]);
        assert!(errs[0].message.contains("type: array"));
    }

    #[test]
    fn array_fields_skip_decorators() {
        let errs = errors("{ tags: string[] @length 99 }", json!({ "tags": ["a"] }));
        assert!(errs.is_empty());
    }

    #[test]
    fn unknown_decorator_cannot_be_invoked() {
        let errs = errors("{ name: string @trim }", json!({ "name": "Ann" }));
        assert_eq!(names(&errs), vec!["name"]);
        assert_eq!(errs[0].message, "Decorator 'trim' could not be invoked.");
    }

    #[test]
    fn decorator_with_wrong_argument_shape_cannot_be_invoked() {
        let errs = errors("{ code: string @length three }", json!({ "code": "abc" }));
        assert_eq!(errs[0].message, "Decorator 'length' could not be invoked.");

        let errs = errors("{ email: string @format url }", json!({ "email": "a@b.io" }));
        assert_eq!(errs[0].message, "Decorator 'format' could not be invoked.");
    }

    #[test]
    fn decorators_are_not_run_on_mismatched_types() {
        let errs = errors("{ age: number @min 5 }", json!({ "age": "1" }));
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("does not match"));
    }

    #[test]
    fn sibling_failures_are_all_collected() {
        let schema = "{ a: string b: number c: boolean d { e: number } }";
        let errs = errors(
            schema,
            json!({ "a": 1, "b": "x", "c": "y", "d": { "e": false }, "f": 0 }),
        );
        assert_eq!(names(&errs), vec!["a", "b", "c", "d.e", "f"]);
    }

    #[test]
    fn validation_is_repeatable() {
        let ast = parse_source(PERSON).unwrap();
        let data = Value::from(json!({ "age": 500, "extra": 1 }));
        let validator = Validator::new();
        assert_eq!(validator.errors(&data, &ast), validator.errors(&data, &ast));
    }

    #[test]
    fn aggregate_error_carries_all_records() {
        let ast = parse_source(PERSON).unwrap();
        let data = Value::from(json!({ "age": 500, "extra": 1 }));
        let err = validate(&data, &ast).unwrap_err();
        assert_eq!(err.errors.len(), 3);
        assert_eq!(err.to_string(), "Validation failed with 3 errors.");
    }

    #[test]
    fn non_object_root_reports_required_fields() {
        let errs = errors(PERSON, json!([1, 2, 3]));
        assert_eq!(names(&errs), vec!["name"]);
    }
}
