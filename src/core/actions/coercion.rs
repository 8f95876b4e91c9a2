use serde_json::{Map, Value};

use super::spec::{ActionSpec, ParamType};

/// Coerce a string argument towards its declared type.
///
/// Assistants frequently send `"3"` for a number, `"true"` for a boolean or
/// a JSON-encoded list where an array is declared. A lone object where an
/// object list is declared is wrapped. Values that do not convert are
/// returned unchanged so decoding can report the mismatch.
#[must_use]
pub fn coerce_value(value: &Value, target: ParamType) -> Value {
    if let (Value::Object(_), ParamType::ObjectArray) = (value, target) {
        return Value::Array(vec![value.clone()]);
    }
    let Value::String(s) = value else {
        return value.clone();
    };

    match target {
        ParamType::Number => coerce_number(s).unwrap_or_else(|| value.clone()),
        ParamType::Boolean => coerce_boolean(s).unwrap_or_else(|| value.clone()),
        ParamType::StringArray => coerce_string_list(s),
        ParamType::Object => parse_json(s)
            .filter(Value::is_object)
            .unwrap_or_else(|| value.clone()),
        ParamType::ObjectArray => match parse_json(s) {
            Some(Value::Array(items)) => Value::Array(items),
            Some(object @ Value::Object(_)) => Value::Array(vec![object]),
            _ => value.clone(),
        },
        ParamType::String => value.clone(),
    }
}

/// Apply [`coerce_value`] to every declared argument. `null` arguments are
/// treated as an empty object; explicit `null` values are dropped so they
/// read as absent.
#[must_use]
pub fn coerce_arguments(args: &Value, spec: &ActionSpec) -> Value {
    let Some(args_obj) = args.as_object() else {
        return if args.is_null() {
            Value::Object(Map::new())
        } else {
            args.clone()
        };
    };

    let mut result = Map::new();
    for (key, value) in args_obj {
        if value.is_null() {
            continue;
        }
        let coerced = match spec.parameter(key) {
            Some(parameter) => coerce_value(value, parameter.param_type),
            None => value.clone(),
        };
        result.insert(key.clone(), coerced);
    }
    Value::Object(result)
}

fn coerce_number(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(|n| serde_json::Number::from_f64(n).map(Value::Number))
}

fn parse_json(s: &str) -> Option<Value> {
    serde_json::from_str(s.trim()).ok()
}

/// A JSON array, otherwise one item per non-blank line with list bullets
/// stripped.
fn coerce_string_list(s: &str) -> Value {
    if let Some(Value::Array(items)) = parse_json(s) {
        return Value::Array(items);
    }
    s.lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect()
}

fn coerce_boolean(s: &str) -> Option<Value> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(Value::Bool(true)),
        "false" | "0" | "no" => Some(Value::Bool(false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::spec::ActionParameter;
    use serde_json::json;

    fn spec() -> ActionSpec {
        ActionSpec {
            name: "incrementCounter",
            description: "",
            parameters: vec![
                ActionParameter::required("amount", ParamType::Number, ""),
                ActionParameter::optional("loud", ParamType::Boolean, ""),
            ],
        }
    }

    #[test]
    fn string_numbers_become_numbers() {
        assert_eq!(coerce_value(&json!("7"), ParamType::Number), json!(7));
        assert_eq!(coerce_value(&json!(" 2.5 "), ParamType::Number), json!(2.5));
    }

    #[test]
    fn booleans_accept_common_spellings() {
        for input in ["true", "1", "YES"] {
            assert_eq!(coerce_value(&json!(input), ParamType::Boolean), json!(true));
        }
        assert_eq!(coerce_value(&json!("no"), ParamType::Boolean), json!(false));
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(
            coerce_value(&json!("seven"), ParamType::Number),
            json!("seven")
        );
        assert_eq!(coerce_value(&json!(3), ParamType::String), json!(3));
    }

    #[test]
    fn arguments_are_coerced_by_declaration() {
        let coerced = coerce_arguments(&json!({"amount": "3", "loud": "yes", "extra": "x"}), &spec());
        assert_eq!(coerced, json!({"amount": 3, "loud": true, "extra": "x"}));
    }

    #[test]
    fn string_lists_accept_json_or_lines() {
        assert_eq!(
            coerce_value(&json!(r#"["Grow ARR", "Hire"]"#), ParamType::StringArray),
            json!(["Grow ARR", "Hire"])
        );
        assert_eq!(
            coerce_value(&json!("- Grow ARR\n\n* Hire two engineers\n"), ParamType::StringArray),
            json!(["Grow ARR", "Hire two engineers"])
        );
        assert_eq!(
            coerce_value(&json!(["already", "a list"]), ParamType::StringArray),
            json!(["already", "a list"])
        );
    }

    #[test]
    fn objects_are_parsed_from_json_text() {
        assert_eq!(
            coerce_value(&json!(r#"{"React": {"Speed": 8}}"#), ParamType::Object),
            json!({"React": {"Speed": 8}})
        );
        assert_eq!(coerce_value(&json!("[1, 2]"), ParamType::Object), json!("[1, 2]"));
        assert_eq!(
            coerce_value(&json!(r#"[{"name": "Vue"}]"#), ParamType::ObjectArray),
            json!([{"name": "Vue"}])
        );
        assert_eq!(
            coerce_value(&json!({"name": "Vue"}), ParamType::ObjectArray),
            json!([{"name": "Vue"}])
        );
        assert_eq!(coerce_value(&json!("not json"), ParamType::ObjectArray), json!("not json"));
    }

    #[test]
    fn null_arguments_read_as_empty() {
        assert_eq!(coerce_arguments(&Value::Null, &spec()), json!({}));
        assert_eq!(coerce_arguments(&json!({"loud": null}), &spec()), json!({}));
    }
}
