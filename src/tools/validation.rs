//! Validate tool call arguments against their declared schema before execution.

/// Check arguments against a tool's parameter schema.
///
/// Every schema in this crate is a flat object built by
/// [`super::types::ParameterBuilder`], so the check is exactly what those
/// schemas can express: required-field presence plus string/integer property
/// types. Fields the schema does not declare pass through untouched. Returns
/// the first violation as a message.
pub fn validate_arguments(
    args: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), String> {
    let Some(properties) = schema.get("properties").and_then(|v| v.as_object()) else {
        return Ok(());
    };
    let Some(obj) = args.as_object() else {
        return Err("expected object arguments".to_string());
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !obj.contains_key(field) {
                return Err(format!("missing required field '{field}'"));
            }
        }
    }

    for (key, value) in obj {
        let Some(expected) = properties
            .get(key)
            .and_then(|p| p.get("type"))
            .and_then(|v| v.as_str())
        else {
            continue;
        };
        let ok = match expected {
            "string" => value.is_string(),
            "integer" => value.is_i64() || value.is_u64(),
            _ => true,
        };
        if !ok {
            return Err(format!("field '{key}' expected type '{expected}'"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn performance_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "from_semester": { "type": "integer" },
                "to_semester": { "type": "integer" },
                "level": { "type": "integer" },
            },
            "required": ["from_semester", "to_semester", "level"],
        })
    }

    #[test]
    fn accepts_complete_integer_arguments() {
        let args = json!({ "from_semester": 9, "to_semester": 9, "level": 0 });
        assert!(validate_arguments(&args, &performance_schema()).is_ok());
    }

    #[test]
    fn rejects_missing_required_field() {
        let args = json!({ "from_semester": 9, "to_semester": 9 });
        let err = validate_arguments(&args, &performance_schema()).unwrap_err();
        assert!(err.contains("missing required field 'level'"));
    }

    #[test]
    fn rejects_string_where_integer_expected() {
        let args = json!({ "from_semester": "nine", "to_semester": 9, "level": 0 });
        let err = validate_arguments(&args, &performance_schema()).unwrap_err();
        assert!(err.contains("expected type 'integer'"));
    }

    #[test]
    fn rejects_integer_where_string_expected() {
        let schema = json!({
            "type": "object",
            "properties": { "student_id": { "type": "string" } },
            "required": ["student_id"],
        });
        let err = validate_arguments(&json!({ "student_id": 210030 }), &schema).unwrap_err();
        assert!(err.contains("expected type 'string'"));
    }

    #[test]
    fn rejects_non_object_arguments() {
        let err = validate_arguments(&json!("oops"), &performance_schema()).unwrap_err();
        assert!(err.contains("expected object"));
    }

    #[test]
    fn accepts_extra_fields_not_in_schema() {
        let schema = json!({
            "type": "object",
            "properties": { "date": { "type": "string" } },
            "required": ["date"],
        });
        let args = json!({ "date": "2025-04-18", "extra": true });
        assert!(validate_arguments(&args, &schema).is_ok());
    }

    #[test]
    fn empty_schema_accepts_anything() {
        assert!(validate_arguments(&json!({ "anything": 42 }), &json!({})).is_ok());
    }
}
