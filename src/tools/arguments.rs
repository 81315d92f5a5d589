//! Typed access to tool call arguments.

use crate::error::{ChatError, Result};

/// Wrapper around the JSON arguments of one tool call.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a required string argument.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ChatError::InvalidArgument(format!("missing string argument: {key}")))
    }

    /// Get a required integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.value
            .get(key)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| ChatError::InvalidArgument(format!("missing integer argument: {key}")))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_str_returns_present_value() {
        let args = ToolArguments::new(serde_json::json!({"student_id": "210030"}));
        assert_eq!(args.get_str("student_id").unwrap(), "210030");
        assert!(args.get_str("missing").is_err());
    }

    #[test]
    fn get_i64_rejects_wrong_type() {
        let args = ToolArguments::new(serde_json::json!({"level": "three"}));
        assert!(matches!(
            args.get_i64("level"),
            Err(ChatError::InvalidArgument(_))
        ));
    }
}
