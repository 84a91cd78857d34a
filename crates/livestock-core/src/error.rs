use thiserror::Error;

/// Errors raised at the parameter boundary of every entry point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid parameter `{field}` = {value}: {constraint}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        constraint: String,
    },

    #[error("unknown {field} `{value}`")]
    UnknownVariant { field: &'static str, value: String },
}

impl ModelError {
    pub fn invalid(field: &'static str, value: f64, constraint: impl Into<String>) -> Self {
        ModelError::InvalidParameter {
            field,
            value,
            constraint: constraint.into(),
        }
    }

    pub fn unknown(field: &'static str, value: &str) -> Self {
        ModelError::UnknownVariant {
            field,
            value: value.to_string(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ModelError::InvalidParameter { field, .. } => field,
            ModelError::UnknownVariant { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_field_and_constraint() {
        let err = ModelError::invalid("body_weight", -5.0, "must be > 0");
        assert_eq!(err.field(), "body_weight");
        assert_eq!(
            err.to_string(),
            "invalid parameter `body_weight` = -5: must be > 0"
        );
    }

    #[test]
    fn unknown_variant_message() {
        let err = ModelError::unknown("diet type", "silage");
        assert_eq!(err.to_string(), "unknown diet type `silage`");
    }
}
