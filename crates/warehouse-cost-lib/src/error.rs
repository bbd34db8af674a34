use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl EstimateError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { field, .. } => field,
        }
    }
}

pub type EstimateResult<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = EstimateError::invalid("warehouses", "must be at least 1");
        assert_eq!(err.field(), "warehouses");
        assert_eq!(
            err.to_string(),
            "invalid input for 'warehouses': must be at least 1"
        );
    }
}
