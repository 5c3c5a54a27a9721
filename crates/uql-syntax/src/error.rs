use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UqlError {
    /// The filter or hint parameter did not decode to a JSON object.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A known operator received an operand of the wrong shape.
    #[error("Invalid operand for '{operator}' on field '{field}': {reason}")]
    InvalidOperand {
        field: String,
        operator: String,
        reason: String,
    },

    #[error("Invalid value for hint '{hint}': {reason}")]
    InvalidHint { hint: String, reason: String },
}

impl UqlError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        UqlError::MalformedInput(msg.into())
    }

    pub fn invalid_operand(
        field: impl Into<String>,
        operator: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        UqlError::InvalidOperand {
            field: field.into(),
            operator: operator.to_string(),
            reason: reason.into(),
        }
    }
}
