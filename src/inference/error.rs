use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Raw input field, as named in the submitted form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Brand,
    Year,
    Transmission,
    Engine,
    MaxPower,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Year => "year",
            Self::Transmission => "transmission",
            Self::Engine => "engine",
            Self::MaxPower => "max_power",
        }
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InferenceError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: String },

    #[error("{field} '{value}' not recognized")]
    UnknownCategory { field: Field, value: String },

    #[error("feature scaler parameters are not loaded")]
    ScalerNotLoaded,

    #[error("model is not trained: theta is missing")]
    ModelNotTrained,

    #[error("computation failed: {0}")]
    Computation(String),
}

impl InferenceError {
    /// The offending input field, if the error is attributable to one.
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidInput { field, .. } | Self::UnknownCategory { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_message_ok() {
        let error = InferenceError::UnknownCategory {
            field: Field::Brand,
            value: "Lada".to_string(),
        };
        assert_eq!(error.to_string(), "brand 'Lada' not recognized");
        assert_eq!(error.field(), Some(Field::Brand));
    }

    #[test]
    fn invalid_input_message_ok() {
        let error = InferenceError::InvalidInput {
            field: Field::MaxPower,
            reason: "expected a number".to_string(),
        };
        assert_eq!(error.to_string(), "invalid max_power: expected a number");
    }

    #[test]
    fn model_not_trained_has_no_field() {
        assert_eq!(InferenceError::ModelNotTrained.field(), None);
    }
}
