use thiserror::Error;

/// Errors a generation backend can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The backend ran but could not produce a prompt
    #[error("backend error: {0}")]
    Backend(String),

    /// The worker carrying the request went away before answering
    #[error("generation worker exited without a result")]
    WorkerLost,
}

/// Errors raised at the session, settings and clipboard boundaries.
///
/// Validation variants are returned before any state is touched, so a
/// caller that gets one back can keep using the value it called on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("input is {len} characters, the limit is {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("'{value}' is not a valid {axis}")]
    InvalidEnumValue { axis: &'static str, value: String },

    #[error("unknown setting '{0}'")]
    UnknownSettingId(String),

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("generation failed: {0}")]
    GenerationFailed(#[from] GenerationError),

    #[error("a generation is already in progress")]
    GenerationInProgress,
}

impl PromptError {
    pub fn invalid_enum<S: Into<String>>(axis: &'static str, value: S) -> Self {
        Self::InvalidEnumValue {
            axis,
            value: value.into(),
        }
    }

    pub fn clipboard<S: Into<String>>(message: S) -> Self {
        Self::ClipboardUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = PromptError::invalid_enum("style", "poetic");
        assert_eq!(err.to_string(), "'poetic' is not a valid style");

        let err = PromptError::InputTooLong { len: 1201, max: 1200 };
        assert_eq!(err.to_string(), "input is 1201 characters, the limit is 1200");
    }

    #[test]
    fn generation_errors_convert() {
        let err: PromptError = GenerationError::WorkerLost.into();
        assert!(matches!(err, PromptError::GenerationFailed(GenerationError::WorkerLost)));
    }
}
