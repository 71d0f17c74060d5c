//! Common result and error types for the vdiag crates.

/// The standard result type for operations that can only fail on a coding defect.
///
/// `Err` indicates an internal error (a bug in the caller or in vdiag), never a
/// data condition. Malformed user input is reported through `Option` sentinels
/// or crate-specific error enums instead.
pub type VdiagResult<T> = Result<T, InternalError>;

/// An internal error indicating a programming defect, not a user input problem.
///
/// The canonical example is asking the diagnostic catalog about a kind that was
/// never registered: that is a mistake in the code raising the diagnostic.
#[derive(Debug, thiserror::Error)]
#[error("internal diagnostic error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = InternalError::new("kind 9999 is not registered");
        assert_eq!(
            format!("{err}"),
            "internal diagnostic error: kind 9999 is not registered"
        );
    }

    #[test]
    fn err_path() {
        let r: VdiagResult<u32> = Err(InternalError::new("unregistered"));
        let err = r.err().unwrap();
        assert_eq!(err.message, "unregistered");
    }

    #[test]
    fn from_string() {
        let err: InternalError = "from string".to_string().into();
        assert_eq!(err.message, "from string");
    }
}
