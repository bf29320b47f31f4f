//! Configuration error types.

/// Configuration error with source location.
///
/// Raised synchronously at client construction, before any network
/// activity, when no usable credential is available.
#[derive(Debug, Clone)]
pub struct ConfigurationError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigurationError {
    /// Create a new ConfigurationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe_error::ConfigurationError;
    ///
    /// let err = ConfigurationError::new("POE_API_KEY must be provided");
    /// assert!(err.message.contains("POE_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigurationError {}
