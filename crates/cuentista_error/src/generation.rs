//! Generation error types for the story pipeline and provider clients.

/// Specific error conditions for generative-capability operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No generative capability is configured
    #[display("No generative capability configured")]
    CapabilityUnavailable,
    /// Provider API returned a non-success status
    #[display("Provider API error ({}): {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// HTTP transport failure talking to the provider
    #[display("Provider request failed: {}", _0)]
    Http(String),
    /// Provider response could not be decoded
    #[display("Failed to decode provider response: {}", _0)]
    Decode(String),
    /// Provider returned no usable output
    #[display("Provider returned an empty response")]
    EmptyResponse,
    /// External call exceeded its deadline
    #[display("Generation timed out after {}s", _0)]
    Timeout(u64),
}

/// Error type for generation operations.
///
/// # Examples
///
/// ```
/// use cuentista_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
