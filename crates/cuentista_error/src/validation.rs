//! Story request validation error types.

/// Validation error listing every missing request field.
///
/// Reported synchronously to the submitter before any story record is
/// created. Field names match the wire names of the intake form.
///
/// # Examples
///
/// ```
/// use cuentista_error::ValidationError;
///
/// let err = ValidationError::new(vec!["character", "theme"]);
/// assert!(err.is_missing("character"));
/// assert!(format!("{}", err).contains("theme"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct ValidationError {
    /// Wire names of the fields that were missing or empty
    pub missing: Vec<&'static str>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError for the given missing fields.
    #[track_caller]
    pub fn new(missing: Vec<&'static str>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            missing,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the given field was reported missing.
    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|f| *f == field)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: missing required fields [{}] at line {} in {}",
            self.missing.join(", "),
            self.line,
            self.file
        )
    }
}
