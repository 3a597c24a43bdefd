//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, HttpError, JsonError, ServerError, ValidationError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum. Each Cuentista crate contributes
/// its own variant through a `From` conversion.
///
/// # Examples
///
/// ```
/// use cuentista_error::{CuentistaError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: CuentistaError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CuentistaErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generative capability error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Cuentista error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cuentista_error::{CuentistaError, CuentistaResult, ConfigError};
///
/// fn might_fail() -> CuentistaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cuentista Error: {}", _0)]
pub struct CuentistaError(Box<CuentistaErrorKind>);

impl CuentistaError {
    /// Create a new error from a kind.
    pub fn new(kind: CuentistaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CuentistaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CuentistaErrorKind
impl<T> From<T> for CuentistaError
where
    T: Into<CuentistaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cuentista operations.
///
/// # Examples
///
/// ```
/// use cuentista_error::{CuentistaResult, HttpError};
///
/// fn fetch_data() -> CuentistaResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type CuentistaResult<T> = std::result::Result<T, CuentistaError>;
