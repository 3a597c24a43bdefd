//! Role types for generation prompts.

use serde::{Deserialize, Serialize};

/// Role of a message in a text generation request.
///
/// # Examples
///
/// ```
/// use cuentista_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "System");
/// assert_ne!(Role::User, Role::Assistant);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the structured prompt
    User,
    /// Assistant messages are from the model
    Assistant,
}
