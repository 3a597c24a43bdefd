//! Length tier classifier for story requests.

use serde::{Deserialize, Serialize};

/// Target length tier for a story, controlling the paragraph-count target.
///
/// # Examples
///
/// ```
/// use cuentista_core::LengthTier;
/// use std::str::FromStr;
///
/// let tier = LengthTier::from_str("corto").unwrap();
/// assert_eq!(tier, LengthTier::Corto);
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
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LengthTier {
    /// Short story, 3-4 paragraphs (2-3 minutes)
    Corto,
    /// Medium story, 6-8 paragraphs (5-7 minutes)
    Medio,
    /// Long story, 10-12 paragraphs (10-15 minutes)
    Largo,
}

impl LengthTier {
    /// The wire label for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Corto => "corto",
            LengthTier::Medio => "medio",
            LengthTier::Largo => "largo",
        }
    }
}
