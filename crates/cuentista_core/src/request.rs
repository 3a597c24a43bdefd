//! Story request types and intake validation.

use crate::{AgeBand, LengthTier};
use cuentista_error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw intake form as submitted by a client.
///
/// All fields are optional at the wire level; [`StoryRequestForm::validate`]
/// turns the form into a [`StoryRequest`] or reports every missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryRequestForm {
    /// Main character of the story
    #[serde(default)]
    pub character: Option<String>,
    /// Theme of the story (free-form, well-known themes get richer prompts)
    #[serde(default)]
    pub theme: Option<String>,
    /// Target age band label ("3-5", "6-8", "9-12")
    #[serde(default)]
    pub age_band: Option<String>,
    /// Target length tier label ("corto", "medio", "largo")
    #[serde(default)]
    pub length_tier: Option<String>,
    /// Optional title suggestion
    #[serde(default)]
    pub title_hint: Option<String>,
}

impl StoryRequestForm {
    /// Validate the form into a [`StoryRequest`].
    ///
    /// Every missing or invalid field is reported at once; no record is
    /// created from an invalid form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each field that was absent,
    /// empty, or (for the enumerated classifiers) not a recognized label.
    pub fn validate(&self) -> Result<StoryRequest, ValidationError> {
        let mut missing = Vec::new();

        let character = match self.character.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => Some(c.to_string()),
            _ => {
                missing.push("character");
                None
            }
        };

        let theme = match self.theme.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => Some(t.to_string()),
            _ => {
                missing.push("theme");
                None
            }
        };

        let age_band = match self.age_band.as_deref().map(AgeBand::from_str) {
            Some(Ok(band)) => Some(band),
            _ => {
                missing.push("age_band");
                None
            }
        };

        let length_tier = match self.length_tier.as_deref().map(LengthTier::from_str) {
            Some(Ok(tier)) => Some(tier),
            _ => {
                missing.push("length_tier");
                None
            }
        };

        if !missing.is_empty() {
            return Err(ValidationError::new(missing));
        }

        let title_hint = self
            .title_hint
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(StoryRequest {
            character: character.expect("validated above"),
            theme: theme.expect("validated above"),
            age_band: age_band.expect("validated above"),
            length_tier: length_tier.expect("validated above"),
            title_hint,
        })
    }
}

/// A validated story generation request.
///
/// # Examples
///
/// ```
/// use cuentista_core::{AgeBand, LengthTier, StoryRequestBuilder};
///
/// let request = StoryRequestBuilder::default()
///     .character("Luna")
///     .theme("ciencia")
///     .age_band(AgeBand::EarlyPrimary)
///     .length_tier(LengthTier::Corto)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.character, "Luna");
/// assert!(request.title_hint.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StoryRequest {
    /// Main character of the story
    pub character: String,
    /// Theme of the story
    pub theme: String,
    /// Target age band
    pub age_band: AgeBand,
    /// Target length tier
    pub length_tier: LengthTier,
    /// Optional title suggestion
    #[builder(default)]
    pub title_hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> StoryRequestForm {
        StoryRequestForm {
            character: Some("Luna".into()),
            theme: Some("ciencia".into()),
            age_band: Some("6-8".into()),
            length_tier: Some("corto".into()),
            title_hint: None,
        }
    }

    #[test]
    fn valid_form_passes() {
        let request = full_form().validate().unwrap();
        assert_eq!(request.character, "Luna");
        assert_eq!(request.age_band, AgeBand::EarlyPrimary);
        assert_eq!(request.length_tier, LengthTier::Corto);
    }

    #[test]
    fn empty_form_reports_all_fields() {
        let err = StoryRequestForm::default().validate().unwrap_err();
        for field in ["character", "theme", "age_band", "length_tier"] {
            assert!(err.is_missing(field), "expected {field} to be reported");
        }
    }

    #[test]
    fn whitespace_character_is_missing() {
        let mut form = full_form();
        form.character = Some("   ".into());
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec!["character"]);
    }

    #[test]
    fn unknown_age_band_is_reported() {
        let mut form = full_form();
        form.age_band = Some("adult".into());
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec!["age_band"]);
    }

    #[test]
    fn blank_title_hint_is_dropped() {
        let mut form = full_form();
        form.title_hint = Some("  ".into());
        let request = form.validate().unwrap();
        assert!(request.title_hint.is_none());
    }
}
