//! Section parser for generated story responses.
//!
//! The text capability is asked to answer with `TÍTULO:` / `CUENTO:` /
//! `MORALEJA:` section markers, but the response is free-form text and the
//! markers cannot be trusted. The parser is a small state machine over
//! lines: recognized line-initial markers (English or Spanish, any case)
//! switch the current section, and everything else accumulates into the
//! section's buffer. Markers are tolerated in any order; each is assumed to
//! appear at most once. A marker appearing mid-line is not recognized and
//! reads as body text.

/// Title used when the response has no title section and no hint was given.
pub const DEFAULT_TITLE: &str = "El Cuento Mágico";

/// Moral used when the response has no moral section.
///
/// The default applies only when no moral text was extracted; an extracted
/// moral is used verbatim, never prefixed with the default.
pub const DEFAULT_MORAL: &str = "La bondad y la valentía siempre son recompensadas.";

const TITLE_MARKERS: &[&str] = &["TÍTULO:", "TITULO:", "TITLE:"];
const STORY_MARKERS: &[&str] = &["CUENTO:", "STORY:"];
const MORAL_MARKERS: &[&str] = &["MORALEJA:", "MORAL:"];

/// Raw parse result before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Title extracted from a title marker line, if any
    pub title: Option<String>,
    /// Body paragraphs joined with blank lines; empty if none accumulated
    pub body: String,
    /// Moral sentence(s), if a moral section was found
    pub moral: Option<String>,
}

/// Current accumulation target of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Body,
    Moral,
}

/// Strip a recognized marker from the start of a line, case-insensitively.
///
/// Returns the trimmed remainder of the line after the marker.
fn strip_marker<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
    let upper = line.to_uppercase();
    for marker in markers {
        if upper.starts_with(marker) {
            // Slice the original line by char count, not by bytes of the
            // uppercased copy, since case mapping can change byte offsets.
            let chars = marker.chars().count();
            let idx = line
                .char_indices()
                .nth(chars)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return Some(line[idx..].trim());
        }
    }
    None
}

/// Parse a generated response into its sections.
///
/// # Examples
///
/// ```
/// use cuentista_pipeline::parse_response;
///
/// let raw = "TÍTULO: La Estrella\n\nCUENTO:\nHabía una vez...\n\nMORALEJA:\nSé valiente.";
/// let parsed = parse_response(raw);
/// assert_eq!(parsed.title.as_deref(), Some("La Estrella"));
/// assert_eq!(parsed.body, "Había una vez...");
/// assert_eq!(parsed.moral.as_deref(), Some("Sé valiente."));
/// ```
pub fn parse_response(raw: &str) -> ParsedResponse {
    let mut title: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut moral: Vec<&str> = Vec::new();
    let mut section = Section::Body;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_marker(line, TITLE_MARKERS) {
            if !rest.is_empty() {
                title = Some(rest.to_string());
            }
            section = Section::Title;
        } else if let Some(rest) = strip_marker(line, STORY_MARKERS) {
            if !rest.is_empty() {
                body.push(rest);
            }
            section = Section::Body;
        } else if let Some(rest) = strip_marker(line, MORAL_MARKERS) {
            if !rest.is_empty() {
                moral.push(rest);
            }
            section = Section::Moral;
        } else {
            match section {
                Section::Moral => moral.push(line),
                // A title is a single line; continuation text after the
                // title marker reads as body.
                Section::Title | Section::Body => body.push(line),
            }
        }
    }

    ParsedResponse {
        title,
        body: body.join("\n\n"),
        moral: if moral.is_empty() {
            None
        } else {
            Some(moral.join(" "))
        },
    }
}

/// Apply defaults to a parse result.
///
/// Returns `(title, body, moral)`: a missing title falls back to the title
/// hint, then to [`DEFAULT_TITLE`]; an empty body falls back to the whole
/// raw response; a missing moral falls back to [`DEFAULT_MORAL`].
pub fn resolve_content(
    parsed: ParsedResponse,
    raw: &str,
    title_hint: Option<&str>,
) -> (String, String, String) {
    let title = parsed
        .title
        .or_else(|| {
            title_hint
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let body = if parsed.body.is_empty() {
        raw.trim().to_string()
    } else {
        parsed.body
    };

    let moral = parsed
        .moral
        .unwrap_or_else(|| DEFAULT_MORAL.to_string());

    (title, body, moral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_parses_into_sections() {
        let raw = "TÍTULO: El Bosque Encantado\n\n\
                   CUENTO:\n\
                   Primer párrafo del cuento.\n\
                   Segundo párrafo del cuento.\n\n\
                   MORALEJA:\n\
                   La amistad es un tesoro.";
        let parsed = parse_response(raw);
        assert_eq!(parsed.title.as_deref(), Some("El Bosque Encantado"));
        assert_eq!(
            parsed.body,
            "Primer párrafo del cuento.\n\nSegundo párrafo del cuento."
        );
        assert_eq!(parsed.moral.as_deref(), Some("La amistad es un tesoro."));
    }

    #[test]
    fn markers_are_case_insensitive() {
        let raw = "título: minúsculas\ncuento:\ntexto\nmoraleja:\nmoral aquí";
        let parsed = parse_response(raw);
        assert_eq!(parsed.title.as_deref(), Some("minúsculas"));
        assert_eq!(parsed.moral.as_deref(), Some("moral aquí"));
    }

    #[test]
    fn english_markers_are_recognized() {
        let raw = "TITLE: The Star\nSTORY:\nOnce upon a time.\nMORAL:\nBe kind.";
        let parsed = parse_response(raw);
        assert_eq!(parsed.title.as_deref(), Some("The Star"));
        assert_eq!(parsed.body, "Once upon a time.");
        assert_eq!(parsed.moral.as_deref(), Some("Be kind."));
    }

    #[test]
    fn markers_tolerated_in_any_order() {
        let raw = "MORALEJA:\nPrimero la moraleja.\nTÍTULO: Al Revés\nCUENTO:\nY luego el cuento.";
        let parsed = parse_response(raw);
        assert_eq!(parsed.title.as_deref(), Some("Al Revés"));
        assert_eq!(parsed.body, "Y luego el cuento.");
        assert_eq!(parsed.moral.as_deref(), Some("Primero la moraleja."));
    }

    #[test]
    fn mid_line_marker_is_body_text() {
        let raw = "El libro decía TÍTULO: algo en medio de la frase.";
        let parsed = parse_response(raw);
        assert!(parsed.title.is_none());
        assert!(parsed.body.contains("TÍTULO:"));
    }

    #[test]
    fn unmarked_text_accumulates_as_body() {
        let raw = "Una línea.\nOtra línea.";
        let parsed = parse_response(raw);
        assert_eq!(parsed.body, "Una línea.\n\nOtra línea.");
        assert!(parsed.title.is_none());
        assert!(parsed.moral.is_none());
    }

    #[test]
    fn missing_title_uses_hint_then_default() {
        let parsed = parse_response("solo cuerpo");
        let (title, _, _) = resolve_content(parsed.clone(), "solo cuerpo", Some("Mi Título"));
        assert_eq!(title, "Mi Título");

        let (title, _, _) = resolve_content(parsed, "solo cuerpo", None);
        assert_eq!(title, DEFAULT_TITLE);
    }

    #[test]
    fn missing_moral_gets_default_only_then() {
        let parsed = parse_response("CUENTO:\ncuerpo");
        let (_, _, moral) = resolve_content(parsed, "x", None);
        assert_eq!(moral, DEFAULT_MORAL);

        let parsed = parse_response("MORALEJA:\nComparte siempre.");
        let (_, _, moral) = resolve_content(parsed, "x", None);
        assert_eq!(moral, "Comparte siempre.");
        assert!(!moral.contains(DEFAULT_MORAL));
    }

    #[test]
    fn empty_body_falls_back_to_whole_response() {
        let raw = "TÍTULO: Solo Título";
        let parsed = parse_response(raw);
        let (_, body, _) = resolve_content(parsed, raw, None);
        assert_eq!(body, raw);
    }
}
