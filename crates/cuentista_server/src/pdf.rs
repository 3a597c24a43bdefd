//! PDF rendering for story export.

use cuentista_database::StoryRow;
use cuentista_error::{CuentistaResult, ServerError, ServerErrorKind};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Letter-size page in PDF points.
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 72;
const LEADING: i64 = 16;
const BODY_FONT_SIZE: i64 = 12;
const TITLE_FONT_SIZE: i64 = 18;
const MAX_LINE_CHARS: usize = 88;
const LINES_PER_PAGE: usize = 40;

/// Renders a completed story into a downloadable document.
///
/// The rendering engine sits behind this trait so the export route does
/// not care how the bytes are produced; tests swap in a trivial renderer.
pub trait StoryRenderer: Send + Sync {
    /// Render the story into a byte stream.
    fn render(&self, story: &StoryRow) -> CuentistaResult<Vec<u8>>;
}

/// lopdf-backed renderer producing a simple text document: title page
/// header, body paragraphs, and the moral as a closing line.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// A new renderer.
    pub fn new() -> Self {
        Self
    }
}

/// A line of text with the font size to draw it at.
struct Line {
    text: String,
    font_size: i64,
}

/// Encode text for the WinAnsi-encoded Helvetica font.
///
/// Spanish accented characters live in Latin-1; anything outside it is
/// replaced rather than dropped.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

/// Greedy word wrap at a fixed character budget.
fn wrap(text: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > budget {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn layout(story: &StoryRow) -> Vec<Line> {
    let mut lines = Vec::new();

    lines.push(Line {
        text: story.title.clone(),
        font_size: TITLE_FONT_SIZE,
    });
    lines.push(Line {
        text: String::new(),
        font_size: BODY_FONT_SIZE,
    });

    for text in wrap(&story.body, MAX_LINE_CHARS) {
        lines.push(Line {
            text,
            font_size: BODY_FONT_SIZE,
        });
    }

    lines.push(Line {
        text: String::new(),
        font_size: BODY_FONT_SIZE,
    });
    for text in wrap(&format!("Moraleja: {}", story.moral), MAX_LINE_CHARS) {
        lines.push(Line {
            text,
            font_size: BODY_FONT_SIZE,
        });
    }

    lines
}

fn page_content(lines: &[Line]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new(
            "Td",
            vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()],
        ),
    ];

    let mut current_size = 0;
    for line in lines {
        if line.font_size != current_size {
            operations.push(Operation::new(
                "Tf",
                vec!["F1".into(), line.font_size.into()],
            ));
            current_size = line.font_size;
        }
        if !line.text.is_empty() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    encode_latin1(&line.text),
                    lopdf::StringFormat::Literal,
                )],
            ));
        }
        operations.push(Operation::new("T*", vec![]));
    }

    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

impl StoryRenderer for PdfRenderer {
    fn render(&self, story: &StoryRow) -> CuentistaResult<Vec<u8>> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let lines = layout(story);
        let mut kids: Vec<Object> = Vec::new();

        for chunk in lines.chunks(LINES_PER_PAGE) {
            let content = page_content(chunk);
            let encoded = content.encode().map_err(|e| {
                ServerError::new(ServerErrorKind::Render(e.to_string()))
            })?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ServerError::new(ServerErrorKind::Render(e.to_string())))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn story(body: &str) -> StoryRow {
        let now = Utc::now();
        StoryRow {
            id: 1,
            owner: Uuid::new_v4(),
            title: "El Cuento Mágico".into(),
            main_character: "Luna".into(),
            theme: "ciencia".into(),
            age_band: "6-8".into(),
            length_tier: "corto".into(),
            title_hint: None,
            body: body.into(),
            moral: "La curiosidad es un don.".into(),
            image_url: String::new(),
            image_prompt: String::new(),
            status: "completed".into(),
            created_at: now,
            updated_at: now,
            is_favorite: false,
            read_count: 0,
            estimated_read_seconds: 60,
        }
    }

    #[test]
    fn renders_a_pdf_header() {
        let bytes = PdfRenderer::new().render(&story("Un párrafo corto.")).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn long_bodies_span_multiple_pages() {
        let long_body = "palabra ".repeat(4000);
        let bytes = PdfRenderer::new().render(&story(&long_body)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn wrap_respects_the_budget() {
        let text = "uno dos tres cuatro cinco seis siete ocho nueve diez";
        for line in wrap(text, 15) {
            assert!(line.chars().count() <= 15, "line too long: {line}");
        }
    }

    #[test]
    fn latin1_keeps_spanish_accents() {
        let bytes = encode_latin1("Mágico niño");
        assert_eq!(bytes.len(), "Mágico niño".chars().count());
        assert!(!bytes.contains(&b'?'));
        assert_eq!(encode_latin1("絵本"), b"??");
    }
}
