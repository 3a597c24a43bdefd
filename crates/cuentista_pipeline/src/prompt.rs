//! Deterministic story prompt construction.
//!
//! The prompt is assembled from fixed lookup tables: age band controls the
//! vocabulary tier, length tier controls the paragraph-count target, and the
//! theme selects a set of thematic elements. Unknown themes get a generic
//! adventure framing so free-form themes still produce a usable prompt.

use cuentista_core::{AgeBand, LengthTier, Message, StoryRequest, TextRequest};

/// System role description for the text capability.
pub const SYSTEM_PROMPT: &str = "Eres un escritor experto en cuentos infantiles mágicos. \
Creas historias cautivadoras, educativas y apropiadas para la edad especificada. \
Siempre incluyes una moraleja clara y valiosa al final. \
Tu estilo es descriptivo, imaginativo y lleno de magia.";

/// Bounded output size for story text.
const MAX_TOKENS: u32 = 1500;

/// Fixed sampling parameters.
const TEMPERATURE: f32 = 0.8;
const PRESENCE_PENALTY: f32 = 0.1;
const FREQUENCY_PENALTY: f32 = 0.1;

fn audience_description(band: AgeBand) -> &'static str {
    match band {
        AgeBand::Preschool => {
            "niños de 3 a 5 años (preescolar) - usa vocabulario muy simple, frases cortas y conceptos básicos"
        }
        AgeBand::EarlyPrimary => {
            "niños de 6 a 8 años (primaria temprana) - vocabulario intermedio, puede incluir aventuras simples"
        }
        AgeBand::LatePrimary => {
            "niños de 9 a 12 años (primaria tardía) - vocabulario más avanzado, tramas más complejas"
        }
    }
}

fn length_description(tier: LengthTier) -> &'static str {
    match tier {
        LengthTier::Corto => "un cuento corto de 3-4 párrafos (2-3 minutos de lectura)",
        LengthTier::Medio => "un cuento de longitud media de 6-8 párrafos (5-7 minutos de lectura)",
        LengthTier::Largo => "un cuento largo de 10-12 párrafos (10-15 minutos de lectura)",
    }
}

/// Thematic element set for a theme, defaulting to generic adventure.
pub fn theme_elements(theme: &str) -> &'static str {
    match theme {
        "aventura" => "viajes emocionantes, descubrimientos, valentía, exploración",
        "fantasia" => "magia, criaturas mágicas, mundos encantados, hechizos",
        "amistad" => "compañerismo, lealtad, ayuda mutua, trabajo en equipo",
        "familia" => "amor familiar, tradiciones, apoyo, unión",
        "naturaleza" => "animales, bosques, océanos, cuidado del medio ambiente",
        "ciencia" => "inventos, experimentos, tecnología futurista, descubrimientos",
        "animales" => "mascotas, animales salvajes, comunicación con animales",
        _ => "aventuras emocionantes",
    }
}

/// Build the structured user prompt for a story request.
///
/// The response-format contract at the end is what the section parser
/// recognizes when splitting the response into title, body, and moral.
pub fn build_story_prompt(req: &StoryRequest) -> String {
    let title_line = match req.title_hint.as_deref() {
        Some(hint) => hint.to_string(),
        None => "Genera un título creativo y mágico".to_string(),
    };

    format!(
        "Escribe {longitud} para {edad} con las siguientes características:\n\
         \n\
         PERSONAJE PRINCIPAL: {personaje}\n\
         TEMA: {tema} - incluye elementos de {elementos}\n\
         TÍTULO SUGERIDO: {titulo}\n\
         \n\
         INSTRUCCIONES ESPECÍFICAS:\n\
         1. El cuento debe ser completamente apropiado para la edad especificada\n\
         2. Usa un lenguaje descriptivo pero accesible para la edad\n\
         3. Incluye elementos mágicos y fantásticos que capturen la imaginación\n\
         4. La historia debe tener un inicio, desarrollo y final satisfactorio\n\
         5. Incluye diálogos naturales para hacer la historia más dinámica\n\
         6. Describe escenarios de manera vívida para que el niño pueda imaginarlos\n\
         7. El protagonista debe enfrentar un desafío y crecer como personaje\n\
         8. Incluye emociones positivas y momentos de emoción\n\
         9. Al final, incluye una moraleja clara y valiosa para la vida\n\
         \n\
         FORMATO DE RESPUESTA REQUERIDO:\n\
         TÍTULO: [Título creativo y atractivo del cuento]\n\
         \n\
         CUENTO:\n\
         [Contenido del cuento dividido en párrafos bien estructurados, con descripciones ricas y diálogos naturales]\n\
         \n\
         MORALEJA:\n\
         [Una moraleja clara, positiva y educativa que se derive naturalmente de la historia]\n\
         \n\
         IMPORTANTE: Asegúrate de que la historia sea emocionante, educativa, mágica y completamente apropiada para niños.",
        longitud = length_description(req.length_tier),
        edad = audience_description(req.age_band),
        personaje = req.character,
        tema = req.theme,
        elementos = theme_elements(&req.theme),
        titulo = title_line,
    )
}

/// Build the full text generation request for a story.
pub fn build_text_request(req: &StoryRequest) -> TextRequest {
    TextRequest {
        messages: vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(build_story_prompt(req)),
        ],
        max_tokens: Some(MAX_TOKENS),
        temperature: Some(TEMPERATURE),
        presence_penalty: Some(PRESENCE_PENALTY),
        frequency_penalty: Some(FREQUENCY_PENALTY),
        model: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuentista_core::StoryRequestBuilder;

    fn request() -> StoryRequest {
        StoryRequestBuilder::default()
            .character("Luna")
            .theme("ciencia")
            .age_band(AgeBand::EarlyPrimary)
            .length_tier(LengthTier::Corto)
            .build()
            .unwrap()
    }

    #[test]
    fn prompt_names_character_and_theme_elements() {
        let prompt = build_story_prompt(&request());
        assert!(prompt.contains("PERSONAJE PRINCIPAL: Luna"));
        assert!(prompt.contains("inventos, experimentos"));
        assert!(prompt.contains("3-4 párrafos"));
        assert!(prompt.contains("6 a 8 años"));
    }

    #[test]
    fn prompt_uses_title_hint_when_present() {
        let mut req = request();
        req.title_hint = Some("El Robot de Luna".into());
        let prompt = build_story_prompt(&req);
        assert!(prompt.contains("TÍTULO SUGERIDO: El Robot de Luna"));
    }

    #[test]
    fn unknown_theme_gets_generic_elements() {
        assert_eq!(theme_elements("piratas"), "aventuras emocionantes");
    }

    #[test]
    fn text_request_carries_fixed_sampling() {
        let wire = build_text_request(&request());
        assert_eq!(wire.max_tokens, Some(1500));
        assert_eq!(wire.temperature, Some(0.8));
        assert_eq!(wire.messages.len(), 2);
    }
}
