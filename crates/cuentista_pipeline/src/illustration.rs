//! Illustration prompt construction.

use cuentista_core::ImageRequest;

/// Visual motif for a theme, defaulting to a generic magical scene.
pub fn visual_motif(theme: &str) -> &'static str {
    match theme {
        "aventura" => "adventure scene with maps, treasure, mountains, brave characters",
        "fantasia" => "magical fantasy scene with sparkles, enchanted forest, magical creatures",
        "amistad" => "heartwarming friendship scene with characters helping each other",
        "familia" => "warm family scene with love and togetherness",
        "naturaleza" => "beautiful nature scene with animals, trees, rivers, natural beauty",
        "ciencia" => "futuristic science scene with inventions, space, technology",
        "animales" => "adorable animals in their natural habitat, friendly and cute",
        _ => "magical adventure scene",
    }
}

/// Build the stylistic prompt for a story illustration.
///
/// Combines the theme's visual motif with fixed art-style constraints:
/// warm palette, non-frightening, storybook illustration.
pub fn build_image_prompt(title: &str, theme: &str) -> String {
    format!(
        "Create a beautiful, magical children's book illustration for the story \"{title}\".\n\
         \n\
         Scene description: {motif}\n\
         \n\
         Art style requirements:\n\
         - Digital art, vibrant and warm colors\n\
         - Whimsical and magical atmosphere\n\
         - Child-friendly and enchanting\n\
         - Storybook illustration style\n\
         - High quality, detailed artwork\n\
         - Soft lighting with magical glow\n\
         - Suitable for children aged 3-12\n\
         - No scary or dark elements\n\
         - Include sparkles, soft shadows, and dreamy atmosphere\n\
         \n\
         The image should capture the wonder and magic of childhood stories, with beautiful \
         colors that would appeal to children and create a sense of adventure and imagination.",
        title = title,
        motif = visual_motif(theme),
    )
}

/// Build the full image generation request for a story.
pub fn build_image_request(title: &str, theme: &str) -> ImageRequest {
    ImageRequest::new(build_image_prompt(title, theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motif_falls_back_for_unknown_themes() {
        assert_eq!(visual_motif("piratas"), "magical adventure scene");
    }

    #[test]
    fn prompt_quotes_the_title() {
        let prompt = build_image_prompt("La Gran Aventura", "aventura");
        assert!(prompt.contains("\"La Gran Aventura\""));
        assert!(prompt.contains("maps, treasure"));
        assert!(prompt.contains("No scary or dark elements"));
    }

    #[test]
    fn request_is_a_single_standard_image() {
        let req = build_image_request("Título", "fantasia");
        assert_eq!(req.count, 1);
        assert_eq!(req.size, "1024x1024");
    }
}
