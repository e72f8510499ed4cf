/// Rewrites the closing declaration. `{declaration}` is replaced with the current text.
pub const IMPROVE_DECLARATION_TEMPLATE: &str = "\
Rewrite this resume declaration statement to be more professional and impactful, \
while keeping it short (max 2 sentences): \"{declaration}\"";

/// Normalizes the languages-known field. `{languages}` is replaced with the current text.
pub const STANDARDIZE_LANGUAGES_TEMPLATE: &str = "\
Standardize this list of languages for a formal resume/bio-data. \
Input: \"{languages}\". Output only the comma separated list.";

pub fn improve_declaration_prompt(declaration: &str) -> String {
    IMPROVE_DECLARATION_TEMPLATE.replace("{declaration}", declaration)
}

pub fn standardize_languages_prompt(languages: &str) -> String {
    STANDARDIZE_LANGUAGES_TEMPLATE.replace("{languages}", languages)
}
