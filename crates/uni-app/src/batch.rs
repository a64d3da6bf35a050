use rayon::prelude::*;
use uni_core::{Engine, Style};

/// Transforme un document entier, en parallèle au-delà de `threshold` octets.
///
/// Les styles locaux (un caractère d'entrée -> sa sortie, à la même place)
/// sont découpés par lignes et traités sur le pool rayon. L'upside-down
/// inverse tout le document : il reste séquentiel. Dans tous les cas la
/// sortie est identique à `engine.transform(style, text)`.
///
/// # Example
/// ```
/// use uni_core::{Engine, Style};
/// use uni_app::batch::transform_document;
///
/// let engine = Engine::new().unwrap();
/// let doc = "line one\nline two\n";
/// assert_eq!(
///     transform_document(&engine, Style::Bold, doc, 1),
///     engine.transform(Style::Bold, doc),
/// );
/// ```
#[must_use]
pub fn transform_document(engine: &Engine, style: Style, text: &str, threshold: usize) -> String {
    if !style.is_char_local() || text.len() <= threshold {
        return engine.transform(style, text);
    }

    let chunks: Vec<&str> = text.split_inclusive('\n').collect();
    log::info!(
        "Batch {} : {} lignes, {} octets en parallèle",
        style.name(),
        chunks.len(),
        text.len()
    );

    chunks
        .par_iter()
        .map(|chunk| engine.transform(style, chunk))
        .collect::<Vec<_>>()
        .concat()
}
