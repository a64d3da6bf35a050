use crate::error::CoreError;
use crate::style::Style;
use crate::styles;
use crate::table::StyleTable;

/// U+0336 COMBINING LONG STROKE OVERLAY.
pub const LONG_STROKE_OVERLAY: char = '\u{0336}';

/// Barre chaque caractère en lui accolant U+0336.
///
/// Aucune table : n'importe quel scalaire est accepté. La sortie compte
/// exactement deux fois plus de scalaires que l'entrée.
///
/// # Example
/// ```
/// use uni_core::engine::strike;
/// assert_eq!(strike("cat"), "c\u{336}a\u{336}t\u{336}");
/// ```
#[must_use]
pub fn strike(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        out.push(c);
        out.push(LONG_STROKE_OVERLAY);
    }
    out
}

/// Moteur de transformation : possède toutes les tables, construites une fois.
///
/// Immuable, `Send + Sync` : partageable entre threads via `Arc` sans verrou.
///
/// # Example
/// ```
/// use uni_core::{Engine, Style};
/// let engine = Engine::new().unwrap();
/// assert_eq!(engine.bold("Hi"), "𝗛𝗶");
/// assert_eq!(engine.transform(Style::UpsideDown, "no"), "ou");
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    bold: StyleTable,
    italic: StyleTable,
    bold_italic: StyleTable,
    monospace: StyleTable,
    script: StyleTable,
    subscript: StyleTable,
    superscript: StyleTable,
    upside_down: StyleTable,
}

impl Engine {
    /// Construit toutes les tables de style.
    ///
    /// # Errors
    /// Returns an error if any built-in table is malformed (bad range or
    /// overlapping rules).
    pub fn new() -> Result<Self, CoreError> {
        let engine = Self {
            bold: styles::bold()?,
            italic: styles::italic()?,
            bold_italic: styles::bold_italic()?,
            monospace: styles::monospace()?,
            script: styles::script()?,
            subscript: styles::subscript()?,
            superscript: styles::superscript()?,
            upside_down: styles::upside_down()?,
        };
        log::debug!("Engine prêt : {} styles", Style::ALL.len());
        Ok(engine)
    }

    /// Table backing `style`, or `None` for strikethrough.
    #[must_use]
    pub fn table(&self, style: Style) -> Option<&StyleTable> {
        match style {
            Style::Strikethrough => None,
            Style::Bold => Some(&self.bold),
            Style::Italic => Some(&self.italic),
            Style::BoldItalic => Some(&self.bold_italic),
            Style::Monospace => Some(&self.monospace),
            Style::Script => Some(&self.script),
            Style::UpsideDown => Some(&self.upside_down),
            Style::Subscript => Some(&self.subscript),
            Style::Superscript => Some(&self.superscript),
        }
    }

    /// Applique `style` à `text`.
    #[must_use]
    pub fn transform(&self, style: Style, text: &str) -> String {
        match style {
            Style::Strikethrough => strike(text),
            Style::UpsideDown => self.upside_down(text),
            _ => self
                .table(style)
                .map_or_else(|| text.to_string(), |table| table.apply(text)),
        }
    }

    /// See [`strike`].
    #[must_use]
    pub fn strike(&self, text: &str) -> String {
        strike(text)
    }

    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        self.bold.apply(text)
    }

    #[must_use]
    pub fn italic(&self, text: &str) -> String {
        self.italic.apply(text)
    }

    #[must_use]
    pub fn bold_italic(&self, text: &str) -> String {
        self.bold_italic.apply(text)
    }

    #[must_use]
    pub fn monospace(&self, text: &str) -> String {
        self.monospace.apply(text)
    }

    #[must_use]
    pub fn script(&self, text: &str) -> String {
        self.script.apply(text)
    }

    #[must_use]
    pub fn subscript(&self, text: &str) -> String {
        self.subscript.apply(text)
    }

    #[must_use]
    pub fn superscript(&self, text: &str) -> String {
        self.superscript.apply(text)
    }

    /// Inverse l'ordre des scalaires puis retourne chaque glyphe.
    #[must_use]
    pub fn upside_down(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        self.upside_down.apply_chars(text.chars().rev(), &mut out);
        out
    }
}
