use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Style de texte Unicode.
///
/// # Example
/// ```
/// use uni_core::style::Style;
/// let style: Style = "bold-italic".parse().unwrap();
/// assert_eq!(style, Style::BoldItalic);
/// assert_eq!(style.label(), "Bold & Italic");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Combining long stroke overlay after every character.
    Strikethrough,
    /// Mathematical sans-serif bold.
    Bold,
    /// Mathematical sans-serif italic.
    Italic,
    /// Mathematical sans-serif bold italic, with bold digits.
    BoldItalic,
    /// Mathematical monospace.
    Monospace,
    /// Mathematical bold script.
    Script,
    /// Mirrored glyphs in reversed order.
    UpsideDown,
    /// Subscript glyphs, partial coverage.
    Subscript,
    /// Superscript glyphs, partial coverage.
    Superscript,
}

impl Style {
    /// Tous les styles, dans l'ordre d'affichage.
    pub const ALL: [Style; 9] = [
        Style::Strikethrough,
        Style::Bold,
        Style::Italic,
        Style::BoldItalic,
        Style::Monospace,
        Style::Script,
        Style::UpsideDown,
        Style::Subscript,
        Style::Superscript,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Style::Strikethrough => "Strikethrough",
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::BoldItalic => "Bold & Italic",
            Style::Monospace => "Monospace",
            Style::Script => "Script",
            Style::UpsideDown => "Upside-down",
            Style::Subscript => "Subscript",
            Style::Superscript => "Superscript",
        }
    }

    /// Nom en ligne de commande (kebab-case).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Style::Strikethrough => "strike",
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::BoldItalic => "bold-italic",
            Style::Monospace => "monospace",
            Style::Script => "script",
            Style::UpsideDown => "upside-down",
            Style::Subscript => "subscript",
            Style::Superscript => "superscript",
        }
    }

    /// `false` pour les styles dont la plupart des lettres n'ont pas de glyphe.
    #[must_use]
    pub fn is_complete(self) -> bool {
        !matches!(self, Style::Subscript | Style::Superscript)
    }

    /// `true` si chaque caractère de sortie ne dépend que d'un caractère d'entrée,
    /// à sa place. Faux pour l'upside-down, qui inverse l'ordre.
    #[must_use]
    pub fn is_char_local(self) -> bool {
        !matches!(self, Style::UpsideDown)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '&'))
            .flat_map(char::to_lowercase)
            .collect();
        let style = match key.as_str() {
            "strike" | "strikethrough" => Style::Strikethrough,
            "bold" | "bolden" => Style::Bold,
            "italic" | "italicize" => Style::Italic,
            "bolditalic" => Style::BoldItalic,
            "monospace" | "mono" => Style::Monospace,
            "script" | "scriptize" => Style::Script,
            "upsidedown" | "flip" => Style::UpsideDown,
            "subscript" | "sub" => Style::Subscript,
            "superscript" | "sup" => Style::Superscript,
            _ => return Err(CoreError::UnknownStyle(s.to_string())),
        };
        Ok(style)
    }
}
