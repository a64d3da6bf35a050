use anyhow::Result;
use serde::Serialize;
use uni_core::config::{AppConfig, OutputFormat};
use uni_core::{Engine, Style};

use crate::batch;

/// En-tête de la section des styles à couverture partielle.
pub const INCOMPLETE_HEADING: &str = "-- Incomplete --";

/// Une ligne de la galerie : un style et son rendu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Nom CLI du style.
    pub style: &'static str,
    /// Libellé lisible.
    pub label: &'static str,
    /// Whether the style covers every letter.
    pub complete: bool,
    /// Texte transformé.
    pub output: String,
}

/// Transforme `text` avec chaque style configuré.
///
/// Les styles complets d'abord, puis les incomplets si `show_incomplete`.
///
/// # Example
/// ```
/// use uni_core::{AppConfig, Engine};
/// use uni_app::render::render_rows;
///
/// let engine = Engine::new().unwrap();
/// let rows = render_rows(&engine, &AppConfig::default(), "Hi");
/// assert_eq!(rows[1].output, "𝗛𝗶");
/// ```
#[must_use]
pub fn render_rows(engine: &Engine, config: &AppConfig, text: &str) -> Vec<Row> {
    let complete = config.styles.iter().filter(|s| s.is_complete());
    let incomplete = config
        .styles
        .iter()
        .filter(|s| !s.is_complete() && config.show_incomplete);

    complete
        .chain(incomplete)
        .map(|&style| row(engine, style, text))
        .collect()
}

fn row(engine: &Engine, style: Style, text: &str) -> Row {
    styled_row(style, engine.transform(style, text))
}

fn styled_row(style: Style, output: String) -> Row {
    Row {
        style: style.name(),
        label: style.label(),
        complete: style.is_complete(),
        output,
    }
}

/// Rendu complet d'un texte lu sur la ligne de commande, stdin ou un fichier.
///
/// Sans `style`, produit la galerie. Avec un style, transforme le document
/// via [`batch::transform_document`] : les fins de ligne finales restent hors
/// de la transformation (pas de U+0336 sur le saut de ligne, pas de ligne
/// vide en tête de l'upside-down) et sont recollées telles quelles.
///
/// # Errors
/// Returns an error if JSON serialisation fails.
///
/// # Example
/// ```
/// use uni_core::{AppConfig, Engine, Style};
/// use uni_app::render::render_text;
///
/// let engine = Engine::new().unwrap();
/// let out = render_text(&engine, &AppConfig::default(), Some(Style::UpsideDown), "no\n").unwrap();
/// assert_eq!(out, "ou\n");
/// ```
pub fn render_text(
    engine: &Engine,
    config: &AppConfig,
    style: Option<Style>,
    text: &str,
) -> Result<String> {
    let body = gallery_input(text);
    let Some(style) = style else {
        let rows = render_rows(engine, config, body);
        return format_rows(&rows, config);
    };

    let output = batch::transform_document(engine, style, body, config.parallel_threshold);
    match config.format {
        OutputFormat::Json => format_rows(&[styled_row(style, output)], config),
        OutputFormat::Text => Ok(output + &text[body.len()..]),
    }
}

/// Retire les fins de ligne finales d'un texte lu sur stdin ou un fichier.
///
/// Une galerie affiche une ligne par style : le saut de ligne final d'un
/// fichier ne doit pas s'y retrouver (ni, inversé, en tête de l'upside-down).
#[must_use]
pub fn gallery_input(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

/// Met en forme les lignes selon `config.format` et `config.show_labels`.
///
/// # Errors
/// Returns an error if JSON serialisation fails.
pub fn format_rows(rows: &[Row], config: &AppConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Text => Ok(format_text(rows, config.show_labels)),
    }
}

fn format_text(rows: &[Row], show_labels: bool) -> String {
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    let mut in_incomplete = false;
    for r in rows {
        if !r.complete && !in_incomplete {
            in_incomplete = true;
            if show_labels {
                out.push_str(INCOMPLETE_HEADING);
                out.push('\n');
            }
        }
        if show_labels {
            out.push_str(&format!("{:<width$}  {}\n", r.label, r.output));
        } else {
            out.push_str(&r.output);
            out.push('\n');
        }
    }
    out
}

/// Liste des styles pour `--list-styles`.
#[must_use]
pub fn list_styles(engine: &Engine) -> String {
    let mut out = String::new();
    for style in Style::ALL {
        let marker = if style.is_complete() { "" } else { " (incomplete)" };
        out.push_str(&format!(
            "{:<12} {}{marker}\n",
            style.name(),
            engine.transform(style, style.label())
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new().unwrap_or_else(|e| panic!("tables invalides : {e}"))
    }

    #[test]
    fn incomplete_rows_come_last() {
        let config = AppConfig {
            styles: vec![Style::Subscript, Style::Bold, Style::Superscript, Style::Italic],
            ..AppConfig::default()
        };
        let rows = render_rows(&engine(), &config, "x");
        let order: Vec<&str> = rows.iter().map(|r| r.style).collect();
        assert_eq!(order, vec!["bold", "italic", "subscript", "superscript"]);
    }

    #[test]
    fn incomplete_rows_can_be_hidden() {
        let config = AppConfig {
            show_incomplete: false,
            ..AppConfig::default()
        };
        let rows = render_rows(&engine(), &config, "x");
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.complete));
    }

    #[test]
    fn text_output_with_labels() {
        let config = AppConfig {
            styles: vec![Style::Bold, Style::Subscript],
            ..AppConfig::default()
        };
        let rows = render_rows(&engine(), &config, "a2");
        let text = format_text(&rows, true);
        assert_eq!(text, format!("Bold       𝗮𝟮\n{INCOMPLETE_HEADING}\nSubscript  ₐ₂\n"));
    }

    #[test]
    fn text_output_without_labels() {
        let config = AppConfig {
            styles: vec![Style::Strikethrough, Style::UpsideDown],
            show_labels: false,
            ..AppConfig::default()
        };
        let rows = render_rows(&engine(), &config, "no");
        assert_eq!(format_rows(&rows, &config).ok(), Some("n\u{336}o\u{336}\nou\n".to_string()));
    }

    #[test]
    fn json_output_is_an_array() {
        let config = AppConfig {
            styles: vec![Style::Monospace],
            format: OutputFormat::Json,
            ..AppConfig::default()
        };
        let rows = render_rows(&engine(), &config, "A");
        let json = format_rows(&rows, &config).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(value[0]["style"], "monospace");
        assert_eq!(value[0]["output"], "𝙰");
        assert_eq!(value[0]["complete"], true);
    }

    #[test]
    fn single_style_leaves_final_newline_untouched() -> Result<()> {
        let engine = engine();
        let config = AppConfig::default();
        assert_eq!(render_text(&engine, &config, Some(Style::UpsideDown), "no\n")?, "ou\n");
        assert_eq!(
            render_text(&engine, &config, Some(Style::Strikethrough), "cat\n")?,
            "c\u{336}a\u{336}t\u{336}\n"
        );
        assert_eq!(
            render_text(&engine, &config, Some(Style::Strikethrough), "ab\r\n")?,
            "a\u{336}b\u{336}\r\n"
        );
        Ok(())
    }

    #[test]
    fn single_style_without_newline() -> Result<()> {
        let engine = engine();
        let out = render_text(&engine, &AppConfig::default(), Some(Style::Bold), "Hi")?;
        assert_eq!(out, "𝗛𝗶");
        Ok(())
    }

    #[test]
    fn single_style_keeps_inner_lines() -> Result<()> {
        let engine = engine();
        let out = render_text(&engine, &AppConfig::default(), Some(Style::UpsideDown), "ab\ncd\n")?;
        assert_eq!(out, "pɔ\nqɐ\n");
        Ok(())
    }

    #[test]
    fn single_style_json_row() -> Result<()> {
        let engine = engine();
        let config = AppConfig {
            format: OutputFormat::Json,
            ..AppConfig::default()
        };
        let json = render_text(&engine, &config, Some(Style::Strikethrough), "x\n")?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value[0]["style"], "strike");
        assert_eq!(value[0]["output"], "x\u{336}");
        Ok(())
    }

    #[test]
    fn no_style_renders_gallery() -> Result<()> {
        let engine = engine();
        let config = AppConfig {
            styles: vec![Style::UpsideDown],
            show_labels: false,
            ..AppConfig::default()
        };
        assert_eq!(render_text(&engine, &config, None, "ab\n")?, "qɐ\n");
        Ok(())
    }

    #[test]
    fn gallery_input_strips_final_newlines() {
        assert_eq!(gallery_input("ab\r\n\n"), "ab");
        assert_eq!(gallery_input("a\nb"), "a\nb");
    }

    #[test]
    fn list_mentions_every_style() {
        let listing = list_styles(&engine());
        for style in Style::ALL {
            assert!(listing.contains(style.name()), "{style} absent");
        }
        assert_eq!(listing.matches("(incomplete)").count(), 2);
    }
}
