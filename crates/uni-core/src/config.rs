use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;
use crate::style::Style;

/// Seuil minimal (octets) avant de paralléliser un document.
pub const MIN_PARALLEL_THRESHOLD: usize = 1024;

/// Format de sortie de la galerie.
///
/// # Example
/// ```
/// use uni_core::config::OutputFormat;
/// assert!(matches!(OutputFormat::default(), OutputFormat::Text));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum OutputFormat {
    /// Une ligne par style.
    #[default]
    Text,
    /// Tableau JSON de `{ style, label, complete, output }`.
    Json,
}

/// Configuration de l'application.
///
/// Lue depuis TOML via [`load_config`]. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use uni_core::config::AppConfig;
/// let config = AppConfig::default();
/// assert_eq!(config.styles.len(), 9);
/// assert!(config.show_labels);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Styles affichés dans la galerie, dans l'ordre.
    pub styles: Vec<Style>,
    /// Préfixer chaque ligne par le nom du style.
    pub show_labels: bool,
    /// Afficher subscript/superscript sous une section « Incomplete ».
    pub show_incomplete: bool,
    /// Texte ou JSON.
    pub format: OutputFormat,
    /// Taille (octets) au-delà de laquelle le batch passe en parallèle.
    pub parallel_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            styles: Style::ALL.to_vec(),
            show_labels: true,
            show_incomplete: true,
            format: OutputFormat::Text,
            parallel_threshold: 64 * 1024,
        }
    }
}

impl AppConfig {
    /// Clamp numeric fields and drop duplicate styles.
    pub fn clamp_all(&mut self) {
        self.parallel_threshold = self.parallel_threshold.max(MIN_PARALLEL_THRESHOLD);
        let mut seen = Vec::with_capacity(self.styles.len());
        self.styles.retain(|s| {
            if seen.contains(s) {
                false
            } else {
                seen.push(*s);
                true
            }
        });
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    output: Option<OutputSection>,
    batch: Option<BatchSection>,
}

/// Output section, all fields optional for partial override.
#[derive(Deserialize)]
struct OutputSection {
    styles: Option<Vec<String>>,
    show_labels: Option<bool>,
    show_incomplete: Option<bool>,
    format: Option<OutputFormat>,
}

/// Batch section, all fields optional.
#[derive(Deserialize)]
struct BatchSection {
    parallel_threshold: Option<usize>,
}

/// Parse une config TOML et fusionne avec les valeurs par défaut.
///
/// Les noms de style acceptent les mêmes alias que la ligne de commande.
///
/// # Errors
/// Returns an error if the TOML is malformed or names an unknown style.
///
/// # Example
/// ```
/// use uni_core::config::parse_config;
/// use uni_core::Style;
/// let config = parse_config("[output]\nstyles = [\"bold\", \"upside-down\"]").unwrap();
/// assert_eq!(config.styles, vec![Style::Bold, Style::UpsideDown]);
/// ```
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = AppConfig::default();

    if let Some(o) = file.output {
        if let Some(names) = o.styles {
            config.styles = names
                .iter()
                .map(|n| n.parse::<Style>())
                .collect::<Result<Vec<_>, CoreError>>()?;
        }
        if let Some(v) = o.show_labels {
            config.show_labels = v;
        }
        if let Some(v) = o.show_incomplete {
            config.show_incomplete = v;
        }
        if let Some(v) = o.format {
            config.format = v;
        }
    }

    if let Some(b) = file.batch {
        if let Some(v) = b.parallel_threshold {
            config.parallel_threshold = v;
        }
    }

    config.clamp_all();
    if config.styles.is_empty() {
        return Err(CoreError::Config("aucun style sélectionné".into()).into());
    }
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use uni_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))
}
