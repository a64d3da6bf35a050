use std::path::PathBuf;

use clap::Parser;

/// unistyle — Plain text to styled Unicode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Texte à transformer. Lu sur stdin si absent et sans --input.
    pub text: Vec<String>,

    /// Lire le texte depuis un fichier.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Un seul style : strike, bold, italic, bold-italic, monospace, script,
    /// upside-down, subscript, superscript.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Sortie JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Ne pas préfixer les lignes par le nom du style.
    #[arg(long, default_value_t = false)]
    pub no_labels: bool,

    /// Re-transformer --input à chaque modification. Ctrl-C pour quitter.
    #[arg(short, long, default_value_t = false)]
    pub watch: bool,

    /// Lister les styles disponibles et quitter.
    #[arg(long, default_value_t = false)]
    pub list_styles: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that the text source is unambiguous.
    ///
    /// # Errors
    /// Returns an error if TEXT and --input are both given, or if --watch is
    /// used without --input.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        if !self.text.is_empty() && self.input.is_some() {
            anyhow::bail!("Texte positionnel et --input sont exclusifs. Choisissez l'un des deux.");
        }
        if self.watch && self.input.is_none() {
            anyhow::bail!("--watch requiert --input <FICHIER>.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_text_is_collected() {
        let cli = Cli::parse_from(["unistyle", "hello", "world", "-s", "bold"]);
        assert_eq!(cli.text, vec!["hello", "world"]);
        assert_eq!(cli.style.as_deref(), Some("bold"));
        assert!(cli.validate_source().is_ok());
    }

    #[test]
    fn text_and_input_conflict() {
        let cli = Cli::parse_from(["unistyle", "hello", "--input", "notes.txt"]);
        assert!(cli.validate_source().is_err());
    }

    #[test]
    fn watch_requires_input() {
        let cli = Cli::parse_from(["unistyle", "--watch"]);
        assert!(cli.validate_source().is_err());
        let cli = Cli::parse_from(["unistyle", "--watch", "-i", "notes.txt"]);
        assert!(cli.validate_source().is_ok());
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["unistyle"]);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.json && !cli.no_labels && !cli.watch);
    }
}
