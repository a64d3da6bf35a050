use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use uni_core::{AppConfig, Engine, Style};

use crate::render;

/// Message envoyé au thread principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchMessage {
    /// Nouveau rendu du fichier surveillé.
    Rendered(String),
    /// Arrêt demandé (Ctrl-C).
    Stop,
}

/// Lit `path` et le rend via [`render::render_text`] : galerie, ou `style` seul.
///
/// # Errors
/// Returns an error if the file cannot be read or the output cannot be
/// formatted.
pub fn render_file(
    engine: &Engine,
    config: &AppConfig,
    style: Option<Style>,
    path: &Path,
) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    render::render_text(engine, config, style, &text)
}

/// Lance un watcher qui re-transforme le fichier à chaque modification.
///
/// Chaque rendu est envoyé sur `tx`. Retourne le Watcher (doit rester vivant
/// tant que la surveillance tourne).
///
/// # Errors
/// Returns an error if the watcher cannot be created or the path cannot be watched.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use std::path::Path;
/// use uni_core::{AppConfig, Engine};
/// use uni_app::watch::spawn_input_watcher;
///
/// let engine = Arc::new(Engine::new().unwrap());
/// let (tx, rx) = flume::unbounded();
/// let _watcher =
///     spawn_input_watcher(Path::new("notes.txt"), &engine, AppConfig::default(), None, tx);
/// ```
pub fn spawn_input_watcher(
    input_path: &Path,
    engine: &Arc<Engine>,
    config: AppConfig,
    style: Option<Style>,
    tx: flume::Sender<WatchMessage>,
) -> Result<impl Watcher + use<>> {
    let engine = Arc::clone(engine);
    let path = input_path.to_path_buf();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            if matches!(event.kind, EventKind::Modify(_)) {
                match render_file(&engine, &config, style, &path) {
                    Ok(rendered) => {
                        log::info!("Entrée re-transformée depuis {}", path.display());
                        if tx.send(WatchMessage::Rendered(rendered)).is_err() {
                            log::debug!("Récepteur fermé, rendu ignoré");
                        }
                    }
                    Err(e) => {
                        log::warn!("Erreur de relecture de {} : {e}", path.display());
                        // On garde le rendu précédent. Pas de panic.
                    }
                }
            }
        }
    })?;

    watcher.watch(input_path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn render_file_uses_config() -> Result<()> {
        let engine = Engine::new()?;
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "ab")?;
        let config = AppConfig {
            styles: vec![Style::UpsideDown],
            show_labels: false,
            ..AppConfig::default()
        };
        assert_eq!(render_file(&engine, &config, None, file.path())?, "qɐ\n");
        Ok(())
    }

    #[test]
    fn render_file_with_single_style() -> Result<()> {
        let engine = Engine::new()?;
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "cat")?;
        let out = render_file(&engine, &AppConfig::default(), Some(Style::Strikethrough), file.path())?;
        assert_eq!(out, "c\u{336}a\u{336}t\u{336}\n");
        Ok(())
    }

    #[test]
    fn render_missing_file_fails() -> Result<()> {
        let engine = Engine::new()?;
        let missing = Path::new("/nonexistent/in.txt");
        assert!(render_file(&engine, &AppConfig::default(), None, missing).is_err());
        Ok(())
    }
}
