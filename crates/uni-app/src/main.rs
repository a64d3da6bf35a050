use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use uni_app::watch::WatchMessage;
use uni_app::{cli, render, watch};
use uni_core::config::OutputFormat;
use uni_core::{AppConfig, Engine, Style};

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;

    // 4. Construire les tables (une seule fois)
    let engine = Arc::new(Engine::new().context("Tables de style invalides")?);

    if cli.list_styles {
        print!("{}", render::list_styles(&engine));
        return Ok(());
    }

    // 5. Charger la config et appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    if cli.json {
        config.format = OutputFormat::Json;
    }
    if cli.no_labels {
        config.show_labels = false;
    }
    let style = cli
        .style
        .as_deref()
        .map(str::parse::<Style>)
        .transpose()?;

    // 6. Mode watch : re-rendu à chaque modification de --input
    if let Some(path) = cli.input.as_ref().filter(|_| cli.watch) {
        return run_watch(path, &engine, config, style);
    }

    // 7. Lire le texte
    let text = read_text(&cli)?;

    // 8. Transformer et afficher
    emit(&render::render_text(&engine, &config, style, &text)?);

    Ok(())
}

/// Affiche `out`, en ajoutant le saut de ligne final s'il manque.
fn emit(out: &str) {
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}

/// Texte positionnel, fichier --input, ou stdin.
fn read_text(cli: &cli::Cli) -> Result<String> {
    if let Some(ref path) = cli.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()));
    }
    if !cli.text.is_empty() {
        return Ok(cli.text.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Impossible de lire stdin")?;
    Ok(text)
}

/// Surveille `path` jusqu'à Ctrl-C, en affichant chaque nouveau rendu.
fn run_watch(
    path: &Path,
    engine: &Arc<Engine>,
    config: AppConfig,
    style: Option<Style>,
) -> Result<()> {
    let (tx, rx) = flume::unbounded();

    // Rendu initial, avant la première modification.
    match watch::render_file(engine, &config, style, path) {
        Ok(out) => emit(&out),
        Err(e) => log::warn!("Lecture initiale de {} impossible : {e}", path.display()),
    }

    let stop_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(WatchMessage::Stop);
    })
    .context("Impossible d'installer le handler Ctrl-C")?;

    let _watcher = watch::spawn_input_watcher(path, engine, config, style, tx)?;
    log::info!("Surveillance de {} (Ctrl-C pour quitter)", path.display());

    while let Ok(msg) = rx.recv() {
        match msg {
            WatchMessage::Rendered(out) => emit(&out),
            WatchMessage::Stop => break,
        }
    }
    log::info!("Surveillance terminée");
    Ok(())
}

/// Resolve config: missing file falls back to defaults.
fn resolve_config(cli: &cli::Cli) -> Result<AppConfig> {
    if cli.config.exists() {
        uni_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(AppConfig::default())
    }
}
