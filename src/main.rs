//! ROV Path Planner.
//!
//! Headless-Host für den Pfad-Editor: liest eine Pfad-Datei, wendet optional
//! eine globale Rotation an und schreibt das Ergebnis im Austauschformat.

use anyhow::Context;
use clap::Parser;
use rov_path_planner::core::RotationAxis;
use rov_path_planner::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

/// Wegpunkt-Pfade laden, rotieren und exportieren
#[derive(Parser, Debug)]
#[command(name = "ROV-Path-Planner", version)]
#[command(about = "Load, rotate and export ROV waypoint paths", long_about = None)]
struct Args {
    /// Eingabedatei (JSON-Records oder Legacy-Format)
    input: PathBuf,

    /// Ausgabedatei; ohne Angabe wird auf stdout geschrieben
    output: Option<PathBuf>,

    /// Globale Rotation in Grad (X Y Z)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    rotate: Option<Vec<f64>>,

    /// Wegpunkt-Index als Drehpunkt (ohne Angabe: Schwerpunkt)
    #[arg(long)]
    origin: Option<usize>,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long)]
    config: Option<PathBuf>,

    /// Schreibt die verwendeten Optionen in die Optionen-Datei
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("ROV Path Planner v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    AppRunner::new(&args).run(&args)
}

struct AppRunner {
    state: AppState,
    controller: AppController,
    config_path: PathBuf,
}

impl AppRunner {
    fn new(args: &Args) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = args.config.clone().unwrap_or_else(EditorOptions::config_path);
        let options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            config_path,
        }
    }

    fn run(mut self, args: &Args) -> anyhow::Result<()> {
        if args.save_config {
            self.state
                .options
                .save_to_file(&self.config_path)
                .with_context(|| {
                    format!("Optionen nicht schreibbar: {}", self.config_path.display())
                })?;
        }

        let bytes = std::fs::read(&args.input)
            .with_context(|| format!("Datei nicht lesbar: {}", args.input.display()))?;
        self.dispatch(AppIntent::LoadRequested { bytes })?;

        if let Some(angles) = args.rotate.as_deref() {
            self.rotate(angles, args.origin)?;
        }

        if let Some(curve) = self.state.playback_curve() {
            log::info!(
                "{} Wegpunkte, Kurvenlänge {:.2}",
                self.state.waypoint_count(),
                curve.length()
            );
        }

        self.dispatch(AppIntent::SaveRequested)?;
        let Some(output) = self.state.ui.export_buffer.take() else {
            anyhow::bail!(
                "{}",
                self.state
                    .ui
                    .status_message
                    .as_deref()
                    .unwrap_or("Nichts zu speichern")
            );
        };

        match &args.output {
            Some(path) => {
                std::fs::write(path, &output)
                    .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
                log::info!("Pfad gespeichert nach: {}", path.display());
            }
            None => {
                use std::io::Write;
                std::io::stdout()
                    .write_all(&output)
                    .context("Ausgabe auf stdout fehlgeschlagen")?;
            }
        }
        Ok(())
    }

    fn rotate(&mut self, angles: &[f64], origin: Option<usize>) -> anyhow::Result<()> {
        self.dispatch(AppIntent::RotationPreviewStarted)?;
        self.dispatch(AppIntent::RotationOriginSelected { index: origin })?;
        for (axis, degrees) in [RotationAxis::X, RotationAxis::Y, RotationAxis::Z]
            .into_iter()
            .zip(angles.iter().copied())
        {
            self.dispatch(AppIntent::RotationSliderChanged { axis, degrees })?;
        }
        self.dispatch(AppIntent::RotationApplyRequested)
    }

    fn dispatch(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }
}
