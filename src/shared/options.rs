//! Zentrale Konfiguration für den ROV Path Planner.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::DVec3;
use serde::{Deserialize, Serialize};

// ── Editieren ───────────────────────────────────────────────────────

/// Standard-Falloff-Radius für proportionales Editieren (Welteinheiten).
pub const EDIT_FALLOFF_DEFAULT: f64 = 10.0;
/// Maximale Tiefe des Undo-Stacks.
pub const HISTORY_DEPTH: usize = 200;

// ── Aufzeichnung ────────────────────────────────────────────────────

/// Mindestabstand zwischen zwei aufgezeichneten Wegpunkten.
pub const WAYPOINT_MIN_DISTANCE: f64 = 0.2;

// ── Verlängerung ────────────────────────────────────────────────────

/// Schrittweite für vertikale/vorwärts Verlängerung.
pub const EXTEND_STEP: f64 = 0.2;
/// Abstand der Zwischenpunkte beim Verlängern per Drag.
pub const EXTEND_MIN_SPACING: f64 = 0.2;

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Standard-Abspielgeschwindigkeit.
pub const PLAYBACK_SPEED_DEFAULT: f64 = 1.0;
pub use crate::core::PLAYBACK_RATE;

// ── Fahrzeug ────────────────────────────────────────────────────────

/// Ausgangsposition des Fahrzeugs nach Start und `Clear`.
pub const VEHICLE_HOME_POSITION: DVec3 = DVec3::new(0.0, 6.3, 0.0);

// ── Export ──────────────────────────────────────────────────────────

/// Wartezeit je Wegpunkt im Export.
pub const EXPORT_WAIT_TIME: f64 = 0.0;
/// Geschwindigkeit je Wegpunkt im Export.
pub const EXPORT_SPEED: f64 = 0.2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `rov_path_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Editieren ───────────────────────────────────────────────
    /// Falloff-Radius für proportionales Verschieben und Drehen
    pub edit_falloff: f64,
    /// Maximale Anzahl an Undo-Schritten
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    // ── Aufzeichnung ────────────────────────────────────────────
    /// Mindestabstand für neue Aufzeichnungspunkte
    pub waypoint_min_distance: f64,

    // ── Verlängerung ────────────────────────────────────────────
    /// Schrittweite für Vertikal/Vorwärts-Verlängerung
    pub extend_step: f64,
    /// Punktabstand beim Drag-Verlängern
    pub extend_min_spacing: f64,

    // ── Wiedergabe ──────────────────────────────────────────────
    /// Abspielgeschwindigkeit
    pub playback_speed: f64,

    // ── Export ──────────────────────────────────────────────────
    /// Wartezeit je exportiertem Wegpunkt
    #[serde(default = "default_export_wait_time")]
    pub export_wait_time: f64,
    /// Geschwindigkeit je exportiertem Wegpunkt
    #[serde(default = "default_export_speed")]
    pub export_speed: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            edit_falloff: EDIT_FALLOFF_DEFAULT,
            history_depth: HISTORY_DEPTH,
            waypoint_min_distance: WAYPOINT_MIN_DISTANCE,
            extend_step: EXTEND_STEP,
            extend_min_spacing: EXTEND_MIN_SPACING,
            playback_speed: PLAYBACK_SPEED_DEFAULT,
            export_wait_time: EXPORT_WAIT_TIME,
            export_speed: EXPORT_SPEED,
        }
    }
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

fn default_export_wait_time() -> f64 {
    EXPORT_WAIT_TIME
}

fn default_export_speed() -> f64 {
    EXPORT_SPEED
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => match Self::validate(&opts) {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft die Werte auf Bereiche, mit denen die Werkzeuge rechnen können.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.edit_falloff.is_finite() && self.edit_falloff >= 0.0,
            "edit_falloff muss endlich und >= 0 sein ({})",
            self.edit_falloff
        );
        anyhow::ensure!(
            self.waypoint_min_distance.is_finite() && self.waypoint_min_distance >= 0.0,
            "waypoint_min_distance muss endlich und >= 0 sein ({})",
            self.waypoint_min_distance
        );
        for (name, value) in [
            ("extend_step", self.extend_step),
            ("extend_min_spacing", self.extend_min_spacing),
        ] {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "{} muss endlich und > 0 sein ({})",
                name,
                value
            );
        }
        anyhow::ensure!(
            self.playback_speed.is_finite() && self.playback_speed >= 0.0,
            "playback_speed muss endlich und >= 0 sein ({})",
            self.playback_speed
        );
        anyhow::ensure!(
            self.export_wait_time.is_finite() && self.export_speed.is_finite(),
            "Export-Werte müssen endlich sein"
        );
        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rov_path_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("rov_path_planner.toml")
    }
}
