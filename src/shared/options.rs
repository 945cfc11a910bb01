//! Zentrale Konfiguration für den Grundriss-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{RoomMeta, EDGE_TOLERANCE};
use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Standard-Rasterweite in Metern.
pub const GRID_STEP: f32 = 0.5;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Radius (Welteinheiten), in dem ein Klick eine Ecke trifft.
pub const VERTEX_HIT_RADIUS: f32 = 0.3;
/// Radius (Welteinheiten), in dem der Cursor eine Kante trifft.
pub const EDGE_PICK_RADIUS: f32 = 0.5;
/// Zeitfenster für Doppelklicks in Millisekunden.
pub const DOUBLE_CLICK_MS: u64 = 300;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Räume ───────────────────────────────────────────────────────────

/// Standard-Wandhöhe in Metern.
pub const ROOM_HEIGHT: f32 = 2.4;
/// Standard-Füllfarbe neuer Räume (RGBA: Hellgrau).
pub const ROOM_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floorplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Toleranz für alle "gleicher Punkt / gleiche Kante"-Vergleiche
    pub tolerance: f32,
    /// Rasterweite für Grid-Snapping
    pub grid_step: f32,
    /// Grid-Snapping beim Start aktiv
    pub grid_snap_enabled: bool,

    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Radius für Ecken (Schließ-Toleranz ist die Hälfte)
    pub vertex_hit_radius: f32,
    /// Pick-Radius für Kanten (Hover / Punkt einfügen)
    pub edge_pick_radius: f32,
    /// Doppelklick-Zeitfenster in Millisekunden
    pub double_click_ms: u64,
    /// Ecken-Drag verschiebt deckungsgleiche Ecken anderer Räume mit
    pub drag_moves_shared_vertices: bool,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    pub history_max_depth: usize,

    // ── Raum-Defaults ───────────────────────────────────────────
    /// Wandhöhe neuer Räume
    pub default_room_height: f32,
    /// Füllfarbe neuer Räume
    pub default_room_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tolerance: EDGE_TOLERANCE,
            grid_step: GRID_STEP,
            grid_snap_enabled: true,
            vertex_hit_radius: VERTEX_HIT_RADIUS,
            edge_pick_radius: EDGE_PICK_RADIUS,
            double_click_ms: DOUBLE_CLICK_MS,
            drag_moves_shared_vertices: true,
            history_max_depth: HISTORY_MAX_DEPTH,
            default_room_height: ROOM_HEIGHT,
            default_room_color: ROOM_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei oder ist sie
    /// fehlerhaft, werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<EditorOptions>(&content) {
                Ok(opts) => match opts.validate() {
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

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplan_editor.toml")
    }

    /// Prüft die Werte auf Plausibilität.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.tolerance > 0.0,
            "tolerance muss positiv sein ({})",
            self.tolerance
        );
        anyhow::ensure!(
            self.grid_step >= 0.0,
            "grid_step darf nicht negativ sein ({})",
            self.grid_step
        );
        anyhow::ensure!(
            self.vertex_hit_radius > self.tolerance * 2.0,
            "vertex_hit_radius muss größer als die doppelte Toleranz sein"
        );
        anyhow::ensure!(self.history_max_depth > 0, "history_max_depth muss > 0 sein");
        Ok(())
    }

    /// Schließ-Toleranz beim Polygon-Zeichnen (halber Ecken-Hit-Radius).
    pub fn closing_tolerance(&self) -> f32 {
        self.vertex_hit_radius * 0.5
    }

    /// Metadaten für einen neuen Raum.
    pub fn room_meta(&self, label: String) -> RoomMeta {
        RoomMeta {
            label,
            height: self.default_room_height,
            color: self.default_room_color,
        }
    }
}
