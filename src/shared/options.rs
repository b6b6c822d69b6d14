//! Zentrale Konfiguration für Formular und Buffer-Orchestrierung.
//!
//! `BufferOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::AreaMode;
use serde::{Deserialize, Serialize};

/// Standard-ID des Ergebnis-Layers.
pub const RESULT_LAYER_ID: &str = "Buffer";
/// Zusätzliche Versuche für eine fehlgeschlagene Flächenberechnung.
pub const AREA_RETRIES: u32 = 0;

/// Alle zur Laufzeit änderbaren Buffer-Optionen.
/// Der Host legt die Datei ab und lädt sie über [`BufferOptions::load_from_file`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferOptions {
    /// Kurzname der vorausgewählten Einheit
    #[serde(default = "default_unit_name")]
    pub default_unit_name: String,
    /// ID des Ergebnis-Layers
    #[serde(default = "default_layer_id")]
    pub layer_id: String,
    /// Planare oder geodätische Flächenberechnung
    #[serde(default)]
    pub area_mode: AreaMode,
    /// Wiederholungen pro fehlgeschlagener Flächenberechnung
    #[serde(default)]
    pub area_retries: u32,
    /// Feature-Attribut für den Anzeigetext in der Geometrie-Liste
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_attribute: Option<String>,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            default_unit_name: default_unit_name(),
            layer_id: default_layer_id(),
            area_mode: AreaMode::default(),
            area_retries: AREA_RETRIES,
            label_attribute: None,
        }
    }
}

fn default_unit_name() -> String {
    buffer_units::DEFAULT_UNIT_NAME.to_string()
}

fn default_layer_id() -> String {
    RESULT_LAYER_ID.to_string()
}

impl BufferOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
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

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Anzahl der Versuche pro Flächenberechnung (mindestens 1).
    pub fn area_attempts(&self) -> u32 {
        self.area_retries.saturating_add(1)
    }
}
