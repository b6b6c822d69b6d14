//! Liste der gesammelten Geometrien im Formular.
//!
//! Einträge werden serialisiert abgelegt, spätere Änderungen an der
//! Quell-Geometrie wirken sich also nicht auf die Liste aus.

use crate::core::{Feature, Geometry, OneOrMany, GEOMETRY_SHAPE_KEYS};
use serde::Deserialize;
use serde_json::Value;

/// Anzeigetext eines Eintrags ohne sprechendes Attribut.
pub const DEFAULT_ENTRY_LABEL: &str = "Geometry";

/// Fehler beim Hinzufügen oder Absenden im Formular.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Input must be a Graphic or Geometry")]
    NotAGeometry,
    #[error("Geometrie nicht lesbar: {0}")]
    MalformedGeometry(#[source] serde_json::Error),
    #[error("Must be a number or list of numbers: {0:?}")]
    InvalidDistances(String),
}

/// Objekt, das sich in strukturelle Form bringen lässt (Geometrie oder Feature).
pub trait GeometrySource {
    /// Strukturelle (JSON-)Form des Objekts.
    fn to_structural(&self) -> Result<Value, serde_json::Error>;

    /// Anzeigetext aus dem gegebenen Attribut, falls vorhanden.
    fn label(&self, _attribute: Option<&str>) -> Option<String> {
        None
    }
}

impl GeometrySource for Value {
    fn to_structural(&self) -> Result<Value, serde_json::Error> {
        Ok(self.clone())
    }

    fn label(&self, attribute: Option<&str>) -> Option<String> {
        let value = self.get("attributes")?.get(attribute?)?;
        attribute_text(value)
    }
}

impl GeometrySource for Geometry {
    fn to_structural(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl GeometrySource for Feature {
    fn to_structural(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn label(&self, attribute: Option<&str>) -> Option<String> {
        attribute_text(self.attributes.get(attribute?)?)
    }
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Liefert die Geometrie eines Features oder die Geometrie selbst.
///
/// Reihenfolge: verschachteltes `geometry`-Feld, danach die Formfelder
/// `x`, `points`, `rings`, `paths`.
pub fn extract_geometry(value: Value) -> Result<Value, FormError> {
    if let Some(nested) = value.get("geometry").filter(|g| !g.is_null()) {
        return Ok(nested.clone());
    }
    let has_shape = value
        .as_object()
        .is_some_and(|obj| GEOMETRY_SHAPE_KEYS.iter().any(|key| obj.contains_key(*key)));
    if has_shape {
        Ok(value)
    } else {
        Err(FormError::NotAGeometry)
    }
}

/// Ein Eintrag der Liste: serialisierte Geometrie plus Anzeigetext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryListEntry {
    /// Geometrie als JSON-Text
    pub json: String,
    /// Angezeigter Text
    pub label: String,
}

/// Geordnete, nur anhängbare Liste bis zum expliziten Leeren.
#[derive(Debug, Clone, Default)]
pub struct GeometryList {
    entries: Vec<GeometryListEntry>,
}

impl GeometryList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extrahiert und prüft die Geometrie und legt ihre JSON-Form unverändert ab.
    pub fn push<S: GeometrySource + ?Sized>(
        &mut self,
        source: &S,
        label_attribute: Option<&str>,
    ) -> Result<(), FormError> {
        let structural = source
            .to_structural()
            .map_err(FormError::MalformedGeometry)?;
        let raw = extract_geometry(structural)?;
        let geometry = Geometry::deserialize(&raw).map_err(FormError::MalformedGeometry)?;
        let json = raw.to_string();
        let label = source
            .label(label_attribute)
            .unwrap_or_else(|| DEFAULT_ENTRY_LABEL.to_string());

        log::debug!("{} zur Geometrie-Liste hinzugefügt ({})", geometry.kind(), label);
        self.entries.push(GeometryListEntry { json, label });
        Ok(())
    }

    /// Leer → `None`, ein Eintrag → `One`, sonst `Many` (in Einfüge-Reihenfolge).
    pub fn geometries(&self) -> Option<OneOrMany<Geometry>> {
        let geometries = self
            .entries
            .iter()
            .filter_map(|entry| match serde_json::from_str(&entry.json) {
                Ok(geometry) => Some(geometry),
                Err(e) => {
                    log::warn!("Listeneintrag nicht lesbar, übersprungen: {}", e);
                    None
                }
            })
            .collect();
        OneOrMany::from_vec(geometries)
    }

    /// Sichtbare Einträge.
    pub fn entries(&self) -> &[GeometryListEntry] {
        &self.entries
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entfernt alle Einträge.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
