//! Parameter-Formular: Distanzen, Einheit, Union-Option und gesammelte Geometrien.
//!
//! Das Formular puffert selbst nichts. Beim Absenden entsteht ein
//! [`FormEvent::Buffer`], das der Controller verarbeitet.

use super::distances::{is_valid_distances, parse_distances};
use super::geometry_list::{FormError, GeometryList, GeometryListEntry, GeometrySource};
use crate::app::FormEvent;
use crate::core::{BufferEventDetail, Geometry, OneOrMany};
use crate::shared::BufferOptions;
use buffer_units::{SelectEntry, UnitLookupError};

/// Zustand des Buffer-Formulars.
#[derive(Debug, Clone)]
pub struct ParameterForm {
    distances_text: String,
    unit: i32,
    union_results: bool,
    geometry_list: GeometryList,
    label_attribute: Option<String>,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self {
            distances_text: String::new(),
            unit: buffer_units::lookup(buffer_units::DEFAULT_UNIT_NAME).map_or(0, |u| u.code),
            union_results: false,
            geometry_list: GeometryList::new(),
            label_attribute: None,
        }
    }
}

impl ParameterForm {
    /// Erstellt ein leeres Formular mit Standard-Einheit (Foot).
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein Formular mit Vorauswahl und Beschriftung aus den Optionen.
    pub fn from_options(options: &BufferOptions) -> Result<Self, UnitLookupError> {
        let unit = buffer_units::lookup(options.default_unit_name.as_str())?;
        Ok(Self {
            unit: unit.code,
            label_attribute: options.label_attribute.clone(),
            ..Self::default()
        })
    }

    // ── Distanzen ───────────────────────────────────────────────

    /// Setzt den Inhalt des Distanz-Eingabefelds.
    pub fn set_distances_text(&mut self, text: impl Into<String>) {
        self.distances_text = text.into();
    }

    /// Aktueller Inhalt des Distanz-Eingabefelds.
    pub fn distances_text(&self) -> &str {
        &self.distances_text
    }

    /// Eingegebene Distanzen: leer → `None`, eine → `One`, mehrere → `Many`.
    pub fn distances(&self) -> Option<OneOrMany<f64>> {
        parse_distances(&self.distances_text)
    }

    // ── Einheit & Union ─────────────────────────────────────────

    /// Wählt eine Einheit per Code, Name oder Beschreibung.
    pub fn select_unit<'a>(
        &mut self,
        id: impl Into<buffer_units::UnitId<'a>>,
    ) -> Result<(), UnitLookupError> {
        self.unit = buffer_units::lookup(id)?.code;
        Ok(())
    }

    /// Code der gewählten Einheit.
    pub fn unit(&self) -> i32 {
        self.unit
    }

    /// Inhalt des Einheiten-Selektors mit der aktuellen Auswahl.
    pub fn unit_select(&self) -> Vec<SelectEntry> {
        let current = buffer_units::lookup(self.unit).ok().map(|u| u.name);
        buffer_units::build_unit_select(current)
    }

    /// Setzt die Union-Checkbox.
    pub fn set_union_results(&mut self, union_results: bool) {
        self.union_results = union_results;
    }

    /// Zustand der Union-Checkbox.
    pub fn union_results(&self) -> bool {
        self.union_results
    }

    // ── Geometrie-Liste ─────────────────────────────────────────

    /// Fügt eine Geometrie oder die Geometrie eines Features zur Liste hinzu.
    pub fn add_feature<S: GeometrySource + ?Sized>(&mut self, feature: &S) -> Result<(), FormError> {
        self.geometry_list
            .push(feature, self.label_attribute.as_deref())
    }

    /// Gesammelte Geometrien: leer → `None`, eine → `One`, mehrere → `Many`.
    pub fn geometries(&self) -> Option<OneOrMany<Geometry>> {
        self.geometry_list.geometries()
    }

    /// Sichtbare Einträge der Geometrie-Liste.
    pub fn geometry_entries(&self) -> &[GeometryListEntry] {
        self.geometry_list.entries()
    }

    /// Leert die Geometrie-Liste samt Anzeige.
    pub fn clear_geometry_list(&mut self) {
        if !self.geometry_list.is_empty() {
            log::info!(
                "Geometrie-Liste geleert ({} Einträge)",
                self.geometry_list.len()
            );
        }
        self.geometry_list.clear();
    }

    // ── Aktionen ────────────────────────────────────────────────

    /// Sendet das Formular ab.
    ///
    /// Das Distanz-Feld ist Pflicht und muss dem Eingabe-Pattern entsprechen.
    /// Fehlende Geometrien werden nicht hier, sondern beim Verarbeiten abgelehnt.
    pub fn submit(&self) -> Result<FormEvent, FormError> {
        if !is_valid_distances(&self.distances_text) {
            return Err(FormError::InvalidDistances(self.distances_text.clone()));
        }
        Ok(FormEvent::Buffer(BufferEventDetail {
            geometry: self.geometries(),
            distance: self.distances(),
            unit: self.unit,
            union_results: self.union_results,
        }))
    }

    /// Button "Clear result graphics".
    pub fn request_clear_graphics(&self) -> FormEvent {
        FormEvent::ClearGraphics
    }
}
