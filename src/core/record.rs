//! Ergebnis-Datensatz pro Buffer-Polygon und Schema des Ergebnis-Layers.

use super::DisplayArea;
use indexmap::IndexMap;
use serde_json::Value;

/// Feldtyp im Ergebnis-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Oid,
    Double,
    String,
    SmallInteger,
}

/// Felddefinition im Ergebnis-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub field_type: FieldType,
    pub alias: Option<&'static str>,
}

const fn field(
    name: &'static str,
    field_type: FieldType,
    alias: Option<&'static str>,
) -> FieldDefinition {
    FieldDefinition {
        name,
        field_type,
        alias,
    }
}

/// Festes Schema des Ergebnis-Layers.
pub const RESULT_FIELDS: [FieldDefinition; 7] = [
    field("oid", FieldType::Oid, None),
    field("distance", FieldType::Double, None),
    field("unit", FieldType::String, Some("Measurement Unit")),
    field("unioned", FieldType::SmallInteger, Some("Is Unioned")),
    field("area", FieldType::Double, Some("Area")),
    field("areaUnit", FieldType::String, Some("Area Unit")),
    field("areaError", FieldType::String, Some("Area Error")),
];

/// Ergebnis der Flächenberechnung für ein Polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaOutcome {
    /// Fläche in Anzeige-Einheit
    Measured(DisplayArea),
    /// Fehlermeldung der Engine
    Failed(String),
}

/// Ein Feature im Ergebnis-Layer: ein Buffer-Polygon mit Attributen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord<P> {
    /// Fortlaufende ID (wird nie wiederverwendet)
    pub id: u64,
    /// Buffer-Polygon in Engine-Darstellung
    pub geometry: P,
    /// Zugehörige Distanz (positionsgleich zum Buffer-Ergebnis)
    pub distance: Option<f64>,
    /// Beschreibung der Einheit (z.B. "International Foot")
    pub unit: String,
    /// Ergebnis stammt aus einer Vereinigung
    pub unioned: bool,
    /// Fläche oder Fehler
    pub area: AreaOutcome,
}

impl<P> ResultRecord<P> {
    /// `true`, wenn die Flächenberechnung fehlgeschlagen ist.
    pub fn has_area_error(&self) -> bool {
        matches!(self.area, AreaOutcome::Failed(_))
    }

    /// Attribute in Schema-Reihenfolge. Nicht gesetzte Felder fehlen.
    pub fn attributes(&self) -> IndexMap<&'static str, Value> {
        let mut attrs = IndexMap::with_capacity(RESULT_FIELDS.len());
        attrs.insert("oid", Value::from(self.id));
        attrs.insert(
            "distance",
            self.distance.map_or(Value::Null, Value::from),
        );
        attrs.insert("unit", Value::from(self.unit.as_str()));
        attrs.insert("unioned", Value::from(u8::from(self.unioned)));
        match &self.area {
            AreaOutcome::Measured(area) => {
                attrs.insert("area", Value::from(area.value));
                attrs.insert("areaUnit", Value::from(area.unit.symbol()));
            }
            AreaOutcome::Failed(error) => {
                attrs.insert("areaError", Value::from(error.as_str()));
            }
        }
        attrs
    }
}
