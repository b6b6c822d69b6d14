//! Katalog der Längeneinheiten für Buffer-Distanzen.
//!
//! Die Codes entsprechen den Einheiten-IDs des Buffer-Parameters der
//! Geometry-Engine. Der Katalog ist zur Laufzeit unveränderlich.

mod groups;

pub use groups::{build_unit_select, classify, SelectEntry, UnitGroup, UnitOption};

/// Name der Einheit, die im Selektor vorausgewählt wird, wenn nichts anderes konfiguriert ist.
pub const DEFAULT_UNIT_NAME: &str = "Foot";

/// Eine Längeneinheit aus dem festen Katalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementUnit {
    /// Kurzname (z.B. `"Foot"`)
    pub name: &'static str,
    /// Numerischer Einheiten-Code
    pub code: i32,
    /// Lesbare Beschreibung (z.B. `"International Foot"`)
    pub description: &'static str,
}

const fn unit(name: &'static str, code: i32, description: &'static str) -> MeasurementUnit {
    MeasurementUnit {
        name,
        code,
        description,
    }
}

/// Alle verfügbaren Einheiten. Die Reihenfolge bestimmt die Reihenfolge im Selektor.
pub static UNITS: [MeasurementUnit; 22] = [
    unit("50KilometerLength", 109030, "50 Kilometer Length"),
    unit("150KilometerLength", 109031, "150 Kilometer Length"),
    unit("Kilometer", 9036, "Kilometer"),
    unit("Decimeter", 109005, "Decimeter"),
    unit("Meter", 9001, "International Meter"),
    unit("Centimeter", 109006, "Centimeter"),
    unit("Millimeter", 109007, "Millimeter"),
    unit("NauticalMile", 9030, "International nautical mile"),
    unit("SurveyMile", 9035, "US survey mile"),
    unit("StatuteMile", 9093, "Statute Mile"),
    unit("InternationalYard", 9096, "International Yard"),
    unit("SurveyYard", 109002, "US survey Yard"),
    unit("InternationalRod", 109010, "International rod"),
    unit("USsurveyRod", 109011, "US survey rod"),
    unit("InternationalChain", 9097, "International Chain"),
    unit("SurveyChain", 9033, "US survey chain"),
    unit("Foot", 9002, "International Foot"),
    unit("SurveyFoot", 9003, "US survey foot"),
    unit("InternationalLink", 9098, "International Link"),
    unit("SurveyLink", 9034, "US survey link"),
    unit("InternationalInch", 109008, "International Inch"),
    unit("USsurveyInch", 109009, "US survey inch"),
];

/// Schlüssel für eine Katalog-Abfrage: numerischer Code oder Text.
///
/// Text trifft auf Kurzname oder Beschreibung (exakter Vergleich, kein Pattern).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitId<'a> {
    /// Numerischer Einheiten-Code
    Code(i32),
    /// Kurzname oder Beschreibung
    Text(&'a str),
}

impl From<i32> for UnitId<'_> {
    fn from(code: i32) -> Self {
        UnitId::Code(code)
    }
}

impl<'a> From<&'a str> for UnitId<'a> {
    fn from(text: &'a str) -> Self {
        UnitId::Text(text)
    }
}

impl std::fmt::Display for UnitId<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitId::Code(code) => write!(f, "{code}"),
            UnitId::Text(text) => f.write_str(text),
        }
    }
}

/// Fehler bei einer Katalog-Abfrage ohne Treffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Unit ID: {0}")]
pub struct UnitLookupError(pub String);

/// Gibt die Einheit zurück, deren Code, Name oder Beschreibung passt.
pub fn lookup<'a>(id: impl Into<UnitId<'a>>) -> Result<&'static MeasurementUnit, UnitLookupError> {
    let id = id.into();
    UNITS
        .iter()
        .find(|unit| match id {
            UnitId::Code(code) => unit.code == code,
            UnitId::Text(text) => unit.name == text || unit.description == text,
        })
        .ok_or_else(|| UnitLookupError(id.to_string()))
}

/// Liefert den gesamten Katalog.
pub fn all() -> &'static [MeasurementUnit] {
    &UNITS
}
