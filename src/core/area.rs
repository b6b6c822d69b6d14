//! Flächen-Anzeige: Umrechnung der Engine-Fläche in ft² bzw. Acres.

use serde::{Deserialize, Serialize};

/// Quadratmeter pro Acre (gerundet, wie in der Anzeige verwendet).
pub const SQUARE_METERS_PER_ACRE: f64 = 4047.0;
/// Quadratfuß pro Acre.
pub const SQUARE_FEET_PER_ACRE: f64 = 43_560.0;

/// Art der Flächenberechnung in der Geometry-Engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaMode {
    /// Ebene Fläche im Koordinatensystem der Geometrie
    #[default]
    Planar,
    /// Ellipsoidische Fläche (berücksichtigt Erdkrümmung)
    Geodesic,
}

/// Einheit der angezeigten Fläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareFeet,
    Acres,
}

impl AreaUnit {
    /// Kurzzeichen für Attribut und Anzeige.
    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "ft\u{b2}",
            AreaUnit::Acres => "ac",
        }
    }
}

/// Fläche in Anzeige-Einheit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayArea {
    pub value: f64,
    pub unit: AreaUnit,
}

impl DisplayArea {
    /// Unter 1 Acre wird in ft² angezeigt, ab 1 Acre in Acres.
    pub fn from_acres(acres: f64) -> Self {
        if acres < 1.0 {
            Self {
                value: acres * SQUARE_FEET_PER_ACRE,
                unit: AreaUnit::SquareFeet,
            }
        } else {
            Self {
                value: acres,
                unit: AreaUnit::Acres,
            }
        }
    }

    /// Ausgangswert der Engine sind Quadratmeter.
    pub fn from_square_meters(square_meters: f64) -> Self {
        Self::from_acres(square_meters / SQUARE_METERS_PER_ACRE)
    }
}

impl std::fmt::Display for DisplayArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            AreaUnit::SquareFeet => write!(
                f,
                "\u{2248}{} {}",
                group_thousands(self.value),
                self.unit.symbol()
            ),
            AreaUnit::Acres => {
                let rounded = (self.value * 100.0).round() / 100.0;
                write!(f, "{} {}", rounded, self.unit.symbol())
            }
        }
    }
}

/// Rundet auf ganze Zahlen und setzt Tausender-Kommas.
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
