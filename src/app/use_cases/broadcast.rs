//! Kardinalitäts-Angleichung von Geometrien und Distanzen.

use crate::core::OneOrMany;

/// Gleicht Geometrien und Distanzen positionsgleich an.
///
/// - mehrere Distanzen, eine Geometrie → Geometrie pro Distanz wiederholt
/// - mehrere Geometrien, eine Distanz → Distanz pro Geometrie wiederholt
/// - sonst unverändert
pub fn broadcast<G: Clone>(
    geometries: OneOrMany<G>,
    distances: OneOrMany<f64>,
) -> (OneOrMany<G>, OneOrMany<f64>) {
    match (geometries, distances) {
        (OneOrMany::One(geometry), OneOrMany::Many(distances)) => {
            let geometries = vec![geometry; distances.len()];
            (OneOrMany::Many(geometries), OneOrMany::Many(distances))
        }
        (OneOrMany::Many(geometries), OneOrMany::One(distance)) => {
            let distances = vec![distance; geometries.len()];
            (OneOrMany::Many(geometries), OneOrMany::Many(distances))
        }
        other => other,
    }
}

/// Distanz für das `index`-te Buffer-Ergebnis.
///
/// Nach einer Vereinigung kann es weniger Ergebnisse als Distanzen geben,
/// aber auch mehr; dann fehlt die Distanz.
pub fn distance_at(distances: &OneOrMany<f64>, index: usize) -> Option<f64> {
    match distances {
        OneOrMany::One(distance) => Some(*distance),
        OneOrMany::Many(distances) => distances.get(index).copied(),
    }
}
