//! Distanz-Eingabe: Pattern-Prüfung und Zerlegung in Zahlen.

use crate::core::OneOrMany;
use regex::Regex;
use std::sync::LazyLock;

/// Gültige Eingabe: eine Zahl oder eine durch Kommas/Leerraum getrennte Zahlenliste.
pub const DISTANCES_PATTERN: &str = r"\d+(?:\.\d+)?([,\s]+\d+(?:\.\d+)?)*";

/// Wie ein `pattern`-Attribut am Eingabefeld: gilt für die gesamte Eingabe.
static DISTANCES_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!("^(?:{DISTANCES_PATTERN})$")).ok());

/// Prüft die Eingabe gegen [`DISTANCES_PATTERN`]. Leere Eingabe ist ungültig (Pflichtfeld).
pub fn is_valid_distances(text: &str) -> bool {
    DISTANCES_RE
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

/// Zerlegt die Eingabe an Kommas und Leerraum.
///
/// Leer → `None`, ein Token → `One`, mehrere → `Many`. Nicht lesbare
/// Tokens werden zu `NaN`; die Formatprüfung übernimmt das Eingabefeld.
pub fn parse_distances(text: &str) -> Option<OneOrMany<f64>> {
    let values: Vec<f64> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().unwrap_or(f64::NAN))
        .collect();
    OneOrMany::from_vec(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_distance_is_unwrapped() {
        assert_eq!(parse_distances("200"), Some(OneOrMany::One(200.0)));
        assert_eq!(parse_distances(" 12.5 "), Some(OneOrMany::One(12.5)));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_distances("100,200"),
            Some(OneOrMany::Many(vec![100.0, 200.0]))
        );
        assert_eq!(
            parse_distances("100, 200  300\t1.5"),
            Some(OneOrMany::Many(vec![100.0, 200.0, 300.0, 1.5]))
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_distances(""), None);
        assert_eq!(parse_distances("  , "), None);
    }

    #[test]
    fn test_malformed_token_becomes_nan() {
        let Some(OneOrMany::Many(values)) = parse_distances("100,abc") else {
            panic!("Erwartet zwei Werte");
        };
        assert_eq!(values[0], 100.0);
        assert!(values[1].is_nan());
    }

    #[test]
    fn test_pattern() {
        assert!(is_valid_distances("200"));
        assert!(is_valid_distances("200,300"));
        assert!(is_valid_distances("1.5 2.25, 3"));
        assert!(!is_valid_distances(""));
        assert!(!is_valid_distances("abc"));
        assert!(!is_valid_distances("100,"));
        assert!(!is_valid_distances("-5"));
        assert!(!is_valid_distances("1e3"));
    }
}
