//! Gruppierung der Einheiten für den Einheiten-Selektor.

use crate::{MeasurementUnit, DEFAULT_UNIT_NAME, UNITS};
use regex::Regex;
use std::sync::LazyLock;

static METRIC_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)met(?:(?:er)|(?:re))").ok());

static US_CUSTOMARY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:point)|(?:pica)|(?:inch)|(?:link)|(?:f[eo]{2}t)|(?:rod)|(?:chain)|(?:furlong)|(?:yard)|(?:mile)|(?:league)|(?:fathom)|(?:cable))\b",
    )
    .ok()
});

/// Beschriftete Gruppe im Selektor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitGroup {
    Metric,
    UsCustomary,
}

impl UnitGroup {
    /// Beschriftung der Gruppe.
    pub fn label(self) -> &'static str {
        match self {
            UnitGroup::Metric => "Metric",
            UnitGroup::UsCustomary => "US Customary",
        }
    }
}

/// Ordnet eine Einheit anhand ihrer Beschreibung einer Gruppe zu.
///
/// Metrisch hat Vorrang; `None` = ungruppiert.
pub fn classify(description: &str) -> Option<UnitGroup> {
    let hit = |re: &Option<Regex>| re.as_ref().is_some_and(|re| re.is_match(description));
    if hit(&METRIC_RE) {
        Some(UnitGroup::Metric)
    } else if hit(&US_CUSTOMARY_RE) {
        Some(UnitGroup::UsCustomary)
    } else {
        None
    }
}

/// Eine Option des Selektors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOption {
    /// Options-Wert: Code als Dezimal-String
    pub value: String,
    /// Angezeigter Text (Beschreibung)
    pub label: &'static str,
    /// Kurzname der Einheit
    pub name: &'static str,
    /// Vorauswahl
    pub selected: bool,
}

impl UnitOption {
    fn from_unit(unit: &MeasurementUnit, default_name: &str) -> Self {
        Self {
            value: unit.code.to_string(),
            label: unit.description,
            name: unit.name,
            selected: unit.name == default_name,
        }
    }
}

/// Eintrag im Selektor: entweder eine beschriftete Gruppe oder eine lose Option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry {
    Group {
        group: UnitGroup,
        options: Vec<UnitOption>,
    },
    Option(UnitOption),
}

/// Baut den Inhalt des Einheiten-Selektors.
///
/// Reihenfolge: Gruppe "Metric", Gruppe "US Customary", danach alle
/// ungruppierten Einheiten. Leerer oder fehlender `default_name` → `"Foot"`.
pub fn build_unit_select(default_name: Option<&str>) -> Vec<SelectEntry> {
    let default_name = default_name
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_UNIT_NAME);

    let mut metric = Vec::new();
    let mut us_customary = Vec::new();
    let mut loose = Vec::new();

    for unit in UNITS.iter() {
        let option = UnitOption::from_unit(unit, default_name);
        match classify(unit.description) {
            Some(UnitGroup::Metric) => metric.push(option),
            Some(UnitGroup::UsCustomary) => us_customary.push(option),
            None => loose.push(SelectEntry::Option(option)),
        }
    }

    let mut entries = vec![
        SelectEntry::Group {
            group: UnitGroup::Metric,
            options: metric,
        },
        SelectEntry::Group {
            group: UnitGroup::UsCustomary,
            options: us_customary,
        },
    ];
    entries.extend(loose);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(entries: &[SelectEntry]) -> Vec<&UnitOption> {
        entries
            .iter()
            .flat_map(|entry| match entry {
                SelectEntry::Group { options, .. } => options.iter().collect::<Vec<_>>(),
                SelectEntry::Option(option) => vec![option],
            })
            .collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("International Meter"), Some(UnitGroup::Metric));
        assert_eq!(classify("Centimeter"), Some(UnitGroup::Metric));
        assert_eq!(classify("International Foot"), Some(UnitGroup::UsCustomary));
        assert_eq!(classify("US survey chain"), Some(UnitGroup::UsCustomary));
        assert_eq!(classify("International nautical mile"), Some(UnitGroup::UsCustomary));
        assert_eq!(classify("50 Kilometer Length"), Some(UnitGroup::Metric));
    }

    #[test]
    fn test_select_contains_every_unit_once() {
        let entries = build_unit_select(None);
        assert_eq!(options(&entries).len(), UNITS.len());
    }

    #[test]
    fn test_default_selection() {
        let entries = build_unit_select(None);
        let selected: Vec<_> = options(&entries)
            .into_iter()
            .filter(|o| o.selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Foot");
        assert_eq!(selected[0].value, "9002");

        let entries = build_unit_select(Some("Meter"));
        let selected: Vec<_> = options(&entries)
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(selected, vec!["International Meter"]);
    }

    #[test]
    fn test_empty_default_falls_back_to_foot() {
        let entries = build_unit_select(Some(""));
        assert!(options(&entries).iter().any(|o| o.selected && o.name == "Foot"));
    }

    #[test]
    fn test_groups_come_first() {
        let entries = build_unit_select(None);
        match &entries[0] {
            SelectEntry::Group { group, options } => {
                assert_eq!(group.label(), "Metric");
                assert!(options.iter().any(|o| o.name == "Kilometer"));
            }
            other => panic!("Erwartet Metric-Gruppe, erhalten: {other:?}"),
        }
        match &entries[1] {
            SelectEntry::Group { group, options } => {
                assert_eq!(*group, UnitGroup::UsCustomary);
                assert!(options.iter().any(|o| o.name == "SurveyFoot"));
            }
            other => panic!("Erwartet US-Customary-Gruppe, erhalten: {other:?}"),
        }
    }
}
