//! UI-Layer: Zustand und Verhalten des Buffer-Formulars.
//!
//! Markup und Darstellung liegen beim Host. Hier liegen Eingabe-Parsing,
//! die Geometrie-Liste und das Erzeugen der Formular-Events.

pub mod distances;
pub mod form;
pub mod geometry_list;

pub use distances::{is_valid_distances, parse_distances, DISTANCES_PATTERN};
pub use form::ParameterForm;
pub use geometry_list::{
    extract_geometry, FormError, GeometryList, GeometryListEntry, GeometrySource,
    DEFAULT_ENTRY_LABEL,
};
