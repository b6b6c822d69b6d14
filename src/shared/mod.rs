//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die Formular (`ui`) und Orchestrierung (`app`)
//! gemeinsam lesen.

pub mod options;

pub use options::BufferOptions;
pub use options::{AREA_RETRIES, RESULT_LAYER_ID};
