//! Buffer UI Library.
//! Parameter-Formular, Buffer-Orchestrierung und Ergebnis-Layer für Buffer-Analysen.

pub mod app;
pub mod core;
pub mod layers;
pub mod shared;
pub mod ui;

pub use app::{
    BufferController, BufferError, BufferReport, EditSummary, EngineError, FormEvent,
    GeometryEngine, IdSequence, LayerEdits, LayerError, ResultsLayer,
};
pub use buffer_units::{MeasurementUnit, UnitLookupError};
pub use self::core::{
    AreaMode, AreaOutcome, BufferEventDetail, BufferRequest, DisplayArea, Feature, Geometry,
    OneOrMany, RequestError, ResultRecord,
};
pub use layers::MemoryResultsLayer;
pub use shared::BufferOptions;
pub use ui::{FormError, GeometrySource, ParameterForm};
