//! Application-Layer: Controller, Events, Capabilities und Use-Cases.

pub mod capabilities;
pub mod controller;
pub mod events;
pub mod ids;
pub mod use_cases;

pub use capabilities::{
    EditSummary, EngineError, GeometryEngine, LayerEdits, LayerError, ResultsLayer,
};
pub use controller::BufferController;
pub use events::FormEvent;
pub use ids::IdSequence;
pub use use_cases::{BufferError, BufferReport};
