//! Implementierungen des Ergebnis-Layers.

pub mod memory;

pub use memory::MemoryResultsLayer;
