//! Use-Cases der Buffer-Orchestrierung.

pub mod broadcast;
pub mod buffer;
pub mod clear_results;

pub use broadcast::{broadcast, distance_at};
pub use buffer::{BufferError, BufferReport};
