//! Capabilities der externen Mapping-Umgebung: Geometry-Engine und Ergebnis-Layer.
//!
//! Pro Mapping-Backend wird jede Capability einmal implementiert. Die
//! Orchestrierung ist nur gegen diese Traits geschrieben.
//!
//! Alle Aufrufe laufen kooperativ auf einem Thread, deshalb sind die
//! Futures nicht `Send`.

use crate::core::{AreaMode, Geometry, OneOrMany, ResultRecord};
use async_trait::async_trait;

/// Fehler der Geometry-Engine (abgelehnter asynchroner Aufruf).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Fehler des Ergebnis-Layers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct LayerError(pub String);

impl LayerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Geometry-Engine: Buffer- und Flächenberechnung.
#[async_trait(?Send)]
pub trait GeometryEngine {
    /// Live-Geometrie des Backends
    type Geometry: Clone + 'static;
    /// Buffer-Polygon des Backends
    type Polygon: Clone + 'static;

    /// Wandelt die strukturelle Form in die Live-Geometrie um.
    fn from_structural(&self, geometry: &Geometry) -> Result<Self::Geometry, EngineError>;

    /// Puffert Geometrie(n) um Distanz(en).
    ///
    /// Sind beide Argumente Sequenzen, haben sie gleiche Länge.
    async fn buffer(
        &self,
        geometries: OneOrMany<Self::Geometry>,
        distances: OneOrMany<f64>,
        unit: i32,
        union_results: bool,
    ) -> Result<OneOrMany<Self::Polygon>, EngineError>;

    /// Fläche eines Polygons in Quadratmetern.
    async fn area(&self, polygon: &Self::Polygon, mode: AreaMode) -> Result<f64, EngineError>;
}

/// Einfüge- und Lösch-Operationen für einen Layer-Edit.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEdits<P> {
    pub adds: Vec<ResultRecord<P>>,
    pub deletes: Vec<u64>,
}

impl<P> LayerEdits<P> {
    /// Edit mit genau einem neuen Feature.
    pub fn insert(record: ResultRecord<P>) -> Self {
        Self {
            adds: vec![record],
            deletes: Vec::new(),
        }
    }

    /// Edit, der die Features mit den gegebenen IDs löscht.
    pub fn delete(ids: Vec<u64>) -> Self {
        Self {
            adds: Vec::new(),
            deletes: ids,
        }
    }
}

/// Ergebnis eines Layer-Edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditSummary {
    pub added: usize,
    pub deleted: usize,
}

/// Ergebnis-Layer: speichert und zeigt die Buffer-Ergebnisse an.
#[async_trait(?Send)]
pub trait ResultsLayer {
    /// Geometrie der gespeicherten Features
    type Geometry: Clone + 'static;

    /// Wendet einen Edit an. Während `suspend` puffert der Layer die
    /// Änderungen und macht sie erst mit `resume` sichtbar.
    async fn apply_edits(
        &self,
        edits: LayerEdits<Self::Geometry>,
    ) -> Result<EditSummary, LayerError>;

    /// Pausiert Darstellung und Update-Benachrichtigungen.
    fn suspend(&self);

    /// Setzt Darstellung fort und zeigt gepufferte Änderungen an.
    fn resume(&self);

    /// Alle aktuell gespeicherten Features.
    async fn query_features(&self) -> Result<Vec<ResultRecord<Self::Geometry>>, LayerError>;
}
