//! Use-Case: Buffer-Event verarbeiten.
//!
//! Ablauf: Anfrage prüfen → Geometrien in Engine-Form bringen → Kardinalität
//! angleichen → puffern → pro Ergebnis-Polygon Fläche berechnen und als
//! Feature einfügen. Der Layer bleibt dabei suspendiert, bis alle
//! Flächenberechnungen abgeschlossen sind.

use super::broadcast::{broadcast, distance_at};
use crate::app::capabilities::{EngineError, GeometryEngine, LayerEdits, ResultsLayer};
use crate::app::ids::IdSequence;
use crate::core::{AreaMode, AreaOutcome, BufferEventDetail, DisplayArea, RequestError, ResultRecord};
use crate::shared::BufferOptions;
use buffer_units::UnitLookupError;
use futures::future::join_all;
use std::cell::RefCell;

/// Fehler beim Verarbeiten eines Buffer-Events.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("Geometrie nicht lesbar: {0}")]
    Geometry(EngineError),
    #[error("Buffer-Berechnung fehlgeschlagen: {0}")]
    Buffer(EngineError),
    #[error(transparent)]
    Unit(#[from] UnitLookupError),
}

/// Zusammenfassung eines Buffer-Durchlaufs.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferReport<P> {
    /// Erzeugte Datensätze in Abschluss-Reihenfolge
    pub records: Vec<ResultRecord<P>>,
    /// Datensätze mit Flächenfehler
    pub area_failures: usize,
    /// Vom Layer abgelehnte Einfügungen
    pub edit_failures: usize,
    /// Verworfene Polygone, weil die ID-Sequenz erschöpft ist
    pub unassigned: usize,
}

impl<P> BufferReport<P> {
    /// Anzahl der vom Layer übernommenen Features.
    pub fn applied(&self) -> usize {
        self.records.len().saturating_sub(self.edit_failures)
    }
}

/// Verarbeitet ein Buffer-Event gegen Engine und Layer.
///
/// Ungültige Eingaben scheitern vor jedem Engine-Aufruf. Scheitert der
/// Buffer-Aufruf selbst, wird der Layer nicht verändert.
pub async fn run<E, L>(
    engine: &E,
    layer: &L,
    ids: &IdSequence,
    options: &BufferOptions,
    detail: BufferEventDetail,
) -> Result<BufferReport<E::Polygon>, BufferError>
where
    E: GeometryEngine,
    L: ResultsLayer<Geometry = E::Polygon>,
{
    let (geometry, distance, unit, union_results) = detail.into_request()?.into_parts();
    let geometries = geometry
        .try_map(|g| engine.from_structural(&g))
        .map_err(BufferError::Geometry)?;
    let (geometries, distances) = broadcast(geometries, distance);

    let polygons = match engine
        .buffer(geometries, distances.clone(), unit, union_results)
        .await
    {
        Ok(polygons) => polygons.into_vec(),
        Err(e) => {
            log::error!("Buffer-Berechnung fehlgeschlagen: {}", e);
            return Err(BufferError::Buffer(e));
        }
    };
    let unit_description = buffer_units::lookup(unit)?.description;
    log::debug!(
        "{} Buffer-Polygone erhalten (Einheit {}, Union: {})",
        polygons.len(),
        unit_description,
        union_results
    );

    let settled = RefCell::new(BufferReport {
        records: Vec::with_capacity(polygons.len()),
        area_failures: 0,
        edit_failures: 0,
        unassigned: 0,
    });
    let area_mode = options.area_mode;
    let attempts = options.area_attempts();

    layer.suspend();
    let tasks = polygons.into_iter().enumerate().map(|(index, polygon)| {
        let settled = &settled;
        let distances = &distances;
        async move {
            let area = measure(engine, &polygon, area_mode, attempts).await;
            let Some(id) = ids.next_id() else {
                log::error!("ID-Sequenz erschöpft, Buffer-Ergebnis {} verworfen", index);
                settled.borrow_mut().unassigned += 1;
                return;
            };
            let record = ResultRecord {
                id,
                geometry: polygon,
                distance: distance_at(distances, index),
                unit: unit_description.to_string(),
                unioned: union_results,
                area,
            };
            let edit = layer.apply_edits(LayerEdits::insert(record.clone())).await;

            let mut report = settled.borrow_mut();
            if record.has_area_error() {
                report.area_failures += 1;
            }
            if let Err(e) = edit {
                log::warn!("Ergebnis {} vom Layer abgelehnt: {}", record.id, e);
                report.edit_failures += 1;
            }
            report.records.push(record);
        }
    });
    join_all(tasks).await;
    layer.resume();

    let report = settled.into_inner();
    log::info!(
        "{} Buffer-Ergebnisse übernommen ({} Flächenfehler, {} abgelehnt, {} ohne ID)",
        report.applied(),
        report.area_failures,
        report.edit_failures,
        report.unassigned
    );
    Ok(report)
}

/// Fläche eines Polygons in Anzeige-Einheit, mit bis zu `attempts` Versuchen.
async fn measure<E: GeometryEngine>(
    engine: &E,
    polygon: &E::Polygon,
    mode: AreaMode,
    attempts: u32,
) -> AreaOutcome {
    let mut attempt = 1;
    loop {
        match engine.area(polygon, mode).await {
            Ok(square_meters) => {
                let area = DisplayArea::from_square_meters(square_meters);
                log::debug!("Fläche berechnet: {}", area);
                return AreaOutcome::Measured(area);
            }
            Err(e) if attempt < attempts => {
                log::debug!(
                    "Flächenberechnung fehlgeschlagen (Versuch {}/{}): {}",
                    attempt,
                    attempts,
                    e
                );
                attempt += 1;
            }
            Err(e) => {
                log::warn!("Flächenberechnung fehlgeschlagen: {}", e);
                return AreaOutcome::Failed(e.to_string());
            }
        }
    }
}
