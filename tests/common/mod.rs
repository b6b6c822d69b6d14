//! Gemeinsame Test-Doubles: skriptbare Geometry-Engine und ablehnender Layer.

#![allow(dead_code)]

use async_trait::async_trait;
use buffer_ui::core::{AreaMode, Geometry, OneOrMany, ResultRecord};
use buffer_ui::{
    EditSummary, EngineError, GeometryEngine, LayerEdits, LayerError, MemoryResultsLayer,
    ResultsLayer,
};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Buffer-Ergebnis der Test-Engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TestPolygon {
    /// Position im Buffer-Ergebnis
    pub index: usize,
    pub source: Geometry,
    pub distance: f64,
}

/// Gibt die Kontrolle einmal an den Executor zurück.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub async fn yield_times(n: u32) {
    for _ in 0..n {
        YieldNow(false).await;
    }
}

/// Geometry-Engine mit festgelegtem Verhalten.
///
/// Fläche eines Polygons: `distance²` Quadratmeter.
#[derive(Default)]
pub struct ScriptedEngine {
    /// Buffer-Aufruf schlägt mit dieser Meldung fehl
    pub buffer_error: Option<String>,
    /// Yields pro Ergebnis-Index, bevor die Fläche feststeht
    pub area_delays: Vec<u32>,
    /// Ergebnis-Indizes, deren Flächenberechnung fehlschlägt
    pub area_errors: Vec<usize>,
    /// So viele Flächenberechnungen scheitern zuerst, egal für welchen Index
    pub transient_area_failures: Cell<u32>,
    /// Berechnungsart jedes Flächenaufrufs
    pub area_modes: RefCell<Vec<AreaMode>>,
    pub buffer_calls: Cell<usize>,
    pub area_calls: Cell<usize>,
    pub last_buffer: RefCell<Option<(OneOrMany<Geometry>, OneOrMany<f64>, i32, bool)>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            buffer_error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl GeometryEngine for ScriptedEngine {
    type Geometry = Geometry;
    type Polygon = TestPolygon;

    fn from_structural(&self, geometry: &Geometry) -> Result<Geometry, EngineError> {
        Ok(geometry.clone())
    }

    async fn buffer(
        &self,
        geometries: OneOrMany<Geometry>,
        distances: OneOrMany<f64>,
        unit: i32,
        union_results: bool,
    ) -> Result<OneOrMany<TestPolygon>, EngineError> {
        self.buffer_calls.set(self.buffer_calls.get() + 1);
        *self.last_buffer.borrow_mut() =
            Some((geometries.clone(), distances.clone(), unit, union_results));
        yield_times(1).await;

        if let Some(message) = &self.buffer_error {
            return Err(EngineError::new(message.as_str()));
        }

        let first_distance = distances.as_slice().first().copied().unwrap_or(0.0);
        let polygons: Vec<TestPolygon> = match (geometries, distances) {
            (OneOrMany::One(source), OneOrMany::One(distance)) => {
                return Ok(OneOrMany::One(TestPolygon {
                    index: 0,
                    source,
                    distance,
                }));
            }
            (geometries, distances) => geometries
                .into_vec()
                .into_iter()
                .zip(distances.into_vec())
                .enumerate()
                .map(|(index, (source, distance))| TestPolygon {
                    index,
                    source,
                    distance,
                })
                .collect(),
        };

        if union_results {
            let source = polygons[0].source.clone();
            return Ok(OneOrMany::Many(vec![TestPolygon {
                index: 0,
                source,
                distance: first_distance,
            }]));
        }
        Ok(OneOrMany::Many(polygons))
    }

    async fn area(&self, polygon: &TestPolygon, mode: AreaMode) -> Result<f64, EngineError> {
        self.area_calls.set(self.area_calls.get() + 1);
        self.area_modes.borrow_mut().push(mode);
        let transient = self.transient_area_failures.get();
        if transient > 0 {
            self.transient_area_failures.set(transient - 1);
            return Err(EngineError::new("Dienst vorübergehend nicht erreichbar"));
        }
        let delay = self.area_delays.get(polygon.index).copied().unwrap_or(0);
        yield_times(delay).await;
        if self.area_errors.contains(&polygon.index) {
            return Err(EngineError::new("Polygon ist nicht einfach"));
        }
        Ok(polygon.distance * polygon.distance)
    }
}

/// Layer, der das Einfügen bestimmter Ergebnis-Indizes ablehnt.
pub struct RejectingLayer {
    pub inner: MemoryResultsLayer<TestPolygon>,
    pub reject_index: usize,
}

#[async_trait(?Send)]
impl ResultsLayer for RejectingLayer {
    type Geometry = TestPolygon;

    async fn apply_edits(
        &self,
        edits: LayerEdits<TestPolygon>,
    ) -> Result<EditSummary, LayerError> {
        if edits
            .adds
            .iter()
            .any(|r| r.geometry.index == self.reject_index)
        {
            return Err(LayerError::new("Schreibschutz"));
        }
        self.inner.apply_edits(edits).await
    }

    fn suspend(&self) {
        self.inner.suspend();
    }

    fn resume(&self) {
        self.inner.resume();
    }

    async fn query_features(&self) -> Result<Vec<ResultRecord<TestPolygon>>, LayerError> {
        self.inner.query_features().await
    }
}
