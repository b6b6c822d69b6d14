//! Application Controller für die Verarbeitung der Formular-Events.

use super::capabilities::{GeometryEngine, ResultsLayer};
use super::ids::IdSequence;
use super::use_cases::{self, BufferReport};
use super::FormEvent;
use crate::core::BufferEventDetail;
use crate::shared::BufferOptions;
use crate::ui::ParameterForm;
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;

/// Orchestriert Formular-Events gegen Geometry-Engine und Ergebnis-Layer.
///
/// Alle Methoden nehmen `&self`: ein neues Event darf verarbeitet werden,
/// während ein früherer Buffer-Durchlauf noch auf die Engine wartet.
pub struct BufferController<E, L> {
    engine: E,
    layer: L,
    options: BufferOptions,
    ids: Rc<IdSequence>,
}

impl<E, L> BufferController<E, L>
where
    E: GeometryEngine,
    L: ResultsLayer<Geometry = E::Polygon>,
{
    /// Erstellt einen Controller mit eigener ID-Sequenz ab 0.
    pub fn new(engine: E, layer: L, options: BufferOptions) -> Self {
        Self::with_ids(engine, layer, options, Rc::new(IdSequence::new()))
    }

    /// Erstellt einen Controller mit einer (ggf. geteilten) ID-Sequenz.
    pub fn with_ids(engine: E, layer: L, options: BufferOptions, ids: Rc<IdSequence>) -> Self {
        Self {
            engine,
            layer,
            options,
            ids,
        }
    }

    /// Verarbeitet ein Formular-Event.
    pub async fn handle_event(
        &self,
        form: &RefCell<ParameterForm>,
        event: FormEvent,
    ) -> anyhow::Result<()> {
        log::debug!("Event empfangen: {}", event.name());
        match event {
            FormEvent::Buffer(detail) => {
                self.buffer(form, detail).await?;
            }
            FormEvent::ClearGraphics => {
                self.clear_results().await?;
            }
        }
        Ok(())
    }

    /// Puffert die Geometrien des Events und leert danach die Geometrie-Liste
    /// des Formulars. Bei Fehler bleibt die Liste erhalten.
    pub async fn buffer(
        &self,
        form: &RefCell<ParameterForm>,
        detail: BufferEventDetail,
    ) -> anyhow::Result<BufferReport<E::Polygon>> {
        let report = use_cases::buffer::run(
            &self.engine,
            &self.layer,
            &self.ids,
            &self.options,
            detail,
        )
        .await
        .context("Buffer-Event konnte nicht verarbeitet werden")?;

        form.borrow_mut().clear_geometry_list();
        Ok(report)
    }

    /// Löscht alle Ergebnis-Features.
    pub async fn clear_results(&self) -> anyhow::Result<usize> {
        use_cases::clear_results::run(&self.layer)
            .await
            .context("Buffer-Ergebnisse konnten nicht gelöscht werden")
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn options(&self) -> &BufferOptions {
        &self.options
    }

    /// Die ID-Sequenz, z.B. zum Teilen mit einem weiteren Controller.
    pub fn ids(&self) -> &Rc<IdSequence> {
        &self.ids
    }
}
