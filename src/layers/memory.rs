//! In-Memory-Ergebnis-Layer.
//!
//! Hält die Features in Einfüge-Reihenfolge. Während der Layer suspendiert
//! ist, werden Edits gesammelt und erst beim passenden `resume` sichtbar.
//! Gespeichert sind sie trotzdem sofort: `query_features` liefert den Stand
//! inklusive wartender Edits.

use crate::app::{EditSummary, LayerEdits, LayerError, ResultsLayer};
use crate::core::{FieldDefinition, ResultRecord, RESULT_FIELDS};
use crate::shared::{BufferOptions, RESULT_LAYER_ID};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::cell::RefCell;

#[derive(Debug)]
struct LayerState<P> {
    features: IndexMap<u64, ResultRecord<P>>,
    suspend_depth: u32,
    pending: Vec<LayerEdits<P>>,
    redraws: usize,
}

impl<P> LayerState<P> {
    /// Prüft, ob eine ID bereits vergeben ist (sichtbar oder wartend).
    fn contains_id(&self, id: u64) -> bool {
        self.features.contains_key(&id)
            || self
                .pending
                .iter()
                .any(|edit| edit.adds.iter().any(|r| r.id == id))
    }

    /// Gespeicherter Stand: sichtbare Features plus wartende Edits.
    fn stored_features(&self) -> IndexMap<u64, ResultRecord<P>>
    where
        P: Clone,
    {
        let mut stored = self.features.clone();
        for edit in &self.pending {
            for id in &edit.deletes {
                stored.shift_remove(id);
            }
            for record in &edit.adds {
                stored.insert(record.id, record.clone());
            }
        }
        stored
    }

    fn apply(&mut self, edits: LayerEdits<P>) -> EditSummary {
        let mut summary = EditSummary::default();
        for id in edits.deletes {
            if self.features.shift_remove(&id).is_some() {
                summary.deleted += 1;
            }
        }
        for record in edits.adds {
            self.features.insert(record.id, record);
            summary.added += 1;
        }
        summary
    }
}

/// Ergebnis-Layer im Speicher.
#[derive(Debug)]
pub struct MemoryResultsLayer<P> {
    id: String,
    state: RefCell<LayerState<P>>,
}

impl<P> Default for MemoryResultsLayer<P> {
    fn default() -> Self {
        Self::new(RESULT_LAYER_ID)
    }
}

impl<P> MemoryResultsLayer<P> {
    /// Erstellt einen leeren Layer mit der gegebenen ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: RefCell::new(LayerState {
                features: IndexMap::new(),
                suspend_depth: 0,
                pending: Vec::new(),
                redraws: 0,
            }),
        }
    }

    /// Erstellt einen leeren Layer mit der ID aus den Optionen.
    pub fn from_options(options: &BufferOptions) -> Self {
        Self::new(options.layer_id.as_str())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Feld-Schema des Layers.
    pub fn fields(&self) -> &'static [FieldDefinition] {
        &RESULT_FIELDS
    }

    /// `true`, solange mindestens ein `suspend` offen ist.
    pub fn is_suspended(&self) -> bool {
        self.state.borrow().suspend_depth > 0
    }

    /// Anzahl der wartenden Edits.
    pub fn pending_edits(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Wie oft der Layer neu gezeichnet wurde.
    pub fn redraw_count(&self) -> usize {
        self.state.borrow().redraws
    }

    /// Anzahl der sichtbaren Features.
    pub fn len(&self) -> usize {
        self.state.borrow().features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().features.is_empty()
    }
}

impl<P: Clone> MemoryResultsLayer<P> {
    /// Aktuell dargestellte Features in Einfüge-Reihenfolge.
    pub fn visible_features(&self) -> Vec<ResultRecord<P>> {
        self.state.borrow().features.values().cloned().collect()
    }
}

#[async_trait(?Send)]
impl<P: Clone + 'static> ResultsLayer for MemoryResultsLayer<P> {
    type Geometry = P;

    async fn apply_edits(&self, edits: LayerEdits<P>) -> Result<EditSummary, LayerError> {
        let mut state = self.state.borrow_mut();
        if let Some(record) = edits.adds.iter().find(|r| state.contains_id(r.id)) {
            return Err(LayerError::new(format!(
                "Feature-ID {} ist bereits vergeben",
                record.id
            )));
        }

        if state.suspend_depth > 0 {
            let mut stored = state.stored_features();
            let deleted = edits
                .deletes
                .iter()
                .filter(|id| stored.shift_remove(*id).is_some())
                .count();
            let summary = EditSummary {
                added: edits.adds.len(),
                deleted,
            };
            state.pending.push(edits);
            return Ok(summary);
        }

        let summary = state.apply(edits);
        state.redraws += 1;
        Ok(summary)
    }

    fn suspend(&self) {
        self.state.borrow_mut().suspend_depth += 1;
    }

    fn resume(&self) {
        let mut state = self.state.borrow_mut();
        if state.suspend_depth == 0 {
            log::warn!("Layer '{}': resume ohne vorheriges suspend", self.id);
            return;
        }
        state.suspend_depth -= 1;
        if state.suspend_depth > 0 || state.pending.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut state.pending);
        let mut total = EditSummary::default();
        for edits in pending {
            let summary = state.apply(edits);
            total.added += summary.added;
            total.deleted += summary.deleted;
        }
        state.redraws += 1;
        log::debug!(
            "Layer '{}': {} Features eingefügt, {} gelöscht",
            self.id,
            total.added,
            total.deleted
        );
    }

    async fn query_features(&self) -> Result<Vec<ResultRecord<P>>, LayerError> {
        Ok(self.state.borrow().stored_features().into_values().collect())
    }
}
