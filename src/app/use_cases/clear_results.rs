//! Use-Case: alle Ergebnis-Features löschen.

use crate::app::capabilities::{LayerEdits, LayerError, ResultsLayer};

/// Fragt alle Features ab und löscht sie mit einem einzigen Edit.
/// Gibt die Anzahl der gelöschten Features zurück.
pub async fn run<L: ResultsLayer>(layer: &L) -> Result<usize, LayerError> {
    let features = layer.query_features().await?;
    if features.is_empty() {
        log::debug!("Keine Buffer-Ergebnisse zum Löschen");
        return Ok(0);
    }

    let ids = features.iter().map(|f| f.id).collect();
    let summary = layer.apply_edits(LayerEdits::delete(ids)).await?;
    log::info!("{} Buffer-Ergebnisse gelöscht", summary.deleted);
    Ok(summary.deleted)
}
