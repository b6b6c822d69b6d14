//! Fortlaufende IDs für Ergebnis-Features.

use std::cell::Cell;

/// Vergibt IDs aufsteigend ab einem Startwert. IDs werden nie wiederverwendet,
/// auch nicht nach dem Löschen aller Ergebnisse. Nach `u64::MAX` ist die
/// Sequenz erschöpft.
///
/// Mehrere Controller teilen sich eine Sequenz nur explizit über `Rc<IdSequence>`.
#[derive(Debug)]
pub struct IdSequence {
    next: Cell<Option<u64>>,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl IdSequence {
    /// Sequenz ab 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequenz ab einem beliebigen Startwert.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(Some(first)),
        }
    }

    /// Vergibt die nächste ID. `None`, wenn die Sequenz erschöpft ist.
    pub fn next_id(&self) -> Option<u64> {
        let id = self.next.get()?;
        self.next.set(id.checked_add(1));
        Some(id)
    }

    /// Die ID, die als nächste vergeben würde.
    pub fn peek(&self) -> Option<u64> {
        self.next.get()
    }
}
