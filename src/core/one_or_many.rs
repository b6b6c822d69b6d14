//! Einzelwert oder Sequenz, wie sie im Buffer-Event transportiert werden.

use serde::{Deserialize, Serialize};

/// Ein einzelner Wert oder eine geordnete Sequenz von Werten.
///
/// Serialisiert untagged: `One` als nackter Wert, `Many` als Array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Baut aus einer Liste: leer → `None`, ein Element → `One`, sonst `Many`.
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(OneOrMany::One),
            _ => Some(OneOrMany::Many(items)),
        }
    }

    /// `true` für die Sequenz-Variante (auch bei nur einem Element).
    pub fn is_many(&self) -> bool {
        matches!(self, OneOrMany::Many(_))
    }

    /// Anzahl der enthaltenen Werte.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// `true`, wenn eine leere Sequenz vorliegt.
    pub fn is_empty(&self) -> bool {
        matches!(self, OneOrMany::Many(items) if items.is_empty())
    }

    /// Liefert alle Werte als Slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    /// Wandelt in eine Liste um (`One` → ein Element).
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    /// Wendet `f` elementweise an, behält die Kardinalität bei und bricht
    /// beim ersten Fehler ab.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<OneOrMany<U>, E> {
        Ok(match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)?),
            OneOrMany::Many(items) => {
                OneOrMany::Many(items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?)
            }
        })
    }
}
