//! Formular-Events: öffentlicher Vertrag zwischen Formular und Controller.

use crate::core::BufferEventDetail;
use serde::{Deserialize, Serialize};

/// Vom Formular ausgelöste Events.
///
/// Wire-Form: `{"type": "buffer", "detail": {...}}` bzw. `{"type": "clear-graphics"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "kebab-case")]
pub enum FormEvent {
    /// Gültiges Absenden des Formulars
    Buffer(BufferEventDetail),
    /// Button "Clear result graphics"
    ClearGraphics,
}

impl FormEvent {
    /// Event-Name.
    pub fn name(&self) -> &'static str {
        match self {
            FormEvent::Buffer(_) => "buffer",
            FormEvent::ClearGraphics => "clear-graphics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Geometry, OneOrMany};

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(FormEvent::ClearGraphics).unwrap();
        assert_eq!(json, serde_json::json!({"type": "clear-graphics"}));

        let event = FormEvent::Buffer(BufferEventDetail {
            geometry: Some(OneOrMany::One(Geometry::point(1.0, 2.0))),
            distance: Some(OneOrMany::One(5.0)),
            unit: 9001,
            union_results: false,
        });
        assert_eq!(event.name(), "buffer");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "buffer");
        assert_eq!(json["detail"]["unionResults"], false);
        assert_eq!(json["detail"]["unit"], 9001);

        let back: FormEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
