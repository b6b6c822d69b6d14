//! Buffer-Event-Payload und validierte Buffer-Anfrage.

use super::{Geometry, OneOrMany};
use serde::{Deserialize, Serialize};

/// Payload des `buffer`-Events, wie es das Formular versendet.
///
/// `geometry` und `distance` dürfen hier noch `null` sein; erst
/// [`into_request`](Self::into_request) erzwingt den Vertrag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferEventDetail {
    /// Zu puffernde Geometrie(n)
    pub geometry: Option<OneOrMany<Geometry>>,
    /// Buffer-Distanz(en)
    pub distance: Option<OneOrMany<f64>>,
    /// Einheiten-Code
    pub unit: i32,
    /// Ergebnis-Polygone vereinigen
    pub union_results: bool,
}

/// Vertragsverletzung im Buffer-Event (fehlende oder ungültige Felder).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Geometry should not be null.")]
    MissingGeometry,
    #[error("Distance should not be null.")]
    MissingDistance,
    #[error("Geometry list must not be empty.")]
    EmptyGeometry,
    #[error("Distance list must not be empty.")]
    EmptyDistance,
    #[error("Distance #{index} is not a finite number: {value}")]
    InvalidDistance { index: usize, value: f64 },
}

/// Validierte, unveränderliche Buffer-Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferRequest {
    geometry: OneOrMany<Geometry>,
    distance: OneOrMany<f64>,
    unit: i32,
    union_results: bool,
}

impl BufferEventDetail {
    /// Prüft den Event-Vertrag und erzeugt daraus eine [`BufferRequest`].
    pub fn into_request(self) -> Result<BufferRequest, RequestError> {
        let geometry = self.geometry.ok_or(RequestError::MissingGeometry)?;
        let distance = self.distance.ok_or(RequestError::MissingDistance)?;
        if geometry.is_empty() {
            return Err(RequestError::EmptyGeometry);
        }
        if distance.is_empty() {
            return Err(RequestError::EmptyDistance);
        }
        if let Some((index, &value)) = distance
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_finite())
        {
            return Err(RequestError::InvalidDistance { index, value });
        }

        Ok(BufferRequest {
            geometry,
            distance,
            unit: self.unit,
            union_results: self.union_results,
        })
    }
}

impl BufferRequest {
    /// Geometrie(n) in struktureller Form.
    pub fn geometry(&self) -> &OneOrMany<Geometry> {
        &self.geometry
    }

    /// Distanz(en).
    pub fn distance(&self) -> &OneOrMany<f64> {
        &self.distance
    }

    /// Einheiten-Code.
    pub fn unit(&self) -> i32 {
        self.unit
    }

    /// Vereinigung der Ergebnisse angefordert.
    pub fn union_results(&self) -> bool {
        self.union_results
    }

    /// Zerlegt die Anfrage für die Verarbeitung.
    pub fn into_parts(self) -> (OneOrMany<Geometry>, OneOrMany<f64>, i32, bool) {
        (self.geometry, self.distance, self.unit, self.union_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(geometry: Option<OneOrMany<Geometry>>, distance: Option<OneOrMany<f64>>) -> BufferEventDetail {
        BufferEventDetail {
            geometry,
            distance,
            unit: 9002,
            union_results: false,
        }
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let g = Some(OneOrMany::One(Geometry::point(0.0, 0.0)));
        assert_eq!(
            detail(None, Some(OneOrMany::One(1.0))).into_request(),
            Err(RequestError::MissingGeometry)
        );
        assert_eq!(
            detail(g.clone(), None).into_request(),
            Err(RequestError::MissingDistance)
        );
        assert_eq!(
            detail(g, Some(OneOrMany::Many(vec![]))).into_request(),
            Err(RequestError::EmptyDistance)
        );
    }

    #[test]
    fn test_nan_distance_is_rejected() {
        let g = Some(OneOrMany::One(Geometry::point(0.0, 0.0)));
        let err = detail(g, Some(OneOrMany::Many(vec![100.0, f64::NAN])))
            .into_request()
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidDistance { index: 1, .. }));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"geometry":{"x":1,"y":2},"distance":[100,200],"unit":9002,"unionResults":true}"#;
        let detail: BufferEventDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.distance, Some(OneOrMany::Many(vec![100.0, 200.0])));
        assert!(detail.union_results);

        let request = detail.into_request().unwrap();
        assert_eq!(request.unit(), 9002);
        assert!(!request.geometry().is_many());
    }

    #[test]
    fn test_null_fields_on_the_wire() {
        let json = r#"{"geometry":null,"distance":null,"unit":9001,"unionResults":false}"#;
        let detail: BufferEventDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.into_request(), Err(RequestError::MissingGeometry));
    }
}
