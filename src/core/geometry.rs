//! Strukturelle Geometrie-Form (Esri-JSON), wie sie Formular und Event transportieren.
//!
//! Die Typen halten nur Daten. Jede Berechnung läuft über die externe
//! Geometry-Engine (siehe [`crate::app::capabilities`]).

use serde::{Deserialize, Serialize};

/// Eine Position: `[x, y]`, optional mit `z` und `m`.
pub type Position = Vec<f64>;

/// Raumbezug einer Geometrie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_wkid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkt: Option<String>,
}

impl SpatialReference {
    /// Raumbezug über eine WKID.
    pub fn wkid(wkid: u32) -> Self {
        Self {
            wkid: Some(wkid),
            ..Self::default()
        }
    }
}

/// Weitere Esri-Felder, die unverändert mitgeführt werden.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Einzelpunkt. `x` muss vorhanden sein, darf aber `null` sein (leerer Punkt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    #[serde(deserialize_with = "present_nullable")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Punktwolke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Multipoint {
    pub points: Vec<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_z: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_m: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Linienzug aus einem oder mehreren Pfaden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub paths: Vec<Vec<Position>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_z: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_m: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Polygon aus einem oder mehreren Ringen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub rings: Vec<Vec<Position>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_z: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_m: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Pflichtfeld mit erlaubtem `null`. Ohne `deserialize_with` würde ein
/// fehlendes `Option`-Feld still zu `None`.
fn present_nullable<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)
}

/// Geometrie in struktureller Form. Die Variante ergibt sich aus den
/// vorhandenen Feldern (`x`, `points`, `paths`, `rings`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Point(Point),
    Multipoint(Multipoint),
    Polyline(Polyline),
    Polygon(Polygon),
}

/// Feldnamen, an denen eine nackte Geometrie erkannt wird.
pub const GEOMETRY_SHAPE_KEYS: [&str; 4] = ["x", "points", "rings", "paths"];

impl Geometry {
    /// Kurzbezeichnung des Geometrietyps.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::Multipoint(_) => "multipoint",
            Geometry::Polyline(_) => "polyline",
            Geometry::Polygon(_) => "polygon",
        }
    }

    /// Raumbezug, falls angegeben.
    pub fn spatial_reference(&self) -> Option<&SpatialReference> {
        match self {
            Geometry::Point(g) => g.spatial_reference.as_ref(),
            Geometry::Multipoint(g) => g.spatial_reference.as_ref(),
            Geometry::Polyline(g) => g.spatial_reference.as_ref(),
            Geometry::Polygon(g) => g.spatial_reference.as_ref(),
        }
    }

    /// Punkt ohne Z/M.
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point(Point {
            x: Some(x),
            y: Some(y),
            z: None,
            m: None,
            spatial_reference: None,
            extra: ExtraFields::new(),
        })
    }

    /// Polygon aus Ringen.
    pub fn polygon(rings: Vec<Vec<Position>>) -> Self {
        Geometry::Polygon(Polygon {
            rings,
            has_z: None,
            has_m: None,
            spatial_reference: None,
            extra: ExtraFields::new(),
        })
    }
}

/// Feature: Geometrie plus Attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Feature {
    /// Feature ohne Attribute.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            attributes: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_shape_detection() {
        let g: Geometry =
            serde_json::from_str(r#"{"rings":[[[0,0],[0,1],[1,1],[0,0]]]}"#).unwrap();
        assert_eq!(g.kind(), "polygon");

        let g: Geometry = serde_json::from_str(
            r#"{"x":1.5,"y":2.5,"spatialReference":{"wkid":3857}}"#,
        )
        .unwrap();
        assert_eq!(g.kind(), "point");
        assert_eq!(g.spatial_reference(), Some(&SpatialReference::wkid(3857)));

        let g: Geometry = serde_json::from_str(r#"{"paths":[[[0,0],[5,5]]]}"#).unwrap();
        assert_eq!(g.kind(), "polyline");

        let g: Geometry = serde_json::from_str(r#"{"points":[[0,0],[5,5]]}"#).unwrap();
        assert_eq!(g.kind(), "multipoint");
    }

    #[test]
    fn test_serialize_uses_esri_field_names() {
        let mut g = Geometry::point(1.0, 2.0);
        if let Geometry::Point(p) = &mut g {
            p.spatial_reference = Some(SpatialReference::wkid(4326));
        }
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"x": 1.0, "y": 2.0, "spatialReference": {"wkid": 4326}})
        );
    }

    #[test]
    fn test_unmodelled_fields_survive_roundtrip() {
        let input = serde_json::json!({
            "rings": [[[0.0, 0.0, 5.0], [0.0, 1.0, 5.0], [1.0, 1.0, 5.0], [0.0, 0.0, 5.0]]],
            "hasZ": true,
            "spatialReference": {"wkid": 3857},
            "curveRings": []
        });
        let g: Geometry = serde_json::from_value(input.clone()).unwrap();
        let Geometry::Polygon(polygon) = &g else {
            panic!("Erwartet Polygon");
        };
        assert_eq!(polygon.has_z, Some(true));
        assert!(polygon.extra.contains_key("curveRings"));
        assert_eq!(serde_json::to_value(&g).unwrap(), input);
    }

    #[test]
    fn test_empty_point_is_accepted() {
        let input = serde_json::json!({"x": null, "spatialReference": {"wkid": 4326}});
        let g: Geometry = serde_json::from_value(input.clone()).unwrap();
        let Geometry::Point(point) = &g else {
            panic!("Erwartet leeren Punkt");
        };
        assert_eq!(point.x, None);
        assert_eq!(serde_json::to_value(&g).unwrap(), input);
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        assert!(serde_json::from_str::<Geometry>(r#"{"xmin":0,"ymin":0}"#).is_err());
    }
}
