//! Core-Domänentypen: Geometrie-Form, Buffer-Anfrage, Ergebnis-Datensatz, Flächen-Anzeige.

pub mod area;
pub mod geometry;
pub mod one_or_many;
pub mod record;
pub mod request;

pub use area::{AreaMode, AreaUnit, DisplayArea, SQUARE_FEET_PER_ACRE, SQUARE_METERS_PER_ACRE};
pub use geometry::{
    ExtraFields, Feature, Geometry, Multipoint, Point, Polygon, Polyline, Position, SpatialReference,
    GEOMETRY_SHAPE_KEYS,
};
pub use one_or_many::OneOrMany;
pub use record::{AreaOutcome, FieldDefinition, FieldType, ResultRecord, RESULT_FIELDS};
pub use request::{BufferEventDetail, BufferRequest, RequestError};
