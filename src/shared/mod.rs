//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält reine Geometrie-Funktionen und Konstanten, die von `core`
//! und von Tests/Benches gleichermaßen genutzt werden.

pub mod options;
pub mod spline_geometry;

pub use options::{ADD_NODE_OFFSET_RADIUS, DEFAULT_HANDLE_OFFSET, DEFAULT_STEP, MIN_STEP};
pub use spline_geometry::{cubic_bezier_point, look_rotation, polyline_length, segment_count};
