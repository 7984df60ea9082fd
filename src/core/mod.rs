//! Core-Domänentypen: Nodes, Pfad, Bake-Artefakt und Abfrage-Vertrag.

pub mod baked;
pub mod curve;
pub mod node;
pub mod path;
pub mod query;

pub use baked::BakedPath;
pub use curve::{Keyframe, PeriodicCurve};
pub use node::{Node, TangentType};
pub use path::Path;
pub use query::{DistancePath, PathSource};
