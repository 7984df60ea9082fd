//! Path-Tools Library.
//!
//! Stückweise kubische Bezier-Pfade mit distanzbasierter Traversierung:
//! ein mutierbarer Authoring-[`Path`] wird per [`Path::update_path`] in
//! dichte Samples überführt, liefert Position/Rotation/Up-Vektor bei
//! beliebiger Distanz und lässt sich per [`BakedPath::bake`] in ein
//! knotenunabhängiges Kurven-Artefakt mit identischem Abfrage-Vertrag
//! ([`DistancePath`]) einfrieren.

pub mod core;
pub mod shared;

pub use core::{
    BakedPath, DistancePath, Keyframe, Node, Path, PathSource, PeriodicCurve, TangentType,
};
pub use shared::{DEFAULT_STEP, MIN_STEP};
