//! Der gemeinsame Abfrage-Vertrag für Live-Pfad und Bake-Artefakt.

use glam::{Quat, Vec3};

use super::{BakedPath, Path};

/// Distanz-basierte Abfragen entlang eines Pfades.
///
/// Wird sowohl vom mutierbaren [`Path`] als auch vom eingefrorenen
/// [`BakedPath`] erfüllt; ein Follower kann beide austauschbar verwenden.
/// Alle Methoden sind fail-soft: ein nicht aufgebauter Pfad liefert
/// definierte Defaults (Null-Vektor, Identitäts-Rotation) statt zu panicken.
pub trait DistancePath {
    /// Position bei `distance`; `local` unterdrückt die Welt-Transformation
    fn position_at_distance(&self, distance: f32, local: bool) -> Vec3;

    /// Blickrotation bei `distance` gegen einen expliziten Up-Vektor
    fn rotation_at_distance_with_up(&self, distance: f32, up: Vec3) -> Quat;

    /// Blickrotation bei `distance`; Up kommt aus
    /// [`up_vector_at_distance`](Self::up_vector_at_distance)
    fn rotation_at_distance(&self, distance: f32) -> Quat {
        self.rotation_at_distance_with_up(distance, self.up_vector_at_distance(distance))
    }

    /// Banking-beeinflusster Up-Vektor bei `distance`
    fn up_vector_at_distance(&self, distance: f32) -> Vec3;

    /// `true` sobald der Pfad abfragbar aufgebaut ist
    fn is_path_ready(&self) -> bool;

    /// Gesamtlänge des Pfades (Polyline-Approximation)
    fn path_distance(&self) -> f32;
}

/// Geschlossene Variante über die beiden Vertrags-Implementierungen.
///
/// Ein Konsument, der zwischen Live- und Bake-Darstellung wechselt, hält
/// einen `PathSource` statt eines Trait-Objekts: es gibt genau zwei
/// Darstellungen, eine dritte ist nicht vorgesehen.
#[derive(Debug, Clone)]
pub enum PathSource {
    /// Mutierbarer Authoring-Pfad
    Live(Path),
    /// Eingefrorenes Bake-Artefakt
    Baked(BakedPath),
}

impl DistancePath for PathSource {
    fn position_at_distance(&self, distance: f32, local: bool) -> Vec3 {
        match self {
            Self::Live(path) => path.position_at_distance(distance, local),
            Self::Baked(baked) => baked.position_at_distance(distance, local),
        }
    }

    fn rotation_at_distance_with_up(&self, distance: f32, up: Vec3) -> Quat {
        match self {
            Self::Live(path) => path.rotation_at_distance_with_up(distance, up),
            Self::Baked(baked) => baked.rotation_at_distance_with_up(distance, up),
        }
    }

    fn rotation_at_distance(&self, distance: f32) -> Quat {
        match self {
            Self::Live(path) => path.rotation_at_distance(distance),
            Self::Baked(baked) => baked.rotation_at_distance(distance),
        }
    }

    fn up_vector_at_distance(&self, distance: f32) -> Vec3 {
        match self {
            Self::Live(path) => path.up_vector_at_distance(distance),
            Self::Baked(baked) => baked.up_vector_at_distance(distance),
        }
    }

    fn is_path_ready(&self) -> bool {
        match self {
            Self::Live(path) => path.is_path_ready(),
            Self::Baked(baked) => baked.is_path_ready(),
        }
    }

    fn path_distance(&self) -> f32 {
        match self {
            Self::Live(path) => path.path_distance(),
            Self::Baked(baked) => baked.path_distance(),
        }
    }
}
