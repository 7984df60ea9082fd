//! Das eingefrorene Bake-Artefakt eines Pfades.
//!
//! `bake` tastet einen fertig aufgebauten [`Path`] in festen
//! Distanz-Schritten ab und legt jede Komponente (3× Position, 4×
//! Rotations-Quaternion, 3× Up-Vektor) als eigene [`PeriodicCurve`] über
//! der normalisierten Distanz ab. Das Ergebnis hängt nicht mehr an der
//! Node-Liste: spätere Mutationen des Quell-Pfades sind unsichtbar, die
//! Auswertung kostet nur noch Kurven-Lookups.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::{DistancePath, Path, PeriodicCurve};

/// Knotenunabhängiger Schnappschuss eines Pfades als Kurven-Satz.
///
/// Erfüllt denselben Abfrage-Vertrag wie der Live-Pfad und ist nach dem
/// Bake unveränderlich und eigenständig serialisierbar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakedPath {
    position: [PeriodicCurve; 3],
    rotation: [PeriodicCurve; 4],
    up_vector: [PeriodicCurve; 3],
    path_distance: f32,
    #[serde(skip)]
    world_from_local: Affine3A,
}

impl BakedPath {
    /// Backt einen fertig aufgebauten Pfad in einen Kurven-Satz.
    ///
    /// Ein unaufgebauter oder längenloser Quell-Pfad liefert `None` und
    /// hinterlässt nur eine Warnung — nie einen Abbruch.
    pub fn bake(path: &Path) -> Option<Self> {
        let total = path.path_distance();
        if !path.is_path_ready() || total <= f32::EPSILON {
            log::warn!("bake: Quell-Pfad ist nicht aufgebaut oder hat Länge 0");
            return None;
        }

        let mut position: [PeriodicCurve; 3] = Default::default();
        let mut rotation: [PeriodicCurve; 4] = Default::default();
        let mut up_vector: [PeriodicCurve; 3] = Default::default();

        let mut add_sample = |t: f32, distance: f32| {
            let pos = path.position_at_distance(distance, true);
            let rot = path.rotation_at_distance(distance);
            let up = path.up_vector_at_distance(distance);

            for (i, curve) in position.iter_mut().enumerate() {
                curve.add_key(t, pos[i]);
            }
            let rot = rot.to_array();
            for (i, curve) in rotation.iter_mut().enumerate() {
                curve.add_key(t, rot[i]);
            }
            for (i, curve) in up_vector.iter_mut().enumerate() {
                curve.add_key(t, up[i]);
            }
        };

        // Uniform in festen step-Schritten, nicht adaptiv: kompakter Speicher
        let step = path.step();
        let mut current = 0.0;
        while current < total {
            add_sample(current / total, current);
            current += step;
        }
        // Schluss-Key bei t = 1 mit den t = 0-Werten: exakter Schleifenschluss
        // unabhängig von der Schrittweiten-Rundung
        add_sample(1.0, 0.0);

        Some(Self {
            position,
            rotation,
            up_vector,
            path_distance: total,
            world_from_local: path.world_from_local(),
        })
    }

    /// Affine Abbildung vom lokalen Pfad-Raum in den Welt-Raum
    pub fn world_from_local(&self) -> Affine3A {
        self.world_from_local
    }

    /// Setzt die Welt-Transformation (vom Host-Objekt geliefert)
    pub fn set_world_from_local(&mut self, transform: Affine3A) {
        self.world_from_local = transform;
    }

    /// Normalisierte Distanz für die Kurven-Auswertung
    fn normalized(&self, distance: f32) -> f32 {
        if self.path_distance <= f32::EPSILON {
            return 0.0;
        }
        (distance % self.path_distance) / self.path_distance
    }
}

impl DistancePath for BakedPath {
    fn position_at_distance(&self, distance: f32, local: bool) -> Vec3 {
        if !self.is_path_ready() {
            return Vec3::ZERO;
        }

        let t = self.normalized(distance);
        let pos = Vec3::new(
            self.position[0].evaluate(t),
            self.position[1].evaluate(t),
            self.position[2].evaluate(t),
        );
        if local {
            pos
        } else {
            self.world_from_local.transform_point3(pos)
        }
    }

    fn rotation_at_distance_with_up(&self, distance: f32, _up: Vec3) -> Quat {
        // Der Up-Vektor ist bereits in die gebackenen Rotationen eingeflossen
        self.rotation_at_distance(distance)
    }

    fn rotation_at_distance(&self, distance: f32) -> Quat {
        if !self.is_path_ready() {
            return Quat::IDENTITY;
        }

        let t = self.normalized(distance);
        let quat = Quat::from_xyzw(
            self.rotation[0].evaluate(t),
            self.rotation[1].evaluate(t),
            self.rotation[2].evaluate(t),
            self.rotation[3].evaluate(t),
        );
        // Komponentenweise Interpolation denormalisiert leicht
        if quat.length_squared() <= f32::EPSILON {
            Quat::IDENTITY
        } else {
            quat.normalize()
        }
    }

    fn up_vector_at_distance(&self, distance: f32) -> Vec3 {
        if !self.is_path_ready() {
            return Vec3::ZERO;
        }

        let t = self.normalized(distance);
        Vec3::new(
            self.up_vector[0].evaluate(t),
            self.up_vector[1].evaluate(t),
            self.up_vector[2].evaluate(t),
        )
    }

    fn is_path_ready(&self) -> bool {
        self.position.iter().all(|c| !c.is_empty())
            && self.rotation.iter().all(|c| !c.is_empty())
            && self.up_vector.iter().all(|c| !c.is_empty())
    }

    fn path_distance(&self) -> f32 {
        self.path_distance
    }
}
