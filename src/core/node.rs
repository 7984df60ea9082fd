//! Authoring-Kontrollpunkt eines Pfades.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::shared::DEFAULT_HANDLE_OFFSET;

/// Kopplung der beiden Tangenten-Handles eines Nodes.
///
/// Bei `Aligned` hält die Editing-Schicht beide Handles kollinear durch
/// die Node-Position; der Mathe-Kern verlässt sich nicht darauf und
/// behandelt beide Varianten identisch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TangentType {
    /// Handles bleiben kollinear (gegenläufig, unabhängig skaliert)
    #[default]
    Aligned,
    /// Handles sind frei beweglich
    Free,
}

/// Ein Wegpunkt mit Position, zwei Tangenten-Handles und Orientierung
///
/// Die Handles sind Kontrollpunkte im selben lokalen Pfad-Raum wie
/// `local_pos`, keine Offsets. `orientation` (Grad) neigt den Up-Vektor
/// des Pfades um die Tangente (Banking).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position im lokalen Pfad-Raum
    pub local_pos: Vec3,
    /// Eingangs-Handle (Richtung des vorherigen Nodes)
    pub left_handle: Vec3,
    /// Ausgangs-Handle (Richtung des nächsten Nodes)
    pub right_handle: Vec3,
    /// Banking-Winkel in Grad
    pub orientation: f32,
    /// Kopplung der Handles
    pub tangent_type: TangentType,
}

impl Node {
    /// Erstellt einen Node mit symmetrischen Default-Handles (`pos ± X`)
    pub fn new(pos: Vec3) -> Self {
        Self {
            local_pos: pos,
            left_handle: pos + Vec3::NEG_X * DEFAULT_HANDLE_OFFSET,
            right_handle: pos + Vec3::X * DEFAULT_HANDLE_OFFSET,
            orientation: 0.0,
            tangent_type: TangentType::Aligned,
        }
    }
}
