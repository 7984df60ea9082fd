//! Der mutierbare Authoring-Pfad: Node-Liste, Spline-Aufbau und
//! Distanz-Abfragen.
//!
//! `Path` hält die geordnete Node-Liste und drei abgeleitete Caches
//! (`curved_positions`, `orientations`, `path_distance`). Die Caches werden
//! ausschließlich durch [`Path::update_path`] neu aufgebaut — nie implizit
//! beim Lesen. Abfragen vor dem ersten Aufbau sind erlaubt und liefern
//! definierte Defaults.

use glam::{Affine3A, Quat, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{DistancePath, Node};
use crate::shared::{
    cubic_bezier_point, look_rotation, polyline_length, segment_count, ADD_NODE_OFFSET_RADIUS,
    DEFAULT_STEP, MIN_STEP,
};

/// Ein offener oder geschlossener Kettenzug kubischer Bezier-Segmente.
///
/// Persistiert werden Node-Liste, `close_loop` und `step`; die abgeleiteten
/// Caches sind flüchtig und müssen nach dem Deserialisieren per
/// [`update_path`](Self::update_path) neu aufgebaut werden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<Node>,
    /// Verbindet den letzten mit dem ersten Node zu einer Schleife
    pub close_loop: bool,
    step: f32,
    #[serde(skip)]
    world_from_local: Affine3A,
    #[serde(skip)]
    curved_positions: Vec<Vec3>,
    #[serde(skip)]
    orientations: Vec<f32>,
    #[serde(skip)]
    path_distance: f32,
}

impl Default for Path {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl Path {
    /// Erstellt einen leeren Pfad mit der gegebenen Ziel-Schrittweite
    pub fn new(step: f32) -> Self {
        Self {
            nodes: Vec::new(),
            close_loop: false,
            step: step.max(MIN_STEP),
            world_from_local: Affine3A::IDENTITY,
            curved_positions: Vec::new(),
            orientations: Vec::new(),
            path_distance: 0.0,
        }
    }

    /// Alle Nodes in Traversierungs-Reihenfolge
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Anzahl der Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Mutabler Zugriff auf einen Node für die Editing-Schicht.
    /// Nach der Änderung muss [`update_path`](Self::update_path) laufen.
    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Ziel-Abstand zwischen zwei Kurven-Samples
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Setzt die Ziel-Schrittweite, geklemmt auf [`MIN_STEP`]
    pub fn set_step(&mut self, step: f32) {
        self.step = step.max(MIN_STEP);
    }

    /// Affine Abbildung vom lokalen Pfad-Raum in den Welt-Raum
    pub fn world_from_local(&self) -> Affine3A {
        self.world_from_local
    }

    /// Setzt die Welt-Transformation (vom Host-Objekt geliefert)
    pub fn set_world_from_local(&mut self, transform: Affine3A) {
        self.world_from_local = transform;
    }

    /// Die zuletzt aufgebauten Kurven-Samples (lokaler Raum)
    pub fn curved_positions(&self) -> &[Vec3] {
        &self.curved_positions
    }

    /// Die interpolierten Banking-Winkel, parallel zu den Samples
    pub fn orientations(&self) -> &[f32] {
        &self.orientations
    }

    /// Hängt einen Node an einer explizit gewählten Position an
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Hängt einen Node an: Position des letzten Nodes plus zufälliger
    /// planarer Offset (XZ-Einheitskreis × [`ADD_NODE_OFFSET_RADIUS`]).
    ///
    /// Reine Authoring-Bequemlichkeit, kein Determinismus-Vertrag.
    pub fn add_node(&mut self) {
        let mut rng = rand::rng();
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let radius = rng.random_range(0.0f32..1.0).sqrt() * ADD_NODE_OFFSET_RADIUS;
        let offset = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);

        let base = self.nodes.last().map_or(Vec3::ZERO, |n| n.local_pos);
        self.nodes.push(Node::new(base + offset));
    }

    /// Entfernt einen Node; ungültige Indizes werden weich abgewiesen
    pub fn remove_node(&mut self, index: usize) -> Option<Node> {
        if index >= self.nodes.len() {
            log::warn!("remove_node: Index {index} außerhalb des Bereichs");
            return None;
        }
        Some(self.nodes.remove(index))
    }

    /// Verschiebt einen Node auf eine Welt-Position und baut den Pfad neu.
    ///
    /// `move_tangent` verschiebt beide Handles um dasselbe Delta mit.
    pub fn adjust_node(&mut self, index: usize, new_world_pos: Vec3, move_tangent: bool) {
        if index >= self.nodes.len() {
            log::warn!("adjust_node: Index {index} außerhalb des Bereichs");
            return;
        }

        let new_local = self
            .world_from_local
            .inverse()
            .transform_point3(new_world_pos);

        let node = &mut self.nodes[index];
        if move_tangent {
            let offset = new_local - node.local_pos;
            node.left_handle += offset;
            node.right_handle += offset;
        }
        node.local_pos = new_local;

        self.update_path();
    }

    /// Baut die abgeleiteten Caches vollständig neu auf.
    ///
    /// Muss nach jeder Node-, Handle- oder `close_loop`-Änderung explizit
    /// aufgerufen werden. Der Tausch ist aus Sicht des Aufrufers atomar:
    /// entweder ersetzt er alle drei Caches oder (bei < 2 Nodes) leert sie.
    pub fn update_path(&mut self) {
        let (positions, orientations) = self.sample_curve();

        self.path_distance = if positions.is_empty() {
            0.0
        } else {
            let mut total = polyline_length(&positions);
            if self.close_loop {
                // Wrap-Kante vom letzten Sample zurück zu Sample 0
                total += positions[positions.len() - 1].distance(positions[0]);
            }
            total
        };
        self.curved_positions = positions;
        self.orientations = orientations;
    }

    /// Tastet alle Bezier-Segmente mit adaptiver Dichte ab.
    ///
    /// Rand-Politik gegen doppelte Punkte an geteilten Endpunkten:
    /// offener Pfad — das erste Segment emittiert beide Endpunkte,
    /// Folgesegmente starten bei j = 1; geschlossener Pfad — jedes Segment
    /// lässt seinen Endpunkt weg, der als j = 0 des Folgesegments (bzw. als
    /// Sample 0 bei der Wrap-Kante) wieder auftaucht.
    fn sample_curve(&self) -> (Vec<Vec3>, Vec<f32>) {
        let mut positions = Vec::new();
        let mut orientations = Vec::new();

        let n = self.nodes.len();
        if n < 2 {
            return (positions, orientations);
        }

        let pair_count = if self.close_loop { n } else { n - 1 };
        for i in 0..pair_count {
            let a = &self.nodes[i];
            let b = &self.nodes[(i + 1) % n];

            let (p0, p1, p2, p3) = (a.local_pos, a.right_handle, b.left_handle, b.local_pos);
            let segments = segment_count(p0, p1, p2, p3, self.step);

            let start = if self.close_loop || i == 0 { 0 } else { 1 };
            let end = if self.close_loop { segments - 1 } else { segments };

            for j in start..=end {
                let t = j as f32 / segments as f32;
                positions.push(cubic_bezier_point(p0, p1, p2, p3, t));
                orientations.push(a.orientation + (b.orientation - a.orientation) * t);
            }
        }

        (positions, orientations)
    }

    /// Faltet eine beliebige Distanz in (Sample-Index, Rest-Anteil).
    ///
    /// Negative Distanzen werden durch Addition einer vollen Periode in den
    /// positiven Bereich gefaltet; der berechnete Index wird gegen
    /// Rundungsfehler am oberen Rand geklemmt.
    fn precise_point(&self, distance: f32) -> (usize, f32) {
        let count = self.curved_positions.len();
        if count == 0 || self.path_distance <= f32::EPSILON {
            return (0, 0.0);
        }

        let folded = self.path_distance + (distance % self.path_distance);
        let normalized = (folded % self.path_distance) / self.path_distance;

        let index_float = normalized * count as f32;
        let index = (index_float as usize).min(count - 1);
        let fraction = (index_float - index as f32).min(1.0);
        (index, fraction)
    }

    /// Tangente am Sample der gegebenen Distanz, rückwärts gerichtet.
    ///
    /// Der Blick auf die zurückliegende Kante vermeidet degenerierte
    /// Richtungen bei Rest-Anteil ≈ 0 an Segmentgrenzen. Am offenen
    /// Pfad-Anfang wird stattdessen nach vorn auf Sample 1 geschaut —
    /// diese Asymmetrie ist Vertragsbestandteil.
    fn sample_direction(&self, distance: f32) -> Option<(Vec3, usize)> {
        let count = self.curved_positions.len();
        if count < 2 {
            return None;
        }

        let (index, _) = self.precise_point(distance);
        let prev = if index == 0 {
            if self.close_loop {
                count - 1
            } else {
                1
            }
        } else {
            index - 1
        };

        let direction = if !self.close_loop && index == 0 {
            self.curved_positions[prev] - self.curved_positions[index]
        } else {
            self.curved_positions[index] - self.curved_positions[prev]
        };
        Some((direction, index))
    }
}

impl DistancePath for Path {
    fn position_at_distance(&self, distance: f32, local: bool) -> Vec3 {
        let count = self.curved_positions.len();
        if count == 0 {
            return Vec3::ZERO;
        }

        let (index, mut fraction) = self.precise_point(distance);
        let is_last = index == count - 1;
        let next = if is_last {
            if self.close_loop {
                0
            } else {
                index
            }
        } else {
            index + 1
        };
        if is_last && !self.close_loop {
            // offenes Ende: keine Extrapolation über das letzte Sample hinaus
            fraction = 0.0;
        }

        let pos = self.curved_positions[index].lerp(self.curved_positions[next], fraction);
        if local {
            pos
        } else {
            self.world_from_local.transform_point3(pos)
        }
    }

    fn rotation_at_distance_with_up(&self, distance: f32, up: Vec3) -> Quat {
        match self.sample_direction(distance) {
            Some((direction, _)) => look_rotation(direction, up),
            None => Quat::IDENTITY,
        }
    }

    fn up_vector_at_distance(&self, distance: f32) -> Vec3 {
        let Some((direction, index)) = self.sample_direction(distance) else {
            return Vec3::ZERO;
        };
        let Some(axis) = direction.try_normalize() else {
            return Vec3::ZERO;
        };

        let orientation = self.orientations.get(index).copied().unwrap_or(0.0);
        Quat::from_axis_angle(axis, orientation.to_radians()) * Vec3::Y
    }

    fn is_path_ready(&self) -> bool {
        !self.curved_positions.is_empty()
    }

    fn path_distance(&self) -> f32 {
        self.path_distance
    }
}
