//! Eindimensionale Keyframe-Kurve mit periodischer Fortsetzung.
//!
//! Baustein des Bake-Artefakts: jeder Kanal (Positions-, Rotations- und
//! Up-Vektor-Komponenten) wird als eigene Kurve über der normalisierten
//! Distanz t ∈ [0, 1] abgelegt.

use serde::{Deserialize, Serialize};

/// Ein einzelner Stützpunkt einer [`PeriodicCurve`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Abtastzeitpunkt (normalisierte Distanz)
    pub time: f32,
    /// Abgetasteter Wert
    pub value: f32,
}

/// Nach `time` sortierte Keyframe-Liste mit linearer Interpolation.
///
/// Auswertung außerhalb des belegten Zeitbereichs wickelt periodisch um
/// (Wrap), statt zu klemmen — geschlossene Pfade bleiben damit auch bei
/// negativen oder übergroßen t nahtlos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodicCurve {
    keys: Vec<Keyframe>,
}

impl PeriodicCurve {
    /// Erstellt eine leere Kurve
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Keyframe sortiert nach `time` ein
    pub fn add_key(&mut self, time: f32, value: f32) {
        let at = self.keys.partition_point(|k| k.time <= time);
        self.keys.insert(at, Keyframe { time, value });
    }

    /// Anzahl der Keyframes
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `true` wenn die Kurve keine Keyframes enthält
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Wertet die Kurve bei `t` aus.
    ///
    /// Leere Kurve liefert 0, eine Ein-Key-Kurve ihren konstanten Wert.
    /// t außerhalb des Key-Bereichs wird periodisch in ihn zurückgefaltet.
    pub fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };

        let span = last.time - first.time;
        if span <= f32::EPSILON {
            return first.value;
        }

        let t = if t < first.time || t > last.time {
            first.time + (t - first.time).rem_euclid(span)
        } else {
            t
        };

        // Erster Key mit time > t; t liegt zwischen hi-1 und hi
        let hi = self.keys.partition_point(|k| k.time <= t);
        if hi == 0 {
            return first.value;
        }
        if hi >= self.keys.len() {
            return last.value;
        }

        let a = self.keys[hi - 1];
        let b = self.keys[hi];
        let seg = b.time - a.time;
        if seg <= f32::EPSILON {
            return a.value;
        }

        let frac = (t - a.time) / seg;
        a.value + (b.value - a.value) * frac
    }
}
