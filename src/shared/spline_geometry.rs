//! Reine Geometrie-Funktionen für kubische Bezier-Segmente.
//!
//! Layer-neutral: kann von `core::path` und `core::baked` importiert werden,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::{Mat3, Quat, Vec3};

/// Berechnet einen Punkt auf einem kubischen Bezier-Segment (t ∈ [0, 1]).
///
/// p0, p3: Endpunkte. p1, p2: Tangenten-Handles.
/// Die Kurve verläuft von p0 nach p3.
pub fn cubic_bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Adaptive Sample-Anzahl für ein Segment bei Ziel-Schrittweite `step`.
///
/// Mittelwert aus Kontrollpolygon-Länge und Sehnen-Länge, geteilt durch
/// `step`. Eng gekrümmte Segmente erhalten damit proportional mehr Samples
/// als flache. Minimum ist 1, damit `j / segment_count` nie degeneriert.
pub fn segment_count(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, step: f32) -> usize {
    let chord = (p3 - p0).length();
    let polygon = (p1 - p0).length() + (p2 - p1).length() + (p3 - p2).length();
    ((((polygon + chord) / 2.0) / step) as usize).max(1)
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Blickrotation: die lokale +Z-Achse zeigt entlang `forward`, `up` dient
/// als Stütz-Vektor für die Roll-Achse.
///
/// Degenerierte Eingaben (Null-Richtung) liefern die Identität; ein `up`
/// parallel zu `forward` fällt auf eine beliebige orthonormale Basis zurück.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(z) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let x = match up.cross(z).try_normalize() {
        Some(x) => x,
        None => z.any_orthonormal_vector(),
    };
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}
