//! Zentrale Konstanten für das Pfad-Sampling und die Authoring-Defaults.
//!
//! Die `const`-Werte sind Fallback/Default; zur Laufzeit änderbare Werte
//! (etwa `step`) liegen am `Path` selbst.

// ── Sampling ────────────────────────────────────────────────────────

/// Ziel-Abstand zwischen zwei Kurven-Samples (Welteinheiten).
pub const DEFAULT_STEP: f32 = 0.25;
/// Untere Schranke für `step`, verhindert entartete Sample-Anzahlen.
pub const MIN_STEP: f32 = 1e-3;

// ── Authoring ───────────────────────────────────────────────────────

/// Seitlicher Abstand der Default-Tangenten-Handles eines neuen Nodes.
pub const DEFAULT_HANDLE_OFFSET: f32 = 1.0;
/// Radius des zufälligen planaren Offsets beim Anhängen eines Nodes.
pub const ADD_NODE_OFFSET_RADIUS: f32 = 3.0;
