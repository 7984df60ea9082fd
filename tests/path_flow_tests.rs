//! Integrationstests über die öffentliche API:
//! - kompletter Authoring-Ablauf (Nodes anlegen, verschieben, neu aufbauen)
//! - Persistenz-Round-Trip von Pfad und Bake-Artefakt
//! - Austauschbarkeit von Live-Pfad und Bake-Artefakt hinter `PathSource`

use approx::assert_relative_eq;
use glam::{Affine3A, Vec3};
use path_tools::{BakedPath, DistancePath, Node, Path, PathSource};

fn assert_vec3_eq(a: Vec3, b: Vec3, epsilon: f32) {
    assert_relative_eq!(a.x, b.x, epsilon = epsilon);
    assert_relative_eq!(a.y, b.y, epsilon = epsilon);
    assert_relative_eq!(a.z, b.z, epsilon = epsilon);
}

/// Erstellt einen geschlossenen Dreiecks-Pfad mit leichtem Banking.
fn triangle_loop() -> Path {
    let mut path = Path::new(0.25);
    path.push_node(Node::new(Vec3::ZERO));
    path.push_node(Node::new(Vec3::new(10.0, 0.0, 0.0)));
    path.push_node(Node::new(Vec3::new(5.0, 0.0, 8.66)));
    for i in 0..path.node_count() {
        path.node_mut(i).expect("Node erwartet").orientation = 15.0;
    }
    path.close_loop = true;
    path.update_path();
    path
}

// ─── Authoring-Ablauf ───────────────────────────────────────────────────────

#[test]
fn test_authoring_flow_from_empty_to_queryable() {
    let mut path = Path::default();

    // Abfragen vor jedem Aufbau: definierte Defaults, kein Panic
    assert!(!path.is_path_ready());
    assert_eq!(path.position_at_distance(1.0, true), Vec3::ZERO);

    path.add_node();
    path.add_node();
    path.add_node();
    assert_eq!(path.node_count(), 3);

    // add_node lässt die Caches bewusst unangetastet
    assert!(!path.is_path_ready());

    path.update_path();
    assert!(path.is_path_ready());
    assert!(path.path_distance() > 0.0);

    // Verschieben baut implizit neu auf
    path.adjust_node(2, Vec3::new(30.0, 0.0, 0.0), true);
    assert!(path.path_distance() >= 20.0);
}

#[test]
fn test_remove_node_down_to_degenerate() {
    let mut path = triangle_loop();

    path.remove_node(2).expect("Node erwartet");
    path.remove_node(1).expect("Node erwartet");
    path.update_path();

    assert!(!path.is_path_ready());
    assert_eq!(path.path_distance(), 0.0);
    assert_eq!(path.position_at_distance(2.0, true), Vec3::ZERO);
}

// ─── Persistenz ─────────────────────────────────────────────────────────────

#[test]
fn test_path_serde_round_trip_requires_rebuild() {
    let path = triangle_loop();

    let json = serde_json::to_string(&path).expect("Serialisierung erwartet");
    let mut restored: Path = serde_json::from_str(&json).expect("Deserialisierung erwartet");

    // Persistiert sind Nodes, close_loop und step — die Caches nicht
    assert_eq!(restored.node_count(), path.node_count());
    assert!(restored.close_loop);
    assert_relative_eq!(restored.step(), path.step(), epsilon = 1e-6);
    assert!(!restored.is_path_ready());

    restored.update_path();
    assert_relative_eq!(
        restored.path_distance(),
        path.path_distance(),
        epsilon = 1e-3
    );
    assert_vec3_eq(
        restored.position_at_distance(4.0, true),
        path.position_at_distance(4.0, true),
        1e-3,
    );
}

#[test]
fn test_baked_serde_round_trip_is_self_contained() {
    let path = triangle_loop();
    let baked = BakedPath::bake(&path).expect("Bake erwartet");

    let json = serde_json::to_string(&baked).expect("Serialisierung erwartet");
    let restored: BakedPath = serde_json::from_str(&json).expect("Deserialisierung erwartet");

    // Sofort abfragbar, ohne Quell-Pfad und ohne Rebuild
    assert!(restored.is_path_ready());
    assert_relative_eq!(restored.path_distance(), baked.path_distance(), epsilon = 1e-5);
    assert_vec3_eq(
        restored.position_at_distance(3.0, true),
        baked.position_at_distance(3.0, true),
        1e-5,
    );
    assert_vec3_eq(
        restored.up_vector_at_distance(3.0),
        baked.up_vector_at_distance(3.0),
        1e-5,
    );
}

// ─── PathSource ─────────────────────────────────────────────────────────────

#[test]
fn test_path_source_variants_are_interchangeable() {
    let path = triangle_loop();
    let baked = BakedPath::bake(&path).expect("Bake erwartet");

    let live = PathSource::Live(path);
    let frozen = PathSource::Baked(baked);

    // Ein Follower, der nur den Vertrag kennt, sieht dieselbe Bahn
    for source in [&live, &frozen] {
        assert!(source.is_path_ready());
        assert!(source.path_distance() > 0.0);
    }

    let mut distance = 0.0;
    while distance < live.path_distance() {
        assert_vec3_eq(
            live.position_at_distance(distance, true),
            frozen.position_at_distance(distance, true),
            0.02,
        );
        distance += 0.25;
    }
}

#[test]
fn test_world_transform_applies_to_both_variants() {
    let mut path = triangle_loop();
    path.set_world_from_local(Affine3A::from_translation(Vec3::new(100.0, 0.0, 0.0)));
    path.update_path();

    let baked = BakedPath::bake(&path).expect("Bake erwartet");

    let live_world = path.position_at_distance(0.0, false);
    let baked_world = baked.position_at_distance(0.0, false);
    assert_vec3_eq(live_world, baked_world, 1e-3);
    assert_relative_eq!(live_world.x, 100.0, epsilon = 1e-3);

    // Lokal bleibt die Bahn unverschoben
    assert_vec3_eq(path.position_at_distance(0.0, true), Vec3::ZERO, 1e-3);
}
