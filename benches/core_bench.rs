use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use path_tools::{BakedPath, DistancePath, Node, Path};
use std::hint::black_box;

/// Baut einen geschlossenen Kreis-Pfad mit `node_count` Nodes.
fn build_circle_path(node_count: usize) -> Path {
    let mut path = Path::new(0.25);
    let radius = node_count as f32 * 2.0;

    for i in 0..node_count {
        let angle = i as f32 / node_count as f32 * std::f32::consts::TAU;
        let pos = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
        let mut node = Node::new(pos);
        node.orientation = (i % 4) as f32 * 10.0;
        path.push_node(node);
    }

    path.close_loop = true;
    path.update_path();
    path
}

fn build_query_distances(total: f32, count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| (i as f32 * 0.37 - 3.0) % (total * 2.0))
        .collect()
}

fn bench_update_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_path");

    for &node_count in &[16usize, 128usize] {
        let path = build_circle_path(node_count);

        group.bench_with_input(
            BenchmarkId::new("rebuild", node_count),
            &path,
            |b, path| {
                b.iter(|| {
                    let mut scratch = path.clone();
                    scratch.update_path();
                    black_box(scratch.path_distance())
                })
            },
        );
    }

    group.finish();
}

fn bench_distance_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_queries");

    for &node_count in &[16usize, 128usize] {
        let path = build_circle_path(node_count);
        let baked = BakedPath::bake(&path).expect("Bake erwartet");
        let distances = build_query_distances(path.path_distance(), 1024);

        group.bench_with_input(BenchmarkId::new("live_batch", node_count), &path, |b, p| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for &d in &distances {
                    acc += p.position_at_distance(black_box(d), true);
                    acc += p.up_vector_at_distance(black_box(d));
                }
                black_box(acc)
            })
        });

        group.bench_with_input(
            BenchmarkId::new("baked_batch", node_count),
            &baked,
            |b, baked| {
                b.iter(|| {
                    let mut acc = Vec3::ZERO;
                    for &d in &distances {
                        acc += baked.position_at_distance(black_box(d), true);
                        acc += baked.up_vector_at_distance(black_box(d));
                    }
                    black_box(acc)
                })
            },
        );
    }

    group.finish();
}

fn bench_bake(c: &mut Criterion) {
    let path = build_circle_path(32);

    c.bench_function("bake_closed_circle_32", |b| {
        b.iter(|| {
            let baked = BakedPath::bake(black_box(&path)).expect("Bake erwartet");
            black_box(baked.path_distance())
        })
    });
}

criterion_group!(
    benches,
    bench_update_path,
    bench_distance_queries,
    bench_bake
);
criterion_main!(benches);
