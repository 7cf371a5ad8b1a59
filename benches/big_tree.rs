//! Benchmarks on trees large enough to expose the cost of sequence shifts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use treevec::{ChildSlot, Tree};

/// Builds a tree with `width` children per node down to the given depth.
fn build_uniform(width: usize, depth: usize) -> Tree<u64> {
    let mut tree = Tree::with_root(0);
    let mut counter = 0;
    let mut frontier = vec![tree.root().expect("the tree was created with a root")];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * width);
        for parent in frontier {
            for _ in 0..width {
                counter += 1;
                next.push(tree.add(counter, Some(parent)).expect("the parent is alive"));
            }
        }
        frontier = next;
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &(width, depth) in &[(10, 3), (4, 6)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("w{width}-d{depth}")),
            &(width, depth),
            |b, &(width, depth)| b.iter(|| build_uniform(black_box(width), black_box(depth))),
        );
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let tree = build_uniform(10, 3);
    let root = tree.root().expect("the tree has a root");

    c.bench_function("iter/pre-order", |b| {
        b.iter(|| {
            let sum: u64 = tree.iter().map(|node| *node.value()).sum();
            black_box(sum)
        })
    });
    c.bench_function("iter/breadth-first", |b| {
        b.iter(|| {
            let sum: u64 = tree
                .breadth_first(root)
                .expect("the root is alive")
                .map(|node| *node.value())
                .sum();
            black_box(sum)
        })
    });
    c.bench_function("parent/deepest", |b| {
        let deepest = tree
            .iter()
            .max_by_key(|node| node.depth())
            .expect("the tree is not empty")
            .id();
        b.iter(|| black_box(tree.ancestors(deepest).expect("the node is alive").count()))
    });
}

fn bench_move(c: &mut Criterion) {
    c.bench_function("move/subtree-to-back", |b| {
        b.iter_batched(
            || {
                let tree = build_uniform(10, 3);
                let root = tree.root().expect("the tree has a root");
                let first = tree
                    .children(root)
                    .expect("the root is alive")
                    .next()
                    .expect("the root has children")
                    .id();
                let last = tree
                    .children(root)
                    .expect("the root is alive")
                    .last()
                    .expect("the root has children")
                    .id();
                (tree, first, last)
            },
            |(mut tree, first, last)| {
                tree.move_to(first, last, ChildSlot::Append)
                    .expect("both handles are alive");
                tree
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_build, bench_traverse, bench_move);
criterion_main!(benches);
