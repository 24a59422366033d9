//! Consensus pipeline benchmarks.
//!
//! Run with: cargo bench -p concord-consensus --bench consensus_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use concord_consensus::ConsensusEngine;
use concord_core::{ClusterRanking, ObjectId, RankItem};

/// Ranking over `0..n` in groups of `tie` consecutive objects.
fn chunked(n: ObjectId, tie: usize) -> ClusterRanking {
    let objects: Vec<ObjectId> = (0..n).collect();
    ClusterRanking::new(objects.chunks(tie).map(RankItem::from_members).collect())
}

/// Same objects, reversed in blocks of `block` so neighbouring blocks disagree.
fn block_reversed(n: ObjectId, block: usize) -> ClusterRanking {
    let mut objects: Vec<ObjectId> = (0..n).collect();
    for chunk in objects.chunks_mut(block) {
        chunk.reverse();
    }
    ClusterRanking::new(objects.into_iter().map(RankItem::Singleton).collect())
}

fn bench_pipeline(c: &mut Criterion) {
    let engine = ConsensusEngine::with_defaults();
    let mut group = c.benchmark_group("consensus");
    for n in [64, 256, 1024] {
        let a = chunked(n, 3);
        let b = block_reversed(n, 8);
        group.bench_with_input(BenchmarkId::new("run", n), &n, |bench, _| {
            bench.iter(|| engine.run(&a, &b).unwrap())
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let engine = ConsensusEngine::with_defaults();
    let pairs: Vec<(ClusterRanking, ClusterRanking)> =
        (0..32).map(|_| (chunked(256, 2), block_reversed(256, 5))).collect();
    c.bench_function("consensus/batch_32x256", |bench| {
        bench.iter(|| engine.run_batch(&pairs))
    });
}

criterion_group!(benches, bench_pipeline, bench_batch);
criterion_main!(benches);
