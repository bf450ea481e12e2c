// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use canopy_forest::{Forest, GraphSource};
use canopy_model::TreeModel;

/// Adjacency-list source shaped like a parsed file: a chain of headers, each
/// fanning out to records, with every record also referenced by the first
/// header so roughly half the edges lose the claim race.
struct SyntheticGraph {
    refs: Vec<Vec<usize>>,
}

impl SyntheticGraph {
    fn with_nodes(count: usize) -> Self {
        const FAN_OUT: usize = 8;
        let mut refs: Vec<Vec<usize>> = vec![Vec::new(); count];
        let headers = count / (FAN_OUT + 1) + 1;
        for node in headers..count {
            let header = node % headers;
            refs[header].push(node);
            refs[0].push(node);
        }
        // Chain the headers so everything is reachable from node 0.
        for header in 1..headers {
            refs[header - 1].push(header);
        }
        Self { refs }
    }
}

impl GraphSource for SyntheticGraph {
    type NodeId = usize;
    type Error = core::convert::Infallible;

    fn references(&self, node: usize) -> Result<Vec<usize>, Self::Error> {
        Ok(self.refs[node].clone())
    }

    fn kind(&self, _node: usize) -> &str {
        "Record"
    }

    fn name(&self, _node: usize) -> Option<&str> {
        None
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("forest/build");

    // Hypothesis: build is linear in reachable-node count; the duplicate
    // edges from header 0 are skipped in O(1) each once claimed.
    for len in [256usize, 1_024, 4_096, 16_384] {
        let graph = SyntheticGraph::with_nodes(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &graph, |b, graph| {
            b.iter(|| {
                let forest = Forest::build(graph, [0]).unwrap();
                black_box(forest);
            });
        });
    }

    group.finish();
}

fn bench_parent_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("model/parent");

    // Hypothesis: `parent` is O(1) via the claim-time row cache, so per-call
    // cost stays flat as sibling counts grow.
    for len in [1_024usize, 16_384] {
        let graph = SyntheticGraph::with_nodes(len);
        let model = TreeModel::new(&graph, [0]).unwrap();
        let mut indices = Vec::new();
        for row in 0..model.row_count(None) {
            let root = model.index(row, 0, None).unwrap();
            for child_row in 0..model.row_count(Some(root)) {
                indices.push(model.index(child_row, 0, Some(root)).unwrap());
            }
        }
        group.throughput(Throughput::Elements(indices.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &indices,
            |b, indices| {
                b.iter(|| {
                    for &idx in indices {
                        black_box(model.parent(idx));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_parent_lookup);
criterion_main!(benches);
