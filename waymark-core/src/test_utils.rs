//! Shared test utilities for `waymark-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::Rng;
use rand::rngs::SmallRng;
use waymark_test_support::proptest_profile::ProptestRunProfile;

use crate::graph::{Graph, Weight};

/// Builds a standard proptest configuration from the shared run profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `WAYMARK_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Largest vertex count the brute-force oracles are asked to enumerate.
pub(crate) const ORACLE_MAX_VERTICES: usize = 6;

/// Generates graphs small enough for exhaustive oracles.
///
/// Vertices `0..n` are registered up front so isolated vertices occur.
/// Self-loops and reversed duplicate pairs are allowed.
pub(crate) fn small_graph_strategy() -> impl Strategy<Value = Graph<usize>> {
    (1..=ORACLE_MAX_VERTICES)
        .prop_flat_map(|vertex_count| {
            let edge = (0..vertex_count, 0..vertex_count, 0_u64..20);
            (
                Just(vertex_count),
                proptest::collection::vec(edge, 0..=12),
            )
        })
        .prop_map(|(vertex_count, edges)| {
            let mut graph = Graph::new();
            for vertex in 0..vertex_count {
                graph.add_vertex(vertex);
            }
            graph.extend(edges);
            graph
        })
}

/// Topology families for the larger generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, test_strategy::Arbitrary)]
pub(crate) enum GraphShape {
    /// A random spanning path plus a few chords.
    Sparse,
    /// Most vertex pairs joined.
    Dense,
    /// Weights drawn from a pool of one to three values.
    ManyIdentical,
    /// Two to five components with no edges between them.
    Disconnected,
}

/// A generated graph together with the family it came from.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    pub graph: Graph<usize>,
    pub shape: GraphShape,
}

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 48;

/// Generates fixtures across every [`GraphShape`].
pub(crate) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = <SmallRng as rand::SeedableRng>::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(crate) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let graph = match shape {
        GraphShape::Sparse => sparse(rng),
        GraphShape::Dense => pairwise(rng, 0.8, |r| r.gen_range(0..100)),
        GraphShape::ManyIdentical => {
            let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            pairwise(rng, 0.4, move |r| pool[r.gen_range(0..pool.len())])
        }
        GraphShape::Disconnected => disconnected(rng),
    };
    GraphFixture { graph, shape }
}

fn with_vertices(count: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for vertex in 0..count {
        graph.add_vertex(vertex);
    }
    graph
}

fn sparse(rng: &mut SmallRng) -> Graph<usize> {
    let count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut graph = with_vertices(count);
    for vertex in 1..count {
        let parent = rng.gen_range(0..vertex);
        graph.add_edge(parent, vertex, rng.gen_range(0..100));
    }
    for _ in 0..count / 2 {
        let source = rng.gen_range(0..count);
        let target = rng.gen_range(0..count);
        graph.add_edge(source, target, rng.gen_range(0..100));
    }
    graph
}

fn pairwise(
    rng: &mut SmallRng,
    probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> Graph<usize> {
    let count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES / 2);
    let mut graph = with_vertices(count);
    for source in 0..count {
        for target in (source + 1)..count {
            if rng.gen_bool(probability) {
                let value = weight(rng);
                graph.add_edge(source, target, value);
            }
        }
    }
    graph
}

fn disconnected(rng: &mut SmallRng) -> Graph<usize> {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(2..=10))
        .collect();
    let mut graph = with_vertices(sizes.iter().sum());
    let mut offset = 0;
    for size in sizes {
        for vertex in (offset + 1)..(offset + size) {
            let parent = rng.gen_range(offset..vertex);
            graph.add_edge(parent, vertex, rng.gen_range(0..50));
        }
        for _ in 0..size {
            let source = rng.gen_range(offset..offset + size);
            let target = rng.gen_range(offset..offset + size);
            graph.add_edge(source, target, rng.gen_range(0..50));
        }
        offset += size;
    }
    graph
}

/// Counts connected components of `graph`, treating edges as undirected.
pub(crate) fn component_count(graph: &Graph<usize>) -> usize {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut components = graph.vertex_count();
    for edge in graph.edges() {
        let left = find_root(&mut parent, edge.source().index());
        let right = find_root(&mut parent, edge.target().index());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Path-halving find for test-side union-find checks.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
