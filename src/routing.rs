use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::DirectedGraph;
use crate::graph::Weight;
use crate::graph::dijkstra::{HeapElement, Path};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig<W> {
    /// Paths costing more than this are never expanded.
    pub max_cost: W,
    /// Maximum number of vertices settled before giving up the search.
    pub max_settled: usize,
}

impl<W: Weight> Default for ShortestPathConfig<W> {
    fn default() -> Self {
        Self {
            max_cost: W::MAX,
            max_settled: usize::MAX,
        }
    }
}

/// Shortest path found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<V, W> {
    /// Total cost of the path, the sum of the cheapest edge between each pair of consecutive
    /// vertices.
    pub cost: W,
    /// Vertices to traverse in order, the origin is excluded and the destination is included.
    /// Empty if origin and destination are the same vertex.
    pub vertices: Vec<V>,
}

/// Computes the shortest path between two vertices of the graph.
///
/// Returns None if either vertex doesn't belong to the graph or if the destination cannot be
/// reached from the origin.
///
/// When multiple paths share the minimum cost any of them can be returned.
pub fn shortest_path<G: DirectedGraph>(
    graph: &G,
    origin: &G::VertexId,
    destination: &G::VertexId,
) -> Option<ShortestPath<G::VertexId, G::Weight>> {
    shortest_path_with(&ShortestPathConfig::default(), graph, origin, destination)
}

/// Computes the shortest path between two vertices of the graph, giving up once the limits of
/// the configuration are exceeded.
///
/// Parallel edges between two vertices are collapsed into the cheapest one before relaxing the
/// successor. The frontier doesn't support decrease-key: a vertex can be pushed multiple times
/// and stale entries are dropped when popped after the vertex was finalized.
pub fn shortest_path_with<G: DirectedGraph>(
    config: &ShortestPathConfig<G::Weight>,
    graph: &G,
    origin: &G::VertexId,
    destination: &G::VertexId,
) -> Option<ShortestPath<G::VertexId, G::Weight>> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    if !graph.contains_vertex(origin) || !graph.contains_vertex(destination) {
        debug!("Cannot find {origin:?} or {destination:?} in graph");
        return None;
    }

    // vertices whose shortest distance from the origin is known
    let mut finalized: FxHashSet<G::VertexId> = FxHashSet::default();

    // priority queue of the paths that reach the frontier of the search
    let mut sequence = 0;
    let mut frontier = BinaryHeap::from([HeapElement {
        path: Path::new(origin.clone(), <G::Weight as Weight>::ZERO),
        sequence,
    }]);

    while let Some(HeapElement { path, .. }) = frontier.pop() {
        let vertex = path.last();

        if vertex == destination {
            // skip the origin
            let vertices = path.vertices().into_iter().skip(1).collect();
            debug!("Found shortest path with cost {:?}", path.cost);

            return Some(ShortestPath {
                cost: path.cost,
                vertices,
            });
        }

        if finalized.contains(vertex) {
            // a cheaper path to this vertex was already expanded
            continue;
        }

        if finalized.len() >= config.max_settled {
            debug!("Giving up after settling {} vertices", finalized.len());
            return None;
        }

        trace!("Settling {vertex:?} at {:?}", path.cost);

        // cheapest edge to each successor that is not final yet
        let mut successors: FxHashMap<&G::VertexId, G::Weight> = FxHashMap::default();
        for (successor, weight) in graph.vertex_exiting_edges(vertex) {
            if finalized.contains(successor) {
                continue;
            }

            successors
                .entry(successor)
                .and_modify(|cheapest| *cheapest = weight.min(*cheapest))
                .or_insert(weight);
        }

        for (successor, weight) in successors {
            let cost = path.cost.saturating_add(weight);
            if cost > config.max_cost {
                continue;
            }

            sequence += 1;
            frontier.push(HeapElement {
                path: path.extend(successor.clone(), cost),
                sequence,
            });
        }

        finalized.insert(vertex.clone());
    }

    debug!("Cannot find path {origin:?} -> {destination:?}");
    None
}
