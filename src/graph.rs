use std::fmt::Debug;
use std::hash::Hash;

use crate::Length;

/// Edge label that can be accumulated into the cost of a path.
/// Weights must be non-negative and totally ordered.
pub trait Weight: Debug + Copy + Ord {
    /// Cost of the empty path.
    const ZERO: Self;
    /// Upper bound of any reachable cost.
    const MAX: Self;

    /// Adds two weights, clamping the result to `MAX`.
    fn saturating_add(self, other: Self) -> Self;
}

impl Weight for Length {
    const ZERO: Self = Length::ZERO;
    const MAX: Self = Length::MAX;

    fn saturating_add(self, other: Self) -> Self {
        (self + other).min(Self::MAX)
    }
}

macro_rules! impl_integer_weight {
    ($($integer:ty),*) => {
        $(
            impl Weight for $integer {
                const ZERO: Self = 0;
                const MAX: Self = <$integer>::MAX;

                fn saturating_add(self, other: Self) -> Self {
                    <$integer>::saturating_add(self, other)
                }
            }
        )*
    };
}

impl_integer_weight!(u16, u32, u64, usize);

/// Directed multigraph.
/// Exposes the read-only behavior the shortest path search runs on: any pair of vertices may be
/// connected by multiple parallel edges, each one carrying its own weight.
pub trait DirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Clone + Eq + Hash;
    /// Weight of a directed edge.
    type Weight: Weight;

    /// Returns true only if the vertex belongs to the graph.
    fn contains_vertex(&self, vertex: &Self::VertexId) -> bool;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the end vertex and the edge weight, parallel edges are returned once
    /// per weight.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: &Self::VertexId,
    ) -> impl Iterator<Item = (&Self::VertexId, Self::Weight)>;

    /// Gets the number of outgoing edges from the given vertex (parallel edges included).
    fn vertex_out_degree(&self, vertex: &Self::VertexId) -> usize {
        self.vertex_exiting_edges(vertex).count()
    }
}

pub mod dijkstra;
pub mod multigraph;
