use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::graph::{DirectedGraph, Weight};
use crate::GraphError;

/// Directed, labeled multigraph.
///
/// Every ordered pair of nodes can be connected by any number of edges, as long as their labels
/// are different from each other. Nodes must be added before any edge can reference them.
///
/// Read accessors return owned snapshots: mutating them never affects the graph.
#[derive(Debug, Clone)]
pub struct LabeledMultigraph<N, E> {
    /// For each node (key) the map of its children to the labels of the edges leading to them.
    links: FxHashMap<N, FxHashMap<N, FxHashSet<E>>>,
}

impl<N, E> Default for LabeledMultigraph<N, E> {
    fn default() -> Self {
        Self {
            links: FxHashMap::default(),
        }
    }
}

impl<N: Eq + Hash, E: Eq + Hash> PartialEq for LabeledMultigraph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.links == other.links
    }
}

impl<N: Eq + Hash, E: Eq + Hash> Eq for LabeledMultigraph<N, E> {}

impl<N, E> LabeledMultigraph<N, E>
where
    N: Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    /// Creates a graph without nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph that contains the given nodes and no edges.
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let links = nodes
            .into_iter()
            .map(|node| (node, FxHashMap::default()))
            .collect();
        Self { links }
    }

    /// Adds a new node to the graph.
    /// Returns false if the node was already part of the graph.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.links.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(FxHashMap::default());
                true
            }
        }
    }

    /// Removes the node and every edge entering into or exiting from it.
    /// Returns false if the node was not part of the graph.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if self.links.remove(node).is_none() {
            return false;
        }

        for children in self.links.values_mut() {
            children.remove(node);
        }

        debug_assert!(self.is_consistent());
        true
    }

    /// Adds a directed edge labeled `label` from `src` to `dst`.
    /// Returns false if the same edge was already part of the graph.
    ///
    /// Fails if either endpoint is not a node of the graph: nodes are never inserted implicitly.
    pub fn add_edge(&mut self, src: N, dst: N, label: E) -> Result<bool, GraphError<N>> {
        self.ensure_node(&src)?;
        self.ensure_node(&dst)?;

        // both endpoints are nodes, the entry of src is never vacant
        let inserted = self
            .links
            .entry(src)
            .or_default()
            .entry(dst)
            .or_default()
            .insert(label);
        debug_assert!(self.is_consistent());
        Ok(inserted)
    }

    /// Removes the directed edge labeled `label` from `src` to `dst`.
    /// Returns false if no such edge was part of the graph.
    ///
    /// Fails if either endpoint is not a node of the graph.
    pub fn remove_edge(&mut self, src: &N, dst: &N, label: &E) -> Result<bool, GraphError<N>> {
        self.ensure_node(src)?;
        self.ensure_node(dst)?;

        let children = self.links.entry(src.clone()).or_default();
        let Entry::Occupied(mut labels) = children.entry(dst.clone()) else {
            return Ok(false);
        };

        let removed = labels.get_mut().remove(label);
        if labels.get().is_empty() {
            // the last edge between the two nodes is gone
            labels.remove();
        }

        debug_assert!(self.is_consistent());
        Ok(removed)
    }

    /// Gets a snapshot of all the nodes of the graph.
    pub fn nodes(&self) -> FxHashSet<N> {
        self.links.keys().cloned().collect()
    }

    /// Gets a snapshot of the children of the node, each one mapped to the labels of the edges
    /// leading to it.
    /// Returns None if the node doesn't belong to the graph.
    pub fn children_of(&self, node: &N) -> Option<FxHashMap<N, FxHashSet<E>>> {
        self.links.get(node).cloned()
    }

    /// Gets a snapshot of the labels of all the edges from `src` to `dst`.
    /// The set is empty if the nodes are not connected or if either doesn't belong to the graph.
    pub fn labels_between(&self, src: &N, dst: &N) -> FxHashSet<E> {
        self.links
            .get(src)
            .and_then(|children| children.get(dst))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns true only if the node belongs to the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.links.contains_key(node)
    }

    /// Returns true only if both nodes belong to the graph and there is at least one edge from
    /// `src` to `dst`.
    pub fn has_edge(&self, src: &N, dst: &N) -> bool {
        self.contains(dst)
            && self
                .links
                .get(src)
                .is_some_and(|children| children.contains_key(dst))
    }

    pub fn node_count(&self) -> usize {
        self.links.len()
    }

    /// Gets the total number of edges, where each parallel edge counts once.
    pub fn edge_count(&self) -> usize {
        self.links
            .values()
            .flat_map(FxHashMap::values)
            .map(FxHashSet::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn ensure_node(&self, node: &N) -> Result<(), GraphError<N>> {
        if self.contains(node) {
            Ok(())
        } else {
            trace!("Rejecting edge, node is not part of the graph");
            Err(GraphError::NoSuchNode(node.clone()))
        }
    }

    /// Every child is also a node of the graph, and no pair of nodes is linked by an empty set of
    /// labels.
    fn is_consistent(&self) -> bool {
        self.links.values().all(|children| {
            children
                .iter()
                .all(|(child, labels)| !labels.is_empty() && self.links.contains_key(child))
        })
    }
}

impl<N, E> LabeledMultigraph<N, E>
where
    N: Clone + Eq + Hash,
    E: Clone + Eq + Hash + Ord,
{
    /// Gets the lowest label among the parallel edges from `src` to `dst`.
    /// Returns None if the nodes are not connected.
    pub fn min_label_between(&self, src: &N, dst: &N) -> Option<E> {
        self.links.get(src)?.get(dst)?.iter().min().cloned()
    }
}

impl<N, E> FromIterator<N> for LabeledMultigraph<N, E>
where
    N: Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self::with_nodes(nodes)
    }
}

impl<N, E> DirectedGraph for LabeledMultigraph<N, E>
where
    N: Debug + Clone + Eq + Hash,
    E: Weight + Hash,
{
    type VertexId = N;
    type Weight = E;

    fn contains_vertex(&self, vertex: &N) -> bool {
        self.contains(vertex)
    }

    fn vertex_exiting_edges(&self, vertex: &N) -> impl Iterator<Item = (&N, E)> {
        self.links
            .get(vertex)
            .into_iter()
            .flatten()
            .flat_map(|(child, labels)| labels.iter().map(move |&label| (child, label)))
    }
}
