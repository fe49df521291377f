use std::cmp::Ordering;
use std::rc::Rc;

/// Sequence of vertices from the origin of the search to a frontier vertex, together with the
/// cost of reaching the frontier vertex by following the sequence.
///
/// Paths are immutable: extending a path creates a new one that shares every vertex of the
/// original, which is left untouched.
#[derive(Debug, Clone)]
pub struct Path<V, W> {
    pub cost: W,
    head: Rc<Segment<V>>,
    len: usize,
}

#[derive(Debug)]
struct Segment<V> {
    vertex: V,
    previous: Option<Rc<Segment<V>>>,
}

impl<V> Drop for Segment<V> {
    fn drop(&mut self) {
        // unlink iteratively, long chains would otherwise overflow the stack
        let mut previous = self.previous.take();
        while let Some(segment) = previous {
            match Rc::try_unwrap(segment) {
                Ok(mut segment) => previous = segment.previous.take(),
                Err(_) => break,
            }
        }
    }
}

impl<V: Clone, W: Copy> Path<V, W> {
    /// Creates the path that only contains the origin.
    pub fn new(origin: V, cost: W) -> Self {
        Self {
            cost,
            head: Rc::new(Segment {
                vertex: origin,
                previous: None,
            }),
            len: 1,
        }
    }

    /// Gets the frontier vertex of the path.
    pub fn last(&self) -> &V {
        &self.head.vertex
    }

    /// Creates a new path that follows this path and then moves to the given vertex.
    pub fn extend(&self, vertex: V, cost: W) -> Self {
        Self {
            cost,
            head: Rc::new(Segment {
                vertex,
                previous: Some(Rc::clone(&self.head)),
            }),
            len: self.len + 1,
        }
    }

    /// Unpacks the path from the origin to the frontier vertex.
    pub fn vertices(&self) -> Vec<V> {
        let mut vertices = Vec::with_capacity(self.len);
        let mut next = Some(&self.head);

        while let Some(segment) = next {
            vertices.push(segment.vertex.clone());
            next = segment.previous.as_ref();
        }

        vertices.reverse();
        vertices
    }
}

#[derive(Debug, Clone)]
pub struct HeapElement<V, W> {
    /// Current best known path from the origin to its frontier vertex.
    pub path: Path<V, W>,
    /// Insertion order into the frontier.
    pub sequence: usize,
}

impl<V, W: Ord> PartialEq for HeapElement<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Ord> Eq for HeapElement<V, W> {}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<V, W: Ord> Ord for HeapElement<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .path
            .cost
            .cmp(&self.path.cost)
            // vertices are not ordered, equal costs are popped in insertion order
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V, W: Ord> PartialOrd for HeapElement<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
