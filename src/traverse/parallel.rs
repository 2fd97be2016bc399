use std::sync::Mutex;
use std::thread;

use tracing::{debug, trace};

use crate::graph::{AdjacencyGraph, GraphError, VertexId};
use crate::sets::frontier::SharedFrontier;
use crate::sets::visited::{BitmapSet, SharedVisitorSet, VisitorSet};

use super::fork_join::fork_join;
use super::sequential::descend;

/// Worker count used by [`parallel_dfs`] and [`parallel_bfs`]: one worker
/// per available core, or a single worker if that cannot be determined.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|threads| threads.get())
        .unwrap_or(1)
}

/// Parallel depth-first traversal from `start` with the default worker
/// count. See [`parallel_dfs_with`].
pub fn parallel_dfs(
    graph: &AdjacencyGraph,
    start: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    parallel_dfs_with(graph, start, default_workers())
}

/// Parallel depth-first traversal from `start` using up to `workers`
/// threads.
///
/// Two phases. The invoking thread first marks and emits `start` on its
/// own, before any worker exists. Then the start vertex's neighbor list is
/// fanned out across the workers, and each worker runs its assigned
/// neighbor through a single global critical section: check the visited
/// flag, and if the vertex is still unclaimed, mark it and run the full
/// sequential recursive descent into its subtree while still holding the
/// lock. Serializing the whole check→mark→descend sequence is what keeps
/// two workers from both observing "unvisited" and both emitting the same
/// subtree; the price is that only the fan-out over the root's neighbors
/// contends, and whichever worker wins a subtree walks it alone.
///
/// The visitation order is scheduling-dependent, but the visited *set*
/// equals the sequential traversal's set on every run.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range; no
/// state is touched in that case.
pub fn parallel_dfs_with(
    graph: &AdjacencyGraph,
    start: VertexId,
    workers: usize,
) -> Result<Vec<VertexId>, GraphError> {
    graph.validate_start(start)?;

    // the invoking thread owns this step alone, so no lock is held yet
    let mut visited = BitmapSet::new(graph.vertex_count());
    let mut order = Vec::new();
    visited.set(start);
    trace!(vertex = start, "visited");
    order.push(start);

    let state = Mutex::new((visited, order));
    let roots = graph.neighbors(start);

    fork_join(workers, roots.len(), |index| {
        let root = roots[index];

        let mut guard = state.lock().unwrap();
        let (visited, order) = &mut *guard;
        if !visited.get(root) {
            // a self-loop lands here too: start is already marked, so it
            // falls through without descending
            descend(graph, root, visited, order);
        }
    });

    let (_, order) = state.into_inner().unwrap();
    debug!(visited = order.len(), workers, "parallel DFS complete");
    Ok(order)
}

/// Parallel breadth-first traversal from `start` with the default worker
/// count. See [`parallel_bfs_with`].
pub fn parallel_bfs(
    graph: &AdjacencyGraph,
    start: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    parallel_bfs_with(graph, start, default_workers())
}

/// Parallel breadth-first traversal from `start` using up to `workers`
/// threads for neighbor expansion.
///
/// The outer loop runs on the invoking thread and drains the shared
/// frontier. Each iteration touches the shared state through three
/// independent critical sections, each O(1):
///
/// 1. dequeue the front vertex;
/// 2. test-and-set its visited flag — a vertex that was already visited is
///    a stale duplicate and the iteration is abandoned without emission or
///    expansion;
/// 3. for each neighbor (fanned out across the workers), push it onto the
///    frontier if it is unvisited at push time.
///
/// The push-side check does not mark, so concurrent pushers may enqueue
/// the same neighbor more than once; step 2 is the only authority on
/// duplicates. Correctness rests on the mark being atomic and checked
/// before emission, never on the queue being duplicate-free.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range; no
/// state is touched in that case.
pub fn parallel_bfs_with(
    graph: &AdjacencyGraph,
    start: VertexId,
    workers: usize,
) -> Result<Vec<VertexId>, GraphError> {
    graph.validate_start(start)?;

    let visited = SharedVisitorSet::new(BitmapSet::new(graph.vertex_count()));
    let frontier = SharedFrontier::new();
    let mut order = Vec::new();

    frontier.push(start);

    while let Some(vertex) = frontier.pop() {
        if !visited.first_visit(vertex) {
            trace!(vertex, "stale frontier entry dropped");
            continue;
        }

        trace!(vertex, "visited");
        order.push(vertex);

        let neighbors = graph.neighbors(vertex);
        fork_join(workers, neighbors.len(), |index| {
            let neighbor = neighbors[index];
            if !visited.get(neighbor) {
                frontier.push(neighbor);
            }
        });
    }

    debug!(visited = order.len(), workers, "parallel BFS complete");
    Ok(order)
}
