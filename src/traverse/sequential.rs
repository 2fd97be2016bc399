use tracing::{debug, trace};

use crate::graph::{AdjacencyGraph, GraphError, VertexId};
use crate::sets::frontier::FifoQueue;
use crate::sets::visited::{BitmapSet, VisitorSet};

/// Single-threaded recursive depth-first traversal from `start`.
///
/// Marks `start`, emits it, then recurses into each unvisited neighbor in
/// adjacency order. The visitation order is a fixed function of the
/// adjacency lists and the start vertex. Vertices unreachable from `start`
/// are never visited.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range; no
/// state is touched in that case.
pub fn sequential_dfs(
    graph: &AdjacencyGraph,
    start: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    graph.validate_start(start)?;

    let mut visited = BitmapSet::new(graph.vertex_count());
    let mut order = Vec::new();

    descend(graph, start, &mut visited, &mut order);

    debug!(visited = order.len(), "sequential DFS complete");
    Ok(order)
}

/// Recursive descent shared by the sequential DFS and the dispatched units
/// of the parallel DFS: mark `vertex`, emit it, recurse into unvisited
/// neighbors.
///
/// The caller guarantees `vertex` is unvisited and owns `visited`
/// exclusively for the duration of the call.
pub(crate) fn descend<S: VisitorSet>(
    graph: &AdjacencyGraph,
    vertex: VertexId,
    visited: &mut S,
    order: &mut Vec<VertexId>,
) {
    visited.set(vertex);
    trace!(vertex, "visited");
    order.push(vertex);

    for &neighbor in graph.neighbors(vertex) {
        if !visited.get(neighbor) {
            descend(graph, neighbor, visited, order);
        }
    }
}

/// Single-threaded queue-driven breadth-first traversal from `start`.
///
/// Pops the frontier front; a vertex that is already visited at pop time is
/// a stale duplicate and is dropped without emission. Otherwise it is
/// marked, emitted, and its currently-unvisited neighbors are pushed. The
/// push-side check does not mark, so a vertex can sit in the queue more
/// than once before its first pop; deduplication happens only at the
/// pop+mark step.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range; no
/// state is touched in that case.
pub fn sequential_bfs(
    graph: &AdjacencyGraph,
    start: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    graph.validate_start(start)?;

    let mut visited = BitmapSet::new(graph.vertex_count());
    let mut frontier = FifoQueue::new();
    let mut order = Vec::new();

    frontier.push(start);

    while let Some(vertex) = frontier.pop() {
        if !visited.first_visit(vertex) {
            continue;
        }

        trace!(vertex, "visited");
        order.push(vertex);

        for &neighbor in graph.neighbors(vertex) {
            if !visited.get(neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    debug!(visited = order.len(), "sequential BFS complete");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> AdjacencyGraph {
        // 0 - 1 - 2 - 3 - 4
        AdjacencyGraph::build(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn dfs_on_a_line_graph_walks_it_end_to_end() {
        let graph = line_graph();
        assert_eq!(sequential_dfs(&graph, 0).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn bfs_on_a_line_graph_walks_it_end_to_end() {
        let graph = line_graph();
        assert_eq!(sequential_bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn traversal_from_the_middle_of_the_line() {
        let graph = line_graph();
        // 2's adjacency list is [1, 3], so DFS exhausts the left arm first
        assert_eq!(sequential_dfs(&graph, 2).unwrap(), vec![2, 1, 0, 3, 4]);
        // BFS alternates arms level by level
        assert_eq!(sequential_bfs(&graph, 2).unwrap(), vec![2, 1, 3, 0, 4]);
    }

    #[test]
    fn dfs_and_bfs_orders_diverge_on_a_branching_graph() {
        //     0
        //    / \
        //   1   2
        //   |
        //   3
        let graph = AdjacencyGraph::build(4, &[(0, 1), (0, 2), (1, 3)]).unwrap();

        assert_eq!(sequential_dfs(&graph, 0).unwrap(), vec![0, 1, 3, 2]);
        assert_eq!(sequential_bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn single_vertex_graph_visits_only_vertex_zero() {
        let graph = AdjacencyGraph::build(1, &[]).unwrap();
        assert_eq!(sequential_dfs(&graph, 0).unwrap(), vec![0]);
        assert_eq!(sequential_bfs(&graph, 0).unwrap(), vec![0]);
    }

    #[test]
    fn unreachable_vertices_are_never_visited() {
        // {0, 1} form a component; {2, 3} are stranded
        let graph = AdjacencyGraph::build(4, &[(0, 1)]).unwrap();
        assert_eq!(sequential_dfs(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(sequential_bfs(&graph, 0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn a_cycle_is_visited_exactly_once_per_vertex() {
        let graph = AdjacencyGraph::build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        assert_eq!(sequential_dfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(sequential_bfs(&graph, 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn self_loops_do_not_revisit_their_vertex() {
        let graph = AdjacencyGraph::build(2, &[(0, 0), (0, 1)]).unwrap();
        assert_eq!(sequential_dfs(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(sequential_bfs(&graph, 0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn out_of_range_start_fails_before_traversing() {
        let graph = line_graph();
        assert_eq!(
            sequential_dfs(&graph, 5).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 5,
                vertex_count: 5
            }
        );
        assert_eq!(
            sequential_bfs(&graph, 9).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 9,
                vertex_count: 5
            }
        );
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let graph = AdjacencyGraph::build(6, &[(0, 1), (0, 2), (1, 3), (2, 4), (4, 5)]).unwrap();

        let first = sequential_dfs(&graph, 0).unwrap();
        for _ in 0..10 {
            assert_eq!(sequential_dfs(&graph, 0).unwrap(), first);
        }

        let first = sequential_bfs(&graph, 0).unwrap();
        for _ in 0..10 {
            assert_eq!(sequential_bfs(&graph, 0).unwrap(), first);
        }
    }
}
