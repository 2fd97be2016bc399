use std::fmt::{self, Display};

use crate::graph::GraphError;

/// Index identifying a vertex. Always in `[0, vertex_count)` once a graph
/// has been built.
pub type VertexId = usize;

/// In-memory undirected graph stored as one adjacency list per vertex.
///
/// # Invariants
/// - `adjacency[v]` lists the neighbors of vertex `v`, in insertion order.
/// - Every listed neighbor is a valid index into `adjacency`.
/// - Undirected: inserting edge `(a, b)` appends `b` to `a`'s list and `a`
///   to `b`'s list. A self-loop `(a, a)` therefore appears twice in `a`'s
///   own list.
///
/// The graph is immutable after [`AdjacencyGraph::build`] returns, so
/// traversal workers may read it concurrently without any locking.
#[derive(Debug)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<VertexId>>,
}

impl AdjacencyGraph {
    /// Builds an undirected graph over `vertex_count` vertices from an edge
    /// list.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if either endpoint of any edge is
    /// outside `[0, vertex_count)`. Nothing is kept from a failed build.
    ///
    /// # Examples
    /// ```
    /// use wavefront::graph::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::build(3, &[(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.neighbors(1), &[0, 2]);
    /// ```
    pub fn build(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphError> {
        let mut adjacency = vec![Vec::new(); vertex_count];

        for &(src, dst) in edges {
            if src >= vertex_count || dst >= vertex_count {
                return Err(GraphError::InvalidEdge {
                    src,
                    dst,
                    vertex_count,
                });
            }

            adjacency[src].push(dst);
            adjacency[dst].push(src);
        }

        Ok(AdjacencyGraph { adjacency })
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Neighbors of `vertex`, in the order their edges were inserted.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count()`. Out-of-range lookups can only
    /// come from a violated graph invariant, so they surface immediately
    /// instead of being reported as a recoverable error.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.adjacency[vertex]
    }

    /// Checks that `start` is usable as a traversal entry point.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `start` is outside
    /// `[0, vertex_count)`.
    pub fn validate_start(&self, start: VertexId) -> Result<(), GraphError> {
        if start >= self.vertex_count() {
            return Err(GraphError::InvalidVertex {
                vertex: start,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

impl Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency list:")?;
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex} =>")?;
            for neighbor in neighbors {
                write!(f, " {neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_empty_graph() {
        let graph = AdjacencyGraph::build(0, &[]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn build_registers_edges_on_both_endpoints() {
        let graph = AdjacencyGraph::build(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();

        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(2), &[1, 3]);
        assert_eq!(graph.neighbors(3), &[2]);
    }

    #[test]
    fn neighbor_order_follows_edge_insertion_order() {
        let graph = AdjacencyGraph::build(4, &[(0, 2), (0, 1), (0, 3)]).unwrap();
        assert_eq!(graph.neighbors(0), &[2, 1, 3]);
    }

    #[test]
    fn self_loop_appears_twice_in_its_own_list() {
        let graph = AdjacencyGraph::build(2, &[(1, 1)]).unwrap();
        assert_eq!(graph.neighbors(1), &[1, 1]);
        assert_eq!(graph.neighbors(0), &[] as &[VertexId]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        // the store does not dedup: two inserted (0, 1) edges mean two
        // entries on each side.
        let graph = AdjacencyGraph::build(2, &[(0, 1), (0, 1)]).unwrap();
        assert_eq!(graph.neighbors(0), &[1, 1]);
        assert_eq!(graph.neighbors(1), &[0, 0]);
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let err = AdjacencyGraph::build(3, &[(3, 0)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdge {
                src: 3,
                dst: 0,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn out_of_range_destination_is_rejected() {
        let err = AdjacencyGraph::build(3, &[(0, 7)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdge {
                src: 0,
                dst: 7,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn validate_start_accepts_in_range_vertices() {
        let graph = AdjacencyGraph::build(3, &[]).unwrap();
        assert!(graph.validate_start(0).is_ok());
        assert!(graph.validate_start(2).is_ok());
    }

    #[test]
    fn validate_start_rejects_out_of_range_vertices() {
        let graph = AdjacencyGraph::build(3, &[]).unwrap();
        assert_eq!(
            graph.validate_start(3).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn display_matches_the_adjacency_listing_format() {
        let graph = AdjacencyGraph::build(3, &[(0, 1), (0, 2)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "Adjacency list:\n0 => 1 2\n1 => 0\n2 => 0\n"
        );
    }
}
