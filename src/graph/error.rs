use thiserror::Error;

/// Errors reported by graph construction and traversal preconditions.
///
/// Both variants are fatal: construction aborts before producing a graph,
/// and traversal aborts before touching any shared state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint falls outside `[0, vertex_count)`.
    #[error("edge ({src}, {dst}) has an endpoint outside of 0..{vertex_count}")]
    InvalidEdge {
        src: usize,
        dst: usize,
        vertex_count: usize,
    },

    /// A traversal start vertex falls outside `[0, vertex_count)`.
    #[error("start vertex {vertex} is outside of 0..{vertex_count}")]
    InvalidVertex { vertex: usize, vertex_count: usize },
}
