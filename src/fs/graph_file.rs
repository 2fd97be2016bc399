use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{AdjacencyGraph, GraphError, VertexId};

/// Errors reported while loading a graph description from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read graph file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed graph file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// On-disk description of an undirected graph: a vertex count plus an edge
/// list, serialized as JSON.
///
/// ```json
/// { "vertex_count": 3, "edges": [[0, 1], [1, 2]] }
/// ```
///
/// Validation happens when the description is turned into an
/// [`AdjacencyGraph`], not at parse time, so a file that parses can still
/// be rejected for out-of-range endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphFile {
    pub vertex_count: usize,
    pub edges: Vec<(VertexId, VertexId)>,
}

impl GraphFile {
    /// Reads and parses a graph description from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes this description to `path` as pretty-printed JSON.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Builds the described graph, propagating endpoint validation.
    pub fn into_graph(self) -> Result<AdjacencyGraph, GraphError> {
        AdjacencyGraph::build(self.vertex_count, &self.edges)
    }
}

/// Loads the graph description at `path` and builds it in one step.
pub fn load_graph(path: impl AsRef<Path>) -> Result<AdjacencyGraph, LoadError> {
    Ok(GraphFile::load(path)?.into_graph()?)
}
