//! Undirected adjacency-list graphs and their construction.
//!
//! This module provides the read-only graph store consumed by every traversal,
//! the construction-time error taxonomy, and a seeded random-graph generator
//! for benchmark workloads.

mod adjacency_graph;
mod error;
mod random;

pub use adjacency_graph::*;
pub use error::*;
pub use random::*;
