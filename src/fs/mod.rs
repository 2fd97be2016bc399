//! File system I/O for graph descriptions.
//!
//! This module provides loading and storing of undirected graphs as JSON
//! edge-list documents, replacing interactive edge entry for benchmark runs.

mod graph_file;

pub use graph_file::*;
