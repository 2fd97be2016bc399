/// Per-vertex discovery state for a single traversal run.
///
/// A vertex starts unvisited and transitions to visited at most once over
/// the lifetime of the set; nothing ever clears a flag mid-traversal.
pub trait VisitorSet {
    /// Returns whether `vertex` has been marked visited.
    fn get(&self, vertex: usize) -> bool;

    /// Marks `vertex` visited.
    fn set(&mut self, vertex: usize);

    /// Marks `vertex` visited and reports whether this call was the first
    /// to do so. Callers holding exclusive access use this as their
    /// check-then-mark step so discovery and marking cannot be separated.
    fn first_visit(&mut self, vertex: usize) -> bool {
        if self.get(vertex) {
            false
        } else {
            self.set(vertex);
            true
        }
    }
}
