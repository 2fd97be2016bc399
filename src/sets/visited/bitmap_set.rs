use crate::sets::visited::VisitorSet;

/// Dense visited-flag storage: one bit per vertex, packed into a contiguous
/// byte buffer sized at traversal start.
///
/// # Examples
///
/// ```
/// use wavefront::sets::visited::{BitmapSet, VisitorSet};
///
/// let mut visited = BitmapSet::new(10);
/// assert!(!visited.get(3));
///
/// visited.set(3);
/// assert!(visited.get(3));
/// ```
pub struct BitmapSet {
    buffer: Box<[u8]>,
    vertex_count: usize,
}

impl BitmapSet {
    /// Constructs a new [`BitmapSet`] covering `vertex_count` vertices, all
    /// unvisited.
    pub fn new(vertex_count: usize) -> Self {
        let bytes_needed: usize = vertex_count.div_ceil(8);
        BitmapSet {
            buffer: vec![0u8; bytes_needed].into_boxed_slice(),
            vertex_count,
        }
    }

    /// Number of vertices this set covers.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl VisitorSet for BitmapSet {
    /// Marks `vertex` visited.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= vertex_count`. A traversal can only get here
    /// through a neighbor id that violates the graph invariant, which is
    /// corruption worth stopping on.
    fn set(&mut self, vertex: usize) {
        assert!(vertex < self.vertex_count);

        let byte_index = vertex / 8;
        let bit_index = vertex % 8;

        self.buffer[byte_index] |= 1u8 << bit_index
    }

    /// Returns `true` if `vertex` has been marked visited.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= vertex_count`.
    fn get(&self, vertex: usize) -> bool {
        assert!(vertex < self.vertex_count);

        let byte_index = vertex / 8;
        let bit_index = vertex % 8;

        self.buffer[byte_index] & (1u8 << bit_index) != 0
    }
}
