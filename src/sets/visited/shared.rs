use std::sync::Mutex;

use crate::sets::visited::VisitorSet;

/// Mutex-guarded [`VisitorSet`] shared between the workers of one parallel
/// traversal.
///
/// Every operation takes the lock for its whole duration, so a
/// [`first_visit`](SharedVisitorSet::first_visit) is an atomic
/// check-then-mark: two workers racing on the same vertex cannot both see
/// it unvisited. The critical sections are a flag read or a flag
/// read-and-write, nothing more.
pub struct SharedVisitorSet<S: VisitorSet> {
    inner: Mutex<S>,
}

impl<S: VisitorSet> SharedVisitorSet<S> {
    pub fn new(inner: S) -> Self {
        SharedVisitorSet {
            inner: Mutex::new(inner),
        }
    }

    /// Returns whether `vertex` is currently marked visited.
    ///
    /// The answer may be stale by the time the caller acts on it; only
    /// [`first_visit`](SharedVisitorSet::first_visit) decides ownership of
    /// a vertex.
    pub fn get(&self, vertex: usize) -> bool {
        self.inner.lock().unwrap().get(vertex)
    }

    /// Atomically marks `vertex` visited, returning whether this call was
    /// the first to do so.
    pub fn first_visit(&self, vertex: usize) -> bool {
        self.inner.lock().unwrap().first_visit(vertex)
    }

    /// Recovers the wrapped set once all workers are done with it.
    pub fn into_inner(self) -> S {
        self.inner.into_inner().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets::visited::BitmapSet;
    use std::thread;

    #[test]
    fn first_visit_is_won_exactly_once_per_vertex() {
        let shared = SharedVisitorSet::new(BitmapSet::new(8));
        assert!(shared.first_visit(5));
        assert!(!shared.first_visit(5));
        assert!(shared.get(5));
        assert!(!shared.get(4));
    }

    #[test]
    fn racing_workers_claim_disjoint_wins() {
        let vertex_count = 64;
        let shared = SharedVisitorSet::new(BitmapSet::new(vertex_count));

        // every worker tries to claim every vertex; each vertex must be
        // won exactly once in total.
        let wins: usize = thread::scope(|scope| {
            (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..vertex_count)
                            .filter(|&v| shared.first_visit(v))
                            .count()
                    })
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .sum()
        });

        assert_eq!(wins, vertex_count);

        let inner = shared.into_inner();
        for v in 0..vertex_count {
            assert!(inner.get(v));
        }
    }
}
