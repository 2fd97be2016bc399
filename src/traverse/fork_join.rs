use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Runs `iterations` loop iterations across up to `workers` threads and
/// joins them all before returning.
///
/// Workers claim iteration indices from a shared atomic counter until the
/// range is exhausted, so an iteration is executed exactly once no matter
/// how the scheduler interleaves the workers. With one worker (or one
/// iteration) the loop runs inline on the calling thread and no threads are
/// spawned.
pub(crate) fn fork_join<F>(workers: usize, iterations: usize, body: F)
where
    F: Fn(usize) + Sync,
{
    if iterations == 0 {
        return;
    }

    let workers = workers.clamp(1, iterations);
    if workers == 1 {
        for index in 0..iterations {
            body(index);
        }
        return;
    }

    let next_index = AtomicUsize::new(0);
    let next_index = &next_index;
    let body = &body;

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(move || {
                loop {
                    // atomically grab the next iteration to run
                    let index = next_index.fetch_add(1, Ordering::Relaxed);
                    if index >= iterations {
                        break;
                    }
                    body(index);
                }
            });
        }
    });
}
