mod fifo_queue;
mod shared;

pub use fifo_queue::*;
pub use shared::*;
