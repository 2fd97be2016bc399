mod bitmap_set;
mod shared;
mod visitor_set;

pub use bitmap_set::*;
pub use shared::*;
pub use visitor_set::*;
