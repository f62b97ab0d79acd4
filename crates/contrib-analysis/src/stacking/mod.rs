//! Stack geometry builder: top/bottom bounds for stacked bars with mixed
//! signs. Non-negative values stack upward from zero and negative values
//! stack downward, each in column order.

pub mod builder;
pub mod types;

pub use builder::{build_segments, stack_row, StackBuilder};
pub use types::{Segment, StackSegments};
