//! Motion intent and position bookkeeping.

mod direction;
mod tracker;

pub use direction::Direction;
pub use tracker::MotionState;
