//! Collection types

mod deque;
mod misc;
mod raw_buffer;

pub use deque::{Deque, DequeError};
pub use misc::{physical_idx, prev_idx};
