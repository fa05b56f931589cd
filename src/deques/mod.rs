pub mod any_deque;
pub mod raw;
pub mod ring;
