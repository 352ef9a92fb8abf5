//! Utility modules for the time ruler.

pub mod formatting;

pub use formatting::{format_frame_count, format_timestamp};
