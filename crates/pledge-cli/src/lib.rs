//! CLI library components for the pledge sorter.

pub mod logging;
pub mod pipeline;
