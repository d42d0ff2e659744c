//! Command implementations for the oxio CLI.

pub mod cat;
pub mod count;
pub mod stats;
pub mod write;

pub use cat::cmd_cat;
pub use count::cmd_count;
pub use stats::cmd_stats;
pub use write::cmd_write;
