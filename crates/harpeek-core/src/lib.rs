pub mod config;
pub mod error;
pub mod logging;

// Report pipeline: load -> filter -> render.
pub mod filter;
pub mod har;
pub mod render;
pub mod report;
