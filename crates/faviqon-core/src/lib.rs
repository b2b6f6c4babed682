pub mod config;
pub mod logging;

// Pipeline stages, leaf-first.
pub mod aggregate;
pub mod dispatch;
pub mod fetch;
pub mod hash;
pub mod known;
pub mod output;
pub mod pipeline;
pub mod target;
