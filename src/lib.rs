pub mod cli;
pub mod config;
pub mod graph;
pub mod logging;
pub mod util;
