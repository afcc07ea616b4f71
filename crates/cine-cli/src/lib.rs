//! CLI library components for cine-locate.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
