//! Command implementations for kpactl CLI

pub mod serve;

pub use serve::run_serve;
