//! Route handlers organized by resource

pub mod health;
pub mod kpas;
pub mod kras;
pub mod tasks;
