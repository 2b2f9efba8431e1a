//! Command implementations for personctl CLI

pub mod person;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use person::run_person;
pub use serve::run_serve;
