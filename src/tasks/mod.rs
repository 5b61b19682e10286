//! Background Tasks Module
//!
//! # Tasks
//! - TTL Sweep: evicts expired cache entries at a configured interval (opt-in)

mod sweep;

pub use sweep::spawn_sweep_task;
