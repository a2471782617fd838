//! BDD step definitions for the rover monitor

pub mod monitor_steps;
pub mod store_steps;
