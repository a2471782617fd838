//! BDD step definitions for the rover control panel

pub mod panel_steps;
pub mod store_steps;
