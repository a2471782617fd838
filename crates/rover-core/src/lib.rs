//! Rover Core - shared building blocks for the rover front-ends
//!
//! Talks to the remote record store, looks up the public IP, turns record
//! lists into status text and table rows, and models the terminal screen
//! both views draw into.

pub mod command;
pub mod config;
pub mod error;
pub mod io;
pub mod painter;
pub mod public_ip;
pub mod record;
pub mod render;
pub mod screen;
pub mod store;
pub mod timestamp;

pub use command::Command;
pub use config::{load_config, PublicIpConfig, StoreConfig};
pub use error::{Result, RoverError};
pub use record::{NewRecord, Record};
pub use screen::{Screen, ScreenHandle};
