//! The fixed rover command vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A command the rover understands. The label doubles as the button text and
/// as the `status` value written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "adelante")]
    Forward,
    #[serde(rename = "atrás")]
    Backward,
    #[serde(rename = "detener")]
    Stop,
    #[serde(rename = "adelante derecha")]
    ForwardRight,
    #[serde(rename = "adelante izquierda")]
    ForwardLeft,
    #[serde(rename = "atrás derecha")]
    BackwardRight,
    #[serde(rename = "atrás izquierda")]
    BackwardLeft,
    #[serde(rename = "giro 90 grados derecha")]
    Turn90Right,
    #[serde(rename = "giro 90 grados izquierda")]
    Turn90Left,
    #[serde(rename = "giro 360 grados derecha")]
    Turn360Right,
    #[serde(rename = "giro 360 grados izquierda")]
    Turn360Left,
}

impl Command {
    /// Every command, in button order
    pub const ALL: [Command; 11] = [
        Command::Forward,
        Command::Backward,
        Command::Stop,
        Command::ForwardRight,
        Command::ForwardLeft,
        Command::BackwardRight,
        Command::BackwardLeft,
        Command::Turn90Right,
        Command::Turn90Left,
        Command::Turn360Right,
        Command::Turn360Left,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Forward => "adelante",
            Command::Backward => "atrás",
            Command::Stop => "detener",
            Command::ForwardRight => "adelante derecha",
            Command::ForwardLeft => "adelante izquierda",
            Command::BackwardRight => "atrás derecha",
            Command::BackwardLeft => "atrás izquierda",
            Command::Turn90Right => "giro 90 grados derecha",
            Command::Turn90Left => "giro 90 grados izquierda",
            Command::Turn360Right => "giro 360 grados derecha",
            Command::Turn360Left => "giro 360 grados izquierda",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the command labels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
