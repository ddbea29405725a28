//! Data structures for the game world
//!
//! Defines the manor's room tree, the clue index, the suspect registry,
//! and the session journal.

pub mod clues;
pub mod journal;
pub mod rooms;
pub mod suspects;

pub use clues::*;
pub use journal::*;
pub use rooms::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Which way the player can move from a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
