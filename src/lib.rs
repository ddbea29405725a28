//! The Blackwood Manor Case
//!
//! A detective text adventure: walk the rooms of an old manor, collect the
//! clues hidden inside them, and close the case by naming the suspect the
//! evidence points at.
//!
//! # Game Mechanics
//!
//! - **Exploration**: The manor is a fixed binary tree of rooms; every move
//!   goes left or right from where you stand.
//! - **Clues**: Some rooms hold a clue. The first time you find one it goes
//!   on the case board, which keeps itself in alphabetical order.
//! - **Suspects**: The case file ties each clue to a suspect; citation
//!   counts decide who the investigation points at.
//!
//! # Architecture
//!
//! - `data` - Core structures: room map, clue index, suspect registry,
//!   session journal
//! - `game` - Game state, exploration state machine, scenario config,
//!   final report
//! - `tui` - Terminal user interface with ratatui

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("duplicate room label in layout: {0}")]
    DuplicateRoom(String),

    #[error("clue table names a room that is not in the manor: {0}")]
    UnknownRoom(String),

    #[error("invalid game state: {0}")]
    InvalidState(String),
}
