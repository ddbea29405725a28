//! The exploration state machine
//!
//! Walks the room map one command at a time, runs the clue check on every
//! arrival, and reports what happened as typed events. The events are the
//! whole interface: rendering them is the front-end's problem.

use crate::data::{ClueIndex, Direction, Discovery, RoomId, RoomMap};
use crate::game::scenario::ClueTable;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single exploration command from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    GoLeft,
    GoRight,
    ViewClues,
    Exit,
}

impl Command {
    /// Map a command character to a command. `None` is the invalid-input
    /// path; the caller reports it and carries on.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Command::GoLeft),
            'r' => Some(Command::GoRight),
            'c' => Some(Command::ViewClues),
            'q' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Where the state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorerPhase {
    /// At a room with at least one exit, awaiting a command.
    Exploring,
    /// At a room with no exits. Absorbing: only [`Command::Exit`] leaves.
    AtDeadEnd,
    /// The session is over.
    Ended,
}

/// What a command did. The front-end renders these; the journal records
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent {
    RoomEntered { label: String, dead_end: bool },
    ClueDiscovered { text: String },
    PathBlocked { direction: Direction },
    CluesListed { clues: Vec<String> },
    OnlyExitRemains,
    InvalidCommand { input: char },
    Ended,
}

/// The explorer: current position plus phase. Holds only a copyable room
/// handle, never a reference into the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explorer {
    position: RoomId,
    phase: ExplorerPhase,
    moves: u32,
}

impl Explorer {
    /// Start at the map root. The caller must follow up with
    /// [`arrive`](Self::arrive) so the entrance gets its room-entry and
    /// clue check like every other room.
    pub fn new(map: &RoomMap) -> Self {
        Self {
            position: map.root(),
            phase: ExplorerPhase::Exploring,
            moves: 0,
        }
    }

    pub fn position(&self) -> RoomId {
        self.position
    }

    pub fn phase(&self) -> ExplorerPhase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_ended(&self) -> bool {
        self.phase == ExplorerPhase::Ended
    }

    /// Run the arrival protocol for the current room: announce it, consult
    /// the clue table, and push a discovery event if the board accepted a
    /// new clue. Re-arms on every arrival; repeat visits re-run the check
    /// and the board's `Known` answer keeps them quiet.
    pub fn arrive(
        &mut self,
        map: &RoomMap,
        table: &ClueTable,
        board: &mut ClueIndex,
    ) -> Vec<ExplorerEvent> {
        let label = map.label(self.position).to_string();
        let dead_end = map.is_dead_end(self.position);
        let mut events = vec![ExplorerEvent::RoomEntered {
            label: label.clone(),
            dead_end,
        }];

        if let Some(clue) = table.clue_for(&label) {
            if board.insert(clue) == Discovery::New {
                events.push(ExplorerEvent::ClueDiscovered {
                    text: clue.to_string(),
                });
            }
        }

        if dead_end {
            self.phase = ExplorerPhase::AtDeadEnd;
        }
        events
    }

    /// Apply one command. Never errors: a move into a missing child is a
    /// `PathBlocked` event, and a dead end refuses everything but exit.
    pub fn step(
        &mut self,
        map: &RoomMap,
        table: &ClueTable,
        board: &mut ClueIndex,
        command: Command,
    ) -> Vec<ExplorerEvent> {
        if self.phase == ExplorerPhase::Ended {
            return Vec::new();
        }

        match command {
            Command::Exit => {
                self.phase = ExplorerPhase::Ended;
                vec![ExplorerEvent::Ended]
            }
            Command::ViewClues => {
                if self.phase == ExplorerPhase::AtDeadEnd {
                    vec![ExplorerEvent::OnlyExitRemains]
                } else {
                    vec![ExplorerEvent::CluesListed {
                        clues: board.sorted_clues(),
                    }]
                }
            }
            Command::GoLeft => self.try_move(map, table, board, Direction::Left),
            Command::GoRight => self.try_move(map, table, board, Direction::Right),
        }
    }

    fn try_move(
        &mut self,
        map: &RoomMap,
        table: &ClueTable,
        board: &mut ClueIndex,
        direction: Direction,
    ) -> Vec<ExplorerEvent> {
        let next = match direction {
            Direction::Left => map.left(self.position),
            Direction::Right => map.right(self.position),
        };

        match next {
            Some(room) => {
                self.position = room;
                self.moves += 1;
                self.arrive(map, table, board)
            }
            None => vec![ExplorerEvent::PathBlocked { direction }],
        }
    }
}

/// A port yielding one command at a time, so whole sessions can be driven
/// from a script instead of a terminal.
pub trait CommandSource {
    fn next_command(&mut self) -> Option<Command>;
}

/// Replays a fixed command sequence. The test suite's command source.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommands {
    queue: VecDeque<Command>,
}

impl ScriptedCommands {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }
}

impl CommandSource for ScriptedCommands {
    fn next_command(&mut self) -> Option<Command> {
        self.queue.pop_front()
    }
}
