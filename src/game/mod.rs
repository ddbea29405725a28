//! Core game logic and state management

pub mod explorer;
pub mod report;
pub mod scenario;

pub use explorer::{
    Command, CommandSource, Explorer, ExplorerEvent, ExplorerPhase, ScriptedCommands,
};
pub use report::CaseReport;
pub use scenario::{CaseFile, ClueTable};

use crate::data::{CaseJournal, ClueIndex, JournalEventKind, RoomMap, SuspectRegistry};
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Case accepted, manor not yet entered.
    Briefing,
    /// The main loop: commands in, events out.
    Exploring,
    /// The investigation is over; only the report remains.
    Concluded,
}

/// The main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// The case being investigated
    pub case: CaseFile,

    /// The manor, built once from the case layout
    pub rooms: RoomMap,

    /// Clues collected so far
    pub board: ClueIndex,

    /// Suspects and the association ledger, seeded from the case file
    pub registry: SuspectRegistry,

    /// The exploration state machine
    pub explorer: Explorer,

    /// Chronological record of the session
    pub journal: CaseJournal,
}

impl Game {
    /// Build a game from a case file. Fails fast on configuration errors:
    /// duplicate room labels, or a clue table entry naming a room the
    /// manor does not have. Seeds the suspect registry by recording every
    /// ground-truth association, so citation counters are complete before
    /// exploration starts.
    pub fn new(case: CaseFile) -> Result<Self> {
        let rooms = RoomMap::build(&case.layout)?;

        for room in case.clue_table.rooms() {
            if !rooms.contains_label(room) {
                return Err(GameError::UnknownRoom(room.to_string()).into());
            }
        }

        let mut registry = SuspectRegistry::new();
        for (clue, suspect) in &case.associations {
            registry.record(clue, suspect);
        }

        let explorer = Explorer::new(&rooms);

        Ok(Self {
            phase: GamePhase::Briefing,
            case,
            rooms,
            board: ClueIndex::new(),
            registry,
            explorer,
            journal: CaseJournal::new(),
        })
    }

    /// Enter the manor. The entrance gets the same arrival treatment as
    /// every later room: announcement plus clue check.
    pub fn begin(&mut self) -> Result<Vec<ExplorerEvent>> {
        if self.phase != GamePhase::Briefing {
            return Err(GameError::InvalidState("exploration already started".into()).into());
        }
        self.phase = GamePhase::Exploring;

        let events = self
            .explorer
            .arrive(&self.rooms, &self.case.clue_table, &mut self.board);
        self.journal_events(&events);
        Ok(events)
    }

    /// Route one command through the explorer and journal the outcome.
    pub fn handle_command(&mut self, command: Command) -> Vec<ExplorerEvent> {
        let events = self
            .explorer
            .step(&self.rooms, &self.case.clue_table, &mut self.board, command);
        self.journal_events(&events);
        if self.explorer.is_ended() {
            self.phase = GamePhase::Concluded;
        }
        events
    }

    /// Route one raw command character. Unrecognized input is the
    /// recoverable error path: reported, journaled, loop unchanged.
    pub fn handle_key(&mut self, input: char) -> Vec<ExplorerEvent> {
        match Command::from_char(input) {
            Some(command) => self.handle_command(command),
            None => {
                let events = vec![ExplorerEvent::InvalidCommand { input }];
                self.journal_events(&events);
                events
            }
        }
    }

    /// Drive a whole session from a command source, then hand back the
    /// report. The scripted-replay entry point: a test or a demo can play
    /// the game without a terminal.
    pub fn run_script(&mut self, mut source: impl CommandSource) -> Result<CaseReport> {
        if self.phase == GamePhase::Briefing {
            self.begin()?;
        }
        while let Some(command) = source.next_command() {
            self.handle_command(command);
            if self.explorer.is_ended() {
                break;
            }
        }
        Ok(self.conclude())
    }

    /// Close the case and assemble the report. Safe to call whether or
    /// not the explorer reached `Ended`; the session is over either way.
    pub fn conclude(&mut self) -> CaseReport {
        if self.phase != GamePhase::Concluded {
            self.phase = GamePhase::Concluded;
            self.journal.log(JournalEventKind::CaseClosed);
        }
        CaseReport::assemble(
            &self.case.title,
            &self.board,
            &self.registry,
            self.journal.summary(),
        )
    }

    /// Label of the room the explorer stands in.
    pub fn current_room(&self) -> &str {
        self.rooms.label(self.explorer.position())
    }

    /// Which exits the current room offers.
    pub fn exits(&self) -> (bool, bool) {
        let position = self.explorer.position();
        (self.rooms.has_left(position), self.rooms.has_right(position))
    }

    /// One-line status for the UI header.
    pub fn status_line(&self) -> String {
        format!(
            "Room: {} | Clues: {} | Moves: {}",
            self.current_room(),
            self.board.len(),
            self.explorer.moves(),
        )
    }

    fn journal_events(&mut self, events: &[ExplorerEvent]) {
        for event in events {
            let kind = match event {
                ExplorerEvent::RoomEntered { label, dead_end } => JournalEventKind::RoomEntered {
                    label: label.clone(),
                    dead_end: *dead_end,
                },
                ExplorerEvent::ClueDiscovered { text } => {
                    JournalEventKind::ClueDiscovered { clue: text.clone() }
                }
                ExplorerEvent::PathBlocked { direction } => JournalEventKind::PathBlocked {
                    direction: *direction,
                },
                ExplorerEvent::CluesListed { clues } => JournalEventKind::CluesReviewed {
                    count: clues.len(),
                },
                ExplorerEvent::InvalidCommand { input } => {
                    JournalEventKind::InvalidCommand { input: *input }
                }
                ExplorerEvent::Ended => JournalEventKind::CaseClosed,
                ExplorerEvent::OnlyExitRemains => continue,
            };
            self.journal.log(kind);
        }
    }
}
