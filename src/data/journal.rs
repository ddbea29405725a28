//! The session journal
//!
//! A chronological record of everything that happened during the
//! investigation: rooms entered, clues found, paths that went nowhere.
//! The final report reads its counts; the TUI renders its tail.

use super::{Direction, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a journal entry records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalEventKind {
    /// The detective arrived in a room (revisits included).
    RoomEntered { label: String, dead_end: bool },
    /// A clue joined the case board.
    ClueDiscovered { clue: String },
    /// A move was attempted where the manor has no door.
    PathBlocked { direction: Direction },
    /// The case board was reviewed.
    CluesReviewed { count: usize },
    /// Input that is not part of the command vocabulary.
    InvalidCommand { input: char },
    /// The investigation ended.
    CaseClosed,
}

/// A single event in the session journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Id,
    pub timestamp: DateTime<Utc>,
    pub kind: JournalEventKind,
}

/// The complete session journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseJournal {
    entries: Vec<JournalEntry>,
    pub opened_at: DateTime<Utc>,
}

impl CaseJournal {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            opened_at: Utc::now(),
        }
    }

    /// Append an event, stamped now.
    pub fn log(&mut self, kind: JournalEventKind) {
        self.entries.push(JournalEntry {
            id: Id::new(),
            timestamp: Utc::now(),
            kind,
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rooms entered over the whole session, revisits included.
    pub fn rooms_entered(&self) -> usize {
        self.count(|k| matches!(k, JournalEventKind::RoomEntered { .. }))
    }

    pub fn clues_discovered(&self) -> usize {
        self.count(|k| matches!(k, JournalEventKind::ClueDiscovered { .. }))
    }

    pub fn paths_blocked(&self) -> usize {
        self.count(|k| matches!(k, JournalEventKind::PathBlocked { .. }))
    }

    pub fn invalid_commands(&self) -> usize {
        self.count(|k| matches!(k, JournalEventKind::InvalidCommand { .. }))
    }

    fn count(&self, pred: impl Fn(&JournalEventKind) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.kind)).count()
    }

    /// One-line footer for the report.
    pub fn summary(&self) -> String {
        format!(
            "{} rooms entered, {} clues found, {} blocked paths, {} invalid commands",
            self.rooms_entered(),
            self.clues_discovered(),
            self.paths_blocked(),
            self.invalid_commands(),
        )
    }
}

impl Default for CaseJournal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_track_logged_kinds() {
        let mut journal = CaseJournal::new();
        journal.log(JournalEventKind::RoomEntered {
            label: "Hall de Entrada".to_string(),
            dead_end: false,
        });
        journal.log(JournalEventKind::RoomEntered {
            label: "Biblioteca".to_string(),
            dead_end: false,
        });
        journal.log(JournalEventKind::ClueDiscovered {
            clue: "Livro com pagina rasgada".to_string(),
        });
        journal.log(JournalEventKind::PathBlocked {
            direction: Direction::Left,
        });
        journal.log(JournalEventKind::InvalidCommand { input: 'x' });

        assert_eq!(journal.len(), 5);
        assert_eq!(journal.rooms_entered(), 2);
        assert_eq!(journal.clues_discovered(), 1);
        assert_eq!(journal.paths_blocked(), 1);
        assert_eq!(journal.invalid_commands(), 1);
    }

    #[test]
    fn summary_mentions_every_count() {
        let mut journal = CaseJournal::new();
        journal.log(JournalEventKind::CaseClosed);
        let summary = journal.summary();
        assert!(summary.contains("0 clues found"));
        assert!(summary.contains("0 blocked paths"));
    }
}
