//! Case file definitions
//!
//! A case file is pure configuration: the manor layout, which rooms hold
//! which clues, and the ground-truth links between clues and suspects.
//! Nothing in here is logic; the structures are built in code at startup
//! and handed to [`Game::new`](crate::game::Game::new).

use crate::data::RoomLayout;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static mapping from room label to the clue hidden there. Most rooms
/// have none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueTable {
    entries: HashMap<String, String>,
}

impl ClueTable {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(room, clue)| (room.to_string(), clue.to_string()))
                .collect(),
        }
    }

    /// The clue hidden in `room`, if any.
    pub fn clue_for(&self, room: &str) -> Option<&str> {
        self.entries.get(room).map(String::as_str)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A complete case: everything the game needs to run one investigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: String,
    pub title: String,
    pub synopsis: String,

    /// Shape of the manor.
    pub layout: RoomLayout,

    /// Which rooms hide which clues.
    pub clue_table: ClueTable,

    /// Ground truth tying clues to suspects, in recording order.
    pub associations: Vec<(String, String)>,
}

/// The shipped case: a crime at Blackwood Manor.
pub fn blackwood_manor_case() -> CaseFile {
    // Floor plan:
    //
    //                  Hall de Entrada
    //                 /               \
    //          Biblioteca           Cozinha
    //         /         \           /      \
    //     Sótão    Escritório  Despensa  Sala de Jantar
    //                    \                  /
    //                   Cofre           Adega
    let layout = RoomLayout::branch(
        "Hall de Entrada",
        Some(RoomLayout::branch(
            "Biblioteca",
            Some(RoomLayout::leaf("Sótão")),
            Some(RoomLayout::branch(
                "Escritório",
                None,
                Some(RoomLayout::leaf("Cofre")),
            )),
        )),
        Some(RoomLayout::branch(
            "Cozinha",
            Some(RoomLayout::leaf("Despensa")),
            Some(RoomLayout::branch(
                "Sala de Jantar",
                Some(RoomLayout::leaf("Adega")),
                None,
            )),
        )),
    );

    let clue_table = ClueTable::new([
        ("Biblioteca", "Livro com pagina rasgada"),
        ("Sótão", "Carta antiga amarelada"),
        ("Escritório", "Documento assinado"),
        ("Cofre", "Joia valiosa escondida"),
        ("Cozinha", "Faca com manchas"),
        ("Despensa", "Frasco de veneno"),
        ("Sala de Jantar", "Taca quebrada"),
        ("Adega", "Garrafa de vinho aberta"),
    ]);

    let associations = [
        ("Livro com pagina rasgada", "Professor Marcus"),
        ("Carta antiga amarelada", "Lady Blackwood"),
        ("Documento assinado", "Senhor Whitmore"),
        ("Joia valiosa escondida", "Lady Blackwood"),
        ("Faca com manchas", "Chef Antoine"),
        ("Frasco de veneno", "Doutor Hayes"),
        ("Taca quebrada", "Senhor Whitmore"),
        ("Garrafa de vinho aberta", "Chef Antoine"),
    ]
    .into_iter()
    .map(|(clue, suspect)| (clue.to_string(), suspect.to_string()))
    .collect();

    CaseFile {
        id: "blackwood_01".to_string(),
        title: "The Blackwood Manor Case".to_string(),
        synopsis: r#"
A crime was committed at Blackwood Manor last night, and the household is
keeping its secrets. Walk the manor room by room and collect whatever the
guilty party left behind.

Every clue in your case board points at someone. When you are done
exploring, the case file will tell you who the evidence implicates most.

Good luck, detective.
        "#
        .trim()
        .to_string(),
        layout,
        clue_table,
        associations,
    }
}
