//! The closing report
//!
//! Assembled once the investigation ends: the case board in alphabetical
//! order, the case file's clue-suspect analysis, the suspect standings,
//! and the prime suspect. Renders as plain text for the terminal and
//! feeds the TUI report screen.

use crate::data::{Association, ClueIndex, Suspect, SuspectRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the end-of-session summary shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case_title: String,

    /// Clues on the board, ascending alphabetical order.
    pub collected_clues: Vec<String>,

    /// The case file's associations, most recently recorded first.
    pub associations: Vec<Association>,

    /// Every registered suspect in table scan order.
    pub standings: Vec<Suspect>,

    /// The most-cited suspect, absent when no suspect has a citation.
    pub prime_suspect: Option<Suspect>,

    /// One-line journal digest.
    pub session_summary: String,
}

impl CaseReport {
    pub fn assemble(
        case_title: &str,
        board: &ClueIndex,
        registry: &SuspectRegistry,
        session_summary: String,
    ) -> Self {
        Self {
            case_title: case_title.to_string(),
            collected_clues: board.sorted_clues(),
            associations: registry.associations().cloned().collect(),
            standings: registry.standings().cloned().collect(),
            prime_suspect: registry.rank_most_cited().cloned(),
            session_summary,
        }
    }

    /// Whether the analysis sections apply: without a single collected
    /// clue there is nothing to cross-reference.
    pub fn has_evidence(&self) -> bool {
        !self.collected_clues.is_empty()
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(46);

        writeln!(f, "{rule}")?;
        writeln!(f, " INVESTIGATION SUMMARY - {}", self.case_title)?;
        writeln!(f, "{rule}")?;
        if self.collected_clues.is_empty() {
            writeln!(f, "No clues were collected.")?;
        } else {
            writeln!(f, "Clues collected (alphabetical order):")?;
            writeln!(f)?;
            for clue in &self.collected_clues {
                writeln!(f, "  - {clue}")?;
            }
        }

        if self.has_evidence() {
            writeln!(f)?;
            writeln!(f, "{rule}")?;
            writeln!(f, " CLUE AND SUSPECT ANALYSIS")?;
            writeln!(f, "{rule}")?;
            for association in &self.associations {
                writeln!(f, "  * {}", association.clue)?;
                writeln!(f, "    -> Suspect: {}", association.suspect)?;
            }

            writeln!(f)?;
            writeln!(f, "{rule}")?;
            writeln!(f, " CASE CONCLUSION")?;
            writeln!(f, "{rule}")?;
            match &self.prime_suspect {
                None => writeln!(f, "No suspect was identified by the clues.")?,
                Some(prime) => {
                    writeln!(f, "Suspect standings:")?;
                    writeln!(f)?;
                    for suspect in &self.standings {
                        writeln!(f, "  * {}: {} citation(s)", suspect.name, suspect.citations)?;
                    }
                    writeln!(f)?;
                    writeln!(f, "PRIME SUSPECT: {}", prime.name)?;
                    writeln!(f, "  (cited by {} clue(s))", prime.citations)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, " Session: {}", self.session_summary)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(with_clues: bool) -> CaseReport {
        let mut board = ClueIndex::new();
        let mut registry = SuspectRegistry::new();
        registry.record("Carta antiga amarelada", "Lady Blackwood");
        registry.record("Joia valiosa escondida", "Lady Blackwood");
        if with_clues {
            board.insert("Joia valiosa escondida");
            board.insert("Carta antiga amarelada");
        }
        CaseReport::assemble("Test Case", &board, &registry, "2 rooms entered".to_string())
    }

    #[test]
    fn clues_come_out_alphabetical() {
        let report = sample_report(true);
        assert_eq!(
            report.collected_clues,
            vec!["Carta antiga amarelada", "Joia valiosa escondida"]
        );
        assert!(report.has_evidence());
    }

    #[test]
    fn prime_suspect_carries_its_count() {
        let report = sample_report(true);
        let prime = report.prime_suspect.unwrap();
        assert_eq!(prime.name, "Lady Blackwood");
        assert_eq!(prime.citations, 2);
    }

    #[test]
    fn empty_board_skips_the_analysis_sections() {
        let report = sample_report(false);
        assert!(!report.has_evidence());

        let text = report.to_string();
        assert!(text.contains("No clues were collected."));
        assert!(!text.contains("CASE CONCLUSION"));
    }

    #[test]
    fn rendered_report_names_the_prime_suspect() {
        let text = sample_report(true).to_string();
        assert!(text.contains("PRIME SUSPECT: Lady Blackwood"));
        assert!(text.contains("Lady Blackwood: 2 citation(s)"));
    }
}
