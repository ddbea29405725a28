//! Terminal User Interface
//!
//! TUI for the manor investigation using ratatui

pub mod app;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub clue: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            clue: Color::Yellow,
            warning: Color::Red,
            border: Color::DarkGray,
            header: Color::Magenta,
            dim: Color::Gray,
        }
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔═══════════════════════════════════════════════════╗
║                                                   ║
║    B L A C K W O O D   M A N O R                  ║
║    ─────────────────────────────                  ║
║    a  d e t e c t i v e  c a s e                  ║
║                                                   ║
║    The household is keeping its secrets.          ║
║    Find the clues. Name the suspect.              ║
║                                                   ║
╚═══════════════════════════════════════════════════╝
"#;

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════╗
║                 CONTROLS                      ║
╠═══════════════════════════════════════════════╣
║  ←/l   Take the left door                     ║
║  →/r   Take the right door                    ║
║  c     Review the case board                  ║
║  q/Esc End the investigation                  ║
║  ?     Toggle this help                       ║
╠═══════════════════════════════════════════════╣
║  A room is searched every time you enter it.  ║
║  A clue is only announced the first time it   ║
║  lands on the case board.                     ║
╚═══════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room panel + feed)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Room panel
            Constraint::Percentage(65), // Notification feed
        ])
        .split(area)
        .to_vec()
}
