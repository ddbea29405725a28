//! Main application state and rendering

use crate::game::scenario::blackwood_manor_case;
use crate::game::{CaseReport, Command, ExplorerEvent, Game};
use crate::tui::{create_content_layout, create_main_layout, styled_block, Theme, HELP_TEXT, LOGO};
use crate::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

const MENU_ITEMS: [&str; 3] = ["Begin Investigation", "Read the Briefing", "Quit"];

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub screen: Screen,
    pub menu_state: ListState,
    pub feed: Vec<String>,
    pub report: Option<CaseReport>,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Briefing,
    Playing,
    Report,
}

impl App {
    pub fn new() -> Result<Self> {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Ok(Self {
            game: Game::new(blackwood_manor_case())?,
            theme: Theme::default(),
            running: true,
            show_help: false,
            screen: Screen::MainMenu,
            menu_state,
            feed: vec!["[SYSTEM] A new case has landed on your desk.".to_string()],
            report: None,
        })
    }

    /// Handle keyboard input. Returns false when the app should stop.
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if self.show_help {
                    self.show_help = false;
                    return Ok(true);
                }

                match self.screen {
                    Screen::MainMenu => self.handle_menu_key(key.code),
                    Screen::Briefing => self.handle_briefing_key(key.code),
                    Screen::Playing => self.handle_playing_key(key.code),
                    Screen::Report => self.handle_report_key(key.code),
                }
            }
        }
        Ok(self.running)
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.menu_move(-1),
            KeyCode::Down => self.menu_move(1),
            KeyCode::Enter => match self.menu_state.selected().unwrap_or(0) {
                0 => self.start_exploring(),
                1 => self.screen = Screen::Briefing,
                _ => self.running = false,
            },
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    fn handle_briefing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.start_exploring(),
            KeyCode::Esc | KeyCode::Char('q') => self.screen = Screen::MainMenu,
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        let events = match code {
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Left => self.game.handle_command(Command::GoLeft),
            KeyCode::Right => self.game.handle_command(Command::GoRight),
            KeyCode::Esc => self.game.handle_command(Command::Exit),
            KeyCode::Char(c) => self.game.handle_key(c),
            _ => return,
        };
        self.push_events(&events);

        if self.game.explorer.is_ended() {
            self.report = Some(self.game.conclude());
            self.screen = Screen::Report;
        }
    }

    fn handle_report_key(&mut self, code: KeyCode) {
        if matches!(
            code,
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter
        ) {
            self.running = false;
        }
    }

    fn menu_move(&mut self, delta: i32) {
        let len = MENU_ITEMS.len() as i32;
        let current = self.menu_state.selected().unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len);
        self.menu_state.select(Some(next as usize));
    }

    fn start_exploring(&mut self) {
        match self.game.begin() {
            Ok(events) => {
                self.feed
                    .push("[SYSTEM] You step through the manor's front door.".to_string());
                self.push_events(&events);
                self.screen = Screen::Playing;
            }
            Err(_) => {
                // Already started once; just return to the floor.
                self.screen = Screen::Playing;
            }
        }
    }

    /// Turn explorer events into feed lines.
    fn push_events(&mut self, events: &[ExplorerEvent]) {
        for event in events {
            match event {
                ExplorerEvent::RoomEntered { label, dead_end } => {
                    self.feed.push(format!("[ROOM] You are in: {label}"));
                    if *dead_end {
                        self.feed
                            .push("[ROOM] No doors lead on from here.".to_string());
                    }
                }
                ExplorerEvent::ClueDiscovered { text } => {
                    self.feed.push(format!("[CLUE] New clue found: \"{text}\""));
                }
                ExplorerEvent::PathBlocked { direction } => {
                    self.feed
                        .push(format!("[WARN] There is no path to the {direction}."));
                }
                ExplorerEvent::CluesListed { clues } => {
                    if clues.is_empty() {
                        self.feed
                            .push("[BOARD] No clues collected yet.".to_string());
                    } else {
                        self.feed
                            .push("[BOARD] Clues collected (alphabetical):".to_string());
                        for clue in clues {
                            self.feed.push(format!("[BOARD]   - {clue}"));
                        }
                    }
                }
                ExplorerEvent::OnlyExitRemains => {
                    self.feed.push(
                        "[WARN] Dead end. Only [q] ends the investigation.".to_string(),
                    );
                }
                ExplorerEvent::InvalidCommand { input } => {
                    self.feed.push(format!(
                        "[WARN] Unknown command '{input}'. Try l, r, c or q."
                    ));
                }
                ExplorerEvent::Ended => {
                    self.feed
                        .push("[SYSTEM] You close your notebook and end the search.".to_string());
                }
            }
        }
    }

    /// Render the current screen
    pub fn render(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::MainMenu => self.render_menu(frame),
            Screen::Briefing => self.render_briefing(frame),
            Screen::Playing => self.render_playing(frame),
            Screen::Report => self.render_report(frame),
        }

        if self.show_help {
            self.render_help(frame);
        }
    }

    fn render_menu(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),   // Logo
                Constraint::Length(7), // Menu
            ])
            .split(frame.size());

        let logo = Paragraph::new(LOGO)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.header));
        frame.render_widget(logo, chunks[0]);

        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| ListItem::new(Line::from(*item)))
            .collect();
        let menu = List::new(items)
            .block(styled_block("Main Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(menu, chunks[1], &mut self.menu_state);
    }

    fn render_briefing(&self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.size());

        self.render_header(frame, chunks[0]);

        let briefing = Paragraph::new(self.game.case.synopsis.clone())
            .block(styled_block("Briefing", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(briefing, chunks[1]);

        let hint = Paragraph::new("Press Enter to begin, Esc for the menu")
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.dim));
        frame.render_widget(hint, chunks[2]);
    }

    fn render_playing(&self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.size());
        self.render_header(frame, chunks[0]);

        let content = create_content_layout(chunks[1]);
        self.render_room_panel(frame, content[0]);
        self.render_feed(frame, content[1]);

        let status = Paragraph::new(self.game.status_line())
            .block(styled_block("Status", &self.theme))
            .style(Style::default().fg(self.theme.fg));
        frame.render_widget(status, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.game.case.title),
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("- press ? for help", Style::default().fg(self.theme.dim)),
        ]);
        let header = Paragraph::new(title).block(styled_block("Case", &self.theme));
        frame.render_widget(header, area);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect) {
        let (left, right) = self.game.exits();
        let mut lines = vec![
            Line::from(Span::styled(
                self.game.current_room().to_string(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if left {
            lines.push(Line::from("  [l] Take the left door"));
        }
        if right {
            lines.push(Line::from("  [r] Take the right door"));
        }
        if !left && !right {
            lines.push(Line::from(Span::styled(
                "  This room is a dead end.",
                Style::default().fg(self.theme.warning),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("  [c] Review the case board"));
        lines.push(Line::from("  [q] End the investigation"));

        let panel = Paragraph::new(lines).block(styled_block("Room", &self.theme));
        frame.render_widget(panel, area);
    }

    fn render_feed(&self, frame: &mut Frame, area: Rect) {
        // Keep the tail of the feed visible.
        let visible = area.height.saturating_sub(2) as usize;
        let start = self.feed.len().saturating_sub(visible);

        let lines: Vec<Line> = self.feed[start..]
            .iter()
            .map(|entry| {
                let style = if entry.starts_with("[CLUE]") {
                    Style::default().fg(self.theme.clue)
                } else if entry.starts_with("[WARN]") {
                    Style::default().fg(self.theme.warning)
                } else if entry.starts_with("[BOARD]") {
                    Style::default().fg(self.theme.accent)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                Line::from(Span::styled(entry.clone(), style))
            })
            .collect();

        let feed = Paragraph::new(lines)
            .block(styled_block("Notebook", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(feed, area);
    }

    fn render_report(&self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.size());
        self.render_header(frame, chunks[0]);

        let text = self
            .report
            .as_ref()
            .map(CaseReport::to_string)
            .unwrap_or_else(|| "The case was closed before it was opened.".to_string());
        let report = Paragraph::new(text)
            .block(styled_block("Final Report", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(report, chunks[1]);

        let hint = Paragraph::new("Press q to leave the manor")
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.dim));
        frame.render_widget(hint, chunks[2]);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = frame.size();
        let paragraph = Paragraph::new(HELP_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.fg));
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}
