//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use shelfmark_core::{LibraryConfig, LibraryStore, ShelfmarkError};

use crate::views::{AddView, CurrentView, LibraryView, StatsView};

/// Main application state
pub struct App {
    /// The library store; the only owner of book state
    pub store: LibraryStore,
    /// Which screen is shown
    pub view: CurrentView,
    /// Message shown in the bottom line
    pub status_message: Option<String>,
    /// View state for each screen
    pub library_view: LibraryView,
    pub add_view: AddView,
    pub stats_view: StatsView,
}

impl App {
    /// Create the application and load the library once. A load failure
    /// surfaces as a warning; the session continues with an empty library.
    pub fn new(config: &LibraryConfig) -> Self {
        let mut store = LibraryStore::new(config.resolve_data_file());
        let status_message = match store.load() {
            Ok(()) => None,
            Err(e) => Some(format!("Error loading library: {e}")),
        };

        Self {
            store,
            view: CurrentView::Library,
            status_message,
            library_view: LibraryView::new(),
            add_view: AddView::new(),
            stats_view: StatsView::new(),
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header with view tabs
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Message line
            ])
            .split(size);

        self.render_header(frame, chunks[0]);

        match self.view {
            CurrentView::Library => self
                .library_view
                .render(frame, chunks[1], self.store.books()),
            CurrentView::Add => self.add_view.render(frame, chunks[1]),
            CurrentView::Stats => self.stats_view.render(frame, chunks[1], &self.store.stats()),
        }

        self.render_message_line(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let tab = |view: CurrentView, key: &str| -> Span<'static> {
            let text = format!(" {}:{} ", key, view.title());
            if view == self.view {
                Span::styled(
                    text,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(text, Style::default().fg(Color::Gray))
            }
        };

        let header = Line::from(vec![
            Span::styled(" Shelfmark ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("|"),
            tab(CurrentView::Library, "1"),
            tab(CurrentView::Add, "2"),
            tab(CurrentView::Stats, "3"),
        ]);

        frame.render_widget(
            Paragraph::new(header).style(Style::default().bg(Color::DarkGray)),
            area,
        );
    }

    fn render_message_line(&self, frame: &mut Frame, area: Rect) {
        let content = match &self.status_message {
            Some(message) => message.clone(),
            None => match self.view {
                CurrentView::Library => {
                    "j/k move | d remove | 2 add book | 3 stats | q quit".to_string()
                }
                CurrentView::Add => {
                    "Tab next field | Enter add book | Esc back to library".to_string()
                }
                CurrentView::Stats => "1 library | 2 add book | q quit".to_string(),
            },
        };

        frame.render_widget(Paragraph::new(content), area);
    }

    /// Handle a key press, returns true if the app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.view {
            CurrentView::Library => self.handle_library_key(code),
            CurrentView::Add => self.handle_add_key(code, modifiers),
            CurrentView::Stats => self.handle_stats_key(code),
        }
    }

    fn handle_library_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('2') | KeyCode::Char('a') => self.switch_to(CurrentView::Add),
            KeyCode::Char('3') | KeyCode::Char('s') => self.switch_to(CurrentView::Stats),
            KeyCode::Char('j') | KeyCode::Down => self.library_view.next(self.store.len()),
            KeyCode::Char('k') | KeyCode::Up => self.library_view.prev(self.store.len()),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            _ => {}
        }
        false
    }

    fn handle_stats_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('1') | KeyCode::Esc => self.switch_to(CurrentView::Library),
            KeyCode::Char('2') => self.switch_to(CurrentView::Add),
            _ => {}
        }
        false
    }

    fn handle_add_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Esc => {
                self.add_view.reset();
                self.switch_to(CurrentView::Library);
            }
            KeyCode::Enter => self.submit_add(),
            KeyCode::Tab | KeyCode::Down => self.add_view.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.add_view.focus_prev(),
            KeyCode::Left => self.add_view.cycle_left(),
            KeyCode::Right => self.add_view.cycle_right(),
            KeyCode::Backspace => self.add_view.backspace(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.add_view.input_char(c);
            }
            _ => {}
        }
        false
    }

    fn switch_to(&mut self, view: CurrentView) {
        self.view = view;
        self.status_message = None;
    }

    fn remove_selected(&mut self) {
        if self.store.is_empty() {
            self.status_message = Some("Your library is empty.".to_string());
            return;
        }

        let index = self.library_view.selected;
        let title = self.store.books()[index].title.clone();
        match self.store.remove_book(index) {
            Ok(()) => {
                self.status_message = Some(format!("Removed \"{title}\""));
            }
            Err(e @ ShelfmarkError::Persistence(_)) => {
                // The removal stands in memory; the file catches up on the
                // next successful flush.
                self.status_message = Some(format!("Warning: {e}"));
            }
            Err(e) => {
                self.status_message = Some(format!("Error removing book: {e}"));
            }
        }
        self.library_view.clamp(self.store.len());
    }

    fn submit_add(&mut self) {
        let year = match self.add_view.year.trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                self.status_message = Some("Publication year must be a number".to_string());
                return;
            }
        };

        let result = self.store.add_book(
            self.add_view.title.clone(),
            self.add_view.author.clone(),
            year,
            self.add_view.genre(),
            self.add_view.read_status,
        );

        match result {
            Ok(()) => {
                self.add_view.reset();
                self.status_message = Some("Book added successfully!".to_string());
            }
            Err(e @ ShelfmarkError::Persistence(_)) => {
                // The book is in memory despite the failed flush
                self.add_view.reset();
                self.status_message = Some(format!("Warning: {e}"));
            }
            Err(e) => {
                self.status_message = Some(format!("{e}"));
            }
        }
    }
}
