//! Add-book form view
//!
//! Holds the form buffers until submission; the store does the actual
//! validation, so the form accepts anything typeable except non-digits
//! in the year field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shelfmark_core::Genre;

/// Fields of the add-book form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Year,
    Genre,
    ReadStatus,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Year,
            FormField::Year => FormField::Genre,
            FormField::Genre => FormField::ReadStatus,
            FormField::ReadStatus => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::ReadStatus,
            FormField::Author => FormField::Title,
            FormField::Year => FormField::Author,
            FormField::Genre => FormField::Year,
            FormField::ReadStatus => FormField::Genre,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Book Title",
            FormField::Author => "Author",
            FormField::Year => "Publication Year",
            FormField::Genre => "Genre",
            FormField::ReadStatus => "Read Status",
        }
    }

    /// Whether the field takes typed text
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Title | FormField::Author | FormField::Year)
    }
}

/// Add form state
pub struct AddView {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre_index: usize,
    pub read_status: bool,
    pub focus: FormField,
}

impl AddView {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            year: String::new(),
            genre_index: 0,
            read_status: false,
            focus: FormField::Title,
        }
    }

    /// Clear the form for the next entry.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The currently selected genre.
    pub fn genre(&self) -> Genre {
        Genre::ALL[self.genre_index]
    }

    /// Left/right on the focused field: cycle the genre or flip the
    /// read status; text fields ignore it.
    pub fn cycle_left(&mut self) {
        match self.focus {
            FormField::Genre => {
                let n = Genre::ALL.len();
                self.genre_index = (self.genre_index + n - 1) % n;
            }
            FormField::ReadStatus => self.read_status = !self.read_status,
            _ => {}
        }
    }

    pub fn cycle_right(&mut self) {
        match self.focus {
            FormField::Genre => {
                self.genre_index = (self.genre_index + 1) % Genre::ALL.len();
            }
            FormField::ReadStatus => self.read_status = !self.read_status,
            _ => {}
        }
    }

    /// Route a typed character to the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Author => self.author.push(c),
            FormField::Year => {
                if c.is_ascii_digit() {
                    self.year.push(c);
                }
            }
            FormField::Genre => {}
            FormField::ReadStatus => {
                if c == ' ' {
                    self.read_status = !self.read_status;
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Author => {
                self.author.pop();
            }
            FormField::Year => {
                self.year.pop();
            }
            FormField::Genre | FormField::ReadStatus => {}
        }
    }

    /// Render the form.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Author
                Constraint::Length(3), // Year
                Constraint::Length(3), // Genre
                Constraint::Length(3), // Read status
                Constraint::Min(0),
            ])
            .split(area);

        self.render_field(frame, chunks[0], FormField::Title, self.title.clone());
        self.render_field(frame, chunks[1], FormField::Author, self.author.clone());
        self.render_field(frame, chunks[2], FormField::Year, self.year.clone());
        self.render_field(
            frame,
            chunks[3],
            FormField::Genre,
            format!("< {} >", self.genre()),
        );
        self.render_field(
            frame,
            chunks[4],
            FormField::ReadStatus,
            if self.read_status { "Read" } else { "Unread" }.to_string(),
        );
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: FormField, value: String) {
        let focused = self.focus == field;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        // Cursor marker on the focused text field
        let text = if focused && field.is_text() {
            format!("{value}_")
        } else {
            value
        };

        let block = Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

impl Default for AddView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_order_wraps_both_ways() {
        let mut field = FormField::Title;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::ReadStatus);
    }

    #[test]
    fn year_field_only_accepts_digits() {
        let mut view = AddView::new();
        view.focus = FormField::Year;
        for c in "19x6y5".chars() {
            view.input_char(c);
        }
        assert_eq!(view.year, "1965");
    }

    #[test]
    fn genre_cycles_through_all_and_wraps() {
        let mut view = AddView::new();
        view.focus = FormField::Genre;
        assert_eq!(view.genre(), Genre::Fiction);
        for _ in 0..Genre::ALL.len() {
            view.cycle_right();
        }
        assert_eq!(view.genre(), Genre::Fiction);
        view.cycle_left();
        assert_eq!(view.genre(), Genre::History);
    }

    #[test]
    fn space_toggles_read_status_when_focused() {
        let mut view = AddView::new();
        view.focus = FormField::ReadStatus;
        view.input_char(' ');
        assert!(view.read_status);

        // Space in a text field is just text
        view.focus = FormField::Title;
        view.input_char(' ');
        assert_eq!(view.title, " ");
        assert!(view.read_status);
    }

    #[test]
    fn reset_clears_everything() {
        let mut view = AddView::new();
        view.title = "Something".to_string();
        view.read_status = true;
        view.focus = FormField::Genre;
        view.reset();
        assert!(view.title.is_empty());
        assert!(!view.read_status);
        assert_eq!(view.focus, FormField::Title);
    }
}
