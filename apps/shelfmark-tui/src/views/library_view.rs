//! Library list view
//!
//! Ordered book list with a movable selection; removal targets the
//! selected position.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use shelfmark_core::BookRecord;

/// Library view state
pub struct LibraryView {
    /// Currently selected book index
    pub selected: usize,
}

impl LibraryView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Render the book list, or the empty-library notice.
    pub fn render(&self, frame: &mut Frame, area: Rect, books: &[BookRecord]) {
        let block = Block::default()
            .title(format!("Your Library ({} books)", books.len()))
            .borders(Borders::ALL);

        if books.is_empty() {
            let notice = Paragraph::new("Your library is empty. Add some books to get started.")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(notice, area);
            return;
        }

        let items: Vec<ListItem> = books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let status = if book.read_status { "Read" } else { "Unread" };
                let status_color = if book.read_status {
                    Color::Green
                } else {
                    Color::Yellow
                };

                let style = if i == self.selected {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{status:<6}] "),
                        Style::default().fg(status_color),
                    ),
                    Span::styled(
                        format!(
                            "{} by {} ({}, {})",
                            book.title, book.author, book.publication_year, book.genre
                        ),
                        style,
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }

    /// Move selection to the next book
    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move selection to the previous book
    pub fn prev(&mut self, count: usize) {
        if count > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = count - 1;
            }
        }
    }

    /// Keep the selection in range after removals.
    pub fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }
}

impl Default for LibraryView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let mut view = LibraryView::new();
        view.next(3);
        view.next(3);
        assert_eq!(view.selected, 2);
        view.next(3);
        assert_eq!(view.selected, 0);
        view.prev(3);
        assert_eq!(view.selected, 2);
    }

    #[test]
    fn navigation_on_empty_list_stays_put() {
        let mut view = LibraryView::new();
        view.next(0);
        view.prev(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn clamp_after_removal() {
        let mut view = LibraryView { selected: 2 };
        view.clamp(2);
        assert_eq!(view.selected, 1);
        view.clamp(0);
        assert_eq!(view.selected, 0);
    }
}
