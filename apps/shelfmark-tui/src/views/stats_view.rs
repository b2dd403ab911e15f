//! Statistics panel view
//!
//! Three metric panels: total books, books read, percent read.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shelfmark_core::LibraryStats;

/// Statistics view (stateless; everything derives from the store)
pub struct StatsView;

impl StatsView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, stats: &LibraryStats) {
        if stats.total_books == 0 {
            let notice = Paragraph::new("Your library is empty. Add some books to view stats.")
                .style(Style::default().fg(Color::Yellow))
                .block(
                    Block::default()
                        .title("Library Statistics")
                        .borders(Borders::ALL),
                );
            frame.render_widget(notice, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        render_metric(frame, chunks[0], "Total Books", stats.total_books.to_string());
        render_metric(frame, chunks[1], "Books Read", stats.read_books.to_string());
        render_metric(frame, chunks[2], "% Read", percent_label(stats.percent_read));
    }
}

impl Default for StatsView {
    fn default() -> Self {
        Self::new()
    }
}

fn render_metric(frame: &mut Frame, area: Rect, title: &str, value: String) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let paragraph = Paragraph::new(value)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Display formatting for the read percentage, two decimal places.
fn percent_label(percent: f64) -> String {
    format!("{percent:.2}%")
}
