//! # NavBar Component
//!
//! Bottom navigation bar with the three destinations: Inicio, Viajes, Perfil.
//!
//! The active destination is highlighted. On Edit Profile there is no active
//! destination and the bar is drawn dimmed, since selections are ignored
//! there. A key-hint line sits on the bar's bottom border.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::navigation::Destination;
use crate::tui::component::Component;

/// Rows the bar occupies: top border, labels, bottom border with hints.
pub const NAV_BAR_HEIGHT: u16 = 3;

pub struct NavBar {
    /// Highlighted destination (None on Edit Profile)
    pub active: Option<Destination>,
    /// Whether selections currently do anything
    pub enabled: bool,
    /// Key hints shown on the bottom border
    pub hint: &'static str,
}

impl NavBar {
    pub fn new(active: Option<Destination>, enabled: bool, hint: &'static str) -> Self {
        Self {
            active,
            enabled,
            hint,
        }
    }

    fn block(&self) -> Block<'static> {
        let border_style = if self.enabled {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_bottom(Line::from(self.hint).centered())
    }

    fn item_style(&self, destination: Destination) -> Style {
        if self.active == Some(destination) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if self.enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

/// The clickable cell of each destination, in `Destination::ALL` order.
pub fn item_areas(bar: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(bar);
    Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(inner)
}

/// The destination under a screen position, if any.
pub fn hit_test(bar: Rect, column: u16, row: u16) -> Option<Destination> {
    let position = Position::new(column, row);
    item_areas(bar)
        .into_iter()
        .zip(Destination::ALL)
        .find(|(area, _)| area.contains(position))
        .map(|(_, destination)| destination)
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.block(), area);

        for (cell, destination) in item_areas(area).into_iter().zip(Destination::ALL) {
            let item = Paragraph::new(destination.label())
                .centered()
                .style(self.item_style(destination));
            frame.render_widget(item, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar_area() -> Rect {
        Rect::new(0, 10, 30, NAV_BAR_HEIGHT)
    }

    #[test]
    fn test_renders_all_labels_in_order() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = NavBar::new(Some(Destination::Home), true, "");

        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        let inicio = text.find("Inicio").unwrap();
        let viajes = text.find("Viajes").unwrap();
        let perfil = text.find("Perfil").unwrap();
        assert!(inicio < viajes && viajes < perfil);
    }

    #[test]
    fn test_active_item_is_highlighted() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = NavBar::new(Some(Destination::Trips), true, "");

        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let [home, trips, _] = item_areas(Rect::new(0, 0, 30, 3));
        assert_eq!(buffer[(trips.x, trips.y)].bg, Color::Yellow);
        assert_ne!(buffer[(home.x, home.y)].bg, Color::Yellow);
    }

    #[test]
    fn test_no_highlight_without_active_destination() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = NavBar::new(None, false, "");

        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        for cell in item_areas(Rect::new(0, 0, 30, 3)) {
            assert_ne!(buffer[(cell.x, cell.y)].bg, Color::Yellow);
        }
    }

    #[test]
    fn test_hint_on_bottom_border() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = NavBar::new(Some(Destination::Home), true, " q Salir ");

        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("q Salir"));
    }

    #[test]
    fn test_hit_test_maps_columns_to_destinations() {
        let area = bar_area();
        let [home, trips, profile] = item_areas(area);
        assert_eq!(hit_test(area, home.x, home.y), Some(Destination::Home));
        assert_eq!(hit_test(area, trips.x + 1, trips.y), Some(Destination::Trips));
        assert_eq!(
            hit_test(area, profile.x + profile.width - 1, profile.y),
            Some(Destination::Profile)
        );
    }

    #[test]
    fn test_hit_test_misses_borders_and_outside() {
        let area = bar_area();
        assert_eq!(hit_test(area, 5, area.y), None);
        assert_eq!(hit_test(area, 5, area.y + 2), None);
        assert_eq!(hit_test(area, 5, 0), None);
    }
}
