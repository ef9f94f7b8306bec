//! # Trips Screen
//!
//! The sample trips, one bordered card each, stacked from the top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::trip::Trip;
use crate::tui::component::Component;

const CARD_HEIGHT: u16 = 3;

pub struct TripsScreen<'a> {
    pub trips: &'a [Trip],
}

impl<'a> TripsScreen<'a> {
    pub fn new(trips: &'a [Trip]) -> Self {
        Self { trips }
    }
}

impl Component for TripsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.inner(Margin::new(2, 1));
        let rows = Layout::vertical(self.trips.iter().map(|_| Constraint::Length(CARD_HEIGHT)))
            .spacing(1)
            .split(area);

        for (trip, row) in self.trips.iter().zip(rows.iter()) {
            let card = Paragraph::new(trip.label).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, *row);
        }
    }
}
