//! # Home Screen
//!
//! Welcome heading and a one-sentence pitch, centered in the body.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub const WELCOME_HEADING: &str = "🚖 Bienvenido a MotoTaxiApp";
pub const WELCOME_TEXT: &str = "Conecta pasajeros con mototaxistas de manera rápida y segura.";

pub struct HomeScreen;

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.inner(Margin::new(2, 1));

        let heading = Paragraph::new(Line::from(Span::styled(
            WELCOME_HEADING,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .wrap(Wrap { trim: true });

        let body = Paragraph::new(WELCOME_TEXT)
            .centered()
            .wrap(Wrap { trim: true });

        let heading_height = heading.line_count(area.width) as u16;
        let body_height = body.line_count(area.width) as u16;

        let [heading_area, _, body_area] = Layout::vertical([
            Constraint::Length(heading_height),
            Constraint::Length(1), // Spacer
            Constraint::Length(body_height),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(heading, heading_area);
        frame.render_widget(body, body_area);
    }
}
