//! # TitleBar Component
//!
//! The persistent top bar. It shows the app title and nothing else, on every
//! screen.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. The title is a prop so tests and other
//! shells can pass their own, but the app always passes [`APP_TITLE`].
//!
//! ### Single line
//!
//! A plain styled `Line` rather than a bordered `Block`: the header is always
//! one row tall and the body gets the rest of the height.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const APP_TITLE: &str = "MotoTaxiApp";

pub struct TitleBar {
    pub title: &'static str,
}

impl TitleBar {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(Span::raw(format!(" {}", self.title)));
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
