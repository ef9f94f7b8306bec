//! # Profile Screen
//!
//! Read-only view of the profile plus the "Editar Perfil" button.
//!
//! The screen never edits anything itself. A click on the button is resolved
//! by the shell through [`button_area`] and becomes `Action::EditProfile`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::profile::Profile;
use crate::tui::component::Component;

pub const PHOTO_PLACEHOLDER: &str = "Foto de perfil aquí (pendiente)";
pub const EDIT_BUTTON_LABEL: &str = "📝 Editar Perfil";

const BUTTON_HEIGHT: u16 = 3;
/// Borders plus one column of padding on each side
const BUTTON_H_OVERHEAD: u16 = 4;

struct ProfileLayout {
    photo: Rect,
    name: Rect,
    vehicle: Rect,
    phone: Rect,
    button: Rect,
}

fn layout(area: Rect) -> ProfileLayout {
    let area = area.inner(Margin::new(2, 0));
    let [photo, _, name, _, vehicle, _, phone, _, button_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(area);

    let button_width = EDIT_BUTTON_LABEL.width() as u16 + BUTTON_H_OVERHEAD;
    let [button] = Layout::horizontal([Constraint::Length(button_width)])
        .flex(Flex::Center)
        .areas(button_row);

    ProfileLayout {
        photo,
        name,
        vehicle,
        phone,
        button,
    }
}

/// Where the edit button sits for a given body area.
pub fn button_area(body: Rect) -> Rect {
    layout(body).button
}

pub struct ProfileScreen<'a> {
    pub profile: &'a Profile,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, style: Style) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled(label, style),
        Span::styled(value, style),
    ]))
    .centered()
}

impl Component for ProfileScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = layout(area);
        let plain = Style::default();

        frame.render_widget(
            Paragraph::new(PHOTO_PLACEHOLDER)
                .centered()
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
            layout.photo,
        );
        frame.render_widget(
            field_line(
                "👤 Nombre: ",
                &self.profile.name,
                plain.add_modifier(Modifier::BOLD),
            ),
            layout.name,
        );
        frame.render_widget(
            field_line("🛵 Moto: ", &self.profile.vehicle_model, plain),
            layout.vehicle,
        );
        frame.render_widget(
            field_line("📞 Teléfono: ", &self.profile.phone_number, plain),
            layout.phone,
        );

        let button = Paragraph::new(EDIT_BUTTON_LABEL)
            .centered()
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(button, layout.button);
    }
}
