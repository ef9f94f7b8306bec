//! # Edit Profile Form
//!
//! Three text fields seeded from the current profile plus a save button.
//!
//! Follows the persistent state pattern: the form lives in `TuiState` from
//! the moment the editor opens until it is saved, and holds the draft. The
//! profile store is untouched until [`EditEvent::Save`] reaches the shell.
//!
//! ## Focus
//!
//! ```text
//! Nombre ⇄ Moto ⇄ Teléfono ⇄ [Guardar] ⇄ (wraps to Nombre)
//! ```
//!
//! Tab/Down move forward, Shift+Tab/Up move back. Enter on a field moves
//! forward; Enter on the button saves. Ctrl+S saves from anywhere.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::profile::Profile;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FIELD_HEIGHT, TextField};
use crate::tui::event::TuiEvent;

pub const SAVE_BUTTON_LABEL: &str = "💾 Guardar";
pub const FIELD_LABELS: [&str; 3] = ["Nombre", "Moto", "Teléfono"];

const FIELD_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(usize),
    SaveButton,
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Field(i) if i + 1 < FIELD_COUNT => FormFocus::Field(i + 1),
            FormFocus::Field(_) => FormFocus::SaveButton,
            FormFocus::SaveButton => FormFocus::Field(0),
        }
    }

    fn prev(self) -> Self {
        match self {
            FormFocus::Field(0) => FormFocus::SaveButton,
            FormFocus::Field(i) => FormFocus::Field(i - 1),
            FormFocus::SaveButton => FormFocus::Field(FIELD_COUNT - 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Save pressed; carries the draft values
    Save(Profile),
}

/// Screen areas of the form's clickable parts.
pub struct FormLayout {
    pub fields: [Rect; FIELD_COUNT],
    pub save_button: Rect,
}

/// Lay the form out inside the body area.
pub fn form_layout(body: Rect) -> FormLayout {
    let area = body.inner(Margin::new(2, 0));
    let [name, _, vehicle, _, phone, _, save_button] = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .areas(area);

    FormLayout {
        fields: [name, vehicle, phone],
        save_button,
    }
}

pub struct EditProfileForm {
    fields: [TextField; FIELD_COUNT],
    focus: FormFocus,
}

impl EditProfileForm {
    /// Seed a draft from `profile`, focusing the first field.
    pub fn new(profile: &Profile) -> Self {
        let mut form = Self {
            fields: [
                TextField::new(FIELD_LABELS[0], profile.name.clone()),
                TextField::new(FIELD_LABELS[1], profile.vehicle_model.clone()),
                TextField::new(FIELD_LABELS[2], profile.phone_number.clone()),
            ],
            focus: FormFocus::Field(0),
        };
        form.sync_focus();
        form
    }

    /// The draft as it stands.
    pub fn draft(&self) -> Profile {
        Profile::new(
            self.fields[0].value.clone(),
            self.fields[1].value.clone(),
            self.fields[2].value.clone(),
        )
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = match focus {
            FormFocus::Field(i) if i >= FIELD_COUNT => FormFocus::SaveButton,
            other => other,
        };
        self.sync_focus();
    }

    fn save(&self) -> EditEvent {
        EditEvent::Save(self.draft())
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = self.focus == FormFocus::Field(i);
        }
    }
}

impl EventHandler for EditProfileForm {
    type Event = EditEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Save => Some(self.save()),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.set_focus(self.focus.next());
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.set_focus(self.focus.prev());
                None
            }
            TuiEvent::Submit => match self.focus {
                FormFocus::SaveButton => Some(self.save()),
                FormFocus::Field(_) => {
                    self.set_focus(self.focus.next());
                    None
                }
            },
            _ => match self.focus {
                FormFocus::Field(i) => {
                    self.fields[i].handle_event(event);
                    None
                }
                FormFocus::SaveButton => None,
            },
        }
    }
}

impl Component for EditProfileForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = form_layout(area);

        for (field, field_area) in self.fields.iter_mut().zip(layout.fields) {
            field.render(frame, field_area);
        }

        let button_style = if self.focus == FormFocus::SaveButton {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(SAVE_BUTTON_LABEL)
            .centered()
            .style(button_style)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(button, layout.save_button);
    }
}
