//! # TextField Component
//!
//! Single-line labelled text input, the building block of the edit form.
//!
//! ## State Management
//!
//! `value` and the cursor (a byte offset into `value`) are internal state.
//! `focused` is a prop set by the owning form; only the focused field draws a
//! terminal cursor.
//!
//! Text wider than the field scrolls horizontally so the cursor stays visible.
//! Widths are measured in terminal columns, not bytes or chars.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top + bottom borders
pub const FIELD_HEIGHT: u16 = 3;
/// Left + right borders
const HORIZONTAL_OVERHEAD: u16 = 2;

/// Emitted when the value or cursor changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChanged;

pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
    /// Byte offset in `value` (0..=value.len())
    cursor: usize,
}

impl TextField {
    /// New field with the cursor at the end of `value`.
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            label,
            value,
            focused: false,
            cursor,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Columns to skip so the cursor fits in `inner_width` columns.
    fn scroll_columns(&self, inner_width: u16) -> usize {
        let cursor_col = self.value[..self.cursor].width();
        // Keep one column free for the cursor itself
        cursor_col.saturating_sub((inner_width as usize).saturating_sub(1))
    }
}

/// Drop leading characters of `text` until `skip` columns are consumed.
fn skip_columns(text: &str, skip: usize) -> &str {
    let mut consumed = 0;
    for (i, c) in text.char_indices() {
        if consumed >= skip {
            return &text[i..];
        }
        consumed += c.width().unwrap_or(0);
    }
    ""
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let skip = self.scroll_columns(inner_width);
        let visible = skip_columns(&self.value, skip);

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        frame.render_widget(Paragraph::new(visible).block(block), area);

        if self.focused {
            let cursor_col = self.value[..self.cursor].width().saturating_sub(skip) as u16;
            let x = area.x + 1 + cursor_col.min(inner_width.saturating_sub(1));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldChanged;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(FieldChanged)
            }
            TuiEvent::Paste(text) => {
                let flattened: String = text
                    .chars()
                    .filter(|c| *c != '\r')
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                self.insert_str(&flattened);
                Some(FieldChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.value, self.cursor);
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.value.len() {
                    let next = next_char_boundary(&self.value, self.cursor);
                    self.value.drain(self.cursor..next);
                    Some(FieldChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                FieldChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.value.len()).then(|| {
                self.cursor = next_char_boundary(&self.value, self.cursor);
                FieldChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.value.len()).then(|| {
                self.cursor = self.value.len();
                FieldChanged
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_new_puts_cursor_at_end() {
        let field = TextField::new("Nombre", "Juan");
        assert_eq!(field.cursor(), 4);
        assert!(!field.focused);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new("Nombre", "");

        assert_eq!(field.handle_event(&TuiEvent::InputChar('a')), Some(FieldChanged));
        assert_eq!(field.handle_event(&TuiEvent::InputChar('ñ')), Some(FieldChanged));
        assert_eq!(field.value, "añ");

        assert_eq!(field.handle_event(&TuiEvent::Backspace), Some(FieldChanged));
        assert_eq!(field.value, "a");
        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut field = TextField::new("Moto", "XR 150");
        field.handle_event(&TuiEvent::CursorHome);
        for c in "Honda ".chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(field.value, "Honda XR 150");
    }

    #[test]
    fn test_delete_and_cursor_bounds() {
        let mut field = TextField::new("Teléfono", "300");
        assert_eq!(field.handle_event(&TuiEvent::CursorRight), None);
        assert_eq!(field.handle_event(&TuiEvent::Delete), None);

        field.handle_event(&TuiEvent::CursorHome);
        assert_eq!(field.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(field.handle_event(&TuiEvent::Delete), Some(FieldChanged));
        assert_eq!(field.value, "00");

        assert_eq!(field.handle_event(&TuiEvent::CursorEnd), Some(FieldChanged));
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut field = TextField::new("Nombre", "Peña");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(field.cursor(), 2);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.value, "Pea");
    }

    #[test]
    fn test_paste_flattens_line_breaks() {
        let mut field = TextField::new("Nombre", "");
        field.handle_event(&TuiEvent::Paste("Juan\r\nMotero".to_string()));
        assert_eq!(field.value, "Juan Motero");
        assert_eq!(field.cursor(), field.value.len());
    }

    #[test]
    fn test_unhandled_events() {
        let mut field = TextField::new("Nombre", "x");
        assert_eq!(field.handle_event(&TuiEvent::Submit), None);
        assert_eq!(field.handle_event(&TuiEvent::FocusNext), None);
        assert_eq!(field.value, "x");
    }

    #[test]
    fn test_skip_columns() {
        assert_eq!(skip_columns("abcdef", 0), "abcdef");
        assert_eq!(skip_columns("abcdef", 2), "cdef");
        assert_eq!(skip_columns("abc", 5), "");
    }

    #[test]
    fn test_render_shows_label_and_value() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new("Nombre", "Juan Motero");

        terminal
            .draw(|f| {
                field.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Nombre"));
        assert!(text.contains("Juan Motero"));
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new("Nombre", "abcdefghijklmnop");
        field.focused = true;

        terminal
            .draw(|f| {
                field.render(f, f.area());
            })
            .unwrap();

        // 10 inner columns, one kept for the cursor: the last 9 chars are shown
        let text = buffer_text(&terminal);
        assert!(text.contains("hijklmnop"));
        assert!(!text.contains("abc"));
    }

    #[test]
    fn test_focused_field_places_cursor() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new("Moto", "XR");
        field.focused = true;

        terminal
            .draw(|f| {
                field.render(f, f.area());
            })
            .unwrap();

        let position = terminal.get_cursor_position().unwrap();
        assert_eq!((position.x, position.y), (3, 1));
    }
}
