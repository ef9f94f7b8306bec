//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates input events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One event at a time: read an event, route it to an action, apply the
//! action with `update()`, carry out the returned `Effect`, redraw. The next
//! event is only read once the screen shows the result of the previous one.
//! While idle the loop sleeps up to 500ms per poll and does not redraw.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Destination, Screen};
use crate::core::profile::Profile;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EditEvent, EditProfileForm, FormFocus};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::ui::HitTarget;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core state)
#[derive(Default)]
pub struct TuiState {
    /// Edit Profile draft; present only while the editor is open
    pub edit_form: Option<EditProfileForm>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are filtered in event::translate
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes, mouse input disabled: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(IDLE_POLL) else {
            continue;
        };
        needs_redraw = true;

        let frame_area = terminal.get_frame().area();
        if handle_event(app, tui, &event, frame_area) {
            info!("Quit requested");
            return Ok(());
        }
    }
}

/// Route one input event. Returns `true` when the app should quit.
///
/// `frame_area` is the full terminal area, used to resolve mouse clicks
/// against the current layout.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: Rect,
) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        TuiEvent::Resize => return false,
        TuiEvent::MouseClick(column, row) => {
            return handle_click(app, tui, *column, *row, frame_area);
        }
        _ => {}
    }

    let screen = app.screen();
    if screen == Screen::EditProfile {
        let form = tui
            .edit_form
            .get_or_insert_with(|| EditProfileForm::new(app.profile.profile()));
        return match form.handle_event(event) {
            Some(EditEvent::Save(draft)) => dispatch(app, tui, save_action(draft)),
            None => false,
        };
    }

    // Outside the editor every screen has a bar destination
    let Some(current) = screen.destination() else {
        return false;
    };
    let action = match event {
        TuiEvent::Escape | TuiEvent::InputChar('q') => Action::Quit,
        TuiEvent::InputChar('1') => Action::SelectDestination(Destination::Home),
        TuiEvent::InputChar('2') => Action::SelectDestination(Destination::Trips),
        TuiEvent::InputChar('3') => Action::SelectDestination(Destination::Profile),
        TuiEvent::CursorLeft | TuiEvent::FocusPrev => Action::SelectDestination(current.prev()),
        TuiEvent::CursorRight | TuiEvent::FocusNext => Action::SelectDestination(current.next()),
        TuiEvent::Submit | TuiEvent::InputChar('e') if screen == Screen::Profile => {
            Action::EditProfile
        }
        _ => return false,
    };
    dispatch(app, tui, action)
}

fn handle_click(
    app: &mut App,
    tui: &mut TuiState,
    column: u16,
    row: u16,
    frame_area: Rect,
) -> bool {
    let target = ui::hit_test(column, row, frame_area, app.screen());
    debug!("Click at ({}, {}) -> {:?}", column, row, target);
    match target {
        Some(HitTarget::Destination(destination)) => {
            dispatch(app, tui, Action::SelectDestination(destination))
        }
        Some(HitTarget::EditButton) => dispatch(app, tui, Action::EditProfile),
        Some(HitTarget::Form(focus)) => {
            let form = tui
                .edit_form
                .get_or_insert_with(|| EditProfileForm::new(app.profile.profile()));
            form.set_focus(focus);
            if focus == FormFocus::SaveButton {
                let draft = form.draft();
                return dispatch(app, tui, save_action(draft));
            }
            false
        }
        None => false,
    }
}

fn save_action(draft: Profile) -> Action {
    Action::SaveProfile {
        name: draft.name,
        vehicle_model: draft.vehicle_model,
        phone_number: draft.phone_number,
    }
}

/// Apply an action and carry out its effect. Returns `true` on quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::OpenEditor(profile) => {
            tui.edit_form = Some(EditProfileForm::new(&profile));
            false
        }
        Effect::CloseEditor => {
            tui.edit_form = None;
            false
        }
        Effect::Quit => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{editing_app, test_app};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        let mut quit = false;
        for event in events {
            quit = handle_event(app, tui, event, AREA);
        }
        quit
    }

    fn chars(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_number_keys_select_destinations() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::InputChar('2')]);
        assert_eq!(app.screen(), Screen::Trips);
        send(&mut app, &mut tui, &[TuiEvent::InputChar('3')]);
        assert_eq!(app.screen(), Screen::Profile);
        send(&mut app, &mut tui, &[TuiEvent::InputChar('1')]);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_arrows_cycle_destinations() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::CursorLeft]);
        assert_eq!(app.screen(), Screen::Profile);
        send(&mut app, &mut tui, &[TuiEvent::CursorRight, TuiEvent::FocusNext]);
        assert_eq!(app.screen(), Screen::Trips);
    }

    #[test]
    fn test_edit_key_only_on_profile() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::InputChar('e'), TuiEvent::Submit]);
        assert_eq!(app.screen(), Screen::Home);
        assert!(tui.edit_form.is_none());

        send(&mut app, &mut tui, &[TuiEvent::InputChar('3'), TuiEvent::InputChar('e')]);
        assert_eq!(app.screen(), Screen::EditProfile);
        assert_eq!(tui.edit_form.as_ref().map(|f| f.draft()), Some(Profile::default()));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]));
        assert!(send(&mut app, &mut tui, &[TuiEvent::Escape]));
        assert!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]));
    }

    #[test]
    fn test_editor_swallows_navigation_keys() {
        let mut app = editing_app();
        let mut tui = TuiState::new();

        let quit = send(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('1'), TuiEvent::InputChar('q'), TuiEvent::Escape],
        );
        assert!(!quit);
        assert_eq!(app.screen(), Screen::EditProfile);
        assert_eq!(
            tui.edit_form.as_ref().map(|f| f.draft().name),
            Some("Juan Motero1q".to_string())
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_editor() {
        let mut app = editing_app();
        let mut tui = TuiState::new();
        assert!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]));
    }

    #[test]
    fn test_save_commits_draft_and_closes_editor() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::InputChar('3'), TuiEvent::Submit]);
        send(&mut app, &mut tui, &[TuiEvent::FocusNext, TuiEvent::CursorEnd]);
        send(&mut app, &mut tui, &vec![TuiEvent::Backspace; 3]);
        send(&mut app, &mut tui, &chars("250"));
        send(&mut app, &mut tui, &[TuiEvent::Save]);

        assert_eq!(app.screen(), Screen::Profile);
        assert!(tui.edit_form.is_none());
        assert_eq!(
            app.profile.profile(),
            &Profile::new("Juan Motero", "Honda XR 250", "300 123 4567")
        );
    }

    #[test]
    fn test_clicks_drive_navigation_and_save() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let layout = ui::shell_layout(AREA);
        let [_, _, profile_tab] = components::nav_bar::item_areas(layout.nav_bar);

        handle_event(
            &mut app,
            &mut tui,
            &TuiEvent::MouseClick(profile_tab.x, profile_tab.y),
            AREA,
        );
        assert_eq!(app.screen(), Screen::Profile);

        let button = components::profile::button_area(layout.body);
        handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(button.x + 1, button.y + 1), AREA);
        assert_eq!(app.screen(), Screen::EditProfile);

        // Bar clicks are ignored while editing
        handle_event(
            &mut app,
            &mut tui,
            &TuiEvent::MouseClick(profile_tab.x, profile_tab.y),
            AREA,
        );
        assert_eq!(app.screen(), Screen::EditProfile);

        let form = components::edit_profile::form_layout(layout.body);
        let phone = form.fields[2];
        handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(phone.x + 1, phone.y + 1), AREA);
        assert_eq!(tui.edit_form.as_ref().map(|f| f.focus()), Some(FormFocus::Field(2)));

        send(&mut app, &mut tui, &chars("9"));
        let save = form.save_button;
        handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(save.x + 1, save.y + 1), AREA);

        assert_eq!(app.screen(), Screen::Profile);
        assert_eq!(app.profile.profile().phone_number, "300 123 45679");
    }

    #[test]
    fn test_resize_is_ignored() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(!send(&mut app, &mut tui, &[TuiEvent::Resize]));
        assert_eq!(app.screen(), Screen::Home);
    }
}
