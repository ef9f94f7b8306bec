use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::navigation::{Destination, Screen};
use crate::core::state::App;
use crate::core::trip::SAMPLE_TRIPS;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::edit_profile::{FormFocus, form_layout};
use crate::tui::components::nav_bar::{self, NAV_BAR_HEIGHT};
use crate::tui::components::profile;
use crate::tui::components::{
    APP_TITLE, EditProfileForm, HomeScreen, NavBar, ProfileScreen, TitleBar, TripsScreen,
};

/// Header, body and bottom bar for a given frame area.
pub struct ShellLayout {
    pub header: Rect,
    pub body: Rect,
    pub nav_bar: Rect,
}

pub fn shell_layout(area: Rect) -> ShellLayout {
    use Constraint::{Length, Min};
    let [header, body, nav_bar] =
        Layout::vertical([Length(1), Min(0), Length(NAV_BAR_HEIGHT)]).areas(area);
    ShellLayout {
        header,
        body,
        nav_bar,
    }
}

/// Something clickable on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Destination(Destination),
    EditButton,
    Form(FormFocus),
}

/// Hit test: what (if anything) is under the given screen position.
pub fn hit_test(column: u16, row: u16, frame_area: Rect, screen: Screen) -> Option<HitTarget> {
    let layout = shell_layout(frame_area);
    let position = Position::new(column, row);

    if layout.nav_bar.contains(position) {
        return nav_bar::hit_test(layout.nav_bar, column, row).map(HitTarget::Destination);
    }
    if !layout.body.contains(position) {
        return None;
    }

    match screen {
        Screen::Profile => profile::button_area(layout.body)
            .contains(position)
            .then_some(HitTarget::EditButton),
        Screen::EditProfile => {
            let form = form_layout(layout.body);
            if form.save_button.contains(position) {
                return Some(HitTarget::Form(FormFocus::SaveButton));
            }
            form.fields
                .iter()
                .position(|r| r.contains(position))
                .map(|i| HitTarget::Form(FormFocus::Field(i)))
        }
        Screen::Home | Screen::Trips => None,
    }
}

fn hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Home | Screen::Trips => " 1-3/←→ Navegar  q Salir ",
        Screen::Profile => " 1-3/←→ Navegar  e Editar  q Salir ",
        Screen::EditProfile => " Tab Campo  Enter/Ctrl+S Guardar ",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = shell_layout(frame.area());
    let screen = app.screen();

    TitleBar::new(APP_TITLE).render(frame, layout.header);

    match screen {
        Screen::Home => HomeScreen.render(frame, layout.body),
        Screen::Trips => TripsScreen::new(&SAMPLE_TRIPS).render(frame, layout.body),
        Screen::Profile => ProfileScreen::new(app.profile.profile()).render(frame, layout.body),
        Screen::EditProfile => {
            // The shell opens the form on Effect::OpenEditor; seed one if it is missing
            let form = tui
                .edit_form
                .get_or_insert_with(|| EditProfileForm::new(app.profile.profile()));
            form.render(frame, layout.body);
        }
    }

    NavBar::new(
        screen.destination(),
        screen != Screen::EditProfile,
        hint(screen),
    )
    .render(frame, layout.nav_bar);
}
