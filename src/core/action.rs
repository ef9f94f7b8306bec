//! # Actions
//!
//! Everything that can change app state becomes an `Action`.
//! User clicks "Viajes"? That's `Action::SelectDestination(Destination::Trips)`.
//! User presses Guardar? That's `Action::SaveProfile { .. }`.
//!
//! `update()` applies an action to the state and returns an [`Effect`] for the
//! shell to carry out (open or drop the edit form, quit). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::navigation::{Destination, Screen};
use crate::core::profile::Profile;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A bottom-bar item was selected.
    SelectDestination(Destination),
    /// The Profile screen's edit button was pressed.
    EditProfile,
    /// The Edit Profile screen's save button was pressed with these draft values.
    SaveProfile {
        name: String,
        vehicle_model: String,
        phone_number: String,
    },
    Quit,
}

/// Work the shell has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Seed a fresh edit draft from this profile.
    OpenEditor(Profile),
    /// Drop the edit draft.
    CloseEditor,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.screen());
    match action {
        Action::SelectDestination(destination) => {
            // The bar is inert while editing; Guardar is the only way out.
            if app.screen() == Screen::EditProfile {
                debug!("Ignoring {:?} while editing profile", destination);
                return Effect::None;
            }
            app.navigation.set_current(destination.screen());
            Effect::None
        }
        Action::EditProfile => {
            if app.screen() != Screen::Profile {
                debug!("Ignoring EditProfile outside the Profile screen");
                return Effect::None;
            }
            app.navigation.set_current(Screen::EditProfile);
            Effect::OpenEditor(app.profile.profile().clone())
        }
        Action::SaveProfile {
            name,
            vehicle_model,
            phone_number,
        } => {
            if app.screen() != Screen::EditProfile {
                debug!("Ignoring SaveProfile outside the Edit Profile screen");
                return Effect::None;
            }
            app.profile.update(name, vehicle_model, phone_number);
            app.navigation.set_current(Screen::Profile);
            Effect::CloseEditor
        }
        Action::Quit => Effect::Quit,
    }
}
