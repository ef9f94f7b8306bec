//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::action::{Action, update};
use crate::core::navigation::Destination;
use crate::core::profile::Profile;
use crate::core::state::App;

/// Creates a test App seeded with the default profile.
pub fn test_app() -> App {
    App::new(Profile::default())
}

/// Creates a test App already sitting on the Edit Profile screen.
pub fn editing_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::SelectDestination(Destination::Profile));
    update(&mut app, Action::EditProfile);
    app
}

/// Flattens a test terminal's buffer into one string.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
