//! # Application State
//!
//! Core state for the app. Domain data only; the Edit Profile draft and
//! other presentation state live in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: NavigationState   // visible screen
//! └── profile: ProfileStore         // name, vehicle, phone
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::navigation::{NavigationState, Screen};
use crate::core::profile::{Profile, ProfileStore};

#[derive(Debug, Default)]
pub struct App {
    pub navigation: NavigationState,
    pub profile: ProfileStore,
}

impl App {
    pub fn new(profile: Profile) -> Self {
        Self {
            navigation: NavigationState::default(),
            profile: ProfileStore::new(profile),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.profile.clone())
    }

    pub fn screen(&self) -> Screen {
        self.navigation.current()
    }
}
