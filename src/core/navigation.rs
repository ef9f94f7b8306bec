//! # Navigation State
//!
//! Which screen is visible, and the three bottom-bar destinations that lead
//! to screens.
//!
//! ```text
//!   Inicio ──→ Home
//!   Viajes ──→ Trips
//!   Perfil ──→ Profile ──(edit)──→ EditProfile ──(save)──→ Profile
//! ```
//!
//! `EditProfile` has no bar item, so it is only reachable from `Profile`.

use log::info;

/// Top-level screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Trips,
    Profile,
    EditProfile,
}

impl Screen {
    /// The bar item that leads to this screen, if any.
    pub fn destination(self) -> Option<Destination> {
        match self {
            Screen::Home => Some(Destination::Home),
            Screen::Trips => Some(Destination::Trips),
            Screen::Profile => Some(Destination::Profile),
            Screen::EditProfile => None,
        }
    }
}

/// Bottom navigation bar items, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Trips,
    Profile,
}

impl Destination {
    pub const ALL: [Destination; 3] = [Destination::Home, Destination::Trips, Destination::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Destination::Home => "Inicio",
            Destination::Trips => "Viajes",
            Destination::Profile => "Perfil",
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            Destination::Home => Screen::Home,
            Destination::Trips => Screen::Trips,
            Destination::Profile => Screen::Profile,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Destination::Home => 0,
            Destination::Trips => 1,
            Destination::Profile => 2,
        }
    }

    /// Next item to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous item to the left, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Default)]
pub struct NavigationState {
    current: Screen,
}

impl NavigationState {
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn set_current(&mut self, screen: Screen) {
        if self.current != screen {
            info!("Screen {:?} -> {:?}", self.current, screen);
        }
        self.current = screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        assert_eq!(NavigationState::default().current(), Screen::Home);
    }

    #[test]
    fn test_set_current() {
        let mut nav = NavigationState::default();
        nav.set_current(Screen::Trips);
        assert_eq!(nav.current(), Screen::Trips);
        nav.set_current(Screen::Trips);
        assert_eq!(nav.current(), Screen::Trips);
    }

    #[test]
    fn test_destination_labels() {
        let labels: Vec<_> = Destination::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Inicio", "Viajes", "Perfil"]);
    }

    #[test]
    fn test_destination_round_trips_through_screen() {
        for dest in Destination::ALL {
            assert_eq!(dest.screen().destination(), Some(dest));
        }
        assert_eq!(Screen::EditProfile.destination(), None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Destination::Profile.next(), Destination::Home);
        assert_eq!(Destination::Home.prev(), Destination::Profile);
        assert_eq!(Destination::Home.next(), Destination::Trips);
        assert_eq!(Destination::Trips.prev(), Destination::Home);
    }
}
