//! # TUI Components
//!
//! Every piece of the screen is a component in this directory.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Rebuilt each frame from `App` and drawn once:
//! - `TitleBar`: persistent top bar with the app title
//! - `NavBar`: bottom bar with Inicio / Viajes / Perfil
//! - `HomeScreen`, `TripsScreen`, `ProfileScreen`: the three bar screens
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep state between frames and emit events:
//! - `TextField`: single-line input with a cursor
//! - `EditProfileForm`: three `TextField`s and a save button holding the draft
//!
//! ### Props-Based Data Flow
//!
//! Components receive data as struct fields, never by reaching into `App`.
//! They never mutate `App` either: clicks and key presses come back to the
//! shell as events or hit-test results and become `Action`s there.
//!
//! ```rust,ignore
//! ProfileScreen::new(app.profile.profile()).render(frame, body);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top bar)
//! ├── nav_bar.rs       (Bottom navigation bar + hit testing)
//! ├── home.rs          (Welcome screen)
//! ├── trips.rs         (Trip cards)
//! ├── profile.rs       (Profile view + edit button)
//! ├── text_field.rs    (Single-line input)
//! └── edit_profile.rs  (Edit form holding the draft)
//! ```

pub mod edit_profile;
pub mod home;
pub mod nav_bar;
pub mod profile;
pub mod text_field;
mod title_bar;
pub mod trips;

pub use edit_profile::{EditEvent, EditProfileForm, FormFocus};
pub use home::HomeScreen;
pub use nav_bar::NavBar;
pub use profile::ProfileScreen;
pub use text_field::TextField;
pub use title_bar::{APP_TITLE, TitleBar};
pub use trips::TripsScreen;
