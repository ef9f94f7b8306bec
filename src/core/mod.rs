//! # Core Application Logic
//!
//! Domain state and the rules for changing it.
//! Nothing here knows about ratatui or the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all authoritative state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`navigation`]: `Screen`, `Destination` and `NavigationState`
//! - [`profile`]: `Profile` and `ProfileStore`
//! - [`trip`]: the sample trip list
//! - [`config`]: config file and env resolution (the one exception to "no I/O")

pub mod action;
pub mod config;
pub mod navigation;
pub mod profile;
pub mod state;
pub mod trip;
