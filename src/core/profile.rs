//! # Profile Store
//!
//! The rider's editable info: name, vehicle model and phone number.
//!
//! The store is replaced as a whole on every save. There is no per-field
//! setter, so a partially applied edit can't be observed.

use log::info;

pub const DEFAULT_NAME: &str = "Juan Motero";
pub const DEFAULT_VEHICLE_MODEL: &str = "Honda XR 150";
pub const DEFAULT_PHONE_NUMBER: &str = "300 123 4567";

/// The three profile fields. Any of them may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub vehicle_model: String,
    pub phone_number: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        vehicle_model: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vehicle_model: vehicle_model.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_VEHICLE_MODEL, DEFAULT_PHONE_NUMBER)
    }
}

/// Owner of the authoritative [`Profile`].
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace all three fields at once. No validation is applied.
    pub fn update(&mut self, name: String, vehicle_model: String, phone_number: String) {
        self.profile = Profile {
            name,
            vehicle_model,
            phone_number,
        };
        info!(
            "Profile updated (name={:?}, vehicle={:?}, phone={:?})",
            self.profile.name, self.profile.vehicle_model, self.profile.phone_number
        );
    }
}
