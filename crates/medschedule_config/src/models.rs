// --- File: crates/medschedule_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Professionals ---
// Bookable providers. Ids must be unique; this is checked when the catalog is built.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProfessionalConfig {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub avatar_ref: String,
}

// --- Time Slots ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TimeSlotConfig {
    pub time: String, // "HH:MM", local wall clock
}

// --- Engine Settings ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    /// Re-check availability inside `confirm()` before appending.
    ///
    /// When `false` two confirmations for the same date, time and professional
    /// issued without an intervening availability check both succeed.
    #[serde(default = "default_revalidate_on_confirm")]
    pub revalidate_on_confirm: bool,
}

fn default_revalidate_on_confirm() -> bool {
    true
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            revalidate_on_confirm: default_revalidate_on_confirm(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub booking: BookingConfig,

    // Reference data is mandatory; the embedded defaults always provide it.
    pub professionals: Vec<ProfessionalConfig>,
    pub time_slots: Vec<TimeSlotConfig>,
}
