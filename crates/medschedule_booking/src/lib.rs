// --- File: crates/medschedule_booking/src/lib.rs ---
// Declare modules within this crate
pub mod catalog;
pub mod format;
pub mod ids;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod session;
pub mod view;

pub use catalog::Catalog;
pub use logic::{is_slot_booked, BookingEngine, ConfirmOutcome, EngineSettings};
pub use models::{Appointment, DateKey, Professional, ProfessionalId, SelectionState, SlotTime, TimeSlot};
pub use session::BookingSession;
pub use view::BookingView;
