//! Per-user booking state, owned by whoever composes the engine.

use crate::logic::is_slot_booked;
use crate::models::{Appointment, DateKey, ProfessionalId, SelectionState, SlotTime};
use chrono::NaiveDate;
use serde::Serialize;

/// Selection state plus the append-only appointment list of one session.
///
/// Mutation goes through [`crate::BookingEngine`]; everything here is read-only.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSession {
    pub(crate) selection: SelectionState,
    pub(crate) appointments: Vec<Appointment>,
}

impl BookingSession {
    /// A fresh session with `date` selected and nothing booked.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            selection: SelectionState::new(date),
            appointments: Vec::new(),
        }
    }

    /// A fresh session on the current local date.
    pub fn starting_today() -> Self {
        Self::new(DateKey::today().date())
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selection.date
    }

    pub fn selected_professional_id(&self) -> Option<ProfessionalId> {
        self.selection.professional_id()
    }

    pub fn selected_time(&self) -> Option<SlotTime> {
        self.selection.time
    }

    /// Confirmed appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Whether `time` is taken for the selected date and professional.
    /// Always `false` while no professional is selected.
    pub fn is_slot_booked(&self, time: SlotTime) -> bool {
        is_slot_booked(&self.appointments, &self.selection, time)
    }

    /// Appointments on `date` with `professional_id`, in insertion order.
    pub fn appointments_for(
        &self,
        date: NaiveDate,
        professional_id: ProfessionalId,
    ) -> impl Iterator<Item = &Appointment> + '_ {
        let date_key = DateKey::from(date);
        self.appointments
            .iter()
            .filter(move |a| a.date_key == date_key && a.professional_id == professional_id)
    }
}
