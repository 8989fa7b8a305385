//! Read-only snapshot handed to the presentation layer on every render.

use crate::format::{day_and_month, format_date_title, format_short_date, format_weekday, DayAndMonth};
use crate::logic::BookingEngine;
use crate::models::{Appointment, DateKey, ProfessionalId, SlotTime};
use crate::session::BookingSession;
use medschedule_common::MedScheduleError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateHeader {
    pub date_key: DateKey,
    pub badge: DayAndMonth,
    pub title: String,
    pub weekday: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalCard {
    pub id: ProfessionalId,
    pub name: String,
    pub specialty: String,
    pub avatar_ref: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotButton {
    pub time: SlotTime,
    /// Booked slots are rendered disabled.
    pub booked: bool,
    pub selected: bool,
}

/// Shown only while the selection is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPanel {
    pub professional_name: String,
    /// `DD/MM`
    pub date: String,
    pub time: SlotTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub date: DateHeader,
    pub professionals: Vec<ProfessionalCard>,
    /// Slot buttons are inert until a professional is chosen.
    pub time_selection_enabled: bool,
    pub slots: Vec<SlotButton>,
    /// Every slot is taken for the chosen professional on this date.
    pub no_slots_available: bool,
    pub summary: Option<SummaryPanel>,
    pub appointments: Vec<Appointment>,
}

impl BookingView {
    pub(crate) fn build(engine: &BookingEngine, session: &BookingSession) -> Self {
        let selection = session.selection();
        let date = selection.date;
        let selected_id = selection.professional_id();

        let professionals = engine
            .catalog()
            .professionals()
            .iter()
            .map(|p| ProfessionalCard {
                id: p.id,
                name: p.name.clone(),
                specialty: p.specialty.clone(),
                avatar_ref: p.avatar_ref.clone(),
                selected: selected_id == Some(p.id),
            })
            .collect();

        let slots = engine
            .catalog()
            .slot_times()
            .map(|time| SlotButton {
                time,
                booked: session.is_slot_booked(time),
                selected: selection.time == Some(time),
            })
            .collect();

        let summary = match (&selection.professional, selection.time) {
            (Some(professional), Some(time)) => Some(SummaryPanel {
                professional_name: professional.name.clone(),
                date: format_short_date(date),
                time,
            }),
            _ => None,
        };

        Self {
            date: DateHeader {
                date_key: DateKey::from(date),
                badge: day_and_month(date),
                title: format_date_title(date),
                weekday: format_weekday(date),
            },
            professionals,
            time_selection_enabled: selected_id.is_some(),
            slots,
            no_slots_available: engine.all_slots_booked(session),
            summary,
            appointments: session.appointments().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, MedScheduleError> {
        Ok(serde_json::to_value(self)?)
    }
}
