// --- File: crates/medschedule_booking/src/logic.rs ---
use crate::catalog::Catalog;
use crate::format::format_date_title;
use crate::ids::{AppointmentIdGenerator, UuidIdGenerator};
use crate::models::{Appointment, DateKey, Professional, ProfessionalId, SelectionState, SlotTime};
use crate::session::BookingSession;
use crate::view::BookingView;
use chrono::{NaiveDate, Utc};
use medschedule_common::services::{ConfirmationSummary, NotificationService, TracingNotifier};
use medschedule_common::{conflict, log_result, not_found, validation_error, MedScheduleError};
use medschedule_config::{AppConfig, BookingConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

// --- Availability Logic ---

/// Whether `time` is taken for the selection's date and professional.
///
/// No professional selected means nothing is considered booked. Linear scan
/// over the appointment list.
pub fn is_slot_booked(appointments: &[Appointment], selection: &SelectionState, time: SlotTime) -> bool {
    let Some(professional_id) = selection.professional_id() else {
        return false;
    };
    let date_key = selection.date_key();
    appointments
        .iter()
        .any(|appt| appt.occupies(date_key, time, professional_id))
}

/// Engine behaviour switches, taken from the `booking` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Re-run the availability check inside `confirm()`. When `false`, a
    /// confirm for an already booked slot appends a second appointment.
    pub revalidate_on_confirm: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from(&BookingConfig::default())
    }
}

impl From<&BookingConfig> for EngineSettings {
    fn from(config: &BookingConfig) -> Self {
        Self {
            revalidate_on_confirm: config.revalidate_on_confirm,
        }
    }
}

/// Result of [`BookingEngine::confirm`]. None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConfirmOutcome {
    /// Appended to the session; time and professional were cleared.
    Booked(Appointment),
    /// Time or professional missing; nothing changed.
    IncompleteSelection,
    /// The slot was booked between selection and confirm; the stale time was
    /// cleared, nothing was appended.
    SlotTaken {
        date_key: DateKey,
        time: SlotTime,
        professional_id: ProfessionalId,
    },
}

impl ConfirmOutcome {
    pub fn appointment(&self) -> Option<&Appointment> {
        match self {
            ConfirmOutcome::Booked(appointment) => Some(appointment),
            _ => None,
        }
    }

    pub fn is_booked(&self) -> bool {
        matches!(self, ConfirmOutcome::Booked(_))
    }
}

/// Applies selection intents and bookings to a [`BookingSession`].
///
/// Holds only shared, read-only collaborators; all mutable state lives in the
/// session passed to each call.
#[derive(Clone)]
pub struct BookingEngine {
    catalog: Arc<Catalog>,
    ids: Arc<dyn AppointmentIdGenerator>,
    notifier: Arc<dyn NotificationService>,
    settings: EngineSettings,
}

impl BookingEngine {
    /// UUID ids, confirmations written to the log, default settings.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ids: Arc::new(UuidIdGenerator),
            notifier: Arc::new(TracingNotifier),
            settings: EngineSettings::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, MedScheduleError> {
        let catalog = log_result(
            Catalog::from_config(config),
            "Catalog loaded from configuration",
            "Invalid reference data",
        )?;
        Ok(Self::new(Arc::new(catalog)).with_settings(EngineSettings::from(&config.booking)))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationService>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn AppointmentIdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// A session on today's local date.
    pub fn new_session(&self) -> BookingSession {
        BookingSession::starting_today()
    }

    // --- Selection Intents ---

    /// Selects `date`. A different date clears the selected time.
    pub fn set_date(&self, session: &mut BookingSession, date: NaiveDate) {
        if session.selection.date == date {
            return;
        }
        debug!("Date changed {} -> {}", session.selection.date, date);
        session.selection.date = date;
        session.selection.time = None;
    }

    /// Selects a professional by id. A different professional clears the
    /// selected time. Unknown ids leave the session untouched.
    pub fn select_professional(
        &self,
        session: &mut BookingSession,
        id: ProfessionalId,
    ) -> Result<Professional, MedScheduleError> {
        let professional = self
            .catalog
            .professional(id)
            .cloned()
            .ok_or_else(|| not_found(format!("professional {}", id)))?;

        if session.selection.professional_id() != Some(id) {
            debug!("Professional changed to {} ({})", professional.name, id);
            session.selection.professional = Some(professional.clone());
            session.selection.time = None;
        }
        Ok(professional)
    }

    /// Unselects the professional, and with it the time.
    pub fn clear_professional(&self, session: &mut BookingSession) {
        if session.selection.professional.take().is_some() {
            debug!("Professional cleared");
            session.selection.time = None;
        }
    }

    /// Selects a slot. A professional must be selected first, the time must be
    /// one of the catalog's slots and must not be booked under the current date
    /// and professional. Leaves date and professional as they are.
    pub fn select_time(
        &self,
        session: &mut BookingSession,
        time: &str,
    ) -> Result<SlotTime, MedScheduleError> {
        let slot: SlotTime = time.parse()?;
        if session.selection.professional.is_none() {
            return Err(validation_error("select a professional before choosing a time"));
        }
        if !self.catalog.contains_slot(slot) {
            return Err(validation_error(format!("{} is not an offered time slot", slot)));
        }
        if session.is_slot_booked(slot) {
            return Err(conflict(format!(
                "{} on {} is already booked",
                slot,
                session.selection.date_key()
            )));
        }
        debug!("Time selected {}", slot);
        session.selection.time = Some(slot);
        Ok(slot)
    }

    pub fn clear_time(&self, session: &mut BookingSession) {
        session.selection.time = None;
    }

    // --- Derived Queries ---

    /// Every catalog slot is booked for the current date and professional.
    /// Advisory only; `false` while no professional is selected.
    pub fn all_slots_booked(&self, session: &BookingSession) -> bool {
        session.selection.professional.is_some()
            && self.catalog.slot_times().all(|time| session.is_slot_booked(time))
    }

    /// Catalog slots still free for the current date and professional, in order.
    pub fn available_slots(&self, session: &BookingSession) -> Vec<SlotTime> {
        self.catalog
            .slot_times()
            .filter(|time| !session.is_slot_booked(*time))
            .collect()
    }

    pub fn view(&self, session: &BookingSession) -> BookingView {
        BookingView::build(self, session)
    }

    // --- Booking Logic ---

    /// Commits the current selection.
    ///
    /// Incomplete selections are a no-op. On success the appointment is
    /// appended, time and professional are cleared (the date stays) and the
    /// notifier receives a [`ConfirmationSummary`].
    pub fn confirm(&self, session: &mut BookingSession) -> ConfirmOutcome {
        let (Some(professional), Some(time)) = (
            session.selection.professional.clone(),
            session.selection.time,
        ) else {
            debug!("Confirm ignored: selection incomplete");
            return ConfirmOutcome::IncompleteSelection;
        };
        let date = session.selection.date;
        let date_key = DateKey::from(date);

        if session.is_slot_booked(time) {
            if self.settings.revalidate_on_confirm {
                warn!(
                    "Rejected double booking of {} {} for professional {}",
                    date_key, time, professional.id
                );
                session.selection.time = None;
                return ConfirmOutcome::SlotTaken {
                    date_key,
                    time,
                    professional_id: professional.id,
                };
            }
            warn!(
                "Booking {} {} for professional {} although it is already taken",
                date_key, time, professional.id
            );
        }

        let appointment = Appointment {
            id: self.ids.next_id(),
            date_key,
            time,
            professional_id: professional.id,
            created_at: Utc::now(),
        };
        session.appointments.push(appointment.clone());
        session.selection.time = None;
        session.selection.professional = None;

        info!(
            "Booked appointment {} on {} at {} with {}",
            appointment.id, date_key, time, professional.name
        );

        let summary = ConfirmationSummary {
            appointment_id: appointment.id.clone(),
            date_key: date_key.to_string(),
            date_title: format_date_title(date),
            time: time.to_string(),
            professional_id: professional.id,
            professional_name: professional.name,
        };
        self.notifier.notify_confirmation(&summary);

        ConfirmOutcome::Booked(appointment)
    }
}
