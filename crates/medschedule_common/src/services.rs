//! Service abstractions for collaborators of the booking engine.
//!
//! The engine emits a [`ConfirmationSummary`] after every successful booking.
//! How (or whether) that summary reaches the user is up to the
//! [`NotificationService`] the caller plugs in: a dialog, a toast, a log line.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Human-readable facts about a booking that was just committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationSummary {
    pub appointment_id: String,
    /// Canonical `YYYY-MM-DD` key of the booked date
    pub date_key: String,
    /// Long display form of the same date, e.g. `10 de junho de 2024`
    pub date_title: String,
    pub time: String,
    pub professional_id: u32,
    pub professional_name: String,
}

impl fmt::Display for ConfirmationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Agendamento Confirmado!\n\n📅 {}\n⏰ {}\n👨‍⚕️ {}",
            self.date_title, self.time, self.professional_name
        )
    }
}

/// A sink for booking confirmations.
pub trait NotificationService: Send + Sync {
    /// Called once per committed appointment, after it was appended.
    fn notify_confirmation(&self, summary: &ConfirmationSummary);
}

impl<F> NotificationService for F
where
    F: Fn(&ConfirmationSummary) + Send + Sync,
{
    fn notify_confirmation(&self, summary: &ConfirmationSummary) {
        self(summary)
    }
}

/// Writes confirmations to the log at INFO.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationService for TracingNotifier {
    fn notify_confirmation(&self, summary: &ConfirmationSummary) {
        info!(
            appointment_id = %summary.appointment_id,
            date = %summary.date_key,
            time = %summary.time,
            professional_id = summary.professional_id,
            "Appointment confirmed for {}",
            summary.professional_name
        );
    }
}

/// Drops confirmations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl NotificationService for NoopNotifier {
    fn notify_confirmation(&self, _summary: &ConfirmationSummary) {}
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Keeps every confirmation it receives, in order.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        received: Mutex<Vec<ConfirmationSummary>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn received(&self) -> Vec<ConfirmationSummary> {
            self.received
                .lock()
                .map(|guard| guard.clone())
                .unwrap_or_default()
        }

        pub fn count(&self) -> usize {
            self.received.lock().map(|guard| guard.len()).unwrap_or(0)
        }
    }

    impl NotificationService for RecordingNotifier {
        fn notify_confirmation(&self, summary: &ConfirmationSummary) {
            if let Ok(mut guard) = self.received.lock() {
                guard.push(summary.clone());
            }
        }
    }
}
