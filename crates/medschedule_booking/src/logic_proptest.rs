#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::ids::SequentialIdGenerator;
    use crate::logic::{BookingEngine, ConfirmOutcome};
    use crate::models::DateKey;
    use crate::session::BookingSession;
    use chrono::{Duration, NaiveDate};
    use medschedule_common::services::NoopNotifier;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn engine() -> BookingEngine {
        BookingEngine::new(Arc::new(Catalog::reference().unwrap()))
            .with_id_generator(Arc::new(SequentialIdGenerator::new("p")))
            .with_notifier(Arc::new(NoopNotifier))
    }

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    /// One user intent, as the presentation layer would forward it.
    #[derive(Debug, Clone)]
    enum Intent {
        SetDate(i64),
        SelectProfessional(u32),
        ClearProfessional,
        SelectTime(usize),
        Confirm,
    }

    fn intent() -> impl Strategy<Value = Intent> {
        prop_oneof![
            (0..5i64).prop_map(Intent::SetDate),
            (1..=3u32).prop_map(Intent::SelectProfessional),
            Just(Intent::ClearProfessional),
            (0..16usize).prop_map(Intent::SelectTime),
            Just(Intent::Confirm),
            Just(Intent::Confirm),
        ]
    }

    fn apply(engine: &BookingEngine, session: &mut BookingSession, intent: &Intent) -> Option<ConfirmOutcome> {
        match intent {
            Intent::SetDate(offset) => {
                engine.set_date(session, base_date() + Duration::days(*offset));
                None
            }
            Intent::SelectProfessional(id) => {
                engine.select_professional(session, *id).unwrap();
                None
            }
            Intent::ClearProfessional => {
                engine.clear_professional(session);
                None
            }
            Intent::SelectTime(index) => {
                let time = engine.catalog().time_slots()[*index].time.to_string();
                // booked slots are refused, like a disabled button
                let _ = engine.select_time(session, &time);
                None
            }
            Intent::Confirm => Some(engine.confirm(session)),
        }
    }

    proptest! {
        // Test that no (date, time, professional) triple is ever booked twice
        #[test]
        fn test_bookings_stay_unique(intents in prop::collection::vec(intent(), 0..80)) {
            let engine = engine();
            let mut session = BookingSession::new(base_date());
            for intent in &intents {
                apply(&engine, &mut session, intent);
            }

            let mut seen = HashSet::new();
            for appt in session.appointments() {
                prop_assert!(seen.insert((appt.date_key, appt.time, appt.professional_id)));
                prop_assert!(engine.catalog().contains_slot(appt.time));
                prop_assert!(engine.catalog().professional(appt.professional_id).is_some());
            }
        }

        // Test that confirm either appends exactly one matching appointment or nothing
        #[test]
        fn test_confirm_appends_at_most_one(intents in prop::collection::vec(intent(), 0..60)) {
            let engine = engine();
            let mut session = BookingSession::new(base_date());
            for intent in &intents {
                let before = session.appointments().len();
                let selection = session.selection().clone();
                match apply(&engine, &mut session, intent) {
                    Some(ConfirmOutcome::Booked(appt)) => {
                        prop_assert_eq!(session.appointments().len(), before + 1);
                        prop_assert_eq!(appt.date_key, DateKey::from(selection.date));
                        prop_assert_eq!(Some(appt.time), selection.time);
                        prop_assert_eq!(Some(appt.professional_id), selection.professional_id());
                        prop_assert_eq!(session.selected_time(), None);
                        prop_assert_eq!(session.selected_professional_id(), None);
                        prop_assert_eq!(session.selected_date(), selection.date);
                    }
                    Some(_) => {
                        prop_assert_eq!(session.appointments().len(), before);
                    }
                    None => {
                        prop_assert_eq!(session.appointments().len(), before);
                    }
                }
            }
        }

        // Test that the selected time is never a booked slot
        #[test]
        fn test_selected_time_is_always_free(intents in prop::collection::vec(intent(), 0..80)) {
            let engine = engine();
            let mut session = BookingSession::new(base_date());
            for intent in &intents {
                apply(&engine, &mut session, intent);
                if let Some(time) = session.selected_time() {
                    prop_assert!(!session.is_slot_booked(time));
                }
            }
        }

        // Test that a date change always drops the time, keeping the professional
        #[test]
        fn test_date_change_resets_time(
            prefix in prop::collection::vec(intent(), 0..30),
            offset in 5..10i64,
        ) {
            let engine = engine();
            let mut session = BookingSession::new(base_date());
            for intent in &prefix {
                apply(&engine, &mut session, intent);
            }
            let professional = session.selected_professional_id();
            engine.set_date(&mut session, base_date() + Duration::days(offset));
            prop_assert_eq!(session.selected_time(), None);
            prop_assert_eq!(session.selected_professional_id(), professional);
        }
    }
}
