//! Validated reference data: the professionals and the fixed slot list.

use crate::models::{Professional, ProfessionalId, SlotTime, TimeSlot};
use medschedule_common::{config_error, MedScheduleError};
use medschedule_config::AppConfig;
use std::collections::HashSet;
use tracing::debug;

/// Immutable after construction. Shared between sessions behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    professionals: Vec<Professional>,
    time_slots: Vec<TimeSlot>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists, duplicate professional ids and
    /// slot lists that are not strictly ascending.
    pub fn new(
        professionals: Vec<Professional>,
        time_slots: Vec<TimeSlot>,
    ) -> Result<Self, MedScheduleError> {
        if professionals.is_empty() {
            return Err(config_error("at least one professional is required"));
        }
        if time_slots.is_empty() {
            return Err(config_error("at least one time slot is required"));
        }

        let mut seen = HashSet::new();
        for professional in &professionals {
            if !seen.insert(professional.id) {
                return Err(config_error(format!(
                    "duplicate professional id {}",
                    professional.id
                )));
            }
        }

        for pair in time_slots.windows(2) {
            if pair[0].time == pair[1].time {
                return Err(config_error(format!("duplicate time slot {}", pair[1].time)));
            }
            if pair[0].time > pair[1].time {
                return Err(config_error(format!(
                    "time slots out of order: {} after {}",
                    pair[1].time, pair[0].time
                )));
            }
        }

        debug!(
            "Catalog built with {} professionals and {} slots",
            professionals.len(),
            time_slots.len()
        );

        Ok(Self {
            professionals,
            time_slots,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, MedScheduleError> {
        let professionals = config.professionals.iter().map(Professional::from).collect();
        let time_slots = config
            .time_slots
            .iter()
            .map(TimeSlot::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(config_error)?;
        Self::new(professionals, time_slots)
    }

    /// The stock reference data embedded in `medschedule-config`.
    pub fn reference() -> Result<Self, MedScheduleError> {
        let config = medschedule_config::default_config().map_err(config_error)?;
        Self::from_config(&config)
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn professional(&self, id: ProfessionalId) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn slot_times(&self) -> impl Iterator<Item = SlotTime> + '_ {
        self.time_slots.iter().map(|slot| slot.time)
    }

    pub fn contains_slot(&self, time: SlotTime) -> bool {
        self.time_slots.binary_search_by(|slot| slot.time.cmp(&time)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medschedule_common::MedScheduleError;

    fn professional(id: ProfessionalId) -> Professional {
        Professional {
            id,
            name: format!("Professional {}", id),
            specialty: "Clínico Geral".to_string(),
            avatar_ref: String::new(),
        }
    }

    fn slots(times: &[&str]) -> Vec<TimeSlot> {
        times
            .iter()
            .map(|t| TimeSlot { time: t.parse().unwrap() })
            .collect()
    }

    #[test]
    fn test_reference_catalog_matches_stock_data() {
        let catalog = Catalog::reference().unwrap();
        assert_eq!(catalog.professionals().len(), 3);
        assert_eq!(catalog.time_slots().len(), 16);
        assert_eq!(catalog.professional(2).unwrap().name, "Dra. Maria Santos");
        assert!(catalog.professional(4).is_none());

        // two shifts with a lunch gap between 11:30 and 14:00
        assert!(catalog.contains_slot("11:30".parse().unwrap()));
        assert!(!catalog.contains_slot("12:00".parse().unwrap()));
        assert!(!catalog.contains_slot("13:30".parse().unwrap()));
        assert!(catalog.contains_slot("14:00".parse().unwrap()));
    }

    #[test]
    fn test_rejects_duplicate_professional_ids() {
        let err = Catalog::new(vec![professional(1), professional(1)], slots(&["08:00"])).unwrap_err();
        assert!(matches!(err, MedScheduleError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_unordered_or_duplicate_slots() {
        assert!(Catalog::new(vec![professional(1)], slots(&["09:00", "08:00"])).is_err());
        assert!(Catalog::new(vec![professional(1)], slots(&["09:00", "09:00"])).is_err());
    }

    #[test]
    fn test_rejects_empty_lists() {
        assert!(Catalog::new(vec![], slots(&["08:00"])).is_err());
        assert!(Catalog::new(vec![professional(1)], vec![]).is_err());
    }

    #[test]
    fn test_from_config_rejects_malformed_slot() {
        let mut config = medschedule_config::default_config().unwrap();
        config.time_slots[0].time = "8h00".to_string();
        let err = Catalog::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
