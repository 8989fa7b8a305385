// --- File: crates/medschedule_booking/src/models.rs ---
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use medschedule_common::{validation_error, MedScheduleError};
use medschedule_config::{ProfessionalConfig, TimeSlotConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ProfessionalId = u32;

const SLOT_FORMAT: &str = "%H:%M";
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// --- Reference Data ---

/// A bookable service provider. Loaded once from configuration, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub specialty: String,
    pub avatar_ref: String,
}

impl From<&ProfessionalConfig> for Professional {
    fn from(config: &ProfessionalConfig) -> Self {
        Self {
            id: config.id,
            name: config.name.clone(),
            specialty: config.specialty.clone(),
            avatar_ref: config.avatar_ref.clone(),
        }
    }
}

/// Wall-clock start of a slot, always in canonical `HH:MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(SlotTime)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for SlotTime {
    type Err = MedScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveTime::parse_from_str(s, SLOT_FORMAT)
            .map_err(|e| validation_error(format!("invalid slot time '{}': {}", s, e)))?;
        let slot = SlotTime(parsed);
        // "9:00" parses, but only "09:00" is a slot label
        if slot.to_string() != s {
            return Err(validation_error(format!(
                "slot time '{}' must be written as HH:MM",
                s
            )));
        }
        Ok(slot)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = MedScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(slot: SlotTime) -> Self {
        slot.to_string()
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

/// One of the fixed, ordered slots the catalog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: SlotTime,
}

impl TryFrom<&TimeSlotConfig> for TimeSlot {
    type Error = MedScheduleError;

    fn try_from(config: &TimeSlotConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            time: config.time.parse()?,
        })
    }
}

// --- Booking Data ---

/// Canonical calendar-date key (`YYYY-MM-DD`).
///
/// Wraps a plain local calendar date. The same value drives display and
/// booking lookups, so no timezone conversion ever happens between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl FromStr for DateKey {
    type Err = MedScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(DateKey)
            .map_err(|e| validation_error(format!("invalid date key '{}': {}", s, e)))
    }
}

impl TryFrom<String> for DateKey {
    type Error = MedScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

/// A committed booking. Append-only: never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date_key: DateKey,
    pub time: SlotTime,
    pub professional_id: ProfessionalId,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn occupies(&self, date_key: DateKey, time: SlotTime, professional_id: ProfessionalId) -> bool {
        self.date_key == date_key && self.time == time && self.professional_id == professional_id
    }
}

/// The user's uncommitted choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub date: NaiveDate,
    pub professional: Option<Professional>,
    pub time: Option<SlotTime>,
}

impl SelectionState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            professional: None,
            time: None,
        }
    }

    pub fn date_key(&self) -> DateKey {
        DateKey(self.date)
    }

    pub fn professional_id(&self) -> Option<ProfessionalId> {
        self.professional.as_ref().map(|p| p.id)
    }

    /// Date, professional and time are all chosen; `confirm()` will commit.
    pub fn is_complete(&self) -> bool {
        self.professional.is_some() && self.time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time_accepts_canonical_form_only() {
        assert_eq!("09:00".parse::<SlotTime>().unwrap(), SlotTime::from_hm(9, 0).unwrap());
        assert_eq!("17:30".parse::<SlotTime>().unwrap().to_string(), "17:30");
        assert!("9:00".parse::<SlotTime>().is_err());
        assert!("24:00".parse::<SlotTime>().is_err());
        assert!("09:00:00".parse::<SlotTime>().is_err());
        assert!("".parse::<SlotTime>().is_err());
    }

    #[test]
    fn test_date_key_is_plain_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let key = DateKey::from(date);
        assert_eq!(key.to_string(), "2024-06-10");
        assert_eq!("2024-06-10".parse::<DateKey>().unwrap(), key);
        assert!("2024-13-01".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_appointment_serializes_keys_as_strings() {
        let appointment = Appointment {
            id: "abc".to_string(),
            date_key: "2024-06-10".parse().unwrap(),
            time: "09:00".parse().unwrap(),
            professional_id: 1,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["date_key"], "2024-06-10");
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["professional_id"], 1);
    }

    #[test]
    fn test_selection_completeness() {
        let mut selection = SelectionState::new(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert!(!selection.is_complete());
        selection.time = SlotTime::from_hm(9, 0);
        assert!(!selection.is_complete());
        selection.professional = Some(Professional {
            id: 1,
            name: "Dr. Kleber Russo".to_string(),
            specialty: "Clínico Geral".to_string(),
            avatar_ref: String::new(),
        });
        assert!(selection.is_complete());
    }
}
