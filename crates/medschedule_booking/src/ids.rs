//! Appointment identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces identifiers unique within one appointment list.
pub trait AppointmentIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl AppointmentIdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<namespace>-<n>` with a monotonic counter starting at 1. Deterministic,
/// which makes it the generator of choice in tests.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    namespace: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl AppointmentIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.namespace, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_do_not_repeat() {
        let generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..500).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_sequential_ids_count_up_within_namespace() {
        let generator = SequentialIdGenerator::new("appt");
        assert_eq!(generator.next_id(), "appt-1");
        assert_eq!(generator.next_id(), "appt-2");
        assert_eq!(generator.next_id(), "appt-3");
    }
}
