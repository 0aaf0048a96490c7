use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound accepted for odometer readings and intervals, in km.
/// Far beyond any real odometer, and small enough that
/// `last_change_mileage + interval` can never overflow.
pub const MAX_MILEAGE: u64 = 100_000_000;

/// Root persisted document: everything odolog knows about one vehicle.
///
/// One JSON file on disk holds exactly one of these. The file is the sole
/// source of truth between invocations; a missing file deserializes to
/// `VehicleState::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Last known odometer reading.
    #[serde(default)]
    pub current_mileage: u64,

    /// Tracked consumable parts, keyed by name. BTreeMap keeps the
    /// serialized file diff-stable across runs.
    #[serde(default)]
    pub parts: BTreeMap<String, PartRecord>,

    /// Service events in the order they were logged.
    #[serde(default)]
    pub service_log: Vec<ServiceEvent>,
}

/// A tracked consumable part (oil, filters, spark plugs, ...).
///
/// The part name lives in the `parts` map key, not in the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Distance between required changes. Always positive.
    pub interval: u64,

    /// Odometer reading at the last recorded change.
    pub last_change_mileage: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PartRecord {
    /// Odometer reading at which the next change is required.
    ///
    /// Records written through the CLI stay within [`MAX_MILEAGE`]; a
    /// hand-edited file can hold anything, so the sum saturates rather
    /// than overflow.
    pub fn next_due(&self) -> u64 {
        self.last_change_mileage.saturating_add(self.interval)
    }

    /// Signed distance until the next change, measured from `current`.
    /// Zero or negative means the part is due. Clamped to the i64 range
    /// for the same hand-edited-file reason as [`PartRecord::next_due`].
    pub fn remaining_at(&self, current: u64) -> i64 {
        let remaining = self.next_due() as i128 - current as i128;
        remaining.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

/// A free-form logged maintenance action, not tied to a part's interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEvent {
    pub description: String,

    /// Odometer reading at the time of service.
    pub mileage: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Assigned by the tool when the event is logged, never user-supplied.
    pub timestamp: DateTime<Utc>,
}
