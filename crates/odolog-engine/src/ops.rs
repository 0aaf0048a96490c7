use crate::{Error, Result};
use chrono::Utc;
use odolog_types::{MAX_MILEAGE, PartRecord, ServiceEvent, VehicleState};
use serde::Serialize;

/// Every odometer-like input passes through here, so stored values never
/// get close to overflowing the due arithmetic.
pub(crate) fn check_mileage_range(value: u64, what: &str) -> Result<()> {
    if value > MAX_MILEAGE {
        return Err(Error::Validation(format!(
            "{} {} exceeds the supported maximum of {} km",
            what, value, MAX_MILEAGE
        )));
    }
    Ok(())
}

/// Outcome of a successful set-mileage, for the confirmation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MileageUpdate {
    pub previous: u64,
    pub current: u64,
}

/// Outcome of a successful add-part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartAdded {
    pub name: String,
    pub interval: u64,
    pub last_change_mileage: u64,
    pub next_due: u64,
}

/// Outcome of a successful change-part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartChanged {
    pub name: String,
    pub previous_mileage: u64,
    pub new_mileage: u64,
    pub next_due: u64,
}

/// Overwrite the stored odometer reading.
///
/// A reading lower than the stored one is rejected rather than warned
/// about: there is no delete command, so a bad write would be permanent.
pub fn set_mileage(state: &mut VehicleState, mileage: u64) -> Result<MileageUpdate> {
    check_mileage_range(mileage, "odometer reading")?;
    if mileage < state.current_mileage {
        return Err(Error::Validation(format!(
            "odometer reading {} is lower than the recorded {}",
            mileage, state.current_mileage
        )));
    }

    let previous = state.current_mileage;
    state.current_mileage = mileage;
    Ok(MileageUpdate {
        previous,
        current: mileage,
    })
}

/// Start tracking a new consumable part. Insert-only: an already-tracked
/// name is an error, not an update.
pub fn add_part(
    state: &mut VehicleState,
    name: &str,
    interval: u64,
    last_change_mileage: u64,
    notes: Option<String>,
) -> Result<PartAdded> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation("part name must not be empty".to_string()));
    }
    if interval == 0 {
        return Err(Error::Validation("interval must be positive".to_string()));
    }
    check_mileage_range(interval, "interval")?;
    check_mileage_range(last_change_mileage, "last change mileage")?;
    if state.parts.contains_key(name) {
        return Err(Error::DuplicatePart(name.to_string()));
    }

    let record = PartRecord {
        interval,
        last_change_mileage,
        notes,
    };
    let next_due = record.next_due();
    state.parts.insert(name.to_string(), record);

    Ok(PartAdded {
        name: name.to_string(),
        interval,
        last_change_mileage,
        next_due,
    })
}

/// Record that a tracked part was changed at the given odometer reading.
/// Notes, when given, replace the prior notes.
pub fn change_part(
    state: &mut VehicleState,
    name: &str,
    mileage: u64,
    notes: Option<String>,
) -> Result<PartChanged> {
    check_mileage_range(mileage, "change mileage")?;
    let name = name.trim();
    let Some(record) = state.parts.get_mut(name) else {
        return Err(Error::NotFound(name.to_string()));
    };

    if mileage < record.last_change_mileage {
        return Err(Error::Validation(format!(
            "change mileage {} is lower than the last recorded change at {}",
            mileage, record.last_change_mileage
        )));
    }

    let previous_mileage = record.last_change_mileage;
    record.last_change_mileage = mileage;
    if notes.is_some() {
        record.notes = notes;
    }

    Ok(PartChanged {
        name: name.to_string(),
        previous_mileage,
        new_mileage: mileage,
        next_due: record.next_due(),
    })
}

/// Append a service event with a tool-assigned UTC timestamp.
pub fn log_service(
    state: &mut VehicleState,
    description: &str,
    mileage: u64,
    cost: Option<f64>,
    details: Option<String>,
) -> Result<ServiceEvent> {
    check_mileage_range(mileage, "service mileage")?;
    let description = description.trim();
    if description.is_empty() {
        return Err(Error::Validation(
            "service description must not be empty".to_string(),
        ));
    }
    if let Some(cost) = cost
        && !(cost.is_finite() && cost >= 0.0)
    {
        return Err(Error::Validation(format!(
            "cost must be a non-negative number, got {}",
            cost
        )));
    }

    let event = ServiceEvent {
        description: description.to_string(),
        mileage,
        cost,
        details,
        timestamp: Utc::now(),
    };
    state.service_log.push(event.clone());
    Ok(event)
}
