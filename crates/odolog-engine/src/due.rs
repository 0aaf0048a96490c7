use crate::Result;
use crate::ops::check_mileage_range;
use odolog_types::VehicleState;
use serde::Serialize;

/// One tracked part, annotated with its due arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueEntry {
    pub name: String,
    pub interval: u64,
    pub last_change_mileage: u64,
    pub next_due: u64,
    /// Signed distance until the next change; zero or negative means due.
    pub remaining: i64,
    pub due: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Read-only snapshot produced by the `due` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueReport {
    /// Odometer reading the report was computed against (stored reading,
    /// or the hypothetical one passed with `--at`).
    pub current_mileage: u64,
    /// Most urgent first: ascending remaining, ties broken by name.
    pub parts: Vec<DueEntry>,
}

/// Compute the due report. Pure: no mutation, no persistence. Fails only
/// when the hypothetical reading is out of the supported odometer range.
pub fn due_report(state: &VehicleState, at_mileage: Option<u64>) -> Result<DueReport> {
    if let Some(at) = at_mileage {
        check_mileage_range(at, "hypothetical odometer reading")?;
    }
    let current = at_mileage.unwrap_or(state.current_mileage);

    let mut parts: Vec<DueEntry> = state
        .parts
        .iter()
        .map(|(name, record)| {
            let remaining = record.remaining_at(current);
            DueEntry {
                name: name.clone(),
                interval: record.interval,
                last_change_mileage: record.last_change_mileage,
                next_due: record.next_due(),
                remaining,
                due: remaining <= 0,
                notes: record.notes.clone(),
            }
        })
        .collect();

    parts.sort_by(|a, b| a.remaining.cmp(&b.remaining).then_with(|| a.name.cmp(&b.name)));

    Ok(DueReport {
        current_mileage: current,
        parts,
    })
}
