mod due;
mod error;
mod ops;

pub use due::{DueEntry, DueReport, due_report};
pub use error::{Error, Result};
pub use ops::{
    MileageUpdate, PartAdded, PartChanged, add_part, change_part, log_service, set_mileage,
};
