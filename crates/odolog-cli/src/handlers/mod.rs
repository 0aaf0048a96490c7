pub mod add_part;
pub mod change_part;
pub mod due;
pub mod history;
pub mod log_service;
pub mod set_mileage;
