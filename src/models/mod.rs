pub mod log_record;
pub mod shift_report;
pub mod truck;
pub mod truck_status;
pub mod wrap_policy;

pub use log_record::LogRecord;
pub use shift_report::ShiftReport;
pub use truck::{FLEET_SIZE, Truck};
pub use truck_status::TruckStatus;
pub use wrap_policy::WrapPolicy;
