pub mod employee;
pub mod filter;
pub mod period;
pub mod summary;
pub mod time_record;

pub use employee::Employee;
pub use filter::{DateRange, FilterSpec};
pub use period::Period;
pub use summary::Summary;
pub use time_record::{RecordStatus, TimeRecord};
