pub mod day_record;
pub mod driver;
pub mod remark;

pub use day_record::DayRecord;
pub use driver::{DriverProfile, LayoutMode, Roster};
pub use remark::Remark;
