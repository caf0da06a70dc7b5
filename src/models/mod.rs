pub mod attendance;
pub mod group;
pub mod report;
pub mod roster;
pub mod summary;

pub use attendance::{AttendanceEntry, AttendanceSheet};
pub use group::Group;
pub use report::{DebtRow, PaymentRow};
pub use roster::RosterEntry;
pub use summary::{RecordCounts, Summary};
