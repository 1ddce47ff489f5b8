//! Workplace simulation
//!
//! A small company with procedurally generated staff. Every day a schedule
//! is posted, a few things happen (call-outs, quits, arguments, gossip,
//! injuries), hours are logged, and at the end of the week everyone gets
//! paid. Employees keep opinions of each other and of the company, which
//! colors how they talk about what happened.

pub mod types;
pub mod params;
pub mod people;
pub mod company;
pub mod scheduling;
pub mod events;
pub mod history;
pub mod report;
pub mod simulation;
pub mod export;

#[cfg(test)]
pub(crate) mod testing;

pub use types::{EmployeeId, Weekday, DAYS_PER_WEEK, OUTSIDER, SHIFT_HOURS};
pub use params::CompanyParams;
pub use people::{Applicant, Employee, Person, PersonGenerator, Trait};
pub use company::Company;
pub use scheduling::{DayClose, DayStart};
pub use events::{Event, EventKind, Incident};
pub use history::{DayLog, HistoryStats};
pub use report::{PayLine, WeeklyReport};
pub use simulation::{DayReport, Narrated, Remark, WorkplaceSim};
pub use export::HistoryExport;
