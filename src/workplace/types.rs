//! Core identifiers and calendar types for the workplace simulation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for an employee, unique within one company
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee#{}", self.0)
    }
}

/// Id reserved for people outside the company, such as the player
pub const OUTSIDER: EmployeeId = EmployeeId(u32::MAX);

/// Hours in one full shift
pub const SHIFT_HOURS: u32 = 8;

/// Days in the work week
pub const DAYS_PER_WEEK: u8 = 7;

/// Day of the week, Monday = 0
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weekday(u8);

impl Weekday {
    pub const MONDAY: Weekday = Weekday(0);

    /// Wraps any index into the week
    pub fn new(index: u8) -> Self {
        Weekday(index % DAYS_PER_WEEK)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn next(&self) -> Self {
        Weekday::new(self.0 + 1)
    }

    /// Days left in the week, counting today
    pub fn days_left(&self) -> u32 {
        (DAYS_PER_WEEK - self.0) as u32
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "Monday",
            1 => "Tuesday",
            2 => "Wednesday",
            3 => "Thursday",
            4 => "Friday",
            5 => "Saturday",
            _ => "Sunday",
        }
    }
}

impl Default for Weekday {
    fn default() -> Self {
        Weekday::MONDAY
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
