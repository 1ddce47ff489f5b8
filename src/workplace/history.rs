//! Day-by-day record of schedules, events and hours

use serde::{Deserialize, Serialize};

use crate::workplace::events::{Event, EventKind};
use crate::workplace::types::{EmployeeId, Weekday};

/// Everything that happened on one day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    /// Days since the company opened, starting at 1
    pub day: u32,
    pub weekday: Weekday,
    /// Schedule as posted at the start of the day
    pub scheduled: Vec<EmployeeId>,
    pub understaffed: bool,
    /// Events in the order they happened
    pub events: Vec<Event>,
    /// Total hours logged at close
    pub labor_hours: u32,
}

impl DayLog {
    pub fn new(day: u32, weekday: Weekday) -> Self {
        DayLog {
            day,
            weekday,
            scheduled: Vec::new(),
            understaffed: false,
            events: Vec::new(),
            labor_hours: 0,
        }
    }

    pub fn is_uneventful(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count_of(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

/// Totals over a whole history
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub days: u32,
    pub understaffed_days: u32,
    pub labor_hours: u64,
    pub call_outs: usize,
    pub quits: usize,
    pub arguments: usize,
    pub gossip: usize,
    pub injuries: usize,
}

impl HistoryStats {
    pub fn from_days(days: &[DayLog]) -> Self {
        let mut stats = HistoryStats::default();
        for log in days {
            stats.days += 1;
            if log.understaffed {
                stats.understaffed_days += 1;
            }
            stats.labor_hours += log.labor_hours as u64;
            stats.call_outs += log.count_of(EventKind::CallOut);
            stats.quits += log.count_of(EventKind::Quitting);
            stats.arguments += log.count_of(EventKind::Argument);
            stats.gossip += log.count_of(EventKind::Gossip);
            stats.injuries += log.count_of(EventKind::Injury);
        }
        stats
    }
}
