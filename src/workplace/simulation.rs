//! Day-loop driver
//!
//! Owns the company and the seeded random source. Each day opens the
//! schedule, plays a handful of events one at a time (each generated against
//! the state left by the previous one), then closes the books. Menus call
//! into the same driver for conversations and hiring.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkplaceError};
use crate::workplace::company::Company;
use crate::workplace::events::{Event, EventKind};
use crate::workplace::params::CompanyParams;
use crate::workplace::people::{pick, Applicant, Employee};
use crate::workplace::report::WeeklyReport;
use crate::workplace::scheduling::{DayClose, DayStart};
use crate::workplace::types::EmployeeId;

/// An event together with its narrator line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Narrated {
    pub event: Event,
    pub narration: String,
}

/// Everything that happened during one simulated day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub start: DayStart,
    pub events: Vec<Narrated>,
    pub labor_hours: u32,
    /// Present when this day closed out the week
    pub weekly_report: Option<WeeklyReport>,
}

/// A line of overheard conversation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Remark {
    pub speaker: EmployeeId,
    pub name: String,
    pub line: String,
}

/// The simulation driver
pub struct WorkplaceSim {
    pub company: Company,
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl WorkplaceSim {
    /// Generate a company from the given seed
    pub fn new(params: CompanyParams, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let company = Company::generate(params, &mut rng)?;
        Ok(WorkplaceSim { company, rng, seed })
    }

    /// Run an existing company
    pub fn with_company(company: Company, seed: u64) -> Self {
        WorkplaceSim {
            company,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn open_day(&mut self) -> DayStart {
        self.company.start_of_day(&mut self.rng)
    }

    /// Generate, narrate and apply one event of the given kind.
    ///
    /// The narrator line is rendered before the event is applied so it
    /// describes the situation as it stood.
    pub fn play_event(&mut self, kind: EventKind) -> Result<Narrated> {
        let event = Event::generate(kind, &self.company, &mut self.rng)?;
        let narration = event.render(&self.company)?;
        event.apply(&mut self.company);
        if let Some(log) = self.company.today_mut() {
            log.events.push(event.clone());
        }
        debug!(%kind, participants = ?event.participants(), "event applied");
        Ok(Narrated { event, narration })
    }

    /// Play today's random events; draws nobody can take part in are skipped
    pub fn play_events(&mut self) -> Vec<Narrated> {
        let count = self.rng.gen_range(0..=self.company.params.max_events_per_day);
        let mut played = Vec::new();
        for _ in 0..count {
            let kind = EventKind::random(&mut self.rng);
            match self.play_event(kind) {
                Ok(narrated) => played.push(narrated),
                Err(err) => debug!(%kind, %err, "event skipped"),
            }
        }
        played
    }

    /// Close the day; carries the weekly payroll when the week wraps
    pub fn close_day(&mut self) -> DayClose {
        self.company.end_of_day()
    }

    pub fn run_day(&mut self) -> DayReport {
        let start = self.open_day();
        let events = self.play_events();
        let DayClose {
            labor_hours,
            weekly_report,
        } = self.close_day();
        DayReport {
            start,
            events,
            labor_hours,
            weekly_report,
        }
    }

    pub fn run_days(&mut self, days: u32) -> Vec<DayReport> {
        (0..days).map(|_| self.run_day()).collect()
    }

    /// Narrator line for a day with no events
    pub fn quiet_day_line(&mut self) -> &'static str {
        pick(
            &mut self.rng,
            &[
                "The day went by smoothly.",
                "The day was uneventful.",
                "Nothing out of the ordinary happened today.",
            ],
        )
    }

    /// A fresh pool of applicants for the hiring menu
    pub fn applicants(&mut self) -> Vec<Applicant> {
        (0..self.company.params.hiring_pool_size)
            .map(|_| self.company.new_applicant(&mut self.rng))
            .collect()
    }

    pub fn hire(&mut self, applicant: Applicant) -> Result<EmployeeId> {
        self.company.hire_applicant(applicant, &mut self.rng)
    }

    fn todays_event(&mut self) -> Option<Event> {
        let events = &self.company.today()?.events;
        events.choose(&mut self.rng).cloned()
    }

    /// What an employee tells `listener` about something that happened today
    pub fn talk(&mut self, id: EmployeeId, listener: &Employee) -> Result<String> {
        let speaker = self
            .company
            .employee(id)
            .cloned()
            .ok_or(WorkplaceError::UnknownEmployee(id))?;
        match self.todays_event() {
            Some(event) => event.described_by_to(&self.company, &speaker, listener, &mut self.rng),
            None => Ok(speaker.uneventful_day_remark(&mut self.rng).to_string()),
        }
    }

    /// Overhear two random coworkers talking about today.
    ///
    /// Identical lines are only reported once. Needs at least two employees.
    pub fn listen(&mut self) -> Result<Vec<Remark>> {
        let ids: Vec<EmployeeId> = self.company.employees.keys().copied().collect();
        let pair: Vec<EmployeeId> = ids.choose_multiple(&mut self.rng, 2).copied().collect();
        let (a, b) = match pair.as_slice() {
            [a, b] => (*a, *b),
            _ => return Err(WorkplaceError::NoEligibleParticipant { event: "conversation" }),
        };
        let e1 = self.company.record(a)?.clone();
        let e2 = self.company.record(b)?.clone();

        let (l1, l2) = match self.todays_event() {
            Some(event) => (
                event.described_by_to(&self.company, &e1, &e2, &mut self.rng)?,
                event.described_by_to(&self.company, &e2, &e1, &mut self.rng)?,
            ),
            None => (
                e1.uneventful_day_remark(&mut self.rng).to_string(),
                e2.uneventful_day_remark(&mut self.rng).to_string(),
            ),
        };

        let mut remarks = vec![Remark {
            speaker: a,
            name: e1.to_string(),
            line: l1.clone(),
        }];
        if l1 != l2 {
            remarks.push(Remark {
                speaker: b,
                name: e2.to_string(),
                line: l2,
            });
        }
        Ok(remarks)
    }
}
