//! Workplace events
//!
//! Every event is generated from the current company state, rendered as a
//! narrator line, applied exactly once and then kept in the day's history.
//! Participants can later describe an event to someone else; what they say
//! depends on who is talking, who is listening and how they feel about each
//! other.
//!
//! Random parameters are drawn at generation time, so applying an event is
//! deterministic.

pub mod call_out;
pub mod quitting;
pub mod argument;
pub mod gossip;
pub mod injury;

pub use call_out::{CallOut, CallOutReason};
pub use quitting::{Quitting, QuitReason};
pub use argument::Argument;
pub use gossip::{Dirt, Gossip};
pub use injury::{injury_penalty, Injury};

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkplaceError};
use crate::workplace::company::Company;
use crate::workplace::people::Employee;
use crate::workplace::types::EmployeeId;

/// Operations shared by every event variant
pub trait Incident: Sized {
    const KIND: EventKind;

    /// Pick participants and parameters from the current company state
    fn generate<R: Rng>(company: &Company, rng: &mut R) -> Result<Self>;

    /// Mutate the company; call once per event
    fn apply(&self, company: &mut Company);

    /// Narrator line for the day's report
    fn render(&self, company: &Company) -> Result<String>;

    /// What `speaker` says about the event when talking to `listener`
    fn describe<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        rng: &mut R,
    ) -> Result<String>;

    /// Employees the event is about
    fn participants(&self) -> Vec<EmployeeId>;
}

/// The closed set of event kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CallOut,
    Quitting,
    Argument,
    Gossip,
    Injury,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::CallOut,
        EventKind::Quitting,
        EventKind::Argument,
        EventKind::Gossip,
        EventKind::Injury,
    ];

    /// Uniform draw over all kinds
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        EventKind::ALL[rng.gen_range(0..EventKind::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::CallOut => "call-out",
            EventKind::Quitting => "quitting",
            EventKind::Argument => "argument",
            EventKind::Gossip => "gossip",
            EventKind::Injury => "injury",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One thing that happened at work
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    CallOut(CallOut),
    Quitting(Quitting),
    Argument(Argument),
    Gossip(Gossip),
    Injury(Injury),
}

impl Event {
    /// Generate an event of the given kind
    pub fn generate<R: Rng>(kind: EventKind, company: &Company, rng: &mut R) -> Result<Self> {
        Ok(match kind {
            EventKind::CallOut => Event::CallOut(CallOut::generate(company, rng)?),
            EventKind::Quitting => Event::Quitting(Quitting::generate(company, rng)?),
            EventKind::Argument => Event::Argument(Argument::generate(company, rng)?),
            EventKind::Gossip => Event::Gossip(Gossip::generate(company, rng)?),
            EventKind::Injury => Event::Injury(Injury::generate(company, rng)?),
        })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::CallOut(_) => EventKind::CallOut,
            Event::Quitting(_) => EventKind::Quitting,
            Event::Argument(_) => EventKind::Argument,
            Event::Gossip(_) => EventKind::Gossip,
            Event::Injury(_) => EventKind::Injury,
        }
    }

    pub fn apply(&self, company: &mut Company) {
        match self {
            Event::CallOut(e) => e.apply(company),
            Event::Quitting(e) => e.apply(company),
            Event::Argument(e) => e.apply(company),
            Event::Gossip(e) => e.apply(company),
            Event::Injury(e) => e.apply(company),
        }
    }

    pub fn render(&self, company: &Company) -> Result<String> {
        match self {
            Event::CallOut(e) => e.render(company),
            Event::Quitting(e) => e.render(company),
            Event::Argument(e) => e.render(company),
            Event::Gossip(e) => e.render(company),
            Event::Injury(e) => e.render(company),
        }
    }

    /// What `speaker` tells `listener` about this event.
    ///
    /// The listener may be someone outside the company. Speaker and listener
    /// must be different people.
    pub fn described_by_to<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        rng: &mut R,
    ) -> Result<String> {
        if speaker.id == listener.id {
            return Err(WorkplaceError::SpeakerIsListener);
        }
        match self {
            Event::CallOut(e) => e.describe(company, speaker, listener, rng),
            Event::Quitting(e) => e.describe(company, speaker, listener, rng),
            Event::Argument(e) => e.describe(company, speaker, listener, rng),
            Event::Gossip(e) => e.describe(company, speaker, listener, rng),
            Event::Injury(e) => e.describe(company, speaker, listener, rng),
        }
    }

    pub fn participants(&self) -> Vec<EmployeeId> {
        match self {
            Event::CallOut(e) => e.participants(),
            Event::Quitting(e) => e.participants(),
            Event::Argument(e) => e.participants(),
            Event::Gossip(e) => e.participants(),
            Event::Injury(e) => e.participants(),
        }
    }

    pub fn involves(&self, id: EmployeeId) -> bool {
        self.participants().contains(&id)
    }
}

/// Choose a sub-variant: `None` is the generic case with probability
/// `1/(1+n)`, otherwise one of the `n` specialisations uniformly.
pub fn pick_variant<R: Rng>(specialisations: usize, rng: &mut R) -> Option<usize> {
    if specialisations == 0 || rng.gen::<f64>() < 1.0 / (1 + specialisations) as f64 {
        None
    } else {
        Some(rng.gen_range(0..specialisations))
    }
}

/// Hours lost when someone leaves part way through a shift
pub fn hours_lost<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(2..=6)
}

/// Pick someone on today's schedule
pub(crate) fn choose_scheduled<R: Rng>(
    company: &Company,
    kind: EventKind,
    rng: &mut R,
) -> Result<EmployeeId> {
    let scheduled: Vec<EmployeeId> = company.scheduled_today.iter().copied().collect();
    scheduled
        .choose(rng)
        .copied()
        .ok_or(WorkplaceError::NoEligibleParticipant { event: kind.name() })
}

/// Pick any current employee except `exclude`
pub(crate) fn choose_employee<R: Rng>(
    company: &Company,
    kind: EventKind,
    exclude: Option<EmployeeId>,
    rng: &mut R,
) -> Result<EmployeeId> {
    let pool: Vec<EmployeeId> = company
        .employees
        .keys()
        .copied()
        .filter(|id| Some(*id) != exclude)
        .collect();
    pool.choose(rng)
        .copied()
        .ok_or(WorkplaceError::NoEligibleParticipant { event: kind.name() })
}

/// Pick one line among equivalent phrasings
pub(crate) fn one_of<R: Rng>(rng: &mut R, lines: Vec<String>) -> String {
    let i = rng.gen_range(0..lines.len().max(1));
    lines.into_iter().nth(i).unwrap_or_default()
}
