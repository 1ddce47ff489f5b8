//! On-the-job injuries

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{choose_scheduled, hours_lost, one_of, EventKind, Incident};
use crate::error::Result;
use crate::workplace::company::Company;
use crate::workplace::people::Employee;
use crate::workplace::types::{EmployeeId, SHIFT_HOURS};

/// Chance an injury is severe
pub const SEVERE_CHANCE: f64 = 0.3;

/// New disposition after an injury.
///
/// The penalty escalates as disposition drops: a small fixed cut for the
/// content, multiplicative decay for the middling, a random cut near zero
/// and a floor at -1.0 below that. `roll` in `[0, 1)` picks the random cut.
pub fn injury_penalty(disposition: f64, severe: bool, roll: f64) -> f64 {
    let d = disposition;
    if severe {
        if d > 0.85 {
            d - 0.15
        } else if d > 0.1 {
            d * 0.5
        } else if d > -0.1 {
            d - (0.1 + 0.4 * roll)
        } else {
            -1.0
        }
    } else if d > 0.85 {
        d - 0.05
    } else if d > 0.1 {
        d * 0.9
    } else if d > -0.5 {
        d - (0.05 + 0.05 * roll)
    } else {
        -1.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub employee: EmployeeId,
    pub severe: bool,
    /// Days off for a severe injury; zero for a minor one
    pub days_off: u32,
    /// Part of the shift missed after getting hurt
    pub hours_lost: u32,
    /// Draw used by [`injury_penalty`]
    pub penalty_roll: f64,
}

impl Incident for Injury {
    const KIND: EventKind = EventKind::Injury;

    fn generate<R: Rng>(company: &Company, rng: &mut R) -> Result<Self> {
        let employee = choose_scheduled(company, Self::KIND, rng)?;
        let severe = rng.gen_bool(SEVERE_CHANCE);
        let days_off = if severe { rng.gen_range(7..=14) } else { 0 };
        Ok(Injury {
            employee,
            severe,
            days_off,
            hours_lost: hours_lost(rng),
            penalty_roll: rng.gen(),
        })
    }

    fn apply(&self, company: &mut Company) {
        let was_on_shift = company.scheduled_today.remove(&self.employee);
        if was_on_shift {
            company.credit_hours(self.employee, SHIFT_HOURS.saturating_sub(self.hours_lost));
        }
        if self.severe {
            company.set_unavailable(self.employee, self.days_off);
        }
        if let Some(e) = company.employee_mut(self.employee) {
            e.disposition = injury_penalty(e.disposition, self.severe, self.penalty_roll);
        }

        // Coworkers sympathize, unless they hate the injured party
        for e in company.employees.values_mut() {
            if e.id == self.employee {
                continue;
            }
            if e.hates(self.employee) {
                e.disposition += 0.1;
            } else {
                e.adjust_opinion(self.employee, 0.1);
            }
        }
    }

    fn render(&self, company: &Company) -> Result<String> {
        let e = company.record(self.employee)?;
        Ok(if self.severe {
            format!(
                "{} was seriously injured part way through the shift and won't be back for at least {} days.",
                e, self.days_off
            )
        } else {
            format!("{} was injured on the job and had to leave early. Nothing serious though.", e)
        })
    }

    fn describe<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        rng: &mut R,
    ) -> Result<String> {
        let injured = company.record(self.employee)?;
        let e = &injured.person;

        let line = if speaker.id == self.employee {
            match (self.severe, injured.disposition > 0.0) {
                (true, true) => "'I'm in a lot of pain. I won't be back for a while.'".to_string(),
                (true, false) => one_of(
                    rng,
                    vec![
                        "'This damn company will ruin me!'".to_string(),
                        "'This is the last straw. I'm putting in notice tomorrow.'".to_string(),
                    ],
                ),
                (false, true) => "'I'm fine. I'll be back tomorrow.'".to_string(),
                (false, false) => one_of(
                    rng,
                    vec![
                        "'Look, it's not serious, but this place is a safety hazard.'".to_string(),
                        "'I'm fine. I'll be back in this hell-hole tomorrow.'".to_string(),
                    ],
                ),
            }
        } else if listener.id == self.employee {
            if self.severe {
                "'I hope you feel better soon. Take care of yourself.'".to_string()
            } else if speaker.dislikes(listener.id) {
                "'You're always getting hurt. Take care of yourself.'".to_string()
            } else {
                "'Glad it wasn't anything serious. Take care of yourself.'".to_string()
            }
        } else if self.severe {
            one_of(
                rng,
                vec![
                    format!("'{} got hurt bad. We're gonna be short-handed for a bit.'", e),
                    format!(
                        "'If they'd serviced the equipment regularly as instructed, {} might not have gotten hurt. It's a damn shame.'",
                        e
                    ),
                    format!("'{} got hurt bad. I hope {} okay.'", e, e.theyre()),
                ],
            )
        } else if speaker.dislikes(self.employee) {
            one_of(
                rng,
                vec![
                    format!("'{} got hurt. Again.'", e),
                    format!("'Maybe this'll teach {} to be more careful.'", e),
                ],
            )
        } else {
            format!("'{} got hurt. I hope {} okay.'", e, e.theyre())
        };
        Ok(line)
    }

    fn participants(&self) -> Vec<EmployeeId> {
        vec![self.employee]
    }
}
