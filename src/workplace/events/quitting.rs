//! Quitting: someone leaves the company for good

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{choose_employee, hours_lost, one_of, EventKind, Incident};
use crate::error::Result;
use crate::workplace::company::Company;
use crate::workplace::people::{capitalize, random_relative, Employee};
use crate::workplace::types::{EmployeeId, SHIFT_HOURS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuitReason {
    BetterJob,
    DislikesCoworkers,
    Family { relative: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quitting {
    pub employee: EmployeeId,
    pub reason: QuitReason,
    /// Set when the employee walks out part way through a shift
    pub hours_lost: Option<u32>,
}

impl Quitting {
    pub fn worked_whole_day(&self) -> bool {
        self.hours_lost.is_none()
    }

    /// Employees who hate a coworker who hates them back, and are unhappy here
    fn fed_up(company: &Company) -> Vec<EmployeeId> {
        company
            .employees
            .values()
            .filter(|a| a.disposition < 0.0)
            .filter(|a| {
                company
                    .employees
                    .values()
                    .any(|b| b.id != a.id && a.hates(b.id) && b.hates(a.id))
            })
            .map(|a| a.id)
            .collect()
    }

    fn better_job<R: Rng>(company: &Company, rng: &mut R) -> Result<Self> {
        Ok(Quitting {
            employee: choose_employee(company, Self::KIND, None, rng)?,
            reason: QuitReason::BetterJob,
            hours_lost: None,
        })
    }
}

impl Incident for Quitting {
    const KIND: EventKind = EventKind::Quitting;

    fn generate<R: Rng>(company: &Company, rng: &mut R) -> Result<Self> {
        match rng.gen_range(0..3) {
            0 => Quitting::better_job(company, rng),
            1 => {
                let fed_up = Quitting::fed_up(company);
                match fed_up.choose(rng).copied() {
                    Some(employee) => {
                        let hours_lost = company.is_scheduled(employee).then(|| hours_lost(rng));
                        Ok(Quitting {
                            employee,
                            reason: QuitReason::DislikesCoworkers,
                            hours_lost,
                        })
                    }
                    None => Quitting::better_job(company, rng),
                }
            }
            _ => Ok(Quitting {
                employee: choose_employee(company, Self::KIND, None, rng)?,
                reason: QuitReason::Family {
                    relative: random_relative(rng).to_string(),
                },
                hours_lost: None,
            }),
        }
    }

    fn apply(&self, company: &mut Company) {
        if company.is_scheduled(self.employee) {
            let worked = SHIFT_HOURS.saturating_sub(self.hours_lost.unwrap_or(0));
            company.credit_hours(self.employee, worked);
        }
        company.dismiss(self.employee);
    }

    fn render(&self, company: &Company) -> Result<String> {
        let e = &company.record(self.employee)?.person;
        let they = capitalize(e.they());
        Ok(match &self.reason {
            QuitReason::BetterJob => format!(
                "Today was {}'s last day. {} said {}'d found a better job.",
                e,
                they,
                e.they()
            ),
            QuitReason::DislikesCoworkers => {
                let mid_shift = if self.worked_whole_day() {
                    String::new()
                } else {
                    format!(" part-way through {} shift", e.their())
                };
                format!(
                    "{} quit{}. {} said {} can't stand some of {} coworkers.",
                    e,
                    mid_shift,
                    they,
                    e.they(),
                    e.their()
                )
            }
            QuitReason::Family { relative } => format!(
                "{} quit. {} said {} {} requires more care now.",
                e,
                they,
                e.their(),
                relative
            ),
        })
    }

    fn describe<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        rng: &mut R,
    ) -> Result<String> {
        let e = &company.record(self.employee)?.person;

        let line = match &self.reason {
            QuitReason::BetterJob => {
                if speaker.id == self.employee {
                    "'I found a better job. Sorry, but I have to go.'".to_string()
                } else if listener.id == self.employee {
                    if speaker.likes(listener.id) {
                        format!("'I'm happy for you, {}. Good luck!'", listener)
                    } else if speaker.dislikes(listener.id) {
                        "'So glad to hear you're moving on to greener pastures!'".to_string()
                    } else if speaker.disposition > 0.0 {
                        "'I hope you find what you're looking for.'".to_string()
                    } else {
                        "'Best of luck with the new job! Can't be any worse than this place...'"
                            .to_string()
                    }
                } else if speaker.likes(self.employee) {
                    format!(
                        "'Did you hear? {}'s got a new job! What are we gonna do without {}!'",
                        e,
                        e.them()
                    )
                } else if speaker.dislikes(self.employee) {
                    format!("'{}'s up and quit. Can't say I'm sorry to see {} go...'", e, e.them())
                } else {
                    format!("'{}'s gone. New job I think.'", e)
                }
            }
            QuitReason::DislikesCoworkers => {
                if speaker.id == self.employee {
                    "'These people will stab you in the back as soon as you turn around. I'm out.'"
                        .to_string()
                } else if listener.id == self.employee {
                    if speaker.likes(listener.id) {
                        "'They've treated you like shit, you didn't deserve any of this.'".to_string()
                    } else if speaker.hates(listener.id) && listener.hates(speaker.id) {
                        "'Don't let the door hit you on your way out!'".to_string()
                    } else if listener.hates(speaker.id) {
                        "'I suppose you think I'm the one driving you to leave?'".to_string()
                    } else {
                        "'I'm not taking sides. Hope your next job is more to your liking.'"
                            .to_string()
                    }
                } else if speaker.dislikes(self.employee) {
                    format!(
                        "'{} thinks everyone's out to get {}. Not sorry to see {} go.'",
                        e,
                        e.them(),
                        e.them()
                    )
                } else if speaker.likes(self.employee) {
                    format!(
                        "'People here have treated {} like shit. {} didn't deserve any of this!'",
                        e,
                        capitalize(e.they())
                    )
                } else {
                    format!(
                        "'{} quit. {} said there's too much drama here.'",
                        e,
                        capitalize(e.they())
                    )
                }
            }
            QuitReason::Family { relative } => {
                if speaker.id == self.employee {
                    format!(
                        "'My {} needs me more and more these days. I had to leave.'",
                        relative
                    )
                } else if listener.id == self.employee {
                    if speaker.likes(listener.id) {
                        format!("'I understand, {}. Family comes first.'", listener)
                    } else if speaker.dislikes(listener.id) {
                        format!("'Your {} sure needs a lot of care, huh?'", relative)
                    } else {
                        format!("'I hope everything works out with your {}.'", relative)
                    }
                } else if speaker.likes(self.employee) {
                    format!(
                        "'{} quit. {} said {} {} needs more care.'",
                        e,
                        capitalize(e.they()),
                        e.their(),
                        relative
                    )
                } else if speaker.dislikes(self.employee) {
                    format!("'{} quit. Always some excuse with {}.'", e, e.them())
                } else {
                    one_of(
                        rng,
                        vec![
                            format!("'{} quit. Something about {} {}.'", e, e.their(), relative),
                            format!("'Anyone know what's going on with {}? Did {} quit?'", e, e.they()),
                            format!(
                                "'{} quitting? Unfortunately I can't say I'm surprised. {} {} needs {}.'",
                                e,
                                capitalize(e.their()),
                                relative,
                                e.them()
                            ),
                        ],
                    )
                }
            }
        };
        Ok(line)
    }

    fn participants(&self) -> Vec<EmployeeId> {
        vec![self.employee]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workplace::testing::{outsider, staff};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quitter_leaves_for_good() {
        let (mut company, ids) = staff(3);
        let event = Quitting {
            employee: ids[0],
            reason: QuitReason::BetterJob,
            hours_lost: None,
        };
        event.apply(&mut company);
        assert!(company.employee(ids[0]).is_none());
        assert!(!company.is_scheduled(ids[0]));
        assert!(company.former_employees.contains_key(&ids[0]));
        // Worked the whole shift before leaving
        assert_eq!(company.punch_card[&ids[0]], SHIFT_HOURS);
        assert!(event.render(&company).unwrap().contains("last day"));
    }

    #[test]
    fn test_mid_shift_quit_credits_partial_hours() {
        let (mut company, ids) = staff(3);
        let event = Quitting {
            employee: ids[1],
            reason: QuitReason::DislikesCoworkers,
            hours_lost: Some(5),
        };
        event.apply(&mut company);
        assert_eq!(company.punch_card[&ids[1]], 3);
        assert!(event.render(&company).unwrap().contains("part-way through"));
    }

    #[test]
    fn test_unscheduled_quitter_logs_no_hours() {
        let (mut company, ids) = staff(3);
        company.scheduled_today.remove(&ids[2]);
        let event = Quitting {
            employee: ids[2],
            reason: QuitReason::Family { relative: "mother".to_string() },
            hours_lost: None,
        };
        event.apply(&mut company);
        assert!(!company.punch_card.contains_key(&ids[2]));
    }

    #[test]
    fn test_dislikes_coworkers_needs_mutual_hate() {
        let (mut company, ids) = staff(3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let event = Quitting::generate(&company, &mut rng).unwrap();
            assert_ne!(event.reason, QuitReason::DislikesCoworkers);
        }

        let (a, b) = (ids[0], ids[1]);
        company.employee_mut(a).unwrap().adjust_opinion(b, -0.9);
        company.employee_mut(b).unwrap().adjust_opinion(a, -0.9);
        company.employee_mut(a).unwrap().disposition = -0.2;

        let mut saw_fed_up = false;
        for _ in 0..100 {
            let event = Quitting::generate(&company, &mut rng).unwrap();
            if event.reason == QuitReason::DislikesCoworkers {
                assert_eq!(event.employee, a);
                assert!(event.hours_lost.is_some());
                saw_fed_up = true;
            }
        }
        assert!(saw_fed_up);
    }

    #[test]
    fn test_reasons_drawn_evenly() {
        let (mut company, ids) = staff(4);
        let (a, b) = (ids[0], ids[1]);
        company.employee_mut(a).unwrap().adjust_opinion(b, -0.9);
        company.employee_mut(b).unwrap().adjust_opinion(a, -0.9);
        company.employee_mut(a).unwrap().disposition = -0.2;
        let mut rng = ChaCha8Rng::seed_from_u64(29);

        let mut counts = [0usize; 3];
        for _ in 0..9_000 {
            match Quitting::generate(&company, &mut rng).unwrap().reason {
                QuitReason::BetterJob => counts[0] += 1,
                QuitReason::DislikesCoworkers => counts[1] += 1,
                QuitReason::Family { .. } => counts[2] += 1,
            }
        }
        for c in counts {
            assert!((2_800..3_200).contains(&c), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_narration_from_the_quitter() {
        let (company, ids) = staff(2);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let event = Quitting {
            employee: ids[0],
            reason: QuitReason::Family { relative: "son".to_string() },
            hours_lost: None,
        };
        let line = event
            .describe(&company, &company.employees[&ids[0]], &outsider(), &mut rng)
            .unwrap();
        assert_eq!(line, "'My son needs me more and more these days. I had to leave.'");
    }
}
