//! Arguments between two coworkers on the same shift

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{choose_scheduled, one_of, EventKind, Incident};
use crate::error::{Result, WorkplaceError};
use crate::workplace::company::Company;
use crate::workplace::people::{capitalize, Employee};
use crate::workplace::types::EmployeeId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub emp1: EmployeeId,
    pub emp2: EmployeeId,
}

impl Argument {
    fn involves(&self, id: EmployeeId) -> bool {
        id == self.emp1 || id == self.emp2
    }

    /// The other party, if `id` took part
    fn other_than(&self, id: EmployeeId) -> Option<EmployeeId> {
        if id == self.emp1 {
            Some(self.emp2)
        } else if id == self.emp2 {
            Some(self.emp1)
        } else {
            None
        }
    }
}

impl Incident for Argument {
    const KIND: EventKind = EventKind::Argument;

    fn generate<R: Rng>(company: &Company, rng: &mut R) -> Result<Self> {
        let emp1 = choose_scheduled(company, Self::KIND, rng)?;
        let rest: Vec<EmployeeId> = company
            .scheduled_today
            .iter()
            .copied()
            .filter(|id| *id != emp1)
            .collect();
        let emp2 = rest
            .choose(rng)
            .copied()
            .ok_or(WorkplaceError::NoEligibleParticipant { event: Self::KIND.name() })?;
        Ok(Argument { emp1, emp2 })
    }

    fn apply(&self, company: &mut Company) {
        let (a, b) = (self.emp1, self.emp2);
        let mutual_like = company.employee(a).map_or(false, |e| e.likes(b))
            && company.employee(b).map_or(false, |e| e.likes(a));

        if mutual_like {
            if let Some(e) = company.employee_mut(a) {
                e.adjust_opinion(b, 0.05);
            }
        } else {
            for (me, them) in [(a, b), (b, a)] {
                if let Some(e) = company.employee_mut(me) {
                    e.disposition -= 0.1;
                    e.adjust_opinion(them, -0.1);
                }
            }
        }
    }

    fn render(&self, company: &Company) -> Result<String> {
        let a = company.record(self.emp1)?;
        let b = company.record(self.emp2)?;
        Ok(format!("{} and {} got into a big argument.", a, b))
    }

    fn describe<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        rng: &mut R,
    ) -> Result<String> {
        let first = company.record(self.emp1)?;
        let second = company.record(self.emp2)?;

        let line = if self.involves(speaker.id) && self.involves(listener.id) {
            if speaker.likes(listener.id) {
                "'We had a disagreement, but it's all sorted out now.'".to_string()
            } else if speaker.hates(listener.id) {
                "'You just had to have the last word, didn't you.'".to_string()
            } else {
                let other = &listener.person;
                one_of(
                    rng,
                    vec![
                        format!("'I'm done with {}. {} impossible.'", other, capitalize(other.theyre())),
                        format!(
                            "'{} just rubs me the wrong way. {} better watch {} mouth.'",
                            other,
                            capitalize(other.they()),
                            other.their()
                        ),
                        format!(
                            "'I can't stand {}! {} probably talking about me right now.'",
                            other,
                            capitalize(other.theyre())
                        ),
                    ],
                )
            }
        } else if let Some(other) = self.other_than(listener.id) {
            let other = company.record(other)?;
            if listener.likes(speaker.id) {
                format!("'I'm glad you and {} worked things out in the end.'", other)
            } else {
                "'I'm not getting involved in this. You two sort it out.'".to_string()
            }
        } else if let Some(other_id) = self.other_than(speaker.id) {
            let other = &company.record(other_id)?.person;
            if speaker.likes(other_id) {
                format!("'{} and I had a disagreement, but it's all sorted out now.'", other)
            } else if speaker.hates(other_id) {
                format!("'{} just had to have the last word, didn't {}.'", other, other.they())
            } else {
                format!("'I'm done with {}. {} impossible!'", other, capitalize(other.theyre()))
            }
        } else {
            one_of(
                rng,
                vec![
                    format!("'I'm exhausted. {} and {} were at each other's throats today.'", second, first),
                    format!(
                        "'You wouldn't believe the argument {} and {} had today. Is this grade school?'",
                        second, first
                    ),
                    format!("'{} and {} had a big argument today. I'm staying out of it.'", second, first),
                    format!("'Arguments happen. I'm sure {} and {} will work it out.'", first, second),
                ],
            )
        };
        Ok(line)
    }

    fn participants(&self) -> Vec<EmployeeId> {
        vec![self.emp1, self.emp2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workplace::testing::{outsider, staff};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_friends_make_up() {
        let (mut company, ids) = staff(2);
        let (a, b) = (ids[0], ids[1]);
        company.employee_mut(a).unwrap().adjust_opinion(b, 0.6);
        company.employee_mut(b).unwrap().adjust_opinion(a, 0.7);
        let before = company.employees[&a].disposition;

        Argument { emp1: a, emp2: b }.apply(&mut company);

        assert!((company.employees[&a].opinion_of(b) - 0.65).abs() < EPS);
        assert!((company.employees[&b].opinion_of(a) - 0.7).abs() < EPS);
        assert!((company.employees[&a].disposition - before).abs() < EPS);
    }

    #[test]
    fn test_rivals_sour() {
        let (mut company, ids) = staff(2);
        let (a, b) = (ids[0], ids[1]);
        company.employee_mut(a).unwrap().adjust_opinion(b, -0.2);
        let (da, db) = (company.employees[&a].disposition, company.employees[&b].disposition);

        Argument { emp1: a, emp2: b }.apply(&mut company);

        assert!((company.employees[&a].disposition - (da - 0.1)).abs() < EPS);
        assert!((company.employees[&b].disposition - (db - 0.1)).abs() < EPS);
        assert!((company.employees[&a].opinion_of(b) - (-0.3)).abs() < EPS);
        assert!((company.employees[&b].opinion_of(a) - (-0.1)).abs() < EPS);
    }

    #[test]
    fn test_needs_two_on_shift() {
        let (mut company, ids) = staff(3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let event = Argument::generate(&company, &mut rng).unwrap();
        assert_ne!(event.emp1, event.emp2);

        company.scheduled_today = [ids[0]].into_iter().collect();
        assert!(matches!(
            Argument::generate(&company, &mut rng),
            Err(WorkplaceError::NoEligibleParticipant { .. })
        ));
    }

    #[test]
    fn test_narration_branches() {
        let (mut company, ids) = staff(3);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        company.employee_mut(a).unwrap().adjust_opinion(b, 0.9);
        company.employee_mut(a).unwrap().adjust_opinion(c, 0.9);
        company.employee_mut(c).unwrap().adjust_opinion(a, 0.9);
        let event = Argument { emp1: a, emp2: b };
        let emp = |id: EmployeeId| company.employees[&id].clone();

        let line = event.describe(&company, &emp(a), &emp(b), &mut rng).unwrap();
        assert_eq!(line, "'We had a disagreement, but it's all sorted out now.'");

        let line = event.describe(&company, &emp(c), &emp(a), &mut rng).unwrap();
        assert!(line.starts_with("'I'm glad you and"));

        let line = event.describe(&company, &emp(a), &outsider(), &mut rng).unwrap();
        assert!(line.contains("and I had a disagreement"));

        let line = event.describe(&company, &emp(c), &outsider(), &mut rng).unwrap();
        assert!(line.contains(&company.employees[&a].to_string()));
    }
}
