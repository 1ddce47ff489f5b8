//! Gossip: someone on shift talks about a coworker behind their back

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{choose_employee, choose_scheduled, EventKind, Incident};
use crate::error::Result;
use crate::workplace::company::Company;
use crate::workplace::people::{capitalize, Employee, Person};
use crate::workplace::types::EmployeeId;

/// What the gossiper said about the subject
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dirt {
    Lazy,
    KissUp,
    TalksBehindBack,
    KnowItAll,
    CantStand,
}

impl Dirt {
    pub const ALL: [Dirt; 5] = [
        Dirt::Lazy,
        Dirt::KissUp,
        Dirt::TalksBehindBack,
        Dirt::KnowItAll,
        Dirt::CantStand,
    ];

    /// Phrase completing "<gossiper> ..."
    pub fn phrase(&self, gossip: &Person, subject: &Person) -> String {
        let s = &subject.first_name;
        match self {
            Dirt::Lazy => format!("said {} is lazy", s),
            Dirt::KissUp => format!("thought {} is a kiss-up", s),
            Dirt::TalksBehindBack => format!(
                "thought {} talks about {} behind {} back",
                s,
                gossip.them(),
                gossip.their()
            ),
            Dirt::KnowItAll => format!("said {} is a know-it-all", s),
            Dirt::CantStand => format!("can't stand {}", s),
        }
    }

    /// The same dirt told by the gossiper in the first person
    fn confession(&self, subject: &Person) -> String {
        let s = &subject.first_name;
        match self {
            Dirt::Lazy => format!("{} is lazy", s),
            Dirt::KissUp => format!("{} is a kiss-up", s),
            Dirt::TalksBehindBack => format!("{} talks about me behind my back", s),
            Dirt::KnowItAll => format!("{} is a know-it-all", s),
            Dirt::CantStand => format!("I can't stand {}", s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gossip {
    pub gossip: EmployeeId,
    pub subject: EmployeeId,
    pub dirt: Dirt,
}

impl Incident for Gossip {
    const KIND: EventKind = EventKind::Gossip;

    fn generate<R: Rng>(company: &Company, rng: &mut R) -> Result<Self> {
        let gossip = choose_scheduled(company, Self::KIND, rng)?;
        let subject = choose_employee(company, Self::KIND, Some(gossip), rng)?;
        let dirt = Dirt::ALL[rng.gen_range(0..Dirt::ALL.len())];
        Ok(Gossip { gossip, subject, dirt })
    }

    fn apply(&self, company: &mut Company) {
        if let Some(g) = company.employee_mut(self.gossip) {
            g.disposition -= 0.1;
            g.adjust_opinion(self.subject, -0.1);
        }
        if let Some(s) = company.employee_mut(self.subject) {
            s.disposition -= 0.1;
        }
    }

    fn render(&self, company: &Company) -> Result<String> {
        let g = &company.record(self.gossip)?.person;
        let s = &company.record(self.subject)?.person;
        Ok(format!(
            "{} was gossiping about {}. {} {}.",
            g,
            s,
            capitalize(g.they()),
            self.dirt.phrase(g, s)
        ))
    }

    fn describe<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        _rng: &mut R,
    ) -> Result<String> {
        let g = &company.record(self.gossip)?.person;
        let s = &company.record(self.subject)?.person;
        let dirt = self.dirt.phrase(g, s);

        let line = if speaker.id == self.gossip {
            if listener.id == self.subject {
                format!("'Nothing personal, {}. Folks just talk.'", listener)
            } else if speaker.likes(listener.id) {
                format!("'Between you and me? {}.'", capitalize(&self.dirt.confession(s)))
            } else {
                format!("'I don't know what you heard, but I never said a thing about {}.'", s)
            }
        } else if listener.id == self.gossip {
            if speaker.id == self.subject {
                format!("'I know what you've been saying about me, {}.'", listener)
            } else if speaker.likes(listener.id) {
                format!("'Careful, {}. Talk like that gets around.'", listener)
            } else {
                format!("'Word is you've been running your mouth about {}.'", s)
            }
        } else if speaker.id == self.subject {
            if speaker.dislikes(self.gossip) {
                format!("'{} has been running {} mouth about me again.'", g, g.their())
            } else {
                format!("'I heard {} has been talking about me. I'm sure it's a misunderstanding.'", g)
            }
        } else if listener.id == self.subject {
            if speaker.likes(listener.id) {
                format!("'Don't let it get to you, {}, but {} {}.'", listener, g, dirt)
            } else {
                "'You didn't hear it from me, but people have been talking about you.'".to_string()
            }
        } else if speaker.likes(self.gossip) {
            format!(
                "'Did you hear? {} was talking about {}. {} {}.'",
                g,
                s,
                capitalize(g.they()),
                dirt
            )
        } else if speaker.dislikes(self.gossip) {
            format!(
                "'{} was at it again, gossiping about {}. {} {}.'",
                g,
                s,
                capitalize(g.they()),
                dirt
            )
        } else {
            format!(
                "'{} was gossiping about {}. {} {}.'",
                g,
                s,
                capitalize(g.they()),
                dirt
            )
        };
        Ok(line)
    }

    fn participants(&self) -> Vec<EmployeeId> {
        vec![self.gossip, self.subject]
    }
}
