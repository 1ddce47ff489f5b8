//! Call-outs: someone on the schedule doesn't show up

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{choose_scheduled, pick_variant, EventKind, Incident};
use crate::error::Result;
use crate::workplace::company::Company;
use crate::workplace::people::{capitalize, random_relative, Employee};
use crate::workplace::types::EmployeeId;

/// Most days a sick call-out keeps someone home
pub const MAX_SICK_DAYS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallOutReason {
    NoReason,
    Sick { out_for_days: u32 },
    RelativeSick { relative: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOut {
    pub employee: EmployeeId,
    pub reason: CallOutReason,
}

impl CallOut {
    pub fn sick(employee: EmployeeId, out_for_days: u32) -> Self {
        CallOut {
            employee,
            reason: CallOutReason::Sick { out_for_days },
        }
    }
}

impl Incident for CallOut {
    const KIND: EventKind = EventKind::CallOut;

    fn generate<R: Rng>(company: &Company, rng: &mut R) -> Result<Self> {
        let employee = choose_scheduled(company, Self::KIND, rng)?;
        let reason = match pick_variant(2, rng) {
            None => CallOutReason::NoReason,
            Some(0) => CallOutReason::Sick {
                out_for_days: rng.gen_range(0..=MAX_SICK_DAYS),
            },
            Some(_) => CallOutReason::RelativeSick {
                relative: random_relative(rng).to_string(),
            },
        };
        Ok(CallOut { employee, reason })
    }

    fn apply(&self, company: &mut Company) {
        company.scheduled_today.remove(&self.employee);
        if let CallOutReason::Sick { out_for_days } = self.reason {
            company.set_unavailable(self.employee, out_for_days);
        }
    }

    fn render(&self, company: &Company) -> Result<String> {
        let e = &company.record(self.employee)?.person;
        let they = capitalize(e.they());
        Ok(match &self.reason {
            CallOutReason::NoReason => format!("{} called out. {} didn't give a reason.", e, they),
            CallOutReason::Sick { out_for_days: 0 } => {
                format!("{} called out sick, but {} should be back tomorrow.", e, e.they())
            }
            CallOutReason::Sick { out_for_days } => format!(
                "{} called out sick. {} probably won't be back for {} days.",
                e, they, out_for_days
            ),
            CallOutReason::RelativeSick { relative } => {
                format!("{} called out. {} said {} {} is sick.", e, they, e.their(), relative)
            }
        })
    }

    fn describe<R: Rng>(
        &self,
        company: &Company,
        speaker: &Employee,
        listener: &Employee,
        _rng: &mut R,
    ) -> Result<String> {
        let subject = company.record(self.employee)?;
        let e = &subject.person;

        let line = if speaker.id == self.employee {
            match &self.reason {
                CallOutReason::NoReason if speaker.likes(listener.id) => {
                    format!("'Sorry {}, I can't talk about it.'", listener)
                }
                CallOutReason::NoReason if speaker.hates(listener.id) => {
                    format!("'None of your concern, {}.'", listener)
                }
                CallOutReason::NoReason => "'I'd prefer not to talk about it.'".to_string(),
                CallOutReason::Sick { .. } if speaker.likes(listener.id) => {
                    "'I was not feeling well at all. I apologize if I put more work on y'all.'"
                        .to_string()
                }
                CallOutReason::Sick { .. } if speaker.hates(listener.id) => format!(
                    "'Now that I can't work you're interested in my health, is that it {}?'",
                    listener
                ),
                CallOutReason::Sick { .. } => {
                    "'I had to rest up or I'd be no good to anyone.'".to_string()
                }
                CallOutReason::RelativeSick { relative } if speaker.hates(listener.id) => {
                    format!("'You wouldn't understand, {}. My {} is sick.'", listener, relative)
                }
                CallOutReason::RelativeSick { relative } => format!(
                    "'My {} has gotten worse. Sorry for the inconvenience, but I had to be there.'",
                    relative
                ),
            }
        } else if listener.id == self.employee {
            match &self.reason {
                CallOutReason::NoReason if speaker.likes(listener.id) => {
                    "'You called out, but I'm sure you had your reasons.'".to_string()
                }
                CallOutReason::NoReason if listener.dislikes(speaker.id) => {
                    "'You really owe us an apology for leaving us short-handed.'".to_string()
                }
                CallOutReason::NoReason => {
                    "'I stay out of your business, you stay out of mine.'".to_string()
                }
                CallOutReason::Sick { .. } if speaker.likes(listener.id) => {
                    format!("'Glad to see you back on your feet. We missed you {}.'", listener)
                }
                CallOutReason::Sick { .. } if listener.dislikes(speaker.id) => {
                    "'Looks like you really were sick! Good thing you're back, we've been busy.'"
                        .to_string()
                }
                CallOutReason::Sick { .. } => {
                    "'Hey, as long as you're feeling better, that's all that matters.'".to_string()
                }
                CallOutReason::RelativeSick { relative } if listener.hates(speaker.id) => {
                    format!("'Your {} sure gets sick a lot.'", relative)
                }
                CallOutReason::RelativeSick { relative } => {
                    format!("'I hope your {} is feeling better.'", relative)
                }
            }
        } else if speaker.likes(self.employee) {
            match &self.reason {
                CallOutReason::NoReason => {
                    format!("'Yeah {} called out. I hope everything's okay.'", e)
                }
                CallOutReason::Sick { .. } => {
                    format!("'{} called out sick. I hope {} feeling better.'", e, e.theyre())
                }
                CallOutReason::RelativeSick { relative } => format!(
                    "'{} called out. {} said {} {} is sick.'",
                    e,
                    capitalize(e.they()),
                    e.their(),
                    relative
                ),
            }
        } else if speaker.dislikes(self.employee) {
            match &self.reason {
                CallOutReason::Sick { .. } => format!("'{} called out sick. Again.'", e),
                _ => format!("'{} called out. Again.'", e),
            }
        } else {
            match &self.reason {
                CallOutReason::Sick { .. } => {
                    format!("'{} called out sick. Who knows why though, right?'", e)
                }
                _ => format!("'{} called out. Who knows why though, right?'", e),
            }
        };
        Ok(line)
    }

    fn participants(&self) -> Vec<EmployeeId> {
        vec![self.employee]
    }
}
