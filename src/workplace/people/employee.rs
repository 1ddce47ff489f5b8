//! Employees: people with a disposition toward the company and opinions of coworkers

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::workplace::types::{EmployeeId, OUTSIDER};
use super::names::pick;
use super::person::{standard_normal, Person, PersonGenerator};

/// Opinion above which one employee likes another
pub const LIKE_THRESHOLD: f64 = 0.5;
/// Opinion below which one employee dislikes another
pub const DISLIKE_THRESHOLD: f64 = -0.1;
/// Opinion below which one employee hates another
pub const HATE_THRESHOLD: f64 = -0.8;

/// Hourly rate for an eight-hour shift paying $1.35
pub const BASE_HOURLY_WAGE: f64 = 1.35 / 8.0;
/// Bounds on a drawn hourly rate
pub const MIN_HOURLY_WAGE: f64 = 0.01;
pub const MAX_HOURLY_WAGE: f64 = 0.75;

/// Draw an hourly rate around `mean`, clamped to the wage bounds
pub fn sample_wage<R: Rng>(mean: f64, spread: f64, rng: &mut R) -> f64 {
    (mean + spread * standard_normal(rng)).clamp(MIN_HOURLY_WAGE, MAX_HOURLY_WAGE)
}

/// An employee of the company
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub person: Person,
    /// Sentiment toward the company, nominally -1.0 to 1.0
    pub disposition: f64,
    /// Pay per hour worked
    pub hourly_wage: f64,
    /// Directional opinions of coworkers (missing = 0.0)
    pub relationships: BTreeMap<EmployeeId, f64>,
}

impl Employee {
    pub fn new(id: EmployeeId, person: Person, disposition: f64) -> Self {
        Employee {
            id,
            person,
            disposition,
            hourly_wage: BASE_HOURLY_WAGE,
            relationships: BTreeMap::new(),
        }
    }

    /// Generate a fresh employee; new hires start out fairly content
    pub fn generate<R: Rng>(
        id: EmployeeId,
        generator: &PersonGenerator,
        min_age: u32,
        max_age: u32,
        rng: &mut R,
    ) -> Self {
        let person = generator.generate(min_age, max_age, rng);
        Employee::new(id, person, rng.gen_range(0.5..=1.0))
    }

    /// Someone from outside the company, with no opinions of anyone
    pub fn outsider(first_name: &str, last_name: &str) -> Self {
        Employee::new(OUTSIDER, Person::new(first_name, last_name, 40, BTreeSet::new()), 0.0)
    }

    pub fn is_outsider(&self) -> bool {
        self.id == OUTSIDER
    }

    /// This employee's opinion of another
    pub fn opinion_of(&self, other: EmployeeId) -> f64 {
        self.relationships.get(&other).copied().unwrap_or(0.0)
    }

    /// Shift this employee's opinion of another
    pub fn adjust_opinion(&mut self, other: EmployeeId, delta: f64) {
        *self.relationships.entry(other).or_insert(0.0) += delta;
    }

    pub fn likes(&self, other: EmployeeId) -> bool {
        self.opinion_of(other) > LIKE_THRESHOLD
    }

    pub fn dislikes(&self, other: EmployeeId) -> bool {
        self.opinion_of(other) < DISLIKE_THRESHOLD
    }

    pub fn hates(&self, other: EmployeeId) -> bool {
        self.opinion_of(other) < HATE_THRESHOLD
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    /// What this employee says after a day where nothing happened
    pub fn uneventful_day_remark<R: Rng>(&self, rng: &mut R) -> &'static str {
        if self.disposition > 0.8 {
            pick(rng, &["'Another day, another dime.'", "'Just another day.'"])
        } else if self.disposition < -0.8 {
            pick(rng, &[
                "'I gotta get the hell out of this job.'",
                "'Each day's worse than the last. See you tomorrow.'",
                "'Oh, yup, another day in paradise.'",
            ])
        } else {
            pick(rng, &[
                "'Today was same as yesterday.'",
                "'What can I say. Just another day.'",
                "'Another day another dime. See you tomorrow.'",
                "'See you at the saloon?'",
                "'Today coulda been a whole lot worse.'",
            ])
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
