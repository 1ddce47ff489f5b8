//! Job applicants offered by the hiring menu

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::employee::Employee;
use super::person::{standard_normal, PersonGenerator};
use crate::workplace::types::EmployeeId;

/// Longest delay before an applicant can start
pub const MAX_START_DELAY: u32 = 5;

/// A candidate for hire
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Applicant {
    pub employee: Employee,
    /// Days before the applicant can first be scheduled
    pub start_delay: u32,
    /// Workdays per week the applicant wants
    pub desired_workdays: u32,
    /// One-time bonus paid with the first weekly payroll
    pub sign_on_bonus: f64,
}

impl Applicant {
    /// Generate an applicant; a shorter start delay earns a bigger sign-on bonus
    pub fn generate<R: Rng>(
        id: EmployeeId,
        generator: &PersonGenerator,
        min_age: u32,
        max_age: u32,
        rng: &mut R,
    ) -> Self {
        let employee = Employee::generate(id, generator, min_age, max_age, rng);
        let start_delay = rng.gen_range(0..=MAX_START_DELAY);
        let desired_workdays = rng.gen_range(2..=6);

        let urgency = 1.0 - (start_delay + 1) as f64 / MAX_START_DELAY as f64;
        let base = (7.50 + standard_normal(rng)).max(0.0);
        let quarters = (base * urgency * 4.0).max(0.0);

        Applicant {
            employee,
            start_delay,
            desired_workdays,
            sign_on_bonus: quarters.round() / 4.0,
        }
    }

    /// One-line summary for the hiring menu
    pub fn summary(&self) -> String {
        let p = &self.employee.person;
        format!(
            "{} ({}, {}) - ${:.2}/hr, starts in {} day(s), wants {} day(s)/week, bonus ${:.2}",
            p.full_name(),
            p.age,
            p.sex_descriptor(),
            self.employee.hourly_wage,
            self.start_delay,
            self.desired_workdays,
            self.sign_on_bonus,
        )
    }
}
