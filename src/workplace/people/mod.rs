//! People system - generated identities, employees and applicants

pub mod names;
pub mod person;
pub mod employee;
pub mod applicant;

pub use names::{NameBank, pick, random_relative};
pub use person::{Person, PersonGenerator, Trait, capitalize, standard_normal, OLD_AGE, YOUNG_AGE};
pub use employee::{
    sample_wage, Employee, BASE_HOURLY_WAGE, DISLIKE_THRESHOLD, HATE_THRESHOLD, LIKE_THRESHOLD,
    MAX_HOURLY_WAGE, MIN_HOURLY_WAGE,
};
pub use applicant::{Applicant, MAX_START_DELAY};
